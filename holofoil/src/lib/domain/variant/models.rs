//! Value objects and operation models for variant inference.

/// Card record input (identity, rarity, kind tags, set reference, signals).
pub mod card;
/// Product distribution channels.
pub mod channel;
/// Confidence levels attached to variant conclusions.
pub mod confidence;
/// Custom variants recorded in an external data store.
pub mod custom_variant;
/// Era taxonomy for the card-game catalogue.
pub mod era;
/// Custom-variant lookup operation.
pub mod get_custom_variants;
/// Printing finishes (the variant taxonomy).
pub mod finish;
/// Batch inference operation.
pub mod infer_batch;
/// Single-card inference operation.
pub mod infer_variants;
/// Provenance tags naming which rule layer concluded a variant.
pub mod provenance;
/// Per-finish variant flags and the seven-key variant map.
pub mod variant_flag;
/// The final inference output.
pub mod variant_result;
