use serde::{Deserialize, Serialize};

use crate::domain::variant::models::{era::Era, variant_flag::VariantMap};

/// The final output of one inference.
///
/// Self-contained: produced fresh per call and free of references to the
/// inputs, so it may outlive them. The serialised shape is stable and used
/// by fixture-based tests downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantResult {
    pub card_id: String,
    pub set_id: String,
    pub era: Era,
    /// The rarity string as it appeared on the input record, before
    /// standardisation.
    pub rarity: String,
    pub variants: VariantMap,
    /// The product channels considered, in input order.
    pub print_sources: Vec<String>,
    /// Human-readable reasoning trail: deduplicated, order-stable.
    pub explanations: Vec<String>,
}
