//! Printing-variant inference.
//!
//! Given a card record (identity, rarity, set membership, release date,
//! optional pricing signals) and the product channels it was distributed
//! through, this module computes which printing variants exist for the card.
//! Every conclusion carries a provenance tag, a confidence level, and a
//! human-readable explanation.
//!
//! # Rule layers
//!
//! Three evaluators each produce a partial claim set:
//!
//! - **Hard rules**: presence of an external pricing-signal key declares a
//!   finish directly (`api`, high confidence).
//! - **Era rules**: defaults keyed on the card's era, rarity, kind, and
//!   card number (`rule`, medium confidence unless pinned high).
//! - **Override rules**: product-channel behaviour, named set exceptions,
//!   and per-card corrections (`override`).
//!
//! The merger folds the layers under the fixed precedence
//! `default < era < override < hard`.
//!
//! # Custom variants
//!
//! Site-local custom variants live in an external data store reached through
//! the [`CustomVariantSource`](ports::CustomVariantSource) port. When a
//! variant replaces a standard finish, the resolver flips that flag off on
//! the standard output and records why.
//!
//! # Example
//!
//! ```rust,ignore
//! use holofoil::domain::variant::models::infer_variants::InferVariants;
//!
//! let request = InferVariants::new(card);
//! let result = variant_service.infer_variants(&request)?;
//! for line in &result.explanations {
//!     println!("{line}");
//! }
//! ```

/// Variant models and value objects (finishes, eras, flags, results).
pub mod models;

/// Port traits (interfaces) for variant operations.
pub mod ports;

/// The rule layers, precedence merger, and explainer.
pub mod rules;

/// Service implementations for variant inference.
pub mod services;
