//! HOLOFOIL - Variant inference engine for trading card products.
//!
//! This crate determines which printing variants (normal, holo, reverse holo,
//! first edition, ball patterns) exist for a given card, combining explicit
//! pricing signals, era defaults, and product-line overrides into a single
//! deterministic, explainable result.

#![warn(missing_docs)]

pub mod config;
pub mod domain;
