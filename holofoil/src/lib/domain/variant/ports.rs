//! Port traits for variant inference operations.
//!
//! The engine owns no I/O. Custom variants live in an external, site-local
//! data store reached only through [`CustomVariantSource`]; collaborators
//! (UI panels, collection services) drive the engine through
//! [`VariantService`].

use std::future::Future;

use crate::domain::variant::models::{
    custom_variant::{CustomVariant, ResolvedVariants},
    get_custom_variants::CustomVariantSourceError,
    infer_batch::{BatchInferVariants, BatchOutcome},
    infer_variants::{InferVariants, InferVariantsError},
    variant_result::VariantResult,
};

/// Data-source port for custom variants.
///
/// One read-only query; the engine never retries and never mutates the
/// store. Transport failures surface as [`CustomVariantSourceError`] and are
/// recovered by the resolver.
pub trait CustomVariantSource: Clone + Send + Sync + 'static {
    /// Loads every custom variant recorded for a card, active or not.
    fn custom_variants_for_card(
        &self,
        card_id: &str,
    ) -> impl Future<Output = Result<Vec<CustomVariant>, CustomVariantSourceError>> + Send;
}

/// A source for deployments without a custom-variant store: always empty,
/// never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCustomVariants;

impl CustomVariantSource for NoCustomVariants {
    async fn custom_variants_for_card(
        &self,
        _card_id: &str,
    ) -> Result<Vec<CustomVariant>, CustomVariantSourceError> {
        Ok(vec![])
    }
}

/// Service port for variant inference.
pub trait VariantService: Clone + Send + Sync + 'static {
    /// Runs the per-card pipeline: pure, synchronous, deterministic.
    fn infer_variants(&self, request: &InferVariants)
        -> Result<VariantResult, InferVariantsError>;

    /// Runs the pipeline over a sequence of cards. Per-card failures land in
    /// the outcome's error list; the batch itself never fails.
    fn infer_batch(&self, request: &BatchInferVariants) -> BatchOutcome;

    /// Loads the active custom variants for a card from the configured
    /// source, under the service's timeout.
    fn custom_variants_for_card(
        &self,
        card_id: &str,
    ) -> impl Future<Output = Result<Vec<CustomVariant>, CustomVariantSourceError>> + Send;

    /// Applies custom variants on top of a standard result. Degrades to the
    /// unchanged standard variants when the source is unavailable.
    fn resolve_custom_variants(
        &self,
        standard: VariantResult,
    ) -> impl Future<Output = ResolvedVariants> + Send;
}
