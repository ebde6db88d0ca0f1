//! Variant service implementation.
//!
//! Wires the pure rule pipeline to the custom-variant source port. The
//! pipeline itself never suspends; only the custom-variant query awaits,
//! bounded by the service's timeout.

use std::time::Duration;

use tracing::{info, warn};

use crate::domain::variant::models::{
    confidence::Confidence,
    custom_variant::{CustomVariant, ResolvedVariants},
    get_custom_variants::CustomVariantSourceError,
    infer_batch::{BatchError, BatchInferVariants, BatchOutcome},
    infer_variants::{InferVariants, InferVariantsError},
    provenance::Provenance,
    variant_flag::VariantFlag,
    variant_result::VariantResult,
};
use crate::domain::variant::ports::{CustomVariantSource, VariantService};
use crate::domain::variant::rules;

/// Default budget for one custom-variant query.
pub const DEFAULT_CUSTOM_VARIANT_TIMEOUT: Duration = Duration::from_secs(2);

/// Variant inference service over a custom-variant source.
#[derive(Debug, Clone)]
pub struct Service<S>
where
    S: CustomVariantSource,
{
    source: S,
    custom_variant_timeout: Duration,
}

impl<S> Service<S>
where
    S: CustomVariantSource,
{
    /// Creates a service with the default custom-variant timeout.
    pub fn new(source: S) -> Self {
        Self {
            source,
            custom_variant_timeout: DEFAULT_CUSTOM_VARIANT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.custom_variant_timeout = timeout;
        self
    }
}

impl<S: CustomVariantSource> VariantService for Service<S> {
    fn infer_variants(
        &self,
        request: &InferVariants,
    ) -> Result<VariantResult, InferVariantsError> {
        rules::infer(request)
    }

    fn infer_batch(&self, request: &BatchInferVariants) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();
        for card in &request.cards {
            if request
                .cancellation
                .as_ref()
                .is_some_and(|token| token.is_cancelled())
            {
                info!(
                    completed = outcome.results.len(),
                    remaining = request.cards.len() - outcome.results.len() - outcome.errors.len(),
                    "batch inference cancelled, returning partial results"
                );
                break;
            }
            let channels = request.channels.get(&card.id).cloned().unwrap_or_default();
            let per_card = InferVariants::with_channels(card.clone(), channels);
            match rules::infer(&per_card) {
                Ok(result) => outcome.results.push((card.id.clone(), result)),
                Err(error) => outcome.errors.push(BatchError {
                    card_id: card.id.clone(),
                    message: error.to_string(),
                }),
            }
        }
        info!(
            results = outcome.results.len(),
            errors = outcome.errors.len(),
            "batch inference finished"
        );
        outcome
    }

    async fn custom_variants_for_card(
        &self,
        card_id: &str,
    ) -> Result<Vec<CustomVariant>, CustomVariantSourceError> {
        let query = self.source.custom_variants_for_card(card_id);
        match tokio::time::timeout(self.custom_variant_timeout, query).await {
            Ok(loaded) => {
                let variants = loaded?;
                Ok(variants.into_iter().filter(|v| v.active).collect())
            }
            Err(_) => Err(CustomVariantSourceError::Timeout),
        }
    }

    async fn resolve_custom_variants(&self, standard: VariantResult) -> ResolvedVariants {
        let mut standard = standard;
        match self.custom_variants_for_card(&standard.card_id).await {
            Ok(custom) => {
                for variant in &custom {
                    let Some(finish) = variant.replaces else {
                        continue;
                    };
                    standard.variants.set(
                        finish,
                        VariantFlag::absent_with(Provenance::Override, Confidence::High),
                    );
                    let line = format!(
                        "custom variant '{}' replaces the standard {} printing",
                        variant.name,
                        finish.to_name()
                    );
                    if !standard.explanations.contains(&line) {
                        standard.explanations.push(line);
                    }
                }
                ResolvedVariants { standard, custom }
            }
            Err(error) => {
                warn!(
                    card_id = %standard.card_id,
                    %error,
                    "custom variant source degraded, keeping standard variants"
                );
                let line =
                    "custom variant source unavailable, showing standard variants only".to_string();
                if !standard.explanations.contains(&line) {
                    standard.explanations.push(line);
                }
                ResolvedVariants {
                    standard,
                    custom: vec![],
                }
            }
        }
    }
}
