//! The rule layers behind variant inference.
//!
//! Each layer implements [`RuleLayer`]: it reads a borrowed card record plus
//! a [`RuleContext`] and emits [`Claim`]s, partial conclusions about single
//! finishes. The [`merge`] module folds the layers under the fixed
//! precedence `default < era < override < hard`, and [`explain`] turns the
//! applied claims into the reasoning trail.
//!
//! All rule tables are static and immutable for the process lifetime, so a
//! batch may evaluate cards from any number of threads without
//! synchronisation.

/// Era-default rules keyed on rarity, kind, card number, and set membership.
pub mod era;
/// The era-detection cascade (set id, series name, release date).
pub mod era_detect;
/// Explanation collection (stable order, deduplicated).
pub mod explain;
/// Hard rules driven by external pricing-signal keys.
pub mod hard;
/// The precedence merger.
pub mod merge;
/// Product-channel, set-specific, and per-card override rules.
pub mod overrides;
/// Rarity vocabulary: standardisation and classification.
pub mod rarity;

use tracing::error;

use crate::domain::variant::models::{
    card::CardRecord,
    channel::ProductChannel,
    confidence::Confidence,
    era::Era,
    finish::Finish,
    infer_variants::{InferVariants, InferVariantsError},
    provenance::Provenance,
    variant_flag::{VariantFlag, VariantMap},
    variant_result::VariantResult,
};

/// One partial conclusion about one finish, with the sentence explaining it.
#[derive(Debug, Clone, PartialEq)]
pub struct Claim {
    pub finish: Finish,
    pub exists: bool,
    pub source: Provenance,
    pub confidence: Confidence,
    pub reason: String,
}

impl Claim {
    pub fn present(
        finish: Finish,
        source: Provenance,
        confidence: Confidence,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            finish,
            exists: true,
            source,
            confidence,
            reason: reason.into(),
        }
    }

    pub fn absent(
        finish: Finish,
        source: Provenance,
        confidence: Confidence,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            finish,
            exists: false,
            source,
            confidence,
            reason: reason.into(),
        }
    }

    /// The flag this claim resolves to when it wins its finish.
    pub fn flag(&self) -> VariantFlag {
        if self.exists {
            VariantFlag::present(self.source, self.confidence)
        } else {
            VariantFlag::absent_with(self.source, self.confidence)
        }
    }
}

/// Shared evaluation context handed to every rule layer.
#[derive(Debug)]
pub struct RuleContext<'a> {
    pub era: Era,
    /// The rarity string after standardisation; rules never read the raw
    /// form.
    pub rarity: &'a str,
    pub channels: &'a [ProductChannel],
    /// The map accumulated by lower layers, consulted by conditional
    /// overrides.
    pub accumulated: &'a VariantMap,
}

/// Capability shared by every rule layer.
///
/// The pipeline is a fold over implementations of this trait; adding a layer
/// does not touch the merger.
pub trait RuleLayer {
    fn apply(&self, card: &CardRecord, ctx: &RuleContext) -> Vec<Claim>;
}

/// Runs the full per-card pipeline.
///
/// Pure and synchronous: validation, rarity standardisation, era detection,
/// the three rule layers, the precedence merge, and explanation collection.
pub fn infer(request: &InferVariants) -> Result<VariantResult, InferVariantsError> {
    let card = &request.card;
    card.validate()?;

    let rarity = rarity::standardize(&card.rarity);
    let era = era_detect::detect(&card.set_id, &card.set_series, card.released_at).ok_or(
        InferVariantsError::UnknownEra {
            set_id: card.set_id.clone(),
        },
    )?;

    let base = VariantMap::default();
    let ctx = RuleContext {
        era,
        rarity,
        channels: &request.channels,
        accumulated: &base,
    };
    let era_claims = merge::fold_layer(era::EraRules.apply(card, &ctx));

    let mut accumulated = VariantMap::default();
    for claim in &era_claims {
        accumulated.set(claim.finish, claim.flag());
    }
    let ctx = RuleContext {
        era,
        rarity,
        channels: &request.channels,
        accumulated: &accumulated,
    };
    let override_claims = overrides::OverrideRules.apply(card, &ctx);
    let hard_claims = hard::HardRules.apply(card, &ctx);

    let outcome = merge::merge(era_claims, override_claims, hard_claims);
    let explanations = explain::collect(&outcome.hard, &outcome.era, &outcome.overrides);
    let variants = enforce_flag_invariant(&card.id, outcome.variants);

    Ok(VariantResult {
        card_id: card.id.clone(),
        set_id: card.set_id.clone(),
        era,
        rarity: card.rarity.clone(),
        variants,
        print_sources: request
            .channels
            .iter()
            .map(|channel| channel.to_name().to_string())
            .collect(),
        explanations,
    })
}

/// Every existing finish must carry provenance and confidence. A violation
/// is a bug in a rule table: loud in development, recovered to
/// `exists: false` in production.
fn enforce_flag_invariant(card_id: &str, mut variants: VariantMap) -> VariantMap {
    for (finish, flag) in variants.clone().iter() {
        if flag.exists && (flag.source.is_none() || flag.confidence.is_none()) {
            debug_assert!(
                false,
                "variant flag for {finish:?} exists without provenance/confidence"
            );
            error!(
                card_id,
                finish = finish.to_code(),
                "variant flag exists without provenance/confidence, dropping"
            );
            variants.set(finish, VariantFlag::absent());
        }
    }
    variants
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::variant::models::{confidence::Confidence, provenance::Provenance};

    #[test]
    fn test_enforce_flag_invariant_drops_malformed_flags() {
        let mut variants = VariantMap::default();
        variants.set(
            Finish::Holo,
            VariantFlag {
                exists: true,
                source: None,
                confidence: None,
            },
        );
        variants.set(
            Finish::Normal,
            VariantFlag::present(Provenance::Rule, Confidence::Medium),
        );
        // Release builds recover; debug builds assert, so guard the check.
        if !cfg!(debug_assertions) {
            let repaired = enforce_flag_invariant("sv1-1", variants);
            assert!(!repaired.get(Finish::Holo).exists);
            assert!(repaired.get(Finish::Normal).exists);
        }
    }
}
