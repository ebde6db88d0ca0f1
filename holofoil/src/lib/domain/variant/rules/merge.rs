//! The precedence merger.
//!
//! Layers fold low to high: `default → era → override → hard`. Era and hard
//! claims overwrite their finish wholesale. The override layer is
//! constrained: it may flip an absent finish to present, or clear a present
//! finish whose confidence it dominates (inclusive, so a medium override can
//! clear a medium era conclusion but never a high one).

use crate::domain::variant::models::{
    confidence::Confidence,
    variant_flag::VariantMap,
};
use crate::domain::variant::rules::Claim;

/// The merged map plus the claims each layer actually applied, in stable
/// order, for the explainer.
#[derive(Debug)]
pub struct MergeOutcome {
    pub variants: VariantMap,
    pub hard: Vec<Claim>,
    pub era: Vec<Claim>,
    pub overrides: Vec<Claim>,
}

/// Resolves conflicts inside one layer: one winner per finish, higher
/// confidence first, a positive existence claim beating a negative one at
/// equal confidence. Output keeps first-emission order, so repeated runs
/// explain identically.
pub fn fold_layer(claims: Vec<Claim>) -> Vec<Claim> {
    let mut winners: Vec<Claim> = Vec::new();
    for claim in claims {
        match winners.iter_mut().find(|c| c.finish == claim.finish) {
            None => winners.push(claim),
            Some(existing) => {
                let stronger = claim.confidence > existing.confidence
                    || (claim.confidence == existing.confidence
                        && claim.exists
                        && !existing.exists);
                if stronger {
                    *existing = claim;
                }
            }
        }
    }
    winners
}

pub fn merge(era: Vec<Claim>, overrides: Vec<Claim>, hard: Vec<Claim>) -> MergeOutcome {
    let era = fold_layer(era);
    let overrides = fold_layer(overrides);
    let hard = fold_layer(hard);

    let mut variants = VariantMap::default();
    for claim in &era {
        variants.set(claim.finish, claim.flag());
    }

    let mut applied_overrides = Vec::new();
    for claim in overrides {
        let current = variants.get(claim.finish);
        if claim.exists && !current.exists {
            variants.set(claim.finish, claim.flag());
            applied_overrides.push(claim);
        } else if !claim.exists && current.exists {
            let current_confidence = current.confidence.unwrap_or(Confidence::Low);
            if claim.confidence >= current_confidence {
                variants.set(claim.finish, claim.flag());
                applied_overrides.push(claim);
            }
        }
    }

    for claim in &hard {
        variants.set(claim.finish, claim.flag());
    }

    MergeOutcome {
        variants,
        hard,
        era,
        overrides: applied_overrides,
    }
}
