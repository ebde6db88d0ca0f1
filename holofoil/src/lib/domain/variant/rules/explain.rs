//! Explanation collection.
//!
//! Sentences come out in a fixed layer order (hard, era, override), keep
//! their first-emission position, drop empties, and never repeat.

use itertools::Itertools;

use crate::domain::variant::rules::Claim;

pub fn collect(hard: &[Claim], era: &[Claim], overrides: &[Claim]) -> Vec<String> {
    hard.iter()
        .chain(era.iter())
        .chain(overrides.iter())
        .map(|claim| claim.reason.trim())
        .filter(|reason| !reason.is_empty())
        .map(|reason| reason.to_string())
        .unique()
        .collect()
}
