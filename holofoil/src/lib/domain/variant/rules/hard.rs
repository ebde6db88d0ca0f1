//! Hard rules: external pricing signals.
//!
//! The presence of a signal key declares the corresponding finish outright;
//! values are never read. The layer only publishes positive conclusions and
//! always outranks everything else.

use crate::domain::variant::models::{
    card::CardRecord, confidence::Confidence, finish::Finish, provenance::Provenance,
};
use crate::domain::variant::rules::{Claim, RuleContext, RuleLayer};

/// Signal-key-to-finish table, consulted in declaration order. Unknown keys
/// are ignored.
const PRICE_SIGNAL_FINISHES: &[(&str, Finish)] = &[
    ("normal", Finish::Normal),
    ("unlimited", Finish::Normal),
    ("unlimitedNormal", Finish::Normal),
    ("holofoil", Finish::Holo),
    ("unlimitedHolofoil", Finish::Holo),
    ("reverseHolofoil", Finish::ReverseHolo),
    ("1stEditionNormal", Finish::FirstEditionNormal),
    ("1stEditionHolofoil", Finish::FirstEditionHolo),
];

pub struct HardRules;

impl RuleLayer for HardRules {
    fn apply(&self, card: &CardRecord, _ctx: &RuleContext) -> Vec<Claim> {
        let detected: Vec<&str> = PRICE_SIGNAL_FINISHES
            .iter()
            .filter(|(key, _)| card.price_signals.contains_key(*key))
            .map(|(key, _)| *key)
            .collect();
        if detected.is_empty() {
            return vec![];
        }
        let reason = format!(
            "pricing signals declare finishes directly: {}",
            detected.join(", ")
        );
        PRICE_SIGNAL_FINISHES
            .iter()
            .filter(|(key, _)| detected.contains(key))
            .map(|(_, finish)| {
                Claim::present(*finish, Provenance::Api, Confidence::High, reason.clone())
            })
            .collect()
    }
}
