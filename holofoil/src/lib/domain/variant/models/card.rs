use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A card record missing a field the engine cannot infer without.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidCardRecord {
    #[error("card record is missing its identifier")]
    MissingCardId,
    #[error("card record is missing its set identifier")]
    MissingSetId,
    #[error("card record is missing its rarity")]
    MissingRarity,
    #[error("card record is missing its release date")]
    MissingReleaseDate,
}

/// Immutable input to a single inference.
///
/// Owned by the caller; the engine borrows it for the duration of one
/// inference. `price_signals` carries external pricing-source keys whose
/// presence alone is meaningful, the values are opaque and never read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    pub id: String,
    pub name: String,
    /// Printed number, commonly in `"N/M"` form. The numerator is the
    /// ordinal within the set.
    #[serde(default)]
    pub number: Option<String>,
    pub rarity: String,
    /// Kind tags distinguishing Pokemon, Trainer, and Energy card bodies.
    #[serde(default)]
    pub supertypes: Vec<String>,
    pub set_id: String,
    pub set_series: String,
    #[serde(default)]
    pub released_at: Option<NaiveDate>,
    #[serde(default)]
    pub price_signals: BTreeMap<String, serde_json::Value>,
}

impl CardRecord {
    /// Checks the fields every rule layer depends on.
    pub fn validate(&self) -> Result<(), InvalidCardRecord> {
        if self.id.trim().is_empty() {
            return Err(InvalidCardRecord::MissingCardId);
        }
        if self.set_id.trim().is_empty() {
            return Err(InvalidCardRecord::MissingSetId);
        }
        if self.rarity.trim().is_empty() {
            return Err(InvalidCardRecord::MissingRarity);
        }
        if self.released_at.is_none() {
            return Err(InvalidCardRecord::MissingReleaseDate);
        }
        Ok(())
    }

    /// Parses the ordinal within the set from the printed number.
    ///
    /// Only the numerator of an `"N/M"` form is read; a leading letter
    /// prefix (subset galleries like `"TG12/TG30"`) is skipped.
    pub fn ordinal(&self) -> Option<u32> {
        let number = self.number.as_deref()?;
        let numerator = number.split('/').next()?;
        let digits: String = numerator
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().ok()
    }

    pub fn is_pokemon(&self) -> bool {
        self.has_supertype("pokemon") || self.has_supertype("pokémon")
    }

    pub fn is_trainer(&self) -> bool {
        self.has_supertype("trainer")
    }

    pub fn is_energy(&self) -> bool {
        self.has_supertype("energy")
    }

    fn has_supertype(&self, tag: &str) -> bool {
        self.supertypes.iter().any(|s| s.eq_ignore_ascii_case(tag))
    }
}
