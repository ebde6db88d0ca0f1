//! Rarity vocabulary handling.
//!
//! Upstream rarity strings are free-form; the engine standardises known
//! aliases once at pipeline entry and classifies the result into the coarse
//! classes the era rules branch on.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

/// Alias renames applied before any rule reads rarity.
///
/// No value is itself a key, so applying the map twice equals applying it
/// once.
static RARITY_RENAMES: Lazy<BTreeMap<&'static str, &'static str>> = Lazy::new(|| {
    BTreeMap::from([
        ("Holo Rare", "Rare Holo"),
        ("Holo Rare V", "Rare Holo V"),
        ("Holo Rare VMAX", "Rare Holo VMAX"),
        ("Holo Rare VSTAR", "Rare Holo VSTAR"),
        ("Ultra-Rare", "Ultra Rare"),
        ("Secret Rare", "Rare Secret"),
    ])
});

/// Returns the standardised form of a rarity string.
pub fn standardize(rarity: &str) -> &str {
    RARITY_RENAMES.get(rarity).copied().unwrap_or(rarity)
}

/// The coarse rarity classes the era rules branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RarityClass {
    CommonUncommon,
    Rare,
    RareHolo,
    Ultra,
    Promo,
    Other,
}

/// Rarities above the holo-rare line: printed holo only, never in the
/// normal or reverse slot by era default.
const ULTRA_RARITIES: &[&str] = &[
    "Ultra Rare",
    "Rare Ultra",
    "Double Rare",
    "Illustration Rare",
    "Special Illustration Rare",
    "Hyper Rare",
    "Rare Secret",
    "Rare Rainbow",
    "Rare Shiny",
    "Shiny Rare",
    "Shiny Ultra Rare",
    "ACE SPEC Rare",
    "Rare ACE",
    "Amazing Rare",
    "Radiant Rare",
    "Rare BREAK",
    "Rare Prism Star",
    "Rare Prime",
    "LEGEND",
    "Rare Shining",
    "Trainer Gallery Rare Holo",
];

pub fn classify(rarity: &str) -> RarityClass {
    if rarity.eq_ignore_ascii_case("common") || rarity.eq_ignore_ascii_case("uncommon") {
        return RarityClass::CommonUncommon;
    }
    if rarity == "Rare" {
        return RarityClass::Rare;
    }
    if rarity == "Rare Holo" {
        return RarityClass::RareHolo;
    }
    if ULTRA_RARITIES.contains(&rarity) || rarity.starts_with("Rare Holo ") {
        return RarityClass::Ultra;
    }
    if rarity.contains("Promo") {
        return RarityClass::Promo;
    }
    RarityClass::Other
}

/// Matches `Rare Holo` and its V/EX/GX/VMAX-style extensions; the pattern
/// the deck-channel override keys on.
pub fn is_holo_rare(rarity: &str) -> bool {
    rarity.starts_with("Rare Holo")
}

/// Rarity names exclusive to the Japanese market; these never print in the
/// international reverse slot.
pub const JAPANESE_CHARACTER_RARITIES: &[&str] = &["Character Rare", "Character Super Rare"];

#[cfg(test)]
mod tests {
    use super::*;

    // =================
    //  standardisation
    // =================

    #[test]
    fn test_standardize_renames_known_aliases() {
        assert_eq!(standardize("Holo Rare"), "Rare Holo");
        assert_eq!(standardize("Secret Rare"), "Rare Secret");
        assert_eq!(standardize("Rare"), "Rare");
    }

    #[test]
    fn test_standardize_is_idempotent() {
        for alias in RARITY_RENAMES.keys() {
            let once = standardize(alias);
            assert_eq!(standardize(once), once);
        }
    }

    // ================
    //  classification
    // ================

    #[test]
    fn test_classify_buckets_core_vocabulary() {
        assert_eq!(classify("Common"), RarityClass::CommonUncommon);
        assert_eq!(classify("Uncommon"), RarityClass::CommonUncommon);
        assert_eq!(classify("Rare"), RarityClass::Rare);
        assert_eq!(classify("Rare Holo"), RarityClass::RareHolo);
        assert_eq!(classify("Double Rare"), RarityClass::Ultra);
        assert_eq!(classify("Illustration Rare"), RarityClass::Ultra);
        assert_eq!(classify("Special Illustration Rare"), RarityClass::Ultra);
        assert_eq!(classify("Rare Holo GX"), RarityClass::Ultra);
        assert_eq!(classify("ACE SPEC Rare"), RarityClass::Ultra);
        assert_eq!(classify("Promo"), RarityClass::Promo);
        assert_eq!(classify("Classic Collection"), RarityClass::Other);
    }

    #[test]
    fn test_is_holo_rare_covers_extensions() {
        assert!(is_holo_rare("Rare Holo"));
        assert!(is_holo_rare("Rare Holo V"));
        assert!(is_holo_rare("Rare Holo EX"));
        assert!(is_holo_rare("Rare Holo VMAX"));
        assert!(!is_holo_rare("Rare"));
        assert!(!is_holo_rare("Common"));
    }
}
