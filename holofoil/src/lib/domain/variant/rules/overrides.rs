//! Override rules: product channels, named set exceptions, per-card
//! corrections, and regional exclusivity.
//!
//! Sub-rules are independent and order-insensitive inside the layer; the
//! merger's within-layer fold resolves conflicts (higher confidence wins, a
//! positive existence claim beats a negative one at equal confidence). Set
//! tables are data, not code: adding a set rule means adding an entry, not
//! touching the evaluator.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::domain::variant::models::{
    card::CardRecord, confidence::Confidence, finish::Finish, provenance::Provenance,
};
use crate::domain::variant::rules::rarity::{self, RarityClass, JAPANESE_CHARACTER_RARITIES};
use crate::domain::variant::rules::{Claim, RuleContext, RuleLayer};

type SetOverrideFn = fn(&CardRecord, &str) -> Vec<Claim>;

/// Named set-specific exceptions, keyed by set identifier. Each entry is a
/// pure function of the card record; confidence is high.
static SET_OVERRIDES: Lazy<BTreeMap<&'static str, SetOverrideFn>> = Lazy::new(|| {
    BTreeMap::from([
        ("cel25", celebrations as SetOverrideFn),
        ("mcd19", mcdonalds_2019 as SetOverrideFn),
        ("sm115", hidden_fates as SetOverrideFn),
        ("sm35", shining_legends as SetOverrideFn),
        ("sv3pt5", one_fifty_one as SetOverrideFn),
    ])
});

/// Known upstream data errors, keyed by card identifier.
static CARD_CORRECTIONS: Lazy<BTreeMap<&'static str, &'static [(Finish, bool)]>> =
    Lazy::new(|| {
        BTreeMap::from([
            (
                "swsh45sv-SV122",
                &[(Finish::ReverseHolo, false)] as &[(Finish, bool)],
            ),
            (
                "xy2-97",
                &[(Finish::Holo, true), (Finish::Normal, false)] as &[(Finish, bool)],
            ),
        ])
    });

pub struct OverrideRules;

impl RuleLayer for OverrideRules {
    fn apply(&self, card: &CardRecord, ctx: &RuleContext) -> Vec<Claim> {
        let mut claims = Vec::new();
        claims.extend(deck_channels(ctx));
        claims.extend(promo_channels(ctx));
        claims.extend(starter_channel(ctx));
        if let Some(set_override) = SET_OVERRIDES.get(card.set_id.as_str()) {
            claims.extend(set_override(card, ctx.rarity));
        }
        claims.extend(card_corrections(card));
        claims.extend(regional_exclusivity(ctx));
        claims
    }
}

/// Theme, starter, and battle decks ship non-holo copies of holo rares.
fn deck_channels(ctx: &RuleContext) -> Vec<Claim> {
    let holo_without_normal =
        ctx.accumulated.get(Finish::Holo).exists && !ctx.accumulated.get(Finish::Normal).exists;
    if !holo_without_normal || !rarity::is_holo_rare(ctx.rarity) {
        return vec![];
    }
    ctx.channels
        .iter()
        .filter(|channel| channel.is_deck_product())
        .map(|channel| {
            Claim::present(
                Finish::Normal,
                Provenance::Override,
                Confidence::Medium,
                format!("{} product source adds non-holo variant", channel.to_name()),
            )
        })
        .collect()
}

/// Promos, tins, and collection boxes: promo-rarity cards usually come
/// holo, and never out of the reverse slot.
fn promo_channels(ctx: &RuleContext) -> Vec<Claim> {
    if !ctx.channels.iter().any(|c| c.is_promo_product()) || !ctx.rarity.contains("Promo") {
        return vec![];
    }
    let mut claims = Vec::new();
    if !ctx.accumulated.get(Finish::Holo).exists {
        claims.push(Claim::present(
            Finish::Holo,
            Provenance::Override,
            Confidence::Low,
            "promo product sources usually include a holo printing",
        ));
    }
    if ctx.accumulated.get(Finish::ReverseHolo).exists {
        claims.push(Claim::absent(
            Finish::ReverseHolo,
            Provenance::Override,
            Confidence::Medium,
            "promo printings do not come out of the reverse holo slot",
        ));
    }
    claims
}

/// Starter products guarantee plain copies of their staple rarities.
fn starter_channel(ctx: &RuleContext) -> Vec<Claim> {
    use crate::domain::variant::models::channel::ProductChannel;
    if !ctx
        .channels
        .iter()
        .any(|c| matches!(c, ProductChannel::StarterDeck))
    {
        return vec![];
    }
    if !matches!(
        rarity::classify(ctx.rarity),
        RarityClass::CommonUncommon | RarityClass::Rare
    ) {
        return vec![];
    }
    vec![
        Claim::present(
            Finish::Normal,
            Provenance::Override,
            Confidence::Medium,
            "Starter Deck product source guarantees a normal printing",
        ),
        Claim::absent(
            Finish::ReverseHolo,
            Provenance::Override,
            Confidence::Medium,
            "Starter Deck products do not include reverse holo",
        ),
    ]
}

fn card_corrections(card: &CardRecord) -> Vec<Claim> {
    let Some(corrections) = CARD_CORRECTIONS.get(card.id.as_str()) else {
        return vec![];
    };
    corrections
        .iter()
        .map(|(finish, exists)| {
            let reason = "manual correction for a known upstream data error";
            if *exists {
                Claim::present(*finish, Provenance::Override, Confidence::High, reason)
            } else {
                Claim::absent(*finish, Provenance::Override, Confidence::High, reason)
            }
        })
        .collect()
}

fn regional_exclusivity(ctx: &RuleContext) -> Vec<Claim> {
    if !JAPANESE_CHARACTER_RARITIES.contains(&ctx.rarity) {
        return vec![];
    }
    vec![Claim::absent(
        Finish::ReverseHolo,
        Provenance::Override,
        Confidence::Medium,
        "character rarities are Japanese exclusives without reverse holo printings",
    )]
}

// =====================
//  set-specific tables
// =====================

/// Anniversary reprint set: commons are normal only, everything else holo
/// only, and no reverse slot exists at all.
fn celebrations(_card: &CardRecord, rarity: &str) -> Vec<Claim> {
    let over = Provenance::Override;
    let mut claims = if rarity == "Common" {
        let reason = "Celebrations: commons print normal only";
        vec![
            Claim::present(Finish::Normal, over, Confidence::High, reason),
            Claim::absent(Finish::Holo, over, Confidence::High, reason),
        ]
    } else {
        let reason = "Celebrations: anniversary reprints are holo only";
        vec![
            Claim::present(Finish::Holo, over, Confidence::High, reason),
            Claim::absent(Finish::Normal, over, Confidence::High, reason),
        ]
    };
    claims.push(Claim::absent(
        Finish::ReverseHolo,
        over,
        Confidence::High,
        "Celebrations: no reverse holo printings",
    ));
    claims
}

fn mcdonalds_2019(_card: &CardRecord, _rarity: &str) -> Vec<Claim> {
    let reason = "McDonald's promotional cards print normal only";
    let over = Provenance::Override;
    vec![
        Claim::present(Finish::Normal, over, Confidence::High, reason),
        Claim::absent(Finish::Holo, over, Confidence::High, reason),
        Claim::absent(Finish::ReverseHolo, over, Confidence::High, reason),
    ]
}

/// Hidden Fates: the shiny vault subset starts after card 68.
fn hidden_fates(card: &CardRecord, _rarity: &str) -> Vec<Claim> {
    if !card.ordinal().is_some_and(|n| n > 68) {
        return vec![];
    }
    holo_only_claims("Hidden Fates: cards numbered above 68 sit in the shiny vault, holo only")
}

fn shining_legends(card: &CardRecord, _rarity: &str) -> Vec<Claim> {
    if !card.name.contains("Shining ") {
        return vec![];
    }
    holo_only_claims("Shining Legends: Shining Pokemon are holo only")
}

/// The 151 set: cards numbered above 151 are secret rares.
fn one_fifty_one(card: &CardRecord, _rarity: &str) -> Vec<Claim> {
    if !card.ordinal().is_some_and(|n| n > 151) {
        return vec![];
    }
    holo_only_claims("151: cards numbered above 151 are holo-only secret rares")
}

fn holo_only_claims(reason: &str) -> Vec<Claim> {
    let over = Provenance::Override;
    vec![
        Claim::present(Finish::Holo, over, Confidence::High, reason),
        Claim::absent(Finish::Normal, over, Confidence::High, reason),
        Claim::absent(Finish::ReverseHolo, over, Confidence::High, reason),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::variant::models::channel::ProductChannel;
    use crate::domain::variant::models::era::Era;
    use crate::domain::variant::models::variant_flag::{VariantFlag, VariantMap};

    fn card(id: &str, set_id: &str, name: &str, rarity: &str) -> CardRecord {
        CardRecord {
            id: id.to_string(),
            name: name.to_string(),
            rarity: rarity.to_string(),
            set_id: set_id.to_string(),
            set_series: "Test".to_string(),
            ..Default::default()
        }
    }

    fn apply(
        card: &CardRecord,
        channels: &[ProductChannel],
        accumulated: &VariantMap,
    ) -> Vec<Claim> {
        let ctx = RuleContext {
            era: Era::SwordShield,
            rarity: &card.rarity,
            channels,
            accumulated,
        };
        OverrideRules.apply(card, &ctx)
    }

    fn holo_map() -> VariantMap {
        let mut map = VariantMap::default();
        map.set(
            Finish::Holo,
            VariantFlag::present(Provenance::Rule, Confidence::Medium),
        );
        map
    }

    // ===============
    //  deck channels
    // ===============

    #[test]
    fn test_theme_deck_adds_normal_to_holo_rare() {
        let card = card("base1-15", "base1", "Zapdos", "Rare Holo");
        let claims = apply(
            &card,
            &[ProductChannel::Booster, ProductChannel::ThemeDeck],
            &holo_map(),
        );
        let normal = claims.iter().find(|c| c.finish == Finish::Normal).unwrap();
        assert!(normal.exists);
        assert_eq!(normal.confidence, Confidence::Medium);
        assert_eq!(
            normal.reason,
            "Theme Deck product source adds non-holo variant"
        );
    }

    #[test]
    fn test_deck_channel_needs_holo_without_normal() {
        let card = card("base1-15", "base1", "Zapdos", "Rare Holo");
        let mut map = holo_map();
        map.set(
            Finish::Normal,
            VariantFlag::present(Provenance::Rule, Confidence::Medium),
        );
        let claims = apply(&card, &[ProductChannel::ThemeDeck], &map);
        assert!(claims.iter().all(|c| c.finish != Finish::Normal));
    }

    #[test]
    fn test_deck_channel_ignores_plain_rares() {
        let card = card("swsh4-1", "swsh4", "Some Card", "Rare");
        let claims = apply(&card, &[ProductChannel::ThemeDeck], &holo_map());
        assert!(claims.is_empty());
    }

    // ================
    //  promo channels
    // ================

    #[test]
    fn test_promo_channel_adds_low_confidence_holo() {
        let card = card("swshp-SWSH001", "swshp", "Some Promo", "Promo");
        let claims = apply(&card, &[ProductChannel::Tin], &VariantMap::default());
        let holo = claims.iter().find(|c| c.finish == Finish::Holo).unwrap();
        assert!(holo.exists);
        assert_eq!(holo.confidence, Confidence::Low);
    }

    #[test]
    fn test_promo_channel_clears_reverse_when_present() {
        let card = card("swshp-SWSH001", "swshp", "Some Promo", "Promo");
        let mut map = VariantMap::default();
        map.set(
            Finish::ReverseHolo,
            VariantFlag::present(Provenance::Rule, Confidence::Medium),
        );
        let claims = apply(&card, &[ProductChannel::Promo], &map);
        let reverse = claims
            .iter()
            .find(|c| c.finish == Finish::ReverseHolo)
            .unwrap();
        assert!(!reverse.exists);
        assert_eq!(reverse.confidence, Confidence::Medium);
    }

    #[test]
    fn test_promo_channel_needs_promo_rarity() {
        let card = card("swsh4-1", "swsh4", "Some Card", "Rare");
        let claims = apply(&card, &[ProductChannel::Tin], &VariantMap::default());
        assert!(claims.is_empty());
    }

    // =================
    //  starter channel
    // =================

    #[test]
    fn test_starter_channel_forces_normal_and_clears_reverse() {
        let card = card("swsh4-1", "swsh4", "Some Card", "Rare");
        let claims = apply(&card, &[ProductChannel::StarterDeck], &VariantMap::default());
        assert!(claims
            .iter()
            .any(|c| c.finish == Finish::Normal && c.exists));
        assert!(claims
            .iter()
            .any(|c| c.finish == Finish::ReverseHolo && !c.exists));
    }

    /// Starter and promo channels together: the union of both sub-rules,
    /// no special casing.
    #[test]
    fn test_starter_and_promo_channels_union() {
        let card = card("swshp-SWSH001", "swshp", "Some Promo", "Promo");
        let mut map = VariantMap::default();
        map.set(
            Finish::ReverseHolo,
            VariantFlag::present(Provenance::Rule, Confidence::Medium),
        );
        let claims = apply(
            &card,
            &[ProductChannel::StarterDeck, ProductChannel::Promo],
            &map,
        );
        // Promo rarity is outside the starter staples, so only the promo
        // sub-rule fires: holo hint plus reverse clear.
        assert!(claims.iter().any(|c| c.finish == Finish::Holo && c.exists));
        assert!(claims
            .iter()
            .any(|c| c.finish == Finish::ReverseHolo && !c.exists));
    }

    // ======================
    //  set-specific entries
    // ======================

    #[test]
    fn test_celebrations_common_is_normal_only() {
        let card = card("cel25-1", "cel25", "Ho-Oh", "Common");
        let claims = apply(&card, &[ProductChannel::Booster], &VariantMap::default());
        assert!(claims
            .iter()
            .any(|c| c.finish == Finish::Normal && c.exists));
        assert!(claims.iter().any(|c| c.finish == Finish::Holo && !c.exists));
        assert!(claims
            .iter()
            .any(|c| c.finish == Finish::ReverseHolo && !c.exists));
    }

    #[test]
    fn test_celebrations_rare_is_holo_only() {
        let card = card("cel25-2", "cel25", "Reshiram", "Rare Holo");
        let claims = apply(&card, &[ProductChannel::Booster], &VariantMap::default());
        assert!(claims.iter().any(|c| c.finish == Finish::Holo && c.exists));
        assert!(claims
            .iter()
            .any(|c| c.finish == Finish::Normal && !c.exists));
    }

    #[test]
    fn test_hidden_fates_threshold_is_68() {
        let mut below = card("sm115-68", "sm115", "Some Card", "Rare Holo GX");
        below.number = Some("68/68".to_string());
        assert!(apply(&below, &[ProductChannel::Booster], &VariantMap::default()).is_empty());

        let mut above = card("sm115-SV1", "sm115", "Shiny Card", "Rare Shiny");
        above.number = Some("69/68".to_string());
        let claims = apply(&above, &[ProductChannel::Booster], &VariantMap::default());
        assert!(claims.iter().any(|c| c.finish == Finish::Holo && c.exists));
        assert_eq!(
            claims.first().map(|c| c.confidence),
            Some(Confidence::High)
        );
    }

    #[test]
    fn test_shining_legends_name_match() {
        let shining = card("sm35-40", "sm35", "Shining Mew", "Rare Shining");
        let claims = apply(&shining, &[ProductChannel::Booster], &VariantMap::default());
        assert!(claims.iter().any(|c| c.finish == Finish::Holo && c.exists));

        let plain = card("sm35-41", "sm35", "Mew", "Rare");
        assert!(apply(&plain, &[ProductChannel::Booster], &VariantMap::default()).is_empty());
    }

    #[test]
    fn test_151_threshold_parses_numerator() {
        let mut secret = card("sv3pt5-152", "sv3pt5", "Some Card", "Ultra Rare");
        secret.number = Some("152/165".to_string());
        let claims = apply(&secret, &[ProductChannel::Booster], &VariantMap::default());
        assert!(claims.iter().any(|c| c.finish == Finish::Holo && c.exists));

        let mut main = card("sv3pt5-151", "sv3pt5", "Mew ex", "Double Rare");
        main.number = Some("151/165".to_string());
        assert!(apply(&main, &[ProductChannel::Booster], &VariantMap::default()).is_empty());
    }

    // ==================
    //  card corrections
    // ==================

    #[test]
    fn test_card_correction_applies_at_high_confidence() {
        let card = card("xy2-97", "xy2", "Some Card", "Rare Holo");
        let claims = apply(&card, &[ProductChannel::Booster], &VariantMap::default());
        assert!(claims
            .iter()
            .any(|c| c.finish == Finish::Holo && c.exists && c.confidence == Confidence::High));
        assert!(claims
            .iter()
            .any(|c| c.finish == Finish::Normal && !c.exists));
    }

    // =======================
    //  regional exclusivity
    // =======================

    #[test]
    fn test_character_rare_clears_reverse() {
        let card = card("s8b-67", "s8b", "Some Card", "Character Rare");
        let claims = apply(&card, &[ProductChannel::Booster], &VariantMap::default());
        let reverse = claims
            .iter()
            .find(|c| c.finish == Finish::ReverseHolo)
            .unwrap();
        assert!(!reverse.exists);
    }
}
