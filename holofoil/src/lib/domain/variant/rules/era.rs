//! Era-default rules.
//!
//! Derives finish claims purely from the card's era, rarity class, kind
//! tags, card number, and set membership. Confidence is medium except for
//! the two pinned cases: secret rares in pattern sets are holo only, and
//! reverse holo cannot exist before its 2002-05-24 debut.

use chrono::NaiveDate;

use crate::domain::variant::models::{
    card::CardRecord, confidence::Confidence, era::Era, finish::Finish, provenance::Provenance,
};
use crate::domain::variant::rules::rarity::{self, RarityClass};
use crate::domain::variant::rules::{Claim, RuleContext, RuleLayer};

/// Prismatic Evolutions: pattern printing below this ordinal, secret rares
/// above it.
const PRISMATIC_EVOLUTIONS_SET_ID: &str = "sv8pt5";
const PRISMATIC_EVOLUTIONS_MAX_ORDINAL: u32 = 131;

/// Black Bolt and White Flare share one layout with an 86-card main list.
const BLACK_BOLT_SET_ID: &str = "zsv10pt5";
const WHITE_FLARE_SET_ID: &str = "rsv10pt5";
const BLACK_WHITE_MAX_ORDINAL: u32 = 86;

/// First day a reverse-holo slot existed.
fn reverse_holo_debut() -> NaiveDate {
    NaiveDate::from_ymd_opt(2002, 5, 24).unwrap_or_default()
}

/// Series whose print runs carried 1st Edition stamps.
const FIRST_EDITION_SERIES: &[&str] = &[
    "Base",
    "Jungle",
    "Fossil",
    "Rocket",
    "Gym",
    "Neo",
    "Expedition",
    "Aquapolis",
    "Skyridge",
];

pub struct EraRules;

impl RuleLayer for EraRules {
    fn apply(&self, card: &CardRecord, ctx: &RuleContext) -> Vec<Claim> {
        match ctx.era {
            Era::ScarletViolet => scarlet_violet(card, ctx.rarity),
            Era::WotC => wotc(card, ctx.rarity),
            _ => modern_default(ctx.era, ctx.rarity),
        }
    }
}

fn scarlet_violet(card: &CardRecord, rarity: &str) -> Vec<Claim> {
    match card.set_id.as_str() {
        PRISMATIC_EVOLUTIONS_SET_ID => prismatic_evolutions(card, rarity),
        BLACK_BOLT_SET_ID | WHITE_FLARE_SET_ID => black_bolt_white_flare(card, rarity),
        _ => scarlet_violet_regular(rarity),
    }
}

fn scarlet_violet_regular(rarity: &str) -> Vec<Claim> {
    let rule = Provenance::Rule;
    match rarity::classify(rarity) {
        RarityClass::CommonUncommon => {
            let reason = "Scarlet & Violet era: commons and uncommons print normal and reverse holo";
            vec![
                Claim::present(Finish::Normal, rule, Confidence::Medium, reason),
                Claim::present(Finish::ReverseHolo, rule, Confidence::Medium, reason),
            ]
        }
        RarityClass::Rare | RarityClass::RareHolo => {
            let reason = "Scarlet & Violet era: single-star rares are holo by default";
            vec![
                Claim::present(Finish::Holo, rule, Confidence::Medium, reason),
                Claim::present(Finish::ReverseHolo, rule, Confidence::Medium, reason),
            ]
        }
        RarityClass::Ultra => {
            let reason = "Scarlet & Violet era: ultra rares are holo only";
            vec![Claim::present(Finish::Holo, rule, Confidence::Medium, reason)]
        }
        RarityClass::Promo | RarityClass::Other => vec![],
    }
}

fn prismatic_evolutions(card: &CardRecord, rarity: &str) -> Vec<Claim> {
    let rule = Provenance::Rule;
    if card
        .ordinal()
        .is_some_and(|n| n > PRISMATIC_EVOLUTIONS_MAX_ORDINAL)
    {
        return vec![Claim::present(
            Finish::Holo,
            rule,
            Confidence::High,
            "Prismatic Evolutions: cards numbered above 131 are holo-only secret rares",
        )];
    }

    let is_ex = rarity == "Double Rare" || card.name.to_lowercase().ends_with(" ex");
    let is_ace_spec = rarity.contains("ACE");
    if card.is_trainer() || card.is_energy() {
        let reason =
            "Prismatic Evolutions: trainers and basic energy print the Poke Ball pattern but not Master Ball";
        return vec![
            Claim::present(Finish::Normal, rule, Confidence::Medium, reason),
            Claim::present(Finish::ReverseHolo, rule, Confidence::Medium, reason),
            Claim::present(Finish::PokeballPattern, rule, Confidence::Medium, reason),
        ];
    }
    if is_ex || is_ace_spec {
        let reason =
            "Prismatic Evolutions: Pokemon ex and ACE SPEC cards skip the Master Ball pattern";
        return vec![
            Claim::present(Finish::Normal, rule, Confidence::Medium, reason),
            Claim::present(Finish::ReverseHolo, rule, Confidence::Medium, reason),
            Claim::present(Finish::PokeballPattern, rule, Confidence::Medium, reason),
        ];
    }
    let reason = "Prismatic Evolutions: Pokemon print in both ball patterns alongside standard finishes";
    vec![
        Claim::present(Finish::Normal, rule, Confidence::Medium, reason),
        Claim::present(Finish::ReverseHolo, rule, Confidence::Medium, reason),
        Claim::present(Finish::PokeballPattern, rule, Confidence::Medium, reason),
        Claim::present(Finish::MasterballPattern, rule, Confidence::Medium, reason),
    ]
}

fn black_bolt_white_flare(card: &CardRecord, rarity: &str) -> Vec<Claim> {
    let rule = Provenance::Rule;
    if card.ordinal().is_some_and(|n| n > BLACK_WHITE_MAX_ORDINAL) {
        return vec![Claim::present(
            Finish::Holo,
            rule,
            Confidence::High,
            "Black Bolt / White Flare: cards numbered above 86 are holo-only secret rares",
        )];
    }

    if card.is_trainer() {
        let reason =
            "Black Bolt / White Flare: trainers print the Poke Ball pattern but not Master Ball";
        return vec![
            Claim::present(Finish::Normal, rule, Confidence::Medium, reason),
            Claim::present(Finish::ReverseHolo, rule, Confidence::Medium, reason),
            Claim::present(Finish::PokeballPattern, rule, Confidence::Medium, reason),
        ];
    }
    let class = rarity::classify(rarity);
    if card.is_energy() && class != RarityClass::Ultra {
        let reason = "Black Bolt / White Flare: basic energy prints normal and reverse holo";
        return vec![
            Claim::present(Finish::Normal, rule, Confidence::Medium, reason),
            Claim::present(Finish::ReverseHolo, rule, Confidence::Medium, reason),
        ];
    }
    match class {
        RarityClass::CommonUncommon => {
            let reason =
                "Black Bolt / White Flare: common and uncommon Pokemon print in both ball patterns";
            vec![
                Claim::present(Finish::Normal, rule, Confidence::Medium, reason),
                Claim::present(Finish::ReverseHolo, rule, Confidence::Medium, reason),
                Claim::present(Finish::PokeballPattern, rule, Confidence::Medium, reason),
                Claim::present(Finish::MasterballPattern, rule, Confidence::Medium, reason),
            ]
        }
        RarityClass::Rare | RarityClass::RareHolo => {
            let reason = "Black Bolt / White Flare: rare Pokemon are holo with both ball patterns";
            vec![
                Claim::present(Finish::Holo, rule, Confidence::Medium, reason),
                Claim::present(Finish::ReverseHolo, rule, Confidence::Medium, reason),
                Claim::present(Finish::PokeballPattern, rule, Confidence::Medium, reason),
                Claim::present(Finish::MasterballPattern, rule, Confidence::Medium, reason),
            ]
        }
        RarityClass::Ultra => vec![Claim::present(
            Finish::Holo,
            rule,
            Confidence::Medium,
            "Black Bolt / White Flare: ultra rares are holo only",
        )],
        RarityClass::Promo | RarityClass::Other => vec![],
    }
}

/// Shared defaults for the EX era through Sword & Shield: a reverse slot
/// exists, holo rares have no normal printing, non-holo rares have no holo.
fn modern_default(era: Era, rarity: &str) -> Vec<Claim> {
    let rule = Provenance::Rule;
    let name = era.to_name();
    match rarity::classify(rarity) {
        RarityClass::CommonUncommon => {
            let reason = format!("{name} era: commons and uncommons print normal and reverse holo");
            vec![
                Claim::present(Finish::Normal, rule, Confidence::Medium, reason.clone()),
                Claim::present(Finish::ReverseHolo, rule, Confidence::Medium, reason),
            ]
        }
        RarityClass::Rare => {
            let reason = format!("{name} era: non-holo rares print normal and reverse holo");
            vec![
                Claim::present(Finish::Normal, rule, Confidence::Medium, reason.clone()),
                Claim::present(Finish::ReverseHolo, rule, Confidence::Medium, reason),
            ]
        }
        RarityClass::RareHolo => {
            let reason = format!("{name} era: holo rares print holo and reverse holo");
            vec![
                Claim::present(Finish::Holo, rule, Confidence::Medium, reason.clone()),
                Claim::present(Finish::ReverseHolo, rule, Confidence::Medium, reason),
            ]
        }
        RarityClass::Ultra => {
            let reason = format!("{name} era: ultra rares are holo only");
            vec![Claim::present(Finish::Holo, rule, Confidence::Medium, reason)]
        }
        RarityClass::Promo | RarityClass::Other => vec![],
    }
}

fn first_edition_eligible(set_series: &str) -> bool {
    FIRST_EDITION_SERIES
        .iter()
        .any(|marker| set_series.contains(marker))
}

fn wotc(card: &CardRecord, rarity: &str) -> Vec<Claim> {
    let rule = Provenance::Rule;
    let eligible = first_edition_eligible(&card.set_series);
    let has_reverse_slot = card.released_at.is_some_and(|d| d >= reverse_holo_debut());
    let mut claims = Vec::new();

    match rarity::classify(rarity) {
        RarityClass::CommonUncommon => {
            let reason = "WotC era: commons and uncommons print normal copies";
            claims.push(Claim::present(
                Finish::Normal,
                rule,
                Confidence::Medium,
                reason,
            ));
            if has_reverse_slot {
                claims.push(Claim::present(
                    Finish::ReverseHolo,
                    rule,
                    Confidence::Medium,
                    "WotC era: commons and uncommons print reverse holo from 2002-05-24 onward",
                ));
            }
            if eligible {
                claims.push(Claim::present(
                    Finish::FirstEditionNormal,
                    rule,
                    Confidence::Medium,
                    "WotC era: first edition printings ran alongside unlimited",
                ));
            }
        }
        RarityClass::Rare => {
            claims.push(Claim::present(
                Finish::Normal,
                rule,
                Confidence::Medium,
                "WotC era: non-holo rares print normal without a holo slot",
            ));
            if eligible {
                claims.push(Claim::present(
                    Finish::FirstEditionNormal,
                    rule,
                    Confidence::Medium,
                    "WotC era: first edition printings ran alongside unlimited",
                ));
            }
        }
        RarityClass::RareHolo => {
            claims.push(Claim::present(
                Finish::Holo,
                rule,
                Confidence::Medium,
                "WotC era: holo rares print holo without a normal version",
            ));
            if eligible {
                claims.push(Claim::present(
                    Finish::FirstEditionHolo,
                    rule,
                    Confidence::Medium,
                    "WotC era: first edition printings ran alongside unlimited",
                ));
            }
        }
        RarityClass::Ultra => {
            claims.push(Claim::present(
                Finish::Holo,
                rule,
                Confidence::Medium,
                "WotC era: ultra rares are holo only",
            ));
            if eligible {
                claims.push(Claim::present(
                    Finish::FirstEditionHolo,
                    rule,
                    Confidence::Medium,
                    "WotC era: first edition printings ran alongside unlimited",
                ));
            }
        }
        RarityClass::Promo | RarityClass::Other => {}
    }

    if !has_reverse_slot {
        claims.push(Claim::absent(
            Finish::ReverseHolo,
            rule,
            Confidence::High,
            "WotC era: reverse holo did not exist before 2002-05-24",
        ));
    }
    claims
}
