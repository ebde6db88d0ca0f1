//! The era-detection cascade.
//!
//! Resolution order: set-identifier prefix, then series-name substring, then
//! release-date bracket. The first stage that matches wins; a card that
//! exhausts the cascade has no era and the pipeline reports `UnknownEra`
//! rather than guessing.

use chrono::NaiveDate;

use crate::domain::variant::models::era::Era;

/// Set-identifier prefixes, consulted in declaration order.
const SET_ID_PREFIXES: &[(&str, Era)] = &[
    ("zsv", Era::ScarletViolet),
    ("rsv", Era::ScarletViolet),
    ("sv", Era::ScarletViolet),
    ("swsh", Era::SwordShield),
    ("sm", Era::SunMoon),
    ("xy", Era::Xy),
    ("bw", Era::BlackWhite),
    ("hgss", Era::HeartGoldSoulSilver),
    ("col", Era::HeartGoldSoulSilver),
    ("dp", Era::DiamondPearl),
    ("pl", Era::DiamondPearl),
    ("ex", Era::Ex),
    ("base", Era::WotC),
    ("gym", Era::WotC),
    ("neo", Era::WotC),
    ("ecard", Era::WotC),
    ("si", Era::WotC),
];

/// Series-name markers, consulted in declaration order. The WotC entries
/// sit before the bare "EX" marker so that "Expedition"-style names can
/// never be shadowed.
const SERIES_MARKERS: &[(&str, Era)] = &[
    ("Scarlet", Era::ScarletViolet),
    ("Sword", Era::SwordShield),
    ("Sun", Era::SunMoon),
    ("XY", Era::Xy),
    ("Black & White", Era::BlackWhite),
    ("HeartGold", Era::HeartGoldSoulSilver),
    ("Call of Legends", Era::HeartGoldSoulSilver),
    ("Platinum", Era::DiamondPearl),
    ("Diamond", Era::DiamondPearl),
    ("Base", Era::WotC),
    ("Jungle", Era::WotC),
    ("Fossil", Era::WotC),
    ("Rocket", Era::WotC),
    ("Gym", Era::WotC),
    ("Neo", Era::WotC),
    ("Legendary Collection", Era::WotC),
    ("Expedition", Era::WotC),
    ("Aquapolis", Era::WotC),
    ("Skyridge", Era::WotC),
    ("E-Card", Era::WotC),
    ("Ruby", Era::Ex),
    ("EX", Era::Ex),
];

/// Maps a set's identifier, series name, and release date to exactly one
/// era. Returns `None` only when every cascade stage fails.
pub fn detect(set_id: &str, set_series: &str, released_at: Option<NaiveDate>) -> Option<Era> {
    by_set_id(set_id)
        .or_else(|| by_series(set_series))
        .or_else(|| released_at.map(by_release_date))
}

fn by_set_id(set_id: &str) -> Option<Era> {
    SET_ID_PREFIXES
        .iter()
        .find(|(prefix, _)| set_id.starts_with(prefix))
        .map(|(_, era)| *era)
}

fn by_series(set_series: &str) -> Option<Era> {
    SERIES_MARKERS
        .iter()
        .find(|(marker, _)| set_series.contains(marker))
        .map(|(_, era)| *era)
}

fn by_release_date(released_at: NaiveDate) -> Era {
    let brackets = [
        (NaiveDate::from_ymd_opt(2003, 7, 18), Era::WotC),
        (NaiveDate::from_ymd_opt(2007, 1, 1), Era::Ex),
        (NaiveDate::from_ymd_opt(2010, 1, 1), Era::DiamondPearl),
        (NaiveDate::from_ymd_opt(2011, 1, 1), Era::HeartGoldSoulSilver),
        (NaiveDate::from_ymd_opt(2014, 1, 1), Era::BlackWhite),
        (NaiveDate::from_ymd_opt(2017, 1, 1), Era::Xy),
        (NaiveDate::from_ymd_opt(2020, 1, 1), Era::SunMoon),
        (NaiveDate::from_ymd_opt(2023, 1, 1), Era::SwordShield),
    ];
    for (upper, era) in brackets {
        match upper {
            Some(upper) if released_at < upper => return era,
            _ => continue,
        }
    }
    Era::ScarletViolet
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    // ====================
    //  set id prefixes
    // ====================

    #[test]
    fn test_detect_by_set_id_prefix() {
        assert_eq!(detect("sv8pt5", "", None), Some(Era::ScarletViolet));
        assert_eq!(detect("zsv10pt5", "", None), Some(Era::ScarletViolet));
        assert_eq!(detect("swsh4", "", None), Some(Era::SwordShield));
        assert_eq!(detect("sm115", "", None), Some(Era::SunMoon));
        assert_eq!(detect("xy7", "", None), Some(Era::Xy));
        assert_eq!(detect("bw9", "", None), Some(Era::BlackWhite));
        assert_eq!(detect("hgss1", "", None), Some(Era::HeartGoldSoulSilver));
        assert_eq!(detect("dp3", "", None), Some(Era::DiamondPearl));
        assert_eq!(detect("ex12", "", None), Some(Era::Ex));
        assert_eq!(detect("base4", "", None), Some(Era::WotC));
        assert_eq!(detect("neo2", "", None), Some(Era::WotC));
    }

    // ===============
    //  series names
    // ===============

    #[test]
    fn test_detect_by_series_substring() {
        assert_eq!(
            detect("cel25", "Sword & Shield", None),
            Some(Era::SwordShield)
        );
        assert_eq!(detect("q1", "Scarlet & Violet", None), Some(Era::ScarletViolet));
        assert_eq!(detect("q2", "HeartGold & SoulSilver", None), Some(Era::HeartGoldSoulSilver));
        assert_eq!(detect("q3", "Diamond & Pearl", None), Some(Era::DiamondPearl));
        assert_eq!(detect("q4", "Expedition Base Set", None), Some(Era::WotC));
        assert_eq!(detect("q5", "EX Ruby & Sapphire", None), Some(Era::Ex));
    }

    // ===============
    //  date brackets
    // ===============

    #[test]
    fn test_detect_by_release_date_brackets() {
        assert_eq!(detect("q", "", date(1999, 1, 9)), Some(Era::WotC));
        assert_eq!(detect("q", "", date(2003, 7, 17)), Some(Era::WotC));
        assert_eq!(detect("q", "", date(2003, 7, 18)), Some(Era::Ex));
        assert_eq!(detect("q", "", date(2008, 6, 1)), Some(Era::DiamondPearl));
        assert_eq!(detect("q", "", date(2010, 6, 1)), Some(Era::HeartGoldSoulSilver));
        assert_eq!(detect("q", "", date(2012, 6, 1)), Some(Era::BlackWhite));
        assert_eq!(detect("q", "", date(2015, 6, 1)), Some(Era::Xy));
        assert_eq!(detect("q", "", date(2019, 11, 1)), Some(Era::SunMoon));
        assert_eq!(detect("q", "", date(2020, 11, 13)), Some(Era::SwordShield));
        assert_eq!(detect("q", "", date(2023, 3, 31)), Some(Era::ScarletViolet));
        assert_eq!(detect("q", "", date(2026, 1, 1)), Some(Era::ScarletViolet));
    }

    // ==================
    //  cascade ordering
    // ==================

    #[test]
    fn test_detect_prefers_set_id_over_series_over_date() {
        // All three stages would match, each naming a different era.
        assert_eq!(
            detect("swsh4", "Scarlet & Violet", date(1999, 1, 9)),
            Some(Era::SwordShield)
        );
        // No id match: series wins over date.
        assert_eq!(
            detect("q", "Scarlet & Violet", date(1999, 1, 9)),
            Some(Era::ScarletViolet)
        );
    }

    #[test]
    fn test_detect_exhausted_cascade_is_none() {
        assert_eq!(detect("q1", "Mystery Series", None), None);
    }
}
