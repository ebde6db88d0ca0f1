use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[error("invalid era")]
pub struct InvalidEra;

/// A named historical period of the card-game catalogue.
///
/// Each era carries its own baseline printing conventions; see
/// [`rules::era`](crate::domain::variant::rules::era).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Era {
    WotC,
    Ex,
    DiamondPearl,
    HeartGoldSoulSilver,
    BlackWhite,
    Xy,
    SunMoon,
    SwordShield,
    ScarletViolet,
}

impl Era {
    /// Returns the stable wire form used for serialisation.
    pub fn to_code(&self) -> &'static str {
        match self {
            Era::WotC => "WotC",
            Era::Ex => "EX",
            Era::DiamondPearl => "DP",
            Era::HeartGoldSoulSilver => "HGSS",
            Era::BlackWhite => "Black & White",
            Era::Xy => "XY",
            Era::SunMoon => "Sun & Moon",
            Era::SwordShield => "Sword & Shield",
            Era::ScarletViolet => "Scarlet & Violet",
        }
    }

    pub fn to_name(&self) -> &'static str {
        match self {
            Era::WotC => "WotC",
            Era::Ex => "EX",
            Era::DiamondPearl => "Diamond & Pearl",
            Era::HeartGoldSoulSilver => "HeartGold & SoulSilver",
            Era::BlackWhite => "Black & White",
            Era::Xy => "XY",
            Era::SunMoon => "Sun & Moon",
            Era::SwordShield => "Sword & Shield",
            Era::ScarletViolet => "Scarlet & Violet",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            Era::WotC,
            Era::Ex,
            Era::DiamondPearl,
            Era::HeartGoldSoulSilver,
            Era::BlackWhite,
            Era::Xy,
            Era::SunMoon,
            Era::SwordShield,
            Era::ScarletViolet,
        ]
    }
}

impl TryFrom<&str> for Era {
    type Error = InvalidEra;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "WotC" => Ok(Era::WotC),
            "EX" => Ok(Era::Ex),
            "DP" => Ok(Era::DiamondPearl),
            "HGSS" => Ok(Era::HeartGoldSoulSilver),
            "Black & White" => Ok(Era::BlackWhite),
            "XY" => Ok(Era::Xy),
            "Sun & Moon" => Ok(Era::SunMoon),
            "Sword & Shield" => Ok(Era::SwordShield),
            "Scarlet & Violet" => Ok(Era::ScarletViolet),
            _ => Err(InvalidEra),
        }
    }
}

impl TryFrom<String> for Era {
    type Error = InvalidEra;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_ref())
    }
}

impl std::fmt::Display for Era {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_code())
    }
}

impl Serialize for Era {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_code().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Era {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Self::try_from(String::deserialize(deserializer)?).map_err(serde::de::Error::custom)
    }
}
