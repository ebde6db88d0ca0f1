use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[error("invalid finish")]
pub struct InvalidFinish;

/// A distinct printing treatment of a single card.
///
/// Declaration order is the canonical iteration and serialisation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Finish {
    Normal,
    Holo,
    ReverseHolo,
    FirstEditionNormal,
    FirstEditionHolo,
    PokeballPattern,
    MasterballPattern,
}

impl Finish {
    /// Returns the stable wire code used for serialisation.
    pub fn to_code(&self) -> &'static str {
        match self {
            Finish::Normal => "normal",
            Finish::Holo => "holo",
            Finish::ReverseHolo => "reverse",
            Finish::FirstEditionNormal => "firstEdNormal",
            Finish::FirstEditionHolo => "firstEdHolo",
            Finish::PokeballPattern => "pokeballPattern",
            Finish::MasterballPattern => "masterballPattern",
        }
    }

    pub fn to_name(&self) -> &'static str {
        match self {
            Finish::Normal => "Normal",
            Finish::Holo => "Holo",
            Finish::ReverseHolo => "Reverse Holo",
            Finish::FirstEditionNormal => "1st Edition Normal",
            Finish::FirstEditionHolo => "1st Edition Holo",
            Finish::PokeballPattern => "Poke Ball Pattern",
            Finish::MasterballPattern => "Master Ball Pattern",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            Finish::Normal,
            Finish::Holo,
            Finish::ReverseHolo,
            Finish::FirstEditionNormal,
            Finish::FirstEditionHolo,
            Finish::PokeballPattern,
            Finish::MasterballPattern,
        ]
    }
}

impl TryFrom<&str> for Finish {
    type Error = InvalidFinish;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "normal" => Ok(Finish::Normal),
            "holo" => Ok(Finish::Holo),
            "reverse" => Ok(Finish::ReverseHolo),
            "firstEdNormal" => Ok(Finish::FirstEditionNormal),
            "firstEdHolo" => Ok(Finish::FirstEditionHolo),
            "pokeballPattern" => Ok(Finish::PokeballPattern),
            "masterballPattern" => Ok(Finish::MasterballPattern),
            _ => Err(InvalidFinish),
        }
    }
}

impl TryFrom<String> for Finish {
    type Error = InvalidFinish;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_ref())
    }
}

impl std::fmt::Display for Finish {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_name())
    }
}

impl Serialize for Finish {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_code().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Finish {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Self::try_from(String::deserialize(deserializer)?).map_err(serde::de::Error::custom)
    }
}
