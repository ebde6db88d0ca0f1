use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[error("invalid provenance")]
pub struct InvalidProvenance;

/// Which rule layer concluded a variant flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provenance {
    /// An explicit external pricing signal.
    Api,
    /// An era default.
    Rule,
    /// A product-channel, set-specific, or per-card override.
    Override,
}

impl Provenance {
    pub fn to_code(&self) -> &'static str {
        match self {
            Provenance::Api => "api",
            Provenance::Rule => "rule",
            Provenance::Override => "override",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![Provenance::Api, Provenance::Rule, Provenance::Override]
    }
}

impl TryFrom<&str> for Provenance {
    type Error = InvalidProvenance;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "api" => Ok(Provenance::Api),
            "rule" => Ok(Provenance::Rule),
            "override" => Ok(Provenance::Override),
            _ => Err(InvalidProvenance),
        }
    }
}

impl TryFrom<String> for Provenance {
    type Error = InvalidProvenance;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_ref())
    }
}

impl std::fmt::Display for Provenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_code())
    }
}

impl Serialize for Provenance {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_code().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Provenance {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Self::try_from(String::deserialize(deserializer)?).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provenance_codes_round_trip() {
        for provenance in Provenance::all() {
            assert_eq!(
                Provenance::try_from(provenance.to_code()).unwrap(),
                provenance
            );
        }
    }
}
