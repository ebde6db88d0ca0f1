use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize};

use crate::domain::variant::models::{
    confidence::Confidence, finish::Finish, provenance::Provenance,
};

/// One conclusion about one finish.
///
/// `source` and `confidence` are both present whenever `exists` is true;
/// for an absent finish they are optional and record, when set, which layer
/// concluded the absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantFlag {
    pub exists: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Provenance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,
}

impl VariantFlag {
    /// The default conclusion: the finish does not exist.
    pub fn absent() -> Self {
        Self {
            exists: false,
            source: None,
            confidence: None,
        }
    }

    /// An absence concluded by a specific layer (overrides, custom variants).
    pub fn absent_with(source: Provenance, confidence: Confidence) -> Self {
        Self {
            exists: false,
            source: Some(source),
            confidence: Some(confidence),
        }
    }

    pub fn present(source: Provenance, confidence: Confidence) -> Self {
        Self {
            exists: true,
            source: Some(source),
            confidence: Some(confidence),
        }
    }
}

impl Default for VariantFlag {
    fn default() -> Self {
        Self::absent()
    }
}

/// The full variant map: one [`VariantFlag`] for every [`Finish`].
///
/// All seven keys are always present; the engine never omits a finish, it
/// sets `exists: false`. Serialises as an object keyed by finish wire codes.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantMap(BTreeMap<Finish, VariantFlag>);

impl VariantMap {
    pub fn get(&self, finish: Finish) -> VariantFlag {
        self.0.get(&finish).copied().unwrap_or_default()
    }

    pub fn set(&mut self, finish: Finish, flag: VariantFlag) {
        self.0.insert(finish, flag);
    }

    /// Iterates finishes in canonical declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Finish, VariantFlag)> + '_ {
        self.0.iter().map(|(finish, flag)| (*finish, *flag))
    }

    /// Finishes that exist, in canonical order.
    pub fn existing(&self) -> Vec<Finish> {
        self.iter()
            .filter(|(_, flag)| flag.exists)
            .map(|(finish, _)| finish)
            .collect()
    }
}

impl Default for VariantMap {
    fn default() -> Self {
        Self(
            Finish::all()
                .into_iter()
                .map(|finish| (finish, VariantFlag::absent()))
                .collect(),
        )
    }
}

impl Serialize for VariantMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (finish, flag) in &self.0 {
            map.serialize_entry(finish.to_code(), flag)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for VariantMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entries = BTreeMap::<Finish, VariantFlag>::deserialize(deserializer)?;
        let mut map = VariantMap::default();
        for (finish, flag) in entries {
            map.set(finish, flag);
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_map_has_all_seven_keys_absent() {
        let map = VariantMap::default();
        assert_eq!(map.iter().count(), 7);
        for (_, flag) in map.iter() {
            assert!(!flag.exists);
            assert!(flag.source.is_none());
            assert!(flag.confidence.is_none());
        }
    }

    #[test]
    fn test_map_serializes_with_finish_codes_as_keys() {
        let mut map = VariantMap::default();
        map.set(
            Finish::Holo,
            VariantFlag::present(Provenance::Api, Confidence::High),
        );
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json["holo"]["exists"], true);
        assert_eq!(json["holo"]["source"], "api");
        assert_eq!(json["holo"]["confidence"], "high");
        assert_eq!(json["normal"]["exists"], false);
        assert!(json["normal"].get("source").is_none());
    }

    #[test]
    fn test_map_round_trips_through_json() {
        let mut map = VariantMap::default();
        map.set(
            Finish::ReverseHolo,
            VariantFlag::present(Provenance::Rule, Confidence::Medium),
        );
        map.set(
            Finish::Normal,
            VariantFlag::absent_with(Provenance::Override, Confidence::High),
        );
        let json = serde_json::to_string(&map).unwrap();
        let back: VariantMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}
