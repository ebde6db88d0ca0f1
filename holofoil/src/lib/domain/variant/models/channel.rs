use serde::{Deserialize, Serialize};

/// A product distribution channel a card was available through.
///
/// Conversion from strings is total: unrecognised channel names are carried
/// as [`ProductChannel::Other`] and ignored by every rule, so upstream data
/// can pass through freely.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProductChannel {
    Booster,
    ThemeDeck,
    StarterDeck,
    BattleDeck,
    Promo,
    PromoTin,
    Tin,
    CollectionBox,
    Other(String),
}

impl ProductChannel {
    pub fn to_name(&self) -> &str {
        match self {
            ProductChannel::Booster => "Booster",
            ProductChannel::ThemeDeck => "Theme Deck",
            ProductChannel::StarterDeck => "Starter Deck",
            ProductChannel::BattleDeck => "Battle Deck",
            ProductChannel::Promo => "Promo",
            ProductChannel::PromoTin => "Promo/Tin",
            ProductChannel::Tin => "Tin",
            ProductChannel::CollectionBox => "Collection Box",
            ProductChannel::Other(name) => name,
        }
    }

    /// Theme, starter, and battle decks: preconstructed products that ship
    /// non-holo copies of holo rares.
    pub fn is_deck_product(&self) -> bool {
        matches!(
            self,
            ProductChannel::ThemeDeck | ProductChannel::StarterDeck | ProductChannel::BattleDeck
        )
    }

    /// Promotional products: promos, tins, and collection boxes.
    pub fn is_promo_product(&self) -> bool {
        matches!(
            self,
            ProductChannel::Promo
                | ProductChannel::PromoTin
                | ProductChannel::Tin
                | ProductChannel::CollectionBox
        )
    }
}

impl From<&str> for ProductChannel {
    fn from(value: &str) -> Self {
        match value {
            "Booster" => ProductChannel::Booster,
            "Theme Deck" => ProductChannel::ThemeDeck,
            "Starter Deck" => ProductChannel::StarterDeck,
            "Battle Deck" => ProductChannel::BattleDeck,
            "Promo" => ProductChannel::Promo,
            "Promo/Tin" => ProductChannel::PromoTin,
            "Tin" => ProductChannel::Tin,
            "Collection Box" => ProductChannel::CollectionBox,
            other => ProductChannel::Other(other.to_string()),
        }
    }
}

impl From<String> for ProductChannel {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl std::fmt::Display for ProductChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_name())
    }
}

impl Serialize for ProductChannel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_name().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ProductChannel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(Self::from(String::deserialize(deserializer)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_known_names_round_trip() {
        for name in [
            "Booster",
            "Theme Deck",
            "Starter Deck",
            "Battle Deck",
            "Promo",
            "Promo/Tin",
            "Tin",
            "Collection Box",
        ] {
            let channel = ProductChannel::from(name);
            assert!(!matches!(channel, ProductChannel::Other(_)));
            assert_eq!(channel.to_name(), name);
        }
    }

    #[test]
    fn test_channel_unknown_name_passes_through() {
        let channel = ProductChannel::from("Graded Slab");
        assert_eq!(channel, ProductChannel::Other("Graded Slab".to_string()));
        assert_eq!(channel.to_name(), "Graded Slab");
        assert!(!channel.is_deck_product());
        assert!(!channel.is_promo_product());
    }

    #[test]
    fn test_channel_product_groupings() {
        assert!(ProductChannel::ThemeDeck.is_deck_product());
        assert!(ProductChannel::BattleDeck.is_deck_product());
        assert!(ProductChannel::Tin.is_promo_product());
        assert!(ProductChannel::CollectionBox.is_promo_product());
        assert!(!ProductChannel::Booster.is_deck_product());
        assert!(!ProductChannel::Booster.is_promo_product());
    }
}
