use thiserror::Error;

use crate::domain::variant::models::{
    card::{CardRecord, InvalidCardRecord},
    channel::ProductChannel,
};

/// Request for a single-card inference.
///
/// Channels default to `[Booster]` when the caller supplies none.
#[derive(Debug, Clone, PartialEq)]
pub struct InferVariants {
    pub card: CardRecord,
    pub channels: Vec<ProductChannel>,
}

impl InferVariants {
    pub fn new(card: CardRecord) -> Self {
        Self {
            card,
            channels: vec![ProductChannel::Booster],
        }
    }

    pub fn with_channels(card: CardRecord, channels: Vec<ProductChannel>) -> Self {
        if channels.is_empty() {
            Self::new(card)
        } else {
            Self { card, channels }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InferVariantsError {
    #[error(transparent)]
    InvalidCard(#[from] InvalidCardRecord),
    #[error("could not determine era for set {set_id}")]
    UnknownEra { set_id: String },
}
