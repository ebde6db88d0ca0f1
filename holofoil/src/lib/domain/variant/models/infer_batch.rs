use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::variant::models::{
    card::CardRecord, channel::ProductChannel, variant_result::VariantResult,
};

/// Caller-supplied cooperative cancellation flag.
///
/// The batch driver checks it between per-card invocations; an in-flight
/// inference always completes, so cancellation yields a clean partial result.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Request for a batch inference over a sequence of card records.
#[derive(Debug, Clone, Default)]
pub struct BatchInferVariants {
    pub cards: Vec<CardRecord>,
    /// Optional per-card channel lists keyed by card identifier; cards
    /// without an entry use the `[Booster]` default.
    pub channels: BTreeMap<String, Vec<ProductChannel>>,
    pub cancellation: Option<CancellationToken>,
}

impl BatchInferVariants {
    pub fn new(cards: Vec<CardRecord>) -> Self {
        Self {
            cards,
            ..Default::default()
        }
    }

    pub fn with_channels(mut self, channels: BTreeMap<String, Vec<ProductChannel>>) -> Self {
        self.channels = channels;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }
}

/// One per-card failure inside a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchError {
    pub card_id: String,
    pub message: String,
}

/// Outcome of a batch run. The batch itself never fails.
///
/// `results` iterates in input order; `get` looks a result up by card
/// identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchOutcome {
    pub results: Vec<(String, VariantResult)>,
    pub errors: Vec<BatchError>,
}

impl BatchOutcome {
    pub fn get(&self, card_id: &str) -> Option<&VariantResult> {
        self.results
            .iter()
            .find(|(id, _)| id == card_id)
            .map(|(_, result)| result)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
