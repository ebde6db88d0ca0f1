use thiserror::Error;

/// Failure reported by a custom-variant data source.
///
/// The resolver recovers from every variant of this error locally: it
/// degrades to an empty custom-variant list plus a warning explanation and
/// never retries.
#[derive(Debug, Error)]
pub enum CustomVariantSourceError {
    #[error("custom variant source unavailable: {0}")]
    Unavailable(String),
    #[error("custom variant source timed out")]
    Timeout,
    #[error(transparent)]
    Transport(#[from] anyhow::Error),
}
