//! Environment-driven configuration for hosts embedding the engine.

use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;
use tracing::Level;

use crate::domain::variant::services::DEFAULT_CUSTOM_VARIANT_TIMEOUT;

const CUSTOM_VARIANT_TIMEOUT_MS_KEY: &str = "CUSTOM_VARIANT_TIMEOUT_MS";
const RUST_LOG_KEY: &str = "RUST_LOG";

/// Runtime configuration. Every key is optional; the engine works with
/// defaults out of the box.
pub struct Config {
    /// Budget for one custom-variant data-source query.
    pub custom_variant_timeout: Duration,
    pub rust_log: Level,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let custom_variant_timeout = match std::env::var(CUSTOM_VARIANT_TIMEOUT_MS_KEY) {
            Ok(raw) => {
                let millis: u64 = raw
                    .parse()
                    .context("invalid custom variant timeout from env")?;
                Duration::from_millis(millis)
            }
            Err(_) => DEFAULT_CUSTOM_VARIANT_TIMEOUT,
        };
        let rust_log = match std::env::var(RUST_LOG_KEY) {
            Ok(raw) => Level::from_str(&raw).context("invalid log level from env")?,
            Err(_) => Level::INFO,
        };
        Ok(Self {
            custom_variant_timeout,
            rust_log,
        })
    }
}
