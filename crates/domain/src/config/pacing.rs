use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How task launches are spaced out.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PacingStrategy {
    /// Sleep `delay_ms` before every launch, including the first.
    #[default]
    Fixed,

    /// Allow `burst` launches back to back, then one per `delay_ms`.
    TokenBucket,

    /// Launch everything immediately.
    None,
}

impl PacingStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::TokenBucket => "token_bucket",
            Self::None => "none",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PacingConfig {
    #[serde(default)]
    pub strategy: PacingStrategy,

    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    #[serde(default = "default_burst")]
    pub burst: u32,
}

impl PacingConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            strategy: PacingStrategy::default(),
            delay_ms: default_delay_ms(),
            burst: default_burst(),
        }
    }
}

fn default_delay_ms() -> u64 {
    1000
}

fn default_burst() -> u32 {
    1
}
