use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Plain-text reverse IP endpoint, one domain per line.
    HackerTarget,

    /// JSON endpoint returning `{ "domains": [...] }`, keyed by API header.
    SecurityTrails,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HackerTarget => "hackertarget",
            Self::SecurityTrails => "securitytrails",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a single provider call contributed nothing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("request timed out")]
    Timeout,

    #[error("unexpected HTTP status {0}")]
    HttpStatus(u16),

    #[error("failed to read response body: {0}")]
    Body(String),

    #[error("failed to parse response: {0}")]
    Parse(String),
}

/// Outcome of one (IP, provider) lookup.
///
/// A failed lookup is a value, not an error path: it degrades to an empty
/// contribution when folded into the aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderLookup {
    Found(Vec<String>),
    Failed(ProviderError),
}

impl ProviderLookup {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn error(&self) -> Option<&ProviderError> {
        match self {
            Self::Failed(e) => Some(e),
            Self::Found(_) => None,
        }
    }

    pub fn into_domains(self) -> Vec<String> {
        match self {
            Self::Found(domains) => domains,
            Self::Failed(_) => Vec::new(),
        }
    }
}

impl From<Result<Vec<String>, ProviderError>> for ProviderLookup {
    fn from(result: Result<Vec<String>, ProviderError>) -> Self {
        match result {
            Ok(domains) => Self::Found(domains),
            Err(e) => Self::Failed(e),
        }
    }
}
