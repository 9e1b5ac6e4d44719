//! Ferrous RevIP Domain Layer
pub mod candidate;
pub mod config;
pub mod errors;
pub mod provider;
pub mod target;

pub use candidate::normalize_candidates;
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use provider::{ProviderError, ProviderKind, ProviderLookup};
pub use target::{parse_target_list, TargetIp};
