pub mod errors;
pub mod logging;
pub mod lookup;
pub mod pacing;
pub mod providers;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use lookup::LookupConfig;
pub use pacing::{PacingConfig, PacingStrategy};
pub use providers::{
    HackerTargetConfig, ProviderConfig, ProvidersConfig, SecurityTrailsConfig,
};
pub use root::{CliOverrides, Config};
