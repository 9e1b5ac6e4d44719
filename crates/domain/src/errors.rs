use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Failed to read target list {path}: {reason}")]
    InputRead { path: String, reason: String },

    #[error("Failed to write results to {path}: {reason}")]
    OutputWrite { path: String, reason: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("No reverse IP providers are configured")]
    NoProviders,

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
