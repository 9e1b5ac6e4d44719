use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LookupConfig {
    /// Newline-delimited list of IP addresses to look up
    #[serde(default = "default_input_file")]
    pub input_file: String,

    /// Destination for the sorted, deduplicated domain list
    #[serde(default = "default_output_file")]
    pub output_file: String,

    /// Upper bound for a single provider request, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl LookupConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            input_file: default_input_file(),
            output_file: default_output_file(),
            request_timeout_secs: default_request_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_input_file() -> String {
    "iptables.txt".to_string()
}

fn default_output_file() -> String {
    "domains_found.txt".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("Ferrous-RevIP/{}", env!("CARGO_PKG_VERSION"))
}
