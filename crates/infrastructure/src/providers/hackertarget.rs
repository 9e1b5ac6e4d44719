//! HackerTarget reverse IP lookup.
//!
//! ```text
//! GET <endpoint>?q=<ip>
//!
//! example.com
//! www.example.com
//! ```

use super::fetch::fetch_body;
use async_trait::async_trait;
use ferrous_revip_application::ports::ReverseIpProvider;
use ferrous_revip_domain::{normalize_candidates, ProviderKind, ProviderLookup, TargetIp};
use std::time::Duration;
use tracing::debug;

pub struct HackerTargetProvider {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl HackerTargetProvider {
    pub fn new(client: reqwest::Client, endpoint: String, timeout: Duration) -> Self {
        Self {
            client,
            endpoint,
            timeout,
        }
    }

    /// One domain per line; surrounding whitespace and blank lines are dropped.
    pub fn parse_body(body: &str) -> Vec<String> {
        normalize_candidates(body.lines())
    }
}

#[async_trait]
impl ReverseIpProvider for HackerTargetProvider {
    fn name(&self) -> &str {
        ProviderKind::HackerTarget.as_str()
    }

    async fn lookup(&self, ip: &TargetIp) -> ProviderLookup {
        debug!(ip = %ip, endpoint = %self.endpoint, "Querying HackerTarget");

        let request = self
            .client
            .get(&self.endpoint)
            .query(&[("q", ip.as_str())]);

        fetch_body(request, self.timeout)
            .await
            .map(|body| Self::parse_body(&String::from_utf8_lossy(&body)))
            .into()
    }
}
