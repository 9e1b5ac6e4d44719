//! SecurityTrails reverse IP lookup.
//!
//! ```text
//! GET <endpoint>/<ip>/domains
//! apikey: <key>
//!
//! { "domains": ["example.com", "www.example.com"] }
//! ```

use super::fetch::fetch_body;
use async_trait::async_trait;
use ferrous_revip_application::ports::ReverseIpProvider;
use ferrous_revip_domain::{
    normalize_candidates, ProviderError, ProviderKind, ProviderLookup, TargetIp,
};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const API_KEY_HEADER: &str = "apikey";

#[derive(Debug, Deserialize)]
struct DomainsResponse {
    #[serde(default)]
    domains: Vec<String>,
}

pub struct SecurityTrailsProvider {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    timeout: Duration,
}

impl SecurityTrailsProvider {
    pub fn new(client: reqwest::Client, endpoint: String, api_key: String, timeout: Duration) -> Self {
        Self {
            client,
            endpoint,
            api_key,
            timeout,
        }
    }

    pub fn lookup_url(&self, ip: &TargetIp) -> String {
        format!("{}/{}/domains", self.endpoint.trim_end_matches('/'), ip)
    }

    /// A missing `domains` field reads as an empty list.
    pub fn parse_body(body: &[u8]) -> Result<Vec<String>, ProviderError> {
        let response: DomainsResponse =
            serde_json::from_slice(body).map_err(|e| ProviderError::Parse(e.to_string()))?;
        Ok(normalize_candidates(response.domains))
    }
}

#[async_trait]
impl ReverseIpProvider for SecurityTrailsProvider {
    fn name(&self) -> &str {
        ProviderKind::SecurityTrails.as_str()
    }

    async fn lookup(&self, ip: &TargetIp) -> ProviderLookup {
        let url = self.lookup_url(ip);
        debug!(ip = %ip, url = %url, "Querying SecurityTrails");

        let request = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, self.api_key.as_str());

        match fetch_body(request, self.timeout).await {
            Ok(body) => Self::parse_body(&body).into(),
            Err(e) => ProviderLookup::Failed(e),
        }
    }
}
