use serde::{Deserialize, Serialize};

use crate::provider::ProviderKind;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub hackertarget: HackerTargetConfig,

    #[serde(default)]
    pub securitytrails: SecurityTrailsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HackerTargetConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Queried as `<endpoint>?q=<ip>`
    #[serde(default = "default_hackertarget_endpoint")]
    pub endpoint: String,
}

impl Default for HackerTargetConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: default_hackertarget_endpoint(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SecurityTrailsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Queried as `<endpoint>/<ip>/domains`
    #[serde(default = "default_securitytrails_endpoint")]
    pub endpoint: String,

    /// Sent in the `apikey` header. The provider is skipped without one.
    #[serde(default)]
    pub api_key: Option<String>,
}

impl SecurityTrailsConfig {
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}

impl Default for SecurityTrailsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: default_securitytrails_endpoint(),
            api_key: None,
        }
    }
}

/// Resolved identity of one active provider. Immutable for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    pub endpoint: String,
    pub api_key: Option<String>,
}

impl ProvidersConfig {
    /// Providers that will actually be queried, in a stable order.
    pub fn active(&self) -> Vec<ProviderConfig> {
        let mut active = Vec::with_capacity(2);

        if self.hackertarget.enabled {
            active.push(ProviderConfig {
                kind: ProviderKind::HackerTarget,
                endpoint: self.hackertarget.endpoint.clone(),
                api_key: None,
            });
        }

        if self.securitytrails.enabled && self.securitytrails.has_api_key() {
            active.push(ProviderConfig {
                kind: ProviderKind::SecurityTrails,
                endpoint: self.securitytrails.endpoint.clone(),
                api_key: self.securitytrails.api_key.clone(),
            });
        }

        active
    }
}

fn default_true() -> bool {
    true
}

fn default_hackertarget_endpoint() -> String {
    "https://api.hackertarget.com/reverseiplookup/".to_string()
}

fn default_securitytrails_endpoint() -> String {
    "https://api.securitytrails.com/v1/ips".to_string()
}
