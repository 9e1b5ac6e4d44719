pub mod hackertarget;
pub mod securitytrails;

mod fetch;

pub use hackertarget::HackerTargetProvider;
pub use securitytrails::SecurityTrailsProvider;

use ferrous_revip_application::ports::ReverseIpProvider;
use ferrous_revip_domain::config::ProviderConfig;
use ferrous_revip_domain::ProviderKind;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Instantiates an adapter for each active provider, all sharing `client`.
pub fn build_providers(
    configs: &[ProviderConfig],
    client: &reqwest::Client,
    timeout: Duration,
) -> Vec<Arc<dyn ReverseIpProvider>> {
    configs
        .iter()
        .map(|config| {
            info!(provider = %config.kind, endpoint = %config.endpoint, "Provider enabled");
            match config.kind {
                ProviderKind::HackerTarget => Arc::new(HackerTargetProvider::new(
                    client.clone(),
                    config.endpoint.clone(),
                    timeout,
                )) as Arc<dyn ReverseIpProvider>,
                ProviderKind::SecurityTrails => Arc::new(SecurityTrailsProvider::new(
                    client.clone(),
                    config.endpoint.clone(),
                    config.api_key.clone().unwrap_or_default(),
                    timeout,
                )),
            }
        })
        .collect()
}
