use ferrous_revip_domain::config::LookupConfig;
use ferrous_revip_domain::DomainError;
use tracing::debug;

/// Builds the one HTTP session shared by every provider for a run.
///
/// The client-level timeout bounds each request end to end, so no provider
/// call can block a run indefinitely.
pub fn build_http_client(config: &LookupConfig) -> Result<reqwest::Client, DomainError> {
    let timeout = config.request_timeout();

    debug!(
        timeout_secs = config.request_timeout_secs,
        user_agent = %config.user_agent,
        "Building shared HTTP client"
    );

    reqwest::Client::builder()
        .use_rustls_tls()
        .user_agent(config.user_agent.as_str())
        .timeout(timeout)
        .connect_timeout(timeout)
        .pool_max_idle_per_host(8)
        .build()
        .map_err(|e| DomainError::HttpClient(e.to_string()))
}
