use async_trait::async_trait;
use ferrous_revip_domain::{ProviderLookup, TargetIp};

/// One external reverse IP lookup service.
///
/// Implementations perform a single request per call, without retries, and
/// report every failure as [`ProviderLookup::Failed`] instead of an error.
#[async_trait]
pub trait ReverseIpProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn lookup(&self, ip: &TargetIp) -> ProviderLookup;
}
