use async_trait::async_trait;
use ferrous_revip_domain::DomainError;

#[async_trait]
pub trait DomainSink: Send + Sync {
    /// Replaces whatever the destination held with `domains`, in order.
    async fn write_domains(&self, domains: &[String]) -> Result<(), DomainError>;

    fn destination(&self) -> String;
}
