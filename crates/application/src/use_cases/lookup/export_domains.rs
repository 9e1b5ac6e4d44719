use crate::ports::DomainSink;
use crate::services::UniqueDomainSet;
use ferrous_revip_domain::DomainError;
use std::sync::Arc;
use tracing::info;

/// Persists a gathered set. The set is borrowed so a failed write can be
/// retried without repeating the lookups.
pub struct ExportDomainsUseCase {
    sink: Arc<dyn DomainSink>,
}

impl ExportDomainsUseCase {
    pub fn new(sink: Arc<dyn DomainSink>) -> Self {
        Self { sink }
    }

    pub async fn execute(&self, domains: &UniqueDomainSet) -> Result<usize, DomainError> {
        let sorted = domains.sorted().await;
        self.sink.write_domains(&sorted).await?;

        info!(
            count = sorted.len(),
            destination = %self.sink.destination(),
            "Results saved"
        );
        Ok(sorted.len())
    }
}
