use crate::ports::ReverseIpProvider;
use crate::services::UniqueDomainSet;
use ferrous_revip_domain::{normalize_candidates, DomainError, TargetIp};
use futures::future::join_all;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Queries every provider for one IP and folds the union into the run's set.
pub struct AggregateIpUseCase {
    providers: Vec<Arc<dyn ReverseIpProvider>>,
}

impl AggregateIpUseCase {
    pub fn new(providers: Vec<Arc<dyn ReverseIpProvider>>) -> Result<Self, DomainError> {
        if providers.is_empty() {
            return Err(DomainError::NoProviders);
        }
        Ok(Self { providers })
    }

    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Returns the per-IP union. Provider failures only shrink it.
    pub async fn execute(&self, ip: &TargetIp, domains: &UniqueDomainSet) -> BTreeSet<String> {
        info!(ip = %ip, "Processing IP");

        let lookups = join_all(self.providers.iter().map(|provider| provider.lookup(ip))).await;

        let mut found = BTreeSet::new();
        for (provider, lookup) in self.providers.iter().zip(lookups) {
            let provider = provider.name();
            if let Some(e) = lookup.error() {
                warn!(ip = %ip, provider, error = %e, "Provider lookup failed");
            }
            let candidates = normalize_candidates(lookup.into_domains());
            debug!(ip = %ip, provider, count = candidates.len(), "Provider returned domains");
            found.extend(candidates);
        }

        let added = domains.merge(found.iter().cloned()).await;
        info!(ip = %ip, count = found.len(), new = added, "IP processed");

        found
    }
}
