use super::AggregateIpUseCase;
use crate::ports::Pacer;
use crate::services::UniqueDomainSet;
use ferrous_revip_domain::TargetIp;
use futures::future::join_all;
use std::sync::Arc;
use tracing::{info, warn};

/// Result of one full lookup run.
#[derive(Debug)]
pub struct LookupReport {
    pub domains: UniqueDomainSet,
    pub targets: usize,
    pub targets_with_domains: usize,
    pub failed_tasks: usize,
}

/// Launches one aggregation task per target, paced, and joins them all.
pub struct RunReverseLookupUseCase {
    aggregator: Arc<AggregateIpUseCase>,
    pacer: Arc<dyn Pacer>,
}

impl RunReverseLookupUseCase {
    pub fn new(aggregator: Arc<AggregateIpUseCase>, pacer: Arc<dyn Pacer>) -> Self {
        Self { aggregator, pacer }
    }

    pub async fn execute(&self, targets: &[TargetIp]) -> LookupReport {
        info!(
            targets = targets.len(),
            providers = self.aggregator.provider_count(),
            pacing = self.pacer.strategy(),
            "Starting reverse IP lookup"
        );

        let domains = Arc::new(UniqueDomainSet::new());
        let mut tasks = Vec::with_capacity(targets.len());

        for target in targets {
            self.pacer.wait().await;

            let aggregator = Arc::clone(&self.aggregator);
            let domains = Arc::clone(&domains);
            let ip = target.clone();
            tasks.push(tokio::spawn(async move {
                aggregator.execute(&ip, &domains).await.len()
            }));
        }

        let mut targets_with_domains = 0;
        let mut failed_tasks = 0;
        for result in join_all(tasks).await {
            match result {
                Ok(count) if count > 0 => targets_with_domains += 1,
                Ok(_) => {}
                Err(e) => {
                    warn!(error = %e, "Lookup task panicked");
                    failed_tasks += 1;
                }
            }
        }

        let domains = match Arc::try_unwrap(domains) {
            Ok(set) => set,
            Err(shared) => shared.sorted().await.into_iter().collect(),
        };

        let unique_domains = domains.len().await;
        info!(
            targets = targets.len(),
            targets_with_domains,
            failed_tasks,
            unique_domains,
            "Reverse IP lookup finished"
        );

        LookupReport {
            domains,
            targets: targets.len(),
            targets_with_domains,
            failed_tasks,
        }
    }
}
