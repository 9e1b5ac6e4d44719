use crate::ports::TargetSource;
use ferrous_revip_domain::{DomainError, TargetIp};
use std::sync::Arc;
use tracing::info;

pub struct LoadTargetsUseCase {
    source: Arc<dyn TargetSource>,
}

impl LoadTargetsUseCase {
    pub fn new(source: Arc<dyn TargetSource>) -> Self {
        Self { source }
    }

    pub async fn execute(&self) -> Result<Vec<TargetIp>, DomainError> {
        let targets = self.source.read_targets().await?;
        info!(
            source = %self.source.describe(),
            count = targets.len(),
            "Loaded target IPs"
        );
        Ok(targets)
    }
}
