use async_trait::async_trait;
use ferrous_revip_domain::{DomainError, TargetIp};

#[async_trait]
pub trait TargetSource: Send + Sync {
    async fn read_targets(&self) -> Result<Vec<TargetIp>, DomainError>;

    fn describe(&self) -> String;
}
