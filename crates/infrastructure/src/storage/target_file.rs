use async_trait::async_trait;
use ferrous_revip_application::ports::TargetSource;
use ferrous_revip_domain::{parse_target_list, DomainError, TargetIp};
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

/// Newline-delimited IP list on disk, one address per non-empty line.
pub struct FileTargetSource {
    path: PathBuf,
}

impl FileTargetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TargetSource for FileTargetSource {
    async fn read_targets(&self) -> Result<Vec<TargetIp>, DomainError> {
        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| DomainError::InputRead {
                path: self.describe(),
                reason: e.to_string(),
            })?;

        let targets = parse_target_list(&content);
        debug!(path = %self.path.display(), count = targets.len(), "Target list parsed");
        Ok(targets)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
