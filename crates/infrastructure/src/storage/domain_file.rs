use async_trait::async_trait;
use ferrous_revip_application::ports::DomainSink;
use ferrous_revip_domain::DomainError;
use std::path::PathBuf;
use tokio::fs;

/// Writes one domain per line, replacing any previous file content.
pub struct FileDomainSink {
    path: PathBuf,
}

impl FileDomainSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn render(domains: &[String]) -> String {
        let capacity = domains.iter().map(|d| d.len() + 1).sum();
        let mut out = String::with_capacity(capacity);
        for domain in domains {
            out.push_str(domain);
            out.push('\n');
        }
        out
    }
}

#[async_trait]
impl DomainSink for FileDomainSink {
    async fn write_domains(&self, domains: &[String]) -> Result<(), DomainError> {
        fs::write(&self.path, Self::render(domains))
            .await
            .map_err(|e| DomainError::OutputWrite {
                path: self.destination(),
                reason: e.to_string(),
            })
    }

    fn destination(&self) -> String {
        self.path.display().to_string()
    }
}
