use async_trait::async_trait;

/// Gate awaited before each lookup task is launched.
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn wait(&self);

    fn strategy(&self) -> &'static str;
}
