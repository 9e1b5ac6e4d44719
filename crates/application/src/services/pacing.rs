use crate::ports::Pacer;
use async_trait::async_trait;
use ferrous_revip_domain::config::{PacingConfig, PacingStrategy};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

pub fn pacer_from_config(config: &PacingConfig) -> Arc<dyn Pacer> {
    match config.strategy {
        PacingStrategy::Fixed => Arc::new(FixedDelayPacer::new(config.delay())),
        PacingStrategy::TokenBucket => {
            Arc::new(TokenBucketPacer::new(config.burst, config.delay()))
        }
        PacingStrategy::None => Arc::new(NoopPacer),
    }
}

/// Sleeps a fixed delay before every launch, the first one included.
#[derive(Debug, Clone)]
pub struct FixedDelayPacer {
    delay: Duration,
}

impl FixedDelayPacer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl Pacer for FixedDelayPacer {
    async fn wait(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }

    fn strategy(&self) -> &'static str {
        PacingStrategy::Fixed.as_str()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPacer;

#[async_trait]
impl Pacer for NoopPacer {
    async fn wait(&self) {}

    fn strategy(&self) -> &'static str {
        PacingStrategy::None.as_str()
    }
}

/// Lets `capacity` launches through back to back, then refills one token
/// every `interval`.
#[derive(Debug)]
pub struct TokenBucketPacer {
    capacity: f64,
    interval: Duration,
    state: Mutex<BucketState>,
}

#[derive(Debug)]
struct BucketState {
    tokens: f64,
    last_refill: Instant,
}

impl TokenBucketPacer {
    pub fn new(capacity: u32, interval: Duration) -> Self {
        let capacity = f64::from(capacity.max(1));
        Self {
            capacity,
            interval,
            state: Mutex::new(BucketState {
                tokens: capacity,
                last_refill: Instant::now(),
            }),
        }
    }
}

#[async_trait]
impl Pacer for TokenBucketPacer {
    async fn wait(&self) {
        if self.interval.is_zero() {
            return;
        }

        loop {
            let shortfall = {
                let mut state = self.state.lock().await;
                let now = Instant::now();
                state.tokens = refill(
                    state.tokens,
                    now.duration_since(state.last_refill),
                    self.interval,
                    self.capacity,
                );
                state.last_refill = now;

                if state.tokens >= 1.0 {
                    state.tokens -= 1.0;
                    return;
                }
                1.0 - state.tokens
            };

            tokio::time::sleep(self.interval.mul_f64(shortfall)).await;
        }
    }

    fn strategy(&self) -> &'static str {
        PacingStrategy::TokenBucket.as_str()
    }
}

fn refill(tokens: f64, elapsed: Duration, interval: Duration, capacity: f64) -> f64 {
    let earned = elapsed.as_secs_f64() / interval.as_secs_f64();
    (tokens + earned).min(capacity)
}
