pub mod pacing;
pub mod unique_domain_set;

pub use pacing::{pacer_from_config, FixedDelayPacer, NoopPacer, TokenBucketPacer};
pub use unique_domain_set::UniqueDomainSet;
