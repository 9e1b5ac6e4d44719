mod domain_sink;
mod pacer;
mod reverse_ip_provider;
mod target_source;

pub use domain_sink::DomainSink;
pub use pacer::Pacer;
pub use reverse_ip_provider::ReverseIpProvider;
pub use target_source::TargetSource;

// Re-export for convenience
pub use ferrous_revip_domain::{ProviderLookup, TargetIp};
