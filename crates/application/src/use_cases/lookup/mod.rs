pub mod aggregate_ip;
pub mod export_domains;
pub mod load_targets;
pub mod run_reverse_lookup;

pub use aggregate_ip::AggregateIpUseCase;
pub use export_domains::ExportDomainsUseCase;
pub use load_targets::LoadTargetsUseCase;
pub use run_reverse_lookup::{LookupReport, RunReverseLookupUseCase};
