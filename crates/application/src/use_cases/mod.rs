pub mod lookup;

// Re-export use cases
pub use lookup::{
    AggregateIpUseCase, ExportDomainsUseCase, LoadTargetsUseCase, LookupReport,
    RunReverseLookupUseCase,
};
