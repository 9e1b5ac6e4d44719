use ferrous_revip_application::ports::Pacer;
use ferrous_revip_application::services::pacer_from_config;
use ferrous_revip_application::use_cases::{
    AggregateIpUseCase, ExportDomainsUseCase, LoadTargetsUseCase, RunReverseLookupUseCase,
};
use ferrous_revip_domain::Config;
use ferrous_revip_infrastructure::http::build_http_client;
use ferrous_revip_infrastructure::providers::build_providers;
use ferrous_revip_infrastructure::storage::{FileDomainSink, FileTargetSource};
use std::sync::Arc;
use tracing::info;

pub struct LookupServices {
    pub load_targets: Arc<LoadTargetsUseCase>,
    pub run_lookup: Arc<RunReverseLookupUseCase>,
    pub export_domains: Arc<ExportDomainsUseCase>,
}

impl LookupServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        info!("Initializing reverse lookup services");

        let client = build_http_client(&config.lookup)?;
        let providers = build_providers(
            &config.providers.active(),
            &client,
            config.lookup.request_timeout(),
        );
        let aggregator = Arc::new(AggregateIpUseCase::new(providers)?);
        let pacer = pacer_from_config(&config.pacing);

        info!(
            pacing = pacer.strategy(),
            delay_ms = config.pacing.delay_ms,
            "Pacing configured"
        );

        Ok(Self {
            load_targets: Arc::new(LoadTargetsUseCase::new(Arc::new(FileTargetSource::new(
                &config.lookup.input_file,
            )))),
            run_lookup: Arc::new(RunReverseLookupUseCase::new(aggregator, pacer)),
            export_domains: Arc::new(ExportDomainsUseCase::new(Arc::new(FileDomainSink::new(
                &config.lookup.output_file,
            )))),
        })
    }
}
