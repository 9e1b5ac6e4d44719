use clap::Parser;
use ferrous_revip_domain::CliOverrides;
use tracing::{info, warn};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "ferrous-revip")]
#[command(version)]
#[command(about = "Ferrous RevIP - Reverse IP domain discovery across lookup providers")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Newline-delimited list of IP addresses
    #[arg(short = 'i', long, value_name = "FILE")]
    input: Option<String>,

    /// Destination for the sorted domain list
    #[arg(short = 'o', long, value_name = "FILE")]
    output: Option<String>,

    /// Delay before each task launch, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Per-request timeout, in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// SecurityTrails API key
    #[arg(long, env = "SECURITYTRAILS_API_KEY", hide_env_values = true)]
    securitytrails_api_key: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        input_file: cli.input,
        output_file: cli.output,
        request_timeout_secs: cli.timeout,
        delay_ms: cli.delay_ms,
        securitytrails_api_key: cli.securitytrails_api_key,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Ferrous RevIP v{}", env!("CARGO_PKG_VERSION"));

    let services = di::LookupServices::new(&config)?;

    // Gather
    let targets = services.load_targets.execute().await?;
    let report = services.run_lookup.execute(&targets).await;

    if report.failed_tasks > 0 {
        warn!(
            failed_tasks = report.failed_tasks,
            "Some lookup tasks did not complete"
        );
    }

    // Persist
    services.export_domains.execute(&report.domains).await?;

    info!(
        targets = report.targets,
        targets_with_domains = report.targets_with_domains,
        "Done"
    );
    Ok(())
}
