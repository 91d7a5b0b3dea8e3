mod config;

use clap::Parser;
use config::{Config, MetricsConfig};
use std::path::PathBuf;
use std::sync::Arc;
use storefront::api::{self, AppState};
use submission::ReviewPipeline;
use submission::submit::Submitter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "reviewd", about = "Storefront product-review submission service")]
struct Cli {
    /// Path to the YAML config file.
    #[arg(long, short)]
    config: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_file(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // The guard must stay alive for the lifetime of the process.
    let _sentry_guard = config.logging.as_ref().map(|logging| {
        sentry::init((
            logging.sentry_dsn.clone(),
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });

    if let Some(metrics_config) = &config.metrics {
        install_statsd(metrics_config)?;
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run(config))
}

fn install_statsd(config: &MetricsConfig) -> anyhow::Result<()> {
    let recorder =
        metrics_exporter_statsd::StatsdBuilder::from(&config.statsd_host, config.statsd_port)
            .build(Some("reviewd"))
            .map_err(|err| anyhow::anyhow!("could not build statsd recorder: {err}"))?;
    metrics::set_global_recorder(recorder)
        .map_err(|err| anyhow::anyhow!("could not install statsd recorder: {err}"))?;
    Ok(())
}

async fn run(config: Config) -> anyhow::Result<()> {
    let credentials = credentials::config::connect(config.credentials.clone());

    let mut submitter = Submitter::new(config.app.api_version.clone());
    if let Some(base) = &config.app.api_base {
        submitter = submitter.with_base_url(base.clone());
    }

    let state = AppState {
        pipeline: Arc::new(ReviewPipeline::new(credentials, submitter)),
        proxy_secret: config.app.proxy_shared_secret.clone(),
    };

    tracing::info!(
        host = %config.listener.host,
        port = config.listener.port,
        "starting reviewd"
    );
    api::serve(&config.listener.host, config.listener.port, state).await?;

    Ok(())
}
