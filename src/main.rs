use anyhow::Context;
use clap::Parser;
use pf_infra::DirsAppDirsAdapter;
use portfolio_lib::bootstrap::{
    load_config_if_present, run_app, tracing::init_tracing_subscriber, wire_dependencies,
    RuntimeConfig,
};
use portfolio_lib::Cli;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = load_config_if_present(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;
    cli.apply_overrides(&mut config);
    let runtime_config = RuntimeConfig::resolve(config, &DirsAppDirsAdapter::from_env());

    init_tracing_subscriber(runtime_config.logs_dir.as_deref())
        .context("Failed to initialize tracing")?;
    tracing::info!(
        data = %runtime_config.data_path.display(),
        out = %runtime_config.output_dir.display(),
        settings = %runtime_config.settings_path.display(),
        "portfolio starting"
    );

    let deps = wire_dependencies(&runtime_config);
    run_app(
        &runtime_config,
        deps,
        cli.prefers_dark,
        BufReader::new(tokio::io::stdin()),
    )
    .await
}
