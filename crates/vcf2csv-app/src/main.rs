use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};
use vcf2csv_app::cli::Cli;
use vcf2csv_app::pipeline::run;
use vcf2csv_core::config::load_config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();

    let config = load_config()?;

    let level = cli.log_level(&config.logging.level);
    if let Ok(filter) = EnvFilter::try_new(level) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter");
        }
    } else {
        tracing::warn!(level = %level, "Invalid log level in config, keeping info");
    }

    tracing::debug!(config = ?config, "Configuration loaded");

    let options = cli.to_options(&config)?;
    let summary = run(&options)?;

    tracing::info!(
        records = summary.records,
        columns = ?summary.columns,
        fixed = %summary.fixed_path.display(),
        output = %summary.output_path.display(),
        "Conversion finished"
    );

    Ok(())
}
