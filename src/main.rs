use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;

use config::Config;

fn init_logging(level: &str) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();

    let config = Config::load()?;
    init_logging(&config.log_level);
    tracing::debug!(?config, "loaded config");

    let output = args.output.unwrap_or(config.output);
    cli::run(args.command, &config, output)?;

    Ok(())
}
