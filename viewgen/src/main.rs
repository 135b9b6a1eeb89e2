use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use viewgen::cli::Cli;
use viewgen::{Result, commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG takes precedence over -v/-q
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| cli.log_filter().into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Parsed command line: {:?}", cli.command);

    commands::run(&cli).inspect_err(|e| error!("{}", e))
}
