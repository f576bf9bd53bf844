//! hwmon: hardware monitor graphs for the system tray.
//!
//! Run with:  `RUST_LOG=info hwmon --cpu --mem --net`

use anyhow::Result;
use clap::Parser;
use hwmon_config::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Structured logging; RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("hwmon v{} starting", env!("CARGO_PKG_VERSION"));

    let settings = hwmon_config::from_cli(&cli)?;
    hwmon_tray::run(settings).map_err(Into::into)
}
