//! RustBMI - Body Composition Calculator
//!
//! Main entry point for the application.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting RustBMI v{}", env!("CARGO_PKG_VERSION"));

    let cli = app::Cli::parse();
    app::run(cli)
}
