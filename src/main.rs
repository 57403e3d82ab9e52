//! podctl - interactive pod shell picker for Kubernetes

use anyhow::Result;
use clap::Parser;
use podctl::cli::Cli;
use podctl::commands::run_shell;
use podctl::error::PodctlError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing
    setup_tracing(cli.verbose);

    // Handle color settings
    if cli.no_color {
        owo_colors::set_override(false);
    }

    if let Err(e) = run_shell(&cli.shell).await {
        match &e {
            PodctlError::Cancelled => println!("Process was cancelled by the user."),
            other => eprintln!("Error: {}", other),
        }
        std::process::exit(e.exit_code());
    }

    Ok(())
}

fn setup_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
