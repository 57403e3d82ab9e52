//! CLI definition using clap

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "podctl",
    version,
    about = "Interactive pod shell picker for Kubernetes",
    long_about = None,
)]
pub struct Cli {
    /// Shell to run inside the container
    #[arg(long, default_value = "sh")]
    pub shell: String,

    /// Enable verbose logging
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
