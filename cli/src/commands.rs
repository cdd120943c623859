pub mod showroom;

use clap::Parser;

#[derive(Parser)]
#[command(name = "dealer")]
#[command(about = "A guided tour of the Sapphire vehicle showroom.")]
pub struct CommandLine {
    /// Hide prompts, headers and the banner
    #[arg(short, long)]
    pub quiet: bool,
    /// Show debug output (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
