mod commands;
mod intake;
mod terminal;

use commands::{CommandLine, showroom};
use dealer_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        quiet: commands.quiet,
        verbose: commands.verbose,
        no_color: commands.no_color,
    };

    logging::init_logging(&cfg);
    print::initialize(&cfg);
    print::banner(cfg.quiet);

    showroom::showroom(&cfg)
}
