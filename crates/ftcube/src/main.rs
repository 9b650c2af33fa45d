//! Terminal face-turning cube simulator.
//!
//! Parses scrambles in standard face-turn notation, applies them to a cube,
//! and prints the resulting states as a colored flat net.

use clap::Parser;

mod cli;
mod net;

fn main() -> eyre::Result<()> {
    color_eyre::install().expect("error initializing panic handler");
    env_logger::builder().init();

    let args = cli::Args::parse();
    cli::exec(args.subcommand)
}
