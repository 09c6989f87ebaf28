//! CLI entry point for the quadrant level compiler

use clap::Parser;
use quadmaze::io::cli::{Cli, LevelProcessor};

fn main() -> quadmaze::Result<()> {
    let cli = Cli::parse();
    cli.init_logging();
    LevelProcessor::new(cli).process().map(|_| ())
}
