//! CLI parsing and command dispatch.

use std::path::PathBuf;

use clap::Parser;

use crate::{commands, config::Config, error::Result};

/// Parsed command line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "colorset-gen",
    version,
    about = "Convert a colors.xml resource file into Xcode colorset folders"
)]
struct Cli {
    /// Input colors.xml file.
    #[arg(short = 'i', long)]
    input: PathBuf,
    /// Output directory; must already exist.
    #[arg(short = 'o', long)]
    output: PathBuf,
}

/// Run the conversion described by the command line.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::new(&cli.input, &cli.output)?;
    commands::convert::run(&config)
}
