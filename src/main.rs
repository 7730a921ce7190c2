//! CLI entry point for stereogram synthesis

use clap::Parser;
use sirds::io::cli::{Cli, FileProcessor};
use sirds::io::logging::init_logging;

fn main() -> sirds::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
