//! CLI entry point for the lattice puzzle solver

use clap::Parser;
use latticewalk::io::cli::{Cli, FileProcessor};

// Answers are the program's output
#[allow(clippy::print_stdout)]
fn main() -> latticewalk::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    let reports = processor.process()?;

    let labelled = reports.len() > 1;
    for report in &reports {
        for line in report.lines(labelled) {
            println!("{line}");
        }
    }
    Ok(())
}
