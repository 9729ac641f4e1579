//! Sort dbt docs blocks alphabetically within markdown files.

use clap::Parser;
use colored::Colorize;

use docsort_cli::{DocsCli, Pipeline, Result, logging, sort_files};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = DocsCli::parse();
    logging::init()?;

    sort_files(Pipeline::Docs, &cli.filenames, &mut std::io::stdout().lock())?;
    Ok(())
}
