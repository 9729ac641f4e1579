//! Sort dbt model YAML files into config keys, sources and models.

use clap::Parser;
use colored::Colorize;

use docsort_cli::{Pipeline, Result, YamlCli, logging, sort_files};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = YamlCli::parse();
    logging::init()?;

    sort_files(Pipeline::Yaml, &cli.filenames, &mut std::io::stdout().lock())?;
    Ok(())
}
