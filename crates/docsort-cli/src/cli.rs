//! CLI argument parsing using clap derive

use clap::Parser;
use std::path::PathBuf;

/// Sort dbt docs blocks alphabetically within markdown files
#[derive(Parser, Debug)]
#[command(name = "sort-dbt-docs")]
#[command(author, version, about, long_about = None)]
pub struct DocsCli {
    /// Filename(s) in which the dbt doc blocks will be sorted alphabetically
    pub filenames: Vec<PathBuf>,
}

/// Sort dbt model YAML files into config keys, sources and models
#[derive(Parser, Debug)]
#[command(name = "sort-dbt-yaml")]
#[command(author, version, about, long_about = None)]
pub struct YamlCli {
    /// YAML file(s) whose keys, sources and models will be sorted alphabetically
    pub filenames: Vec<PathBuf>,
}
