//! Command-line hooks for the dbt docs sorters.
//!
//! Two binaries share this library:
//!
//! - `sort-dbt-docs FILE...` sorts `{% docs %}` blocks in markdown files
//! - `sort-dbt-yaml FILE...` sorts dbt model YAML files
//!
//! Each file is read, sorted and written back only if its content changed,
//! with a one-line notice on stdout per rewritten file.

pub mod cli;
pub mod error;
pub mod logging;
pub mod run;

pub use cli::{DocsCli, YamlCli};
pub use error::{CliError, Result};
pub use run::{Pipeline, sort_file, sort_files};
