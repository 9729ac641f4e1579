//! Filesystem collaborators for the dbt docs sorters
//!
//! Reads files as UTF-8 text and writes them back atomically.

pub mod error;
pub mod io;

pub use error::{Error, Result};
pub use io::{read_text, write_atomic, write_text};
