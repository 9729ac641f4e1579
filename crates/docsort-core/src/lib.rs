//! Ordering normalization for dbt documentation files.
//!
//! Two pure pipelines live here, both of which take file content in and hand
//! back a [`SortOutcome`] telling the caller whether anything moved:
//!
//! ## 1. Docs blocks (markdown)
//!
//! ```text
//! {% docs column_name %}
//! Description of column.
//! {% enddocs %}
//! ```
//!
//! Blocks are extracted by [`block`], ordered by [`order`] and rebuilt by
//! [`render`]. Text outside well-formed blocks is not carried over.
//!
//! ## 2. Model YAML files
//!
//! Plain configuration keys come first in alphabetical order, followed by
//! `sources` and `models`, each sorted by entry `name` (see [`config`]).
//!
//! Reading, writing and reporting are left to the caller.

pub mod block;
pub mod config;
pub mod detect;
pub mod docs;
pub mod error;
pub mod order;
pub mod render;

pub use block::{BlockScanner, DocBlock, ScannedBlock, extract_blocks};
pub use config::{ConfigLayout, sort_config, sort_config_text};
pub use detect::{SortOutcome, detect_change};
pub use docs::{DocsOptions, sort_docs};
pub use error::{Error, Result};
pub use order::{CaseSensitivity, sort_blocks};
pub use render::{render_block, render_blocks};
