//! Error types for docsort-core

/// Result type for docsort-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while normalizing a YAML document.
///
/// The docs-block pipeline has no error path; malformed markers are dropped.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to parse YAML content: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Expected a mapping at the document root, found {found}")]
    NotAMapping { found: &'static str },

    #[error("Expected `{collection}` to be a sequence, found {found}")]
    NotASequence {
        collection: String,
        found: &'static str,
    },

    #[error("Entry {index} of `{collection}` is not a mapping")]
    NotAnEntry { collection: String, index: usize },

    #[error("Entry {index} of `{collection}` has no `{field}` field")]
    MissingSortKey {
        collection: String,
        index: usize,
        field: String,
    },

    #[error("Field `{field}` of entry {index} in `{collection}` is {found}, which has no order")]
    UnorderableSortKey {
        collection: String,
        index: usize,
        field: String,
        found: &'static str,
    },

    #[error(
        "Field `{field}` of entry {index} in `{collection}` is {found}, but earlier entries use {expected}"
    )]
    MixedSortKeys {
        collection: String,
        index: usize,
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Top-level key must be a string, found {found}")]
    NonStringKey { found: &'static str },
}

/// Short description of a YAML value's kind, for error messages.
pub(crate) fn kind_of(value: &serde_yaml::Value) -> &'static str {
    use serde_yaml::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
