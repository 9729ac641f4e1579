//! Change detection between original and normalized content.

/// Result of normalizing one file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOutcome {
    /// The content the file should hold.
    pub content: String,
    /// Whether `content` differs from what was read, i.e. whether a write is needed.
    pub changed: bool,
}

impl SortOutcome {
    /// An outcome that leaves the original content in place.
    pub fn unchanged(original: &str) -> Self {
        Self {
            content: original.to_string(),
            changed: false,
        }
    }
}

/// Compares rendered output against the original byte for byte.
///
/// Any difference, including whitespace only, counts as a change.
///
/// # Example
/// ```
/// use docsort_core::detect_change;
///
/// assert!(!detect_change("same\n", "same\n".to_string()).changed);
/// assert!(detect_change("same\n", "same\n\n".to_string()).changed);
/// ```
pub fn detect_change(original: &str, rendered: String) -> SortOutcome {
    let changed = original != rendered;
    SortOutcome {
        content: rendered,
        changed,
    }
}
