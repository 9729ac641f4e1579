//! The docs-block pipeline: extract, sort, render, compare.

use tracing::debug;

use crate::block::BlockScanner;
use crate::detect::{SortOutcome, detect_change};
use crate::order::{CaseSensitivity, sort_blocks};
use crate::render::render_blocks;

/// Options for [`sort_docs`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocsOptions {
    pub case: CaseSensitivity,
}

/// Sorts the docs blocks of a markdown file.
///
/// The returned content is rebuilt purely from the blocks; anything outside
/// well-formed blocks is dropped.
///
/// # Example
/// ```
/// use docsort_core::{DocsOptions, sort_docs};
///
/// let text = "{% docs b %}\ntext B\n{% enddocs %}\n\n{% docs a %}\ntext A\n{% enddocs %}\n";
/// let outcome = sort_docs(text, &DocsOptions::default());
/// assert!(outcome.changed);
/// assert_eq!(
///     outcome.content,
///     "{% docs a %}\ntext A\n{% enddocs %}\n\n{% docs b %}\ntext B\n{% enddocs %}\n"
/// );
/// ```
pub fn sort_docs(text: &str, options: &DocsOptions) -> SortOutcome {
    let mut blocks = Vec::new();
    let mut outside = 0;
    let mut cursor = 0;

    for scanned in BlockScanner::new(text) {
        outside += non_blank_len(&text[cursor..scanned.span.start]);
        cursor = scanned.span.end;
        blocks.push(scanned.block);
    }
    outside += non_blank_len(&text[cursor..]);

    if outside > 0 {
        debug!(bytes = outside, "Discarding text outside of docs blocks");
    }

    sort_blocks(&mut blocks, options.case);
    debug!(blocks = blocks.len(), "Sorted docs blocks");

    detect_change(text, render_blocks(&blocks))
}

fn non_blank_len(s: &str) -> usize {
    s.chars().filter(|c| !c.is_whitespace()).map(char::len_utf8).sum()
}
