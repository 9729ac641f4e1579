//! Canonical rendering of docs blocks.
//!
//! Each block becomes
//! ```text
//! {% docs IDENTIFIER %}
//! BODY
//! {% enddocs %}
//! ```
//! with exactly one blank line between blocks and a single newline at the end
//! of the file.

use crate::block::DocBlock;

fn start_marker(identifier: &str) -> String {
    format!("{{% docs {} %}}", identifier)
}

const END_MARKER: &str = "{% enddocs %}";

/// Renders one block without any trailing newline.
pub fn render_block(block: &DocBlock) -> String {
    format!(
        "{}\n{}\n{}",
        start_marker(&block.identifier),
        block.body,
        END_MARKER
    )
}

/// Renders blocks in the given order.
///
/// An empty slice renders as the empty string.
///
/// # Example
/// ```
/// use docsort_core::{DocBlock, render_blocks};
///
/// let text = render_blocks(&[DocBlock::new("a", "text A"), DocBlock::new("b", "text B")]);
/// assert_eq!(
///     text,
///     "{% docs a %}\ntext A\n{% enddocs %}\n\n{% docs b %}\ntext B\n{% enddocs %}\n"
/// );
/// ```
pub fn render_blocks(blocks: &[DocBlock]) -> String {
    if blocks.is_empty() {
        return String::new();
    }

    let mut rendered = blocks
        .iter()
        .map(render_block)
        .collect::<Vec<_>>()
        .join("\n\n");
    rendered.push('\n');
    rendered
}
