//! Docs block scanning.
//!
//! Finds blocks of the form:
//! ```text
//! {% docs column_name %}
//! Description of column.
//! {% enddocs %}
//! ```
//!
//! The body of a block runs up to the first end marker that follows its start
//! marker, across newlines. There is no nesting and no escaping: a start
//! marker inside a body is plain body text, and a start marker that is never
//! closed produces nothing.

use std::ops::Range;

const TAG_OPEN: &str = "{%";
const TAG_CLOSE: &str = "%}";
const DOCS_KEYWORD: &str = "docs";
const ENDDOCS_KEYWORD: &str = "enddocs";

/// A single documentation block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocBlock {
    /// The name following `docs` in the start marker.
    pub identifier: String,
    /// The text between the markers, with surrounding whitespace trimmed.
    pub body: String,
}

impl DocBlock {
    /// Create a block, trimming the body.
    pub fn new(identifier: impl Into<String>, body: &str) -> Self {
        Self {
            identifier: identifier.into(),
            body: body.trim().to_string(),
        }
    }
}

/// A block together with the byte range it occupied in the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedBlock {
    /// From the first byte of the start marker to the last byte of the end marker.
    pub span: Range<usize>,
    pub block: DocBlock,
}

/// Linear scanner over the docs blocks of a text.
///
/// # Example
/// ```
/// use docsort_core::block::BlockScanner;
///
/// let text = "{% docs a %}\nA\n{% enddocs %}\n";
/// let found: Vec<_> = BlockScanner::new(text).collect();
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].span, 0..28);
/// ```
#[derive(Debug, Clone)]
pub struct BlockScanner<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> BlockScanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    fn finish(&mut self) -> Option<ScannedBlock> {
        self.pos = self.source.len();
        None
    }
}

impl Iterator for BlockScanner<'_> {
    type Item = ScannedBlock;

    fn next(&mut self) -> Option<ScannedBlock> {
        while let Some(offset) = self.source[self.pos..].find(TAG_OPEN) {
            let start = self.pos + offset;

            let Some((identifier, body_start)) = parse_start_marker(self.source, start) else {
                self.pos = start + TAG_OPEN.len();
                continue;
            };

            // No end marker anywhere after this start means no later start can close either.
            let Some((body_end, end)) = find_end_marker(self.source, body_start) else {
                tracing::trace!(position = start, identifier, "unterminated docs block");
                return self.finish();
            };

            self.pos = end;
            return Some(ScannedBlock {
                span: start..end,
                block: DocBlock::new(identifier, &self.source[body_start..body_end]),
            });
        }

        self.finish()
    }
}

/// Extracts all docs blocks from the given text, in order of appearance.
///
/// # Example
/// ```
/// use docsort_core::block::extract_blocks;
///
/// let text = "{% docs b %}\ntext B\n{% enddocs %}\n\n{% docs a %}\ntext A\n{% enddocs %}\n";
/// let blocks = extract_blocks(text);
/// assert_eq!(blocks.len(), 2);
/// assert_eq!(blocks[0].identifier, "b");
/// assert_eq!(blocks[1].body, "text A");
/// ```
pub fn extract_blocks(text: &str) -> Vec<DocBlock> {
    BlockScanner::new(text).map(|scanned| scanned.block).collect()
}

fn is_marker_char(c: char) -> bool {
    matches!(c, '{' | '}' | '%')
}

fn skip_blanks(s: &str) -> &str {
    s.trim_start_matches([' ', '\t'])
}

/// Parses `{% docs IDENT %}` at `at`, returning the identifier and the offset
/// just past the marker.
fn parse_start_marker(source: &str, at: usize) -> Option<(&str, usize)> {
    let rest = source[at..].strip_prefix(TAG_OPEN)?;
    let rest = skip_blanks(rest).strip_prefix(DOCS_KEYWORD)?;

    let name_start = skip_blanks(rest);
    if name_start.len() == rest.len() {
        return None;
    }

    let name_len = name_start
        .find(|c: char| c.is_whitespace() || is_marker_char(c))
        .unwrap_or(name_start.len());
    if name_len == 0 {
        return None;
    }

    let identifier = &name_start[..name_len];
    let rest = skip_blanks(&name_start[name_len..]).strip_prefix(TAG_CLOSE)?;
    Some((identifier, source.len() - rest.len()))
}

/// Length of a `{% enddocs %}` marker starting at `at`, if there is one.
fn end_marker_len(source: &str, at: usize) -> Option<usize> {
    let rest = source[at..].strip_prefix(TAG_OPEN)?;
    let rest = skip_blanks(rest).strip_prefix(ENDDOCS_KEYWORD)?;
    let rest = skip_blanks(rest).strip_prefix(TAG_CLOSE)?;
    Some(source.len() - rest.len() - at)
}

/// Finds the first end marker at or after `from`, returning its start and end offsets.
fn find_end_marker(source: &str, from: usize) -> Option<(usize, usize)> {
    let mut pos = from;
    while let Some(offset) = source[pos..].find(TAG_OPEN) {
        let at = pos + offset;
        if let Some(len) = end_marker_len(source, at) {
            return Some((at, at + len));
        }
        pos = at + TAG_OPEN.len();
    }
    None
}
