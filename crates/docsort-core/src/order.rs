//! Ordering of docs blocks by identifier.

use std::borrow::Cow;

use crate::block::DocBlock;

/// How identifiers are compared when ordering blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaseSensitivity {
    /// Compare lower-cased identifiers, so `Beta` sorts after `alpha`.
    #[default]
    Insensitive,
    /// Compare identifiers as-is; every upper-case initial sorts before any lower-case one.
    Sensitive,
}

impl CaseSensitivity {
    /// The key an identifier is ordered by under this policy.
    pub fn sort_key<'a>(self, identifier: &'a str) -> Cow<'a, str> {
        match self {
            Self::Insensitive => Cow::Owned(identifier.to_lowercase()),
            Self::Sensitive => Cow::Borrowed(identifier),
        }
    }
}

/// Sorts blocks by identifier in place.
///
/// The sort is stable: identifiers with equal keys keep their original
/// relative order, and duplicates are kept.
///
/// # Example
/// ```
/// use docsort_core::{CaseSensitivity, DocBlock, sort_blocks};
///
/// let mut blocks = vec![DocBlock::new("beta", "B"), DocBlock::new("Alpha", "A")];
/// sort_blocks(&mut blocks, CaseSensitivity::Insensitive);
/// assert_eq!(blocks[0].identifier, "Alpha");
/// ```
pub fn sort_blocks(blocks: &mut [DocBlock], case: CaseSensitivity) {
    blocks.sort_by_cached_key(|block| case.sort_key(&block.identifier).into_owned());
}
