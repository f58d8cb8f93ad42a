//! Index arithmetic for a complete binary tree stored in a slice
//!
//! Levels are laid out root first, each level left to right, so no node ever
//! stores a link: a position alone determines its parent and children.
//!
//! ```text
//!            0
//!        1       2
//!      3   4   5   6
//! ```

use std::ops::Range;

/// Index of the parent of `index`, or `None` for the root
#[inline]
pub fn parent(index: usize) -> Option<usize> {
    index.checked_sub(1).map(|i| i / 2)
}

/// Index of the left child of `index`
///
/// Always computable; it is a real node only if it is less than the length.
#[inline]
pub fn left(index: usize) -> usize {
    2 * index + 1
}

/// Index of the right child of `index`
#[inline]
pub fn right(index: usize) -> usize {
    2 * index + 2
}

/// Depth of the deepest level in a tree of `len` nodes, `None` when empty
#[inline]
pub fn height(len: usize) -> Option<u32> {
    len.checked_ilog2()
}

/// Indices occupied by level `depth` in a tree of `len` nodes
///
/// The full level spans `[2^depth - 1, 2^(depth+1) - 1)`; the last level is
/// clipped to `len`.
pub fn level(depth: u32, len: usize) -> Range<usize> {
    let start = (1usize << depth) - 1;
    let end = (1usize << (depth + 1)) - 1;
    start.min(len)..end.min(len)
}
