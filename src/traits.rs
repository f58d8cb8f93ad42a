//! Error type shared by the heap and the value conversion layer
//!
//! Only conditions a caller can actually trigger are represented here.
//! Structural conditions (asking for the root's parent, writing past the end
//! of the backing vector) are internal defects: the former is `None` from
//! [`tree::parent`](crate::tree::parent), the latter panics on indexing.

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The pushed input could not be converted to a non-NaN `f64`
    #[error("invalid heap value: {input:?}")]
    InvalidValue {
        /// The rejected input, as it was given
        input: String,
    },
    /// `pop` was called on a heap with no elements
    #[error("heap is empty")]
    EmptyHeap,
}

impl HeapError {
    pub(crate) fn invalid(input: impl Into<String>) -> Self {
        HeapError::InvalidValue {
            input: input.into(),
        }
    }
}
