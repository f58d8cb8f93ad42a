//! A binary min-heap of floating-point values
//!
//! This crate is a from-scratch implementation of the classic array-encoded
//! heap: a complete binary tree stored level by level in a `Vec<f64>`, kept in
//! order by sift-up after every insertion and sift-down after every removal.
//! If you just need a priority queue, `std::collections::BinaryHeap` with
//! `std::cmp::Reverse` is the better choice.
//!
//! # Features
//!
//! - **Loose input, strict storage**: anything implementing [`HeapValue`]
//!   (numbers, numeric strings) can be pushed; NaN and non-numbers are rejected
//!   with [`HeapError::InvalidValue`]
//! - **Batch insertion**: [`MinHeap::push_all`] converts the whole batch before
//!   inserting any of it
//! - **Diagnostics**: an optional [`DebugSink`] sees every push and sift step
//!   together with a rendering of the tree
//!
//! # Example
//!
//! ```rust
//! use rust_min_heap::MinHeap;
//!
//! let mut heap = MinHeap::new();
//! heap.push_all([3, 1, 1, 2]).unwrap();
//! heap.push("0.5").unwrap();
//!
//! assert_eq!(heap.to_string(), "-----\n0.5\n1.0 1.0\n3.0 2.0\n-----");
//!
//! let mut drained = Vec::new();
//! while let Ok(value) = heap.pop() {
//!     drained.push(value);
//! }
//! assert_eq!(drained, vec![0.5, 1.0, 1.0, 2.0, 3.0]);
//! ```

pub mod debug;
pub mod min_heap;
pub mod render;
pub mod traits;
pub mod tree;
pub mod value;

pub use debug::{DebugEvent, DebugSink, StderrSink};
pub use min_heap::MinHeap;
pub use traits::HeapError;
pub use value::{parse_value, HeapValue};
