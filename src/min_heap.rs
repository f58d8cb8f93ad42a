//! Array-backed binary min-heap of `f64` values
//!
//! The heap is a complete binary tree stored level by level in a `Vec<f64>`
//! (see [`tree`](crate::tree)). Every parent is less than or equal to its
//! children, so the minimum is always at index 0.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `push`     | O(log n)   |
//! | `push_all` | O(k log n) |
//! | `pop`      | O(log n)   |
//! | `peek`     | O(1)       |
//! | `clear`    | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use rust_min_heap::{HeapError, MinHeap};
//!
//! let mut heap = MinHeap::new();
//! heap.push(3).unwrap();
//! heap.push("1.5").unwrap();
//! heap.push_all([2.0, 4.0]).unwrap();
//!
//! assert_eq!(heap.peek(), Some(1.5));
//! assert_eq!(heap.pop(), Ok(1.5));
//! assert_eq!(heap.pop(), Ok(2.0));
//! assert_eq!(heap.pop(), Ok(3.0));
//! assert_eq!(heap.pop(), Ok(4.0));
//! assert_eq!(heap.pop(), Err(HeapError::EmptyHeap));
//! ```

use crate::debug::{DebugEvent, DebugSink, StderrSink};
use crate::render;
use crate::traits::HeapError;
use crate::tree;
use crate::value::HeapValue;
use std::fmt;

/// A binary min-heap of non-NaN `f64` values
///
/// Values enter through [`HeapValue`], which rejects NaN and unparseable
/// strings, so `<` orders every pair of stored values.
///
/// When several elements share the minimum value, `pop` returns one of them;
/// which slot it came from is unspecified.
pub struct MinHeap {
    /// Tree nodes, root first, each level left to right
    data: Vec<f64>,
    sink: Option<Box<dyn DebugSink>>,
}

impl MinHeap {
    /// Creates an empty heap with diagnostics disabled
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            sink: None,
        }
    }

    /// Creates an empty heap with room for `capacity` values
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            sink: None,
        }
    }

    /// Creates an empty heap, printing diagnostics to stderr if `enabled`
    pub fn with_debug(enabled: bool) -> Self {
        let mut heap = Self::new();
        if enabled {
            heap.sink = Some(Box::new(StderrSink));
        }
        heap
    }

    /// Creates an empty heap that reports diagnostics to `sink`
    pub fn with_sink<S: DebugSink + 'static>(sink: S) -> Self {
        Self {
            data: Vec::new(),
            sink: Some(Box::new(sink)),
        }
    }

    /// Replaces the diagnostic sink; `None` disables diagnostics
    pub fn set_debug_sink(&mut self, sink: Option<Box<dyn DebugSink>>) {
        self.sink = sink;
    }

    /// Returns true if a diagnostic sink is installed
    pub fn is_debug_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of values in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the number of values the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns the minimum value without removing it
    pub fn peek(&self) -> Option<f64> {
        self.data.first().copied()
    }

    /// The backing array in tree order (not sorted order)
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Removes every value
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Inserts a value
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidValue`] if `value` is not a number; the heap
    /// is left untouched.
    pub fn push<V: HeapValue>(&mut self, value: V) -> Result<(), HeapError> {
        let value = value.to_heap_value()?;
        self.insert(value);
        Ok(())
    }

    /// Inserts every value of `values` in iteration order
    ///
    /// All values are converted before the first insertion, so a single bad
    /// value rejects the whole batch and leaves the heap untouched.
    ///
    /// # Errors
    /// Returns the [`HeapError::InvalidValue`] of the first bad value.
    pub fn push_all<I>(&mut self, values: I) -> Result<(), HeapError>
    where
        I: IntoIterator,
        I::Item: HeapValue,
    {
        let values = values
            .into_iter()
            .map(|value| value.to_heap_value())
            .collect::<Result<Vec<_>, _>>()?;

        self.data.reserve(values.len());
        for value in values {
            self.insert(value);
        }
        Ok(())
    }

    /// Removes and returns the minimum value
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if there is nothing to pop.
    pub fn pop(&mut self) -> Result<f64, HeapError> {
        let last_idx = match self.data.len() {
            0 => return Err(HeapError::EmptyHeap),
            1 => return self.data.pop().ok_or(HeapError::EmptyHeap),
            len => len - 1,
        };

        self.data.swap(0, last_idx);
        let result = self.data.pop().ok_or(HeapError::EmptyHeap)?;
        self.sift_down(0);

        Ok(result)
    }

    fn insert(&mut self, value: f64) {
        if let Some(sink) = self.sink.as_mut() {
            sink.record(&DebugEvent::Push { value });
        }
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Move element at index up until its parent is not greater
    fn sift_up(&mut self, mut index: usize) {
        loop {
            self.trace(index, Sift::Up);

            let Some(parent) = tree::parent(index) else {
                break;
            };
            if self.data[index] < self.data[parent] {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down until neither child is smaller
    ///
    /// Equal children resolve to the left one.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            self.trace(index, Sift::Down);

            let left = tree::left(index);
            let right = tree::right(index);
            // complete tree: no left child means no children at all
            if left >= len {
                break;
            }

            let smaller = if right < len && self.data[right] < self.data[left] {
                right
            } else {
                left
            };

            if self.data[index] > self.data[smaller] {
                self.data.swap(index, smaller);
                index = smaller;
            } else {
                break;
            }
        }
    }

    fn trace(&mut self, index: usize, sift: Sift) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        let snapshot = render::render(&self.data);
        let event = match sift {
            Sift::Up => DebugEvent::SiftUp {
                index,
                snapshot: &snapshot,
            },
            Sift::Down => DebugEvent::SiftDown {
                index,
                snapshot: &snapshot,
            },
        };
        sink.record(&event);
    }
}

#[derive(Clone, Copy)]
enum Sift {
    Up,
    Down,
}

impl Default for MinHeap {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MinHeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::write_levels(f, &self.data)
    }
}

impl fmt::Debug for MinHeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinHeap")
            .field("data", &self.data)
            .field("debug", &self.is_debug_enabled())
            .finish()
    }
}
