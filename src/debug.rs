//! Diagnostic hook for tracing heap maintenance
//!
//! A [`MinHeap`](crate::MinHeap) built with a sink reports every push and
//! every step of sift-up / sift-down, together with a rendering of the tree
//! as it was when the step began. Without a sink nothing is rendered.
//!
//! # Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use rust_min_heap::{DebugEvent, MinHeap};
//!
//! let log = Rc::new(RefCell::new(Vec::new()));
//! let sink_log = Rc::clone(&log);
//! let mut heap = MinHeap::with_sink(move |event: &DebugEvent<'_>| {
//!     sink_log.borrow_mut().push(event.to_string());
//! });
//!
//! heap.push(2.0).unwrap();
//! assert_eq!(log.borrow()[0], "pushing value: 2.0");
//! ```

use std::fmt;

/// A single diagnostic event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DebugEvent<'a> {
    /// A converted value is about to be appended
    Push { value: f64 },
    /// A sift-up step is about to examine `index`
    SiftUp { index: usize, snapshot: &'a str },
    /// A sift-down step is about to examine `index`
    SiftDown { index: usize, snapshot: &'a str },
}

impl DebugEvent<'_> {
    /// The tree rendering attached to a sift step
    pub fn snapshot(&self) -> Option<&str> {
        match self {
            DebugEvent::Push { .. } => None,
            DebugEvent::SiftUp { snapshot, .. } | DebugEvent::SiftDown { snapshot, .. } => {
                Some(*snapshot)
            }
        }
    }
}

impl fmt::Display for DebugEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DebugEvent::Push { value } => write!(f, "pushing value: {value:?}"),
            DebugEvent::SiftUp { index, snapshot } => {
                write!(f, "{snapshot}\nbubbling up index: {index}")
            }
            DebugEvent::SiftDown { index, snapshot } => {
                write!(f, "{snapshot}\nbubbling down index: {index}")
            }
        }
    }
}

/// Receiver of [`DebugEvent`]s
pub trait DebugSink {
    fn record(&mut self, event: &DebugEvent<'_>);
}

impl<F: FnMut(&DebugEvent<'_>)> DebugSink for F {
    fn record(&mut self, event: &DebugEvent<'_>) {
        self(event)
    }
}

/// Sink that prints every event to standard error
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl DebugSink for StderrSink {
    fn record(&mut self, event: &DebugEvent<'_>) {
        eprintln!("{event}");
    }
}
