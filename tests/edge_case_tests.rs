//! Edge cases for the public heap API
//!
//! - Empty heap behaviour
//! - Single element path
//! - Duplicate and extreme values
//! - Input conversion failures

use rust_min_heap::{parse_value, DebugEvent, HeapError, HeapValue, MinHeap};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_empty_heap() {
    let mut heap = MinHeap::new();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.pop(), Err(HeapError::EmptyHeap));
    // a failed pop changes nothing
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.to_string(), "");
}

#[test]
fn test_pop_until_empty_then_reuse() {
    let mut heap = MinHeap::new();
    heap.push_all([2, 1]).unwrap();
    assert_eq!(heap.pop(), Ok(1.0));
    assert_eq!(heap.pop(), Ok(2.0));
    assert_eq!(heap.pop(), Err(HeapError::EmptyHeap));

    heap.push(9).unwrap();
    assert_eq!(heap.peek(), Some(9.0));
    assert_eq!(heap.len(), 1);
}

#[test]
fn test_single_element_path() {
    let mut heap = MinHeap::new();
    heap.push(5).unwrap();
    assert_eq!(heap.peek(), Some(5.0));
    assert_eq!(heap.pop(), Ok(5.0));
    assert!(heap.is_empty());
}

#[test]
fn test_duplicate_values() {
    let mut heap = MinHeap::new();
    heap.push_all([3, 1, 1, 2]).unwrap();

    assert_eq!(heap.pop(), Ok(1.0));
    assert_eq!(heap.pop(), Ok(1.0));
    assert_eq!(heap.pop(), Ok(2.0));
    assert_eq!(heap.pop(), Ok(3.0));
    assert!(heap.is_empty());
}

#[test]
fn test_all_equal() {
    let mut heap = MinHeap::new();
    heap.push_all(std::iter::repeat(4.0).take(33)).unwrap();
    for _ in 0..33 {
        assert_eq!(heap.pop(), Ok(4.0));
    }
    assert!(heap.is_empty());
}

#[test]
fn test_extreme_values() {
    let mut heap = MinHeap::new();
    heap.push_all([
        0.0,
        f64::INFINITY,
        f64::MAX,
        f64::NEG_INFINITY,
        f64::MIN,
        -0.0,
        f64::MIN_POSITIVE,
    ])
    .unwrap();

    assert_eq!(heap.pop(), Ok(f64::NEG_INFINITY));
    assert_eq!(heap.pop(), Ok(f64::MIN));
    // 0.0 and -0.0 compare equal
    assert_eq!(heap.pop(), Ok(0.0));
    assert_eq!(heap.pop(), Ok(0.0));
    assert_eq!(heap.pop(), Ok(f64::MIN_POSITIVE));
    assert_eq!(heap.pop(), Ok(f64::MAX));
    assert_eq!(heap.pop(), Ok(f64::INFINITY));
}

#[test]
fn test_invalid_string_rejected() {
    let mut heap = MinHeap::new();
    heap.push_all([1.0, 2.0]).unwrap();

    let err = heap.push("twelve").unwrap_err();
    assert_eq!(
        err,
        HeapError::InvalidValue {
            input: "twelve".to_string()
        }
    );
    assert_eq!(err.to_string(), "invalid heap value: \"twelve\"");
    assert_eq!(heap.as_slice(), &[1.0, 2.0]);
}

#[test]
fn test_nan_rejected_everywhere() {
    let mut heap = MinHeap::new();
    assert!(heap.push(f64::NAN).is_err());
    assert!(heap.push(f32::NAN).is_err());
    assert!(heap.push("NaN").is_err());
    assert!(heap.push_all([1.0, f64::NAN]).is_err());
    assert!(heap.is_empty());
}

#[test]
fn test_empty_batch() {
    let mut heap = MinHeap::new();
    heap.push_all(Vec::<f64>::new()).unwrap();
    assert!(heap.is_empty());
}

#[test]
fn test_parse_value_forms() {
    assert_eq!(parse_value("42"), Ok(42.0));
    assert_eq!(parse_value("\t0.125 "), Ok(0.125));
    assert_eq!(parse_value("-3E2"), Ok(-300.0));
    assert_eq!(parse_value("+inf"), Ok(f64::INFINITY));
    assert!(parse_value("1,5").is_err());
    assert!(parse_value("   ").is_err());
}

#[test]
fn test_wide_integers() {
    assert_eq!(u64::MAX.to_heap_value(), Ok(u64::MAX as f64));
    assert_eq!(i128::MIN.to_heap_value(), Ok(i128::MIN as f64));
}

#[test]
fn test_rendering_by_level() {
    let mut heap = MinHeap::new();
    heap.push_all(1..=8).unwrap();
    assert_eq!(
        heap.to_string(),
        "-----\n1.0\n2.0 3.0\n4.0 5.0 6.0 7.0\n8.0\n-----"
    );
}

#[test]
fn test_sink_sees_every_sift_step() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink_events = Rc::clone(&events);
    let mut heap = MinHeap::with_sink(move |event: &DebugEvent<'_>| {
        let kind = match event {
            DebugEvent::Push { .. } => "push",
            DebugEvent::SiftUp { .. } => "up",
            DebugEvent::SiftDown { .. } => "down",
        };
        sink_events.borrow_mut().push(kind);
    });

    // [3] -> [2, 3] -> [1, 3, 2]: each new value reaches the root
    heap.push_all([3.0, 2.0, 1.0]).unwrap();
    assert_eq!(
        *events.borrow(),
        vec!["push", "up", "push", "up", "up", "push", "up", "up"]
    );

    events.borrow_mut().clear();
    // [1, 3, 2] -> [2, 3] : root 2 already below 3
    assert_eq!(heap.pop(), Ok(1.0));
    assert_eq!(*events.borrow(), vec!["down"]);
}
