//! Conversion of caller input into heap values
//!
//! The heap stores plain `f64`s and relies on `<` being a total order over
//! everything it holds, so NaN is refused here, at the boundary, together with
//! anything that does not parse as a number.

use crate::traits::HeapError;

/// A value that can be pushed onto a [`MinHeap`](crate::MinHeap)
///
/// Implemented for the primitive numeric types, for strings holding a
/// number, and for references to any implementor.
///
/// # Example
///
/// ```rust
/// use rust_min_heap::HeapValue;
///
/// assert_eq!(3u8.to_heap_value(), Ok(3.0));
/// assert_eq!(" -2.5 ".to_heap_value(), Ok(-2.5));
/// assert!("three".to_heap_value().is_err());
/// assert!(f64::NAN.to_heap_value().is_err());
/// ```
pub trait HeapValue {
    /// Converts `self` into a storable `f64`
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidValue`] if the input is not a number or is NaN.
    fn to_heap_value(&self) -> Result<f64, HeapError>;
}

/// Parses a string into a heap value
///
/// Leading and trailing whitespace is ignored. Anything `f64::from_str`
/// accepts is valid (`"7"`, `"1e-3"`, `"-inf"`) except NaN.
pub fn parse_value(input: &str) -> Result<f64, HeapError> {
    match input.trim().parse::<f64>() {
        Ok(value) if !value.is_nan() => Ok(value),
        _ => Err(HeapError::invalid(input)),
    }
}

fn check_float(value: f64) -> Result<f64, HeapError> {
    if value.is_nan() {
        Err(HeapError::invalid(value.to_string()))
    } else {
        Ok(value)
    }
}

impl HeapValue for f64 {
    fn to_heap_value(&self) -> Result<f64, HeapError> {
        check_float(*self)
    }
}

impl HeapValue for f32 {
    fn to_heap_value(&self) -> Result<f64, HeapError> {
        check_float(f64::from(*self))
    }
}

macro_rules! impl_heap_value_for_int {
    ($($t:ty),*) => {
        $(
            impl HeapValue for $t {
                #[inline]
                fn to_heap_value(&self) -> Result<f64, HeapError> {
                    // wide integers round to the nearest representable f64
                    Ok(*self as f64)
                }
            }
        )*
    };
}

impl_heap_value_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl HeapValue for str {
    fn to_heap_value(&self) -> Result<f64, HeapError> {
        parse_value(self)
    }
}

impl HeapValue for String {
    fn to_heap_value(&self) -> Result<f64, HeapError> {
        parse_value(self)
    }
}

impl<T: HeapValue + ?Sized> HeapValue for &T {
    fn to_heap_value(&self) -> Result<f64, HeapError> {
        (**self).to_heap_value()
    }
}
