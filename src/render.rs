//! Level-by-level text rendering of a heap's backing slice

use crate::tree;
use std::fmt::{self, Write};

/// Line printed above and below the rendered levels
pub const DELIMITER: &str = "-----";

/// Writes the levels of `data` to `out`
///
/// One line per depth, values in index order separated by a single space,
/// framed by [`DELIMITER`] lines. An empty slice writes nothing.
pub fn write_levels<W: Write>(out: &mut W, data: &[f64]) -> fmt::Result {
    let Some(height) = tree::height(data.len()) else {
        return Ok(());
    };

    out.write_str(DELIMITER)?;
    for depth in 0..=height {
        out.write_char('\n')?;
        for (n, value) in data[tree::level(depth, data.len())].iter().enumerate() {
            if n > 0 {
                out.write_char(' ')?;
            }
            write!(out, "{value:?}")?;
        }
    }
    out.write_char('\n')?;
    out.write_str(DELIMITER)
}

/// Renders `data` to a new string
pub fn render(data: &[f64]) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = write_levels(&mut out, data);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn test_single() {
        assert_eq!(render(&[5.0]), "-----\n5.0\n-----");
    }

    #[test]
    fn test_partial_last_level() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.5];
        assert_eq!(render(&data), "-----\n1.0\n2.0 3.0\n4.0 5.5\n-----");
    }

    #[test]
    fn test_full_levels() {
        let data = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        assert_eq!(
            render(&data),
            "-----\n0.0\n1.0 2.0\n3.0 4.0 5.0 6.0\n-----"
        );
    }

    #[test]
    fn test_infinity() {
        assert_eq!(render(&[f64::NEG_INFINITY, f64::INFINITY]), "-----\n-inf\ninf\n-----");
    }
}
