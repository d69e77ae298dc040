//! Presentation helper: `[4, 8, 2]`.

use std::fmt;

/// `Display` adapter rendering a slice as a bracketed, comma-separated list.
pub struct Bracketed<'a, T>(pub &'a [T]);

impl<T: fmt::Display> fmt::Display for Bracketed<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str("]")
    }
}

/// Render `values` as `[a, b, c]`.
pub fn format_sequence(values: &[i64]) -> String {
    Bracketed(values).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_lists() {
        assert_eq!(format_sequence(&[]), "[]");
        assert_eq!(format_sequence(&[7]), "[7]");
        assert_eq!(format_sequence(&[4, 8, 2]), "[4, 8, 2]");
        assert_eq!(format!("{}", Bracketed(&["a", "b"][..])), "[a, b]");
    }
}
