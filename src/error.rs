//! Errors reported by the checked entry points.

/// Input rejected before the chain DP runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubsetError {
    /// Divisibility is only defined here for positive integers.
    #[error("value {value} at index {index} is not a positive integer")]
    NonPositive { index: usize, value: i64 },
}

/// Check that every value is strictly positive.
pub fn validate_positive(input: &[i64]) -> Result<(), SubsetError> {
    match input.iter().enumerate().find(|&(_, &v)| v <= 0) {
        Some((index, &value)) => Err(SubsetError::NonPositive { index, value }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_and_empty() {
        assert_eq!(validate_positive(&[]), Ok(()));
        assert_eq!(validate_positive(&[1, 5, 1_000_000_007]), Ok(()));
    }

    #[test]
    fn reports_first_offender() {
        let err = validate_positive(&[3, 0, -2]).unwrap_err();
        assert_eq!(err, SubsetError::NonPositive { index: 1, value: 0 });
        assert_eq!(
            err.to_string(),
            "value 0 at index 1 is not a positive integer"
        );
    }
}
