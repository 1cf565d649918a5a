// Allow needless_pass_by_value since assertions read like `assert_equal(4, 2 + 2)`
#![allow(clippy::needless_pass_by_value)]

//! Ordering and tolerance checks.

use std::fmt::Debug;

use crate::error::{Error, Result};

/// Fail unless `min <= value <= max`.
///
/// ```rust
/// use testkit::assertions::assert_in_range;
///
/// assert!(assert_in_range(5, 1, 10).is_ok());
/// assert!(assert_in_range(10, 1, 10).is_ok());
/// assert!(assert_in_range(11, 1, 10).is_err());
/// ```
///
/// # Errors
///
/// Returns an assertion failure stating the value and bounds.
pub fn assert_in_range<T: PartialOrd + Debug>(value: T, min: T, max: T) -> Result<()> {
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(Error::assertion(format!(
            "{value:?} is outside [{min:?}, {max:?}]"
        )))
    }
}

/// Fail unless `value > threshold`.
///
/// # Errors
///
/// Returns an assertion failure stating both values.
pub fn assert_greater<T: PartialOrd + Debug>(value: T, threshold: T) -> Result<()> {
    if value > threshold {
        Ok(())
    } else {
        Err(Error::assertion(format!(
            "{value:?} is not greater than {threshold:?}"
        )))
    }
}

/// Fail unless `value < threshold`.
///
/// # Errors
///
/// Returns an assertion failure stating both values.
pub fn assert_less<T: PartialOrd + Debug>(value: T, threshold: T) -> Result<()> {
    if value < threshold {
        Ok(())
    } else {
        Err(Error::assertion(format!(
            "{value:?} is not less than {threshold:?}"
        )))
    }
}

/// Fail unless `actual` is within `epsilon` of `expected`.
///
/// # Errors
///
/// Returns an assertion failure stating the difference.
pub fn assert_approx_eq(expected: f64, actual: f64, epsilon: f64) -> Result<()> {
    let diff = (expected - actual).abs();
    if diff <= epsilon {
        Ok(())
    } else {
        Err(Error::assertion(format!(
            "{actual} is not within {epsilon} of {expected} (difference {diff})"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_bounds_inclusive() {
        assert!(assert_in_range(1, 1, 3).is_ok());
        assert!(assert_in_range(3, 1, 3).is_ok());

        let err = assert_in_range(0, 1, 3).unwrap_err();
        assert_eq!(err.message(), "0 is outside [1, 3]");
    }

    #[test]
    fn test_greater_less() {
        assert!(assert_greater(2, 1).is_ok());
        assert!(assert_greater(1, 1).is_err());
        assert!(assert_less(1, 2).is_ok());
        assert!(assert_less(2, 2).is_err());
    }

    #[test]
    fn test_approx_eq() {
        assert!(assert_approx_eq(0.3, 0.1 + 0.2, 1e-9).is_ok());
        assert!(assert_approx_eq(1.0, 1.5, 0.1).is_err());
        assert!(assert_approx_eq(f64::NAN, 1.0, 0.1).is_err());
    }
}
