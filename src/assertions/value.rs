// Allow needless_pass_by_value since assertions read like `assert_equal(4, 2 + 2)`
#![allow(clippy::needless_pass_by_value)]

//! Equality, boolean, `Option` and `Result` checks.

use std::fmt::Debug;

use crate::error::{Error, Result};

/// Fail with `message` unless `condition` holds.
///
/// # Errors
///
/// Returns an assertion failure carrying `message`.
pub fn assert_true(condition: bool, message: &str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::assertion(format!("expected true: {message}")))
    }
}

/// Fail with `message` if `condition` holds.
///
/// # Errors
///
/// Returns an assertion failure carrying `message`.
pub fn assert_false(condition: bool, message: &str) -> Result<()> {
    if condition {
        Err(Error::assertion(format!("expected false: {message}")))
    } else {
        Ok(())
    }
}

/// Fail unless `actual == expected`.
///
/// ```rust
/// use testkit::assertions::assert_equal;
///
/// assert!(assert_equal(4, 2 + 2).is_ok());
/// assert!(assert_equal("a", "b").is_err());
/// ```
///
/// # Errors
///
/// Returns an assertion failure showing both values.
pub fn assert_equal<T: PartialEq + Debug>(expected: T, actual: T) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(Error::assertion(format!(
            "values differ\n  expected: {expected:?}\n  actual: {actual:?}"
        )))
    }
}

/// Fail if `actual == unexpected`.
///
/// # Errors
///
/// Returns an assertion failure showing the repeated value.
pub fn assert_not_equal<T: PartialEq + Debug>(unexpected: T, actual: T) -> Result<()> {
    if actual == unexpected {
        Err(Error::assertion(format!(
            "expected a value other than {unexpected:?}"
        )))
    } else {
        Ok(())
    }
}

/// Fail on `None`; otherwise hand back the contained value.
///
/// # Errors
///
/// Returns an assertion failure if `value` is `None`.
pub fn assert_some<T>(value: &Option<T>) -> Result<&T> {
    value
        .as_ref()
        .ok_or_else(|| Error::assertion("expected Some(_), got None"))
}

/// Fail on `Some`.
///
/// # Errors
///
/// Returns an assertion failure showing the contained value.
pub fn assert_none<T: Debug>(value: &Option<T>) -> Result<()> {
    match value {
        None => Ok(()),
        Some(inner) => Err(Error::assertion(format!(
            "expected None, got Some({inner:?})"
        ))),
    }
}

/// Fail on `Err`; otherwise hand back the success value.
///
/// # Errors
///
/// Returns an assertion failure showing the error.
pub fn assert_ok<T, E: Debug>(value: &std::result::Result<T, E>) -> Result<&T> {
    value
        .as_ref()
        .map_err(|err| Error::assertion(format!("expected Ok(_), got Err({err:?})")))
}

/// Fail on `Ok`; otherwise hand back the error value.
///
/// # Errors
///
/// Returns an assertion failure showing the success value.
pub fn assert_err<T: Debug, E>(value: &std::result::Result<T, E>) -> Result<&E> {
    match value {
        Ok(inner) => Err(Error::assertion(format!(
            "expected Err(_), got Ok({inner:?})"
        ))),
        Err(err) => Ok(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_true_false() {
        assert!(assert_true(true, "flag").is_ok());
        assert!(assert_false(false, "flag").is_ok());

        let err = assert_true(false, "user is active").unwrap_err();
        assert!(err.message().contains("user is active"));
        assert!(assert_false(true, "flag").is_err());
    }

    #[test]
    fn test_assert_equal() {
        assert!(assert_equal("x", "x").is_ok());

        let err = assert_equal(1, 2).unwrap_err();
        assert!(err.message().contains("expected: 1"));
        assert!(err.message().contains("actual: 2"));
    }

    #[test]
    fn test_assert_not_equal() {
        assert!(assert_not_equal(1, 2).is_ok());
        assert!(assert_not_equal("a", "a").is_err());
    }

    #[test]
    fn test_option_checks() {
        assert_eq!(assert_some(&Some(3)).unwrap(), &3);
        assert!(assert_some::<i32>(&None).is_err());
        assert!(assert_none::<i32>(&None).is_ok());

        let err = assert_none(&Some("left")).unwrap_err();
        assert!(err.message().contains("left"));
    }

    #[test]
    fn test_result_checks() {
        let ok: std::result::Result<i32, String> = Ok(5);
        let failed: std::result::Result<i32, String> = Err("boom".to_string());

        assert_eq!(assert_ok(&ok).unwrap(), &5);
        assert!(assert_ok(&failed).unwrap_err().message().contains("boom"));
        assert_eq!(assert_err(&failed).unwrap(), "boom");
        assert!(assert_err(&ok).is_err());
    }
}
