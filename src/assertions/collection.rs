// Allow needless_pass_by_value since assertions read like `assert_equal(4, 2 + 2)`
#![allow(clippy::needless_pass_by_value)]

//! Slice checks.

use std::fmt::Debug;

use crate::error::{Error, Result};

/// Fail unless `items` is empty.
///
/// # Errors
///
/// Returns an assertion failure listing the items.
pub fn assert_empty<T: Debug>(items: &[T]) -> Result<()> {
    if items.is_empty() {
        Ok(())
    } else {
        Err(Error::assertion(format!(
            "expected empty, got {} item(s): {items:?}",
            items.len()
        )))
    }
}

/// Fail if `items` is empty.
///
/// # Errors
///
/// Returns an assertion failure.
pub fn assert_not_empty<T>(items: &[T]) -> Result<()> {
    if items.is_empty() {
        Err(Error::assertion("expected at least one item, got none"))
    } else {
        Ok(())
    }
}

/// Fail unless `items` holds exactly `expected` elements.
///
/// # Errors
///
/// Returns an assertion failure stating both lengths.
pub fn assert_len<T>(items: &[T], expected: usize) -> Result<()> {
    let actual = items.len();
    if actual == expected {
        Ok(())
    } else {
        Err(Error::assertion(format!(
            "length mismatch: expected {expected}, actual {actual}"
        )))
    }
}

/// Fail unless `items` contains `item`.
///
/// # Errors
///
/// Returns an assertion failure listing the items.
pub fn assert_contains_item<T: PartialEq + Debug>(items: &[T], item: &T) -> Result<()> {
    if items.contains(item) {
        Ok(())
    } else {
        Err(Error::assertion(format!("{items:?} does not contain {item:?}")))
    }
}

/// Fail unless every item satisfies `predicate`.
///
/// ```rust
/// use testkit::assertions::assert_all;
///
/// assert!(assert_all(&[2, 4, 6], |n| n % 2 == 0, "is even").is_ok());
/// ```
///
/// # Errors
///
/// Returns an assertion failure naming the first offending item and its index.
pub fn assert_all<T, F>(items: &[T], predicate: F, description: &str) -> Result<()>
where
    T: Debug,
    F: Fn(&T) -> bool,
{
    match items.iter().position(|item| !predicate(item)) {
        None => Ok(()),
        Some(index) => Err(Error::assertion(format!(
            "item {index} ({:?}) does not satisfy: {description}",
            items[index]
        ))),
    }
}

/// Fail unless at least one item satisfies `predicate`.
///
/// # Errors
///
/// Returns an assertion failure listing the items.
pub fn assert_any<T, F>(items: &[T], predicate: F, description: &str) -> Result<()>
where
    T: Debug,
    F: Fn(&T) -> bool,
{
    if items.iter().any(predicate) {
        Ok(())
    } else {
        Err(Error::assertion(format!(
            "no item in {items:?} satisfies: {description}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(assert_empty::<i32>(&[]).is_ok());
        assert!(assert_not_empty(&[1]).is_ok());
        assert!(assert_empty(&[1, 2]).unwrap_err().message().contains("2 item(s)"));
        assert!(assert_not_empty::<i32>(&[]).is_err());
    }

    #[test]
    fn test_len() {
        assert!(assert_len(&["a", "b"], 2).is_ok());

        let err = assert_len(&["a"], 3).unwrap_err();
        assert_eq!(err.message(), "length mismatch: expected 3, actual 1");
    }

    #[test]
    fn test_contains_item() {
        assert!(assert_contains_item(&[1, 2, 3], &2).is_ok());
        assert!(assert_contains_item(&[1, 2, 3], &9).is_err());
    }

    #[test]
    fn test_all_reports_first_offender() {
        let err = assert_all(&[2, 3, 5], |n| n % 2 == 0, "is even").unwrap_err();
        assert_eq!(err.message(), "item 1 (3) does not satisfy: is even");
    }

    #[test]
    fn test_any() {
        assert!(assert_any(&[1, 2], |n| *n > 1, "greater than 1").is_ok());
        assert!(assert_any(&[1, 2], |n| *n > 5, "greater than 5").is_err());
        assert!(assert_any::<i32, _>(&[], |_| true, "anything").is_err());
    }
}
