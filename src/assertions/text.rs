//! String checks.

use crate::error::{Error, Result};

/// Fail unless `haystack` contains `needle`.
///
/// # Errors
///
/// Returns an assertion failure quoting both strings.
pub fn assert_contains(haystack: &str, needle: &str) -> Result<()> {
    if haystack.contains(needle) {
        Ok(())
    } else {
        Err(Error::assertion(format!(
            "{haystack:?} does not contain {needle:?}"
        )))
    }
}

/// Fail if `haystack` contains `needle`.
///
/// # Errors
///
/// Returns an assertion failure quoting both strings.
pub fn assert_not_contains(haystack: &str, needle: &str) -> Result<()> {
    if haystack.contains(needle) {
        Err(Error::assertion(format!(
            "{haystack:?} unexpectedly contains {needle:?}"
        )))
    } else {
        Ok(())
    }
}

/// Fail unless `value` starts with `prefix`.
///
/// # Errors
///
/// Returns an assertion failure quoting both strings.
pub fn assert_starts_with(value: &str, prefix: &str) -> Result<()> {
    if value.starts_with(prefix) {
        Ok(())
    } else {
        Err(Error::assertion(format!(
            "{value:?} does not start with {prefix:?}"
        )))
    }
}

/// Fail unless `value` ends with `suffix`.
///
/// # Errors
///
/// Returns an assertion failure quoting both strings.
pub fn assert_ends_with(value: &str, suffix: &str) -> Result<()> {
    if value.ends_with(suffix) {
        Ok(())
    } else {
        Err(Error::assertion(format!(
            "{value:?} does not end with {suffix:?}"
        )))
    }
}

/// Fail unless `value` is empty or whitespace only.
///
/// # Errors
///
/// Returns an assertion failure quoting the value.
pub fn assert_blank(value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Ok(())
    } else {
        Err(Error::assertion(format!("expected blank string, got {value:?}")))
    }
}

/// Fail if `value` is empty or whitespace only.
///
/// # Errors
///
/// Returns an assertion failure quoting the value.
pub fn assert_not_blank(value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(Error::assertion(format!(
            "expected non-blank string, got {value:?}"
        )))
    } else {
        Ok(())
    }
}
