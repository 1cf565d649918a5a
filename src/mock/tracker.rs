//! Call tracking for hand-written mocks.
//!
//! A [`MockTracker`] keeps an ordered log of [`CallRecord`]s. Mock
//! implementations record into it; verification code queries and asserts
//! against the log afterwards.
//!
//! # Example
//!
//! ```rust
//! use testkit::mock::MockTracker;
//!
//! let mut tracker = MockTracker::new();
//! tracker.record_with("get_user", "123");
//! tracker.record_with("get_user", "456");
//!
//! assert!(tracker.assert_called_times("get_user", 2).is_ok());
//! assert_eq!(tracker.get_args("get_user", 1), vec!["456".to_string()]);
//! ```

use std::fmt;

use crate::error::{Error, Result};

/// A record of a single recorded call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRecord {
    method: String,
    args: Vec<String>,
    sequence: u64,
}

impl CallRecord {
    fn new(method: String, args: Vec<String>, sequence: u64) -> Self {
        Self {
            method,
            args,
            sequence,
        }
    }

    /// Name of the invoked method.
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Arguments in call-site order.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Position of this call in the owning tracker's log, starting at 1.
    #[must_use]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

impl fmt::Display for CallRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.method, self.args.join(", "))
    }
}

/// An ordered log of calls made against a mock.
///
/// Calls stay in chronological order regardless of method. Lookups for a
/// method that was never recorded are not errors: they report zero calls,
/// `None`, or an empty argument list.
#[derive(Debug, Default, Clone)]
pub struct MockTracker {
    calls: Vec<CallRecord>,
    counter: u64,
}

impl MockTracker {
    /// Create an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a call with no arguments.
    pub fn record(&mut self, method: &str) {
        self.record_args(method, std::iter::empty::<String>());
    }

    /// Record a call with a single argument.
    pub fn record_with(&mut self, method: &str, arg: impl Into<String>) {
        self.record_args(method, std::iter::once(arg));
    }

    /// Record a call with any number of arguments.
    pub fn record_args<I, S>(&mut self, method: &str, args: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.counter += 1;
        let record = CallRecord::new(
            method.to_string(),
            args.into_iter().map(Into::into).collect(),
            self.counter,
        );
        tracing::trace!(sequence = record.sequence, call = %record, "recorded call");
        self.calls.push(record);
    }

    /// All recorded calls in chronological order.
    #[must_use]
    pub fn calls(&self) -> &[CallRecord] {
        &self.calls
    }

    /// Iterate over the calls made to `method`, oldest first.
    pub fn calls_for<'a>(&'a self, method: &'a str) -> impl Iterator<Item = &'a CallRecord> + 'a {
        self.calls.iter().filter(move |call| call.method == method)
    }

    /// Returns `true` if `method` was recorded at least once.
    #[must_use]
    pub fn was_called(&self, method: &str) -> bool {
        self.calls_for(method).next().is_some()
    }

    /// Returns `true` if `method` was never recorded.
    #[must_use]
    pub fn was_not_called(&self, method: &str) -> bool {
        !self.was_called(method)
    }

    /// Number of calls recorded for `method`.
    #[must_use]
    pub fn call_count(&self, method: &str) -> usize {
        self.calls_for(method).count()
    }

    /// Number of calls recorded for any method.
    #[must_use]
    pub fn total_calls(&self) -> usize {
        self.calls.len()
    }

    /// Returns `true` if nothing has been recorded since creation or the last clear.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// The `index`-th call (0-based) made to `method`.
    #[must_use]
    pub fn get_call(&self, method: &str, index: usize) -> Option<&CallRecord> {
        self.calls
            .iter()
            .filter(|call| call.method == method)
            .nth(index)
    }

    /// The first call made to `method`.
    #[must_use]
    pub fn first_call(&self, method: &str) -> Option<&CallRecord> {
        self.get_call(method, 0)
    }

    /// The most recent call made to `method`.
    #[must_use]
    pub fn last_call(&self, method: &str) -> Option<&CallRecord> {
        self.calls.iter().rev().find(|call| call.method == method)
    }

    /// Arguments of the `index`-th call to `method`, or an empty list if there
    /// is no such call.
    #[must_use]
    pub fn get_args(&self, method: &str, index: usize) -> Vec<String> {
        self.get_call(method, index)
            .map(|call| call.args.clone())
            .unwrap_or_default()
    }

    /// Drop every recorded call and restart the sequence counter at zero.
    pub fn clear(&mut self) {
        tracing::debug!(discarded = self.calls.len(), "cleared call log");
        self.calls.clear();
        self.counter = 0;
    }

    /// Fail unless `method` was called at least once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AssertionFailed`] if `method` was never called.
    pub fn assert_called(&self, method: &str) -> Result<()> {
        if self.was_called(method) {
            Ok(())
        } else {
            Err(Error::assertion(format!(
                "expected `{method}` to be called, but it was never called"
            )))
        }
    }

    /// Fail if `method` was called.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AssertionFailed`] naming the actual call count.
    pub fn assert_not_called(&self, method: &str) -> Result<()> {
        match self.call_count(method) {
            0 => Ok(()),
            actual => Err(Error::assertion(format!(
                "expected `{method}` not to be called, but it was called {actual} time(s)"
            ))),
        }
    }

    /// Fail unless `method` was called exactly `expected` times.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AssertionFailed`] stating the expected and actual counts.
    pub fn assert_called_times(&self, method: &str, expected: usize) -> Result<()> {
        let actual = self.call_count(method);
        if actual == expected {
            Ok(())
        } else {
            Err(Error::assertion(format!(
                "`{method}` call count mismatch: expected {expected}, actual {actual}"
            )))
        }
    }

    /// Fail unless the most recent call to `method` was made with `expected`.
    ///
    /// Only the last call is compared; earlier calls with other arguments do
    /// not matter.
    ///
    /// ```rust
    /// use testkit::mock::MockTracker;
    ///
    /// let mut tracker = MockTracker::new();
    /// tracker.record("ping");
    /// tracker.record_args("send", ["a", "b"]);
    ///
    /// assert!(tracker.assert_called_with("ping", &[]).is_ok());
    /// assert!(tracker.assert_called_with("send", &["a", "b"]).is_ok());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::AssertionFailed`] if `method` was never called, if the
    /// argument counts differ, or at the first argument that differs.
    pub fn assert_called_with(&self, method: &str, expected: &[&str]) -> Result<()> {
        let Some(call) = self.last_call(method) else {
            return Err(Error::assertion(format!(
                "expected `{method}` to be called with [{}], but it was never called",
                expected.join(", ")
            )));
        };

        if call.args.len() != expected.len() {
            return Err(Error::assertion(format!(
                "`{method}` argument count mismatch: expected {} argument(s), actual {} in {call}",
                expected.len(),
                call.args.len()
            )));
        }

        for (index, (actual, &expected)) in call.args.iter().zip(expected).enumerate() {
            if actual != expected {
                return Err(Error::assertion(format!(
                    "`{method}` argument {index} mismatch: expected \"{expected}\", actual \"{actual}\""
                )));
            }
        }

        Ok(())
    }
}
