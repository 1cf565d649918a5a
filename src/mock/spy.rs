// Allow must_use_candidate since spy methods often have useful side effects
#![allow(clippy::must_use_candidate)]

//! Spies: call tracking plus scripted responses.
//!
//! A [`Spy`] records every call on an internal [`MockTracker`] and answers
//! each call from a per-method [`MockReturn`] queue.
//!
//! # Example
//!
//! ```rust
//! use testkit::mock::Spy;
//!
//! let mut spy = Spy::new();
//! spy.returns("get_config").add_return("debug=true");
//! spy.returns("get_config").add_return("debug=false");
//!
//! assert_eq!(spy.call("get_config"), "debug=true");
//! assert_eq!(spy.call("get_config"), "debug=false");
//! assert_eq!(spy.call("get_config"), "");
//! assert_eq!(spy.call_count("get_config"), 3);
//! ```

use std::collections::HashMap;

use super::returns::MockReturn;
use super::tracker::{CallRecord, MockTracker};
use crate::error::Result;

/// A mock that records calls and returns scripted string values.
///
/// Methods without configured returns answer with an empty string but are
/// still recorded.
#[derive(Debug, Default, Clone)]
pub struct Spy {
    tracker: MockTracker,
    returns: HashMap<String, MockReturn<String>>,
}

impl Spy {
    /// Create a spy with no recorded calls and no scripted returns.
    pub fn new() -> Self {
        Self::default()
    }

    /// The return queue for `method`, created empty on first access.
    ///
    /// Every access with the same name yields the same queue, so values added
    /// through one handle are seen by later calls.
    pub fn returns(&mut self, method: &str) -> &mut MockReturn<String> {
        self.returns.entry(method.to_string()).or_default()
    }

    /// Call `method` with no arguments.
    pub fn call(&mut self, method: &str) -> String {
        self.call_with_args(method, std::iter::empty::<String>())
    }

    /// Call `method` with a single argument.
    pub fn call_with(&mut self, method: &str, arg: impl Into<String>) -> String {
        self.call_with_args(method, std::iter::once(arg))
    }

    /// Call `method` with any number of arguments.
    ///
    /// The call is recorded before the return value is looked up.
    pub fn call_with_args<I, S>(&mut self, method: &str, args: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tracker.record_args(method, args);
        self.returns
            .get_mut(method)
            .map(MockReturn::next)
            .unwrap_or_default()
    }

    /// The underlying call log.
    pub fn tracker(&self) -> &MockTracker {
        &self.tracker
    }

    /// Returns `true` if `method` was called at least once.
    pub fn was_called(&self, method: &str) -> bool {
        self.tracker.was_called(method)
    }

    /// Returns `true` if `method` was never called.
    pub fn was_not_called(&self, method: &str) -> bool {
        self.tracker.was_not_called(method)
    }

    /// Number of calls made to `method`.
    pub fn call_count(&self, method: &str) -> usize {
        self.tracker.call_count(method)
    }

    /// Number of calls made to any method.
    pub fn total_calls(&self) -> usize {
        self.tracker.total_calls()
    }

    /// The most recent call made to `method`.
    pub fn last_call(&self, method: &str) -> Option<&CallRecord> {
        self.tracker.last_call(method)
    }

    /// Arguments of the `index`-th call to `method`.
    pub fn get_args(&self, method: &str, index: usize) -> Vec<String> {
        self.tracker.get_args(method, index)
    }

    /// See [`MockTracker::assert_called`].
    ///
    /// # Errors
    ///
    /// Returns an assertion failure if `method` was never called.
    pub fn assert_called(&self, method: &str) -> Result<()> {
        self.tracker.assert_called(method)
    }

    /// See [`MockTracker::assert_not_called`].
    ///
    /// # Errors
    ///
    /// Returns an assertion failure if `method` was called.
    pub fn assert_not_called(&self, method: &str) -> Result<()> {
        self.tracker.assert_not_called(method)
    }

    /// See [`MockTracker::assert_called_times`].
    ///
    /// # Errors
    ///
    /// Returns an assertion failure if the call count differs.
    pub fn assert_called_times(&self, method: &str, expected: usize) -> Result<()> {
        self.tracker.assert_called_times(method, expected)
    }

    /// See [`MockTracker::assert_called_with`].
    ///
    /// # Errors
    ///
    /// Returns an assertion failure if the last call's arguments differ.
    pub fn assert_called_with(&self, method: &str, expected: &[&str]) -> Result<()> {
        self.tracker.assert_called_with(method, expected)
    }

    /// Forget every recorded call and rewind every return queue.
    ///
    /// Scripted values stay configured and replay from the start.
    pub fn reset(&mut self) {
        self.tracker.clear();
        for returns in self.returns.values_mut() {
            returns.reset();
        }
        tracing::debug!(queues = self.returns.len(), "reset spy");
    }
}
