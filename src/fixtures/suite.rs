//! Pass/fail bookkeeping around a shared [`TestContext`].

use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use super::context::TestContext;
use crate::error::{Error, Result};

/// A failed test inside a [`TestSuite`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestFailure {
    /// Name passed to [`TestSuite::run`].
    pub name: String,
    /// Assertion message or panic payload.
    pub message: String,
}

/// Counts reported by [`TestSuite::summary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteSummary {
    /// Suite name.
    pub name: String,
    /// Tests that returned `Ok`.
    pub passed: usize,
    /// Tests that returned `Err` or panicked.
    pub failed: usize,
}

impl fmt::Display for SuiteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} passed, {} failed",
            self.name, self.passed, self.failed
        )
    }
}

/// Runs named checks against one shared context and tallies the outcome.
///
/// # Example
///
/// ```rust
/// use testkit::assertions::assert_equal;
/// use testkit::fixtures::TestSuite;
///
/// let mut suite = TestSuite::new("settings");
///
/// suite.run("stores value", |ctx| {
///     ctx.set("theme", "dark");
///     assert_equal(Some("dark"), ctx.get("theme"))
/// });
/// suite.run("sees earlier value", |ctx| assert_equal(Some("light"), ctx.get("theme")));
///
/// assert_eq!(suite.passed(), 1);
/// assert_eq!(suite.failed(), 1);
/// assert_eq!(suite.summary().to_string(), "settings: 1 passed, 1 failed");
/// ```
#[derive(Debug)]
pub struct TestSuite {
    context: TestContext,
    passed: usize,
    failures: Vec<TestFailure>,
}

impl TestSuite {
    /// Create a suite whose context is already set up.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let mut context = TestContext::new(name);
        context.setup();
        Self {
            context,
            passed: 0,
            failures: Vec::new(),
        }
    }

    /// Suite name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.context.name()
    }

    /// Run one check. Returns `true` if it passed.
    ///
    /// An `Err` or a panic inside `test` counts as a failure; neither escapes.
    pub fn run<F>(&mut self, name: &str, test: F) -> bool
    where
        F: FnOnce(&mut TestContext) -> Result<()>,
    {
        let context = &mut self.context;
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| test(context)))
            .unwrap_or_else(|payload| Err(Error::assertion(panic_message(payload.as_ref()))));

        match outcome {
            Ok(()) => {
                self.passed += 1;
                tracing::debug!(suite = %self.context.name(), test = name, "passed");
                true
            }
            Err(err) => {
                tracing::warn!(suite = %self.context.name(), test = name, error = %err, "failed");
                self.failures.push(TestFailure {
                    name: name.to_string(),
                    message: err.message().to_string(),
                });
                false
            }
        }
    }

    /// Number of passed checks.
    #[must_use]
    pub fn passed(&self) -> usize {
        self.passed
    }

    /// Number of failed checks.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Number of checks run.
    #[must_use]
    pub fn total(&self) -> usize {
        self.passed + self.failures.len()
    }

    /// Returns `true` if no check failed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// Failed checks in the order they ran.
    #[must_use]
    pub fn failures(&self) -> &[TestFailure] {
        &self.failures
    }

    /// The shared context.
    #[must_use]
    pub fn context(&self) -> &TestContext {
        &self.context
    }

    /// The shared context, mutably.
    pub fn context_mut(&mut self) -> &mut TestContext {
        &mut self.context
    }

    /// Current counts.
    #[must_use]
    pub fn summary(&self) -> SuiteSummary {
        SuiteSummary {
            name: self.context.name().to_string(),
            passed: self.passed,
            failed: self.failures.len(),
        }
    }

    /// Tear down the context and report the outcome.
    ///
    /// # Errors
    ///
    /// Returns an assertion failure listing the failed checks, if any.
    pub fn finish(mut self) -> Result<SuiteSummary> {
        self.context.teardown();
        let summary = self.summary();
        tracing::info!(%summary, "suite finished");

        if self.failures.is_empty() {
            return Ok(summary);
        }

        let details = self
            .failures
            .iter()
            .map(|failure| format!("  {}: {}", failure.name, failure.message))
            .collect::<Vec<_>>()
            .join("\n");
        Err(Error::assertion(format!("{summary}\n{details}")))
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("panicked: {message}")
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("panicked: {message}")
    } else {
        "panicked".to_string()
    }
}
