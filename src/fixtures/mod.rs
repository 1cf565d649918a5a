//! Reusable test setup.
//!
//! - [`TestContext`] - Named key/value store with set-up and tear-down flags
//! - [`TempSwap`] - Swap a value in for one scope, restore it on drop
//! - [`TestData`] - Sequential ids, names and emails plus fixed samples
//! - [`TestSuite`] - Pass/fail counts for checks sharing one context
//!
//! Nothing here depends on the mocks; a test that needs both simply owns a
//! [`MockTracker`](crate::mock::MockTracker) next to its fixtures.

mod context;
mod data;
mod suite;
mod swap;

pub use context::TestContext;
pub use data::{sample_int, sample_string, TestData, SAMPLE_INTS, SAMPLE_NAMES, SAMPLE_STRINGS};
pub use suite::{SuiteSummary, TestFailure, TestSuite};
pub use swap::{swap_temporarily, with_temp_value, TempSwap};
