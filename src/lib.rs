//! # testkit 🧰
//!
//! > Small, synchronous testing tools for Rust
//!
//! **testkit** provides call-tracking mocks, scripted spies, assertion
//! predicates and fixtures for in-process tests.
//!
//! ## Quick Start
//!
//! ```rust
//! use testkit::prelude::*;
//!
//! fn notify(spy: &mut Spy, user: &str) -> String {
//!     spy.call_with("send", user)
//! }
//!
//! # fn main() -> testkit::Result<()> {
//! let mut spy = Spy::new();
//! spy.returns("send").add_return("queued");
//!
//! assert_eq!(notify(&mut spy, "ada"), "queued");
//! spy.assert_called_with("send", &["ada"])?;
//! assert_contains(&spy.last_call("send").unwrap().to_string(), "ada")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - 📒 **Mock Tracker** - Ordered call log with queries and assertions
//! - 🎬 **Mock Returns** - Scripted values that fall back to a default
//! - 🕵️ **Spy** - Call tracking and scripted responses in one place
//! - ✅ **Assertions** - Predicates that report expected vs. actual
//! - 🧪 **Fixtures** - Shared context, temporary swaps, sequential data
//!
//! Everything here is single-threaded: mutation goes through `&mut self` and
//! no type is internally synchronized. Build fresh instances per test.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod assertions;
pub mod error;
pub mod fixtures;
pub mod mock;

/// Prelude for convenient imports
///
/// ```rust
/// use testkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::error::{Error, Result};
    pub use crate::fixtures::{TempSwap, TestContext, TestData, TestSuite};
    pub use crate::mock::{CallRecord, MockReturn, MockTracker, Spy};
}

// Re-exports
pub use error::{Error, Result};
pub use mock::{CallRecord, MockReturn, MockTracker, Spy};

// Re-export the test macro when macros feature is enabled
#[cfg(feature = "macros")]
pub use testkit_macros::test;
