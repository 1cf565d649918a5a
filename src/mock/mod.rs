//! Call-tracking mocks and scripted spies.
//!
//! - [`MockTracker`] - Ordered call log with queries and assertions
//! - [`CallRecord`] - One recorded call
//! - [`MockReturn`] - Saturating queue of scripted return values
//! - [`Spy`] - Tracker plus per-method string returns behind one call surface
//!
//! None of these types are synchronized. Create one per test.
//!
//! # Hand-written Mocks
//!
//! ```rust
//! use testkit::mock::{MockReturn, MockTracker};
//!
//! trait UserStore {
//!     fn find(&mut self, id: &str) -> Option<String>;
//! }
//!
//! struct MockStore {
//!     tracker: MockTracker,
//!     found: MockReturn<Option<String>>,
//! }
//!
//! impl UserStore for MockStore {
//!     fn find(&mut self, id: &str) -> Option<String> {
//!         self.tracker.record_with("find", id);
//!         self.found.next()
//!     }
//! }
//!
//! let mut store = MockStore {
//!     tracker: MockTracker::new(),
//!     found: MockReturn::new(None).with_returns([Some("ada".to_string())]),
//! };
//!
//! assert_eq!(store.find("1"), Some("ada".to_string()));
//! assert_eq!(store.find("2"), None);
//! store.tracker.assert_called_with("find", &["2"]).unwrap();
//! ```

mod returns;
mod spy;
mod tracker;

pub use returns::MockReturn;
pub use spy::Spy;
pub use tracker::{CallRecord, MockTracker};
