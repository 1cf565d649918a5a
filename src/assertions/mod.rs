//! Assertion predicates.
//!
//! Every function here either returns `Ok` or an
//! [`Error::AssertionFailed`](crate::Error::AssertionFailed) describing the
//! expected and actual values, so checks compose with `?` inside tests that
//! return [`Result`](crate::Result):
//!
//! - [`value`] - equality, booleans, `Option` and `Result`
//! - [`text`] - substrings, prefixes, blank strings
//! - [`collection`] - emptiness, length, membership, predicates over slices
//! - [`numeric`] - ranges, ordering, floating-point tolerance
//!
//! # Example
//!
//! ```rust
//! use testkit::assertions::{assert_contains, assert_equal, assert_len};
//!
//! fn check() -> testkit::Result<()> {
//!     let names = vec!["ada", "grace"];
//!     assert_len(&names, 2)?;
//!     assert_equal("ada", names[0])?;
//!     assert_contains("grace hopper", names[1])?;
//!     Ok(())
//! }
//!
//! check().unwrap();
//! ```

pub mod collection;
pub mod numeric;
pub mod text;
pub mod value;

pub use collection::{
    assert_all, assert_any, assert_contains_item, assert_empty, assert_len, assert_not_empty,
};
pub use numeric::{assert_approx_eq, assert_greater, assert_in_range, assert_less};
pub use text::{
    assert_blank, assert_contains, assert_ends_with, assert_not_blank, assert_not_contains,
    assert_starts_with,
};
pub use value::{
    assert_equal, assert_err, assert_false, assert_none, assert_not_equal, assert_ok, assert_some,
    assert_true,
};
