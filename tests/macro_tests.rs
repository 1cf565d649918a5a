//! Integration tests for the `#[testkit::test]` macro.

#![cfg(feature = "macros")]
// Fixture types appear only in signatures, which the macro rewrites
#![allow(unused_imports)]

use testkit::fixtures::{TestContext, TestData};
use testkit::mock::{MockTracker, Spy};

/// Basic test without injection.
#[testkit::test]
fn test_basic() {
    assert_eq!(2 + 2, 4);
}

/// Tracker injection.
#[testkit::test]
fn test_with_tracker(mut tracker: MockTracker) {
    assert_eq!(tracker.total_calls(), 0);

    tracker.record("ping");
    assert!(tracker.was_called("ping"));
}

/// Spy injection with a Result-returning body.
#[testkit::test]
fn test_with_spy(mut spy: Spy) -> testkit::Result<()> {
    spy.returns("find").add_return("ada");

    assert_eq!(spy.call_with("find", "1"), "ada");
    spy.assert_called_with("find", &["1"])
}

/// Each test gets its own spy; nothing recorded above is visible here.
#[testkit::test]
fn test_spy_is_fresh(spy: Spy) {
    assert!(spy.was_not_called("find"));
    assert_eq!(spy.total_calls(), 0);
}

/// Context defaults to the function name and starts set up.
#[testkit::test]
fn test_context_default_name(ctx: TestContext) {
    assert_eq!(ctx.name(), "test_context_default_name");
    assert!(ctx.is_setup());
    assert!(ctx.is_empty());
}

/// Configured context name and data start.
#[testkit::test(context = "checkout", data_start = 100)]
fn test_options(mut ctx: TestContext, mut data: TestData) {
    assert_eq!(ctx.name(), "checkout");
    ctx.set("order", data.next_string("order"));

    assert_eq!(ctx.get("order"), Some("order-101"));
}

/// Several fixtures at once.
#[testkit::test]
fn test_multiple_fixtures(mut tracker: MockTracker, mut spy: Spy, mut data: TestData) {
    let id = data.next_id().to_string();
    tracker.record_with("load", id.clone());
    spy.call_with("load", id);

    assert_eq!(tracker.get_args("load", 0), spy.get_args("load", 0));
}

/// The largest start value wraps instead of overflowing.
#[testkit::test(data_start = 18446744073709551615)]
fn test_data_start_max(mut data: TestData) {
    assert_eq!(data.current(), u64::MAX);
    assert_eq!(data.next_id(), 0);
}
