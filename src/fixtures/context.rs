//! Shared key/value context for a test.

use std::collections::HashMap;

/// A named store of string values with set-up and tear-down flags.
///
/// # Example
///
/// ```rust
/// use testkit::fixtures::TestContext;
///
/// let mut ctx = TestContext::new("checkout");
/// ctx.setup();
/// ctx.set("user", "ada");
///
/// assert_eq!(ctx.get("user"), Some("ada"));
/// assert_eq!(ctx.get_or("cart", "empty"), "empty");
///
/// ctx.teardown();
/// assert!(ctx.is_empty());
/// assert!(ctx.is_torn_down());
/// ```
#[derive(Debug, Default, Clone)]
pub struct TestContext {
    name: String,
    values: HashMap<String, String>,
    setup: bool,
    torn_down: bool,
}

impl TestContext {
    /// Create an empty context.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The context name, usually the test it belongs to.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Store `value` under `key`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// The value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// The value stored under `key`, or `fallback` when absent.
    #[must_use]
    pub fn get_or(&self, key: &str, fallback: &str) -> String {
        self.get(key).unwrap_or(fallback).to_string()
    }

    /// Returns `true` if a value is stored under `key`.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Remove and return the value stored under `key`.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    /// All keys in sorted order.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.values.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Drop every stored value. Lifecycle flags are unchanged.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Mark the context as set up. A torn-down context becomes usable again.
    pub fn setup(&mut self) {
        self.setup = true;
        self.torn_down = false;
        tracing::debug!(context = %self.name, "context set up");
    }

    /// Drop every stored value and mark the context as torn down.
    pub fn teardown(&mut self) {
        self.values.clear();
        self.setup = false;
        self.torn_down = true;
        tracing::debug!(context = %self.name, "context torn down");
    }

    /// Returns `true` between [`setup`](Self::setup) and [`teardown`](Self::teardown).
    #[must_use]
    pub fn is_setup(&self) -> bool {
        self.setup
    }

    /// Returns `true` after [`teardown`](Self::teardown) until the next set-up.
    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}
