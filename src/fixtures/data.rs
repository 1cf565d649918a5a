//! Deterministic test data.
//!
//! [`TestData`] hands out sequential ids, names and emails from one counter,
//! so two runs of the same test always see the same values. Fixed samples
//! cover the cases where a test just needs "some string" or "some number".

/// Sample strings, including edge cases.
pub const SAMPLE_STRINGS: &[&str] = &["alpha", "beta", "gamma", "", " ", "ünïcødé", "with space"];

/// Sample integers, including boundaries.
pub const SAMPLE_INTS: &[i64] = &[0, 1, -1, 42, i64::MAX, i64::MIN];

/// Sample person names.
pub const SAMPLE_NAMES: &[&str] = &["Ada Lovelace", "Grace Hopper", "Alan Turing", "Barbara Liskov"];

/// The sample string at `index`, wrapping around.
#[must_use]
pub fn sample_string(index: usize) -> &'static str {
    SAMPLE_STRINGS[index % SAMPLE_STRINGS.len()]
}

/// The sample integer at `index`, wrapping around.
#[must_use]
pub fn sample_int(index: usize) -> i64 {
    SAMPLE_INTS[index % SAMPLE_INTS.len()]
}

/// Sequential generator for ids, names and emails.
///
/// # Example
///
/// ```rust
/// use testkit::fixtures::TestData;
///
/// let mut data = TestData::new().with_prefix("user").with_email_domain("test.local");
///
/// assert_eq!(data.next_id(), 1);
/// assert_eq!(data.next_name(), "user_2");
/// assert_eq!(data.next_email(), "user3@test.local");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestData {
    start: u64,
    counter: u64,
    prefix: String,
    email_domain: String,
}

impl Default for TestData {
    fn default() -> Self {
        Self {
            start: 0,
            counter: 0,
            prefix: "test".to_string(),
            email_domain: "example.com".to_string(),
        }
    }
}

impl TestData {
    /// Create a generator starting at zero with prefix `test`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting from `start`; the first generated value uses `start + 1`,
    /// wrapping to 0 after `u64::MAX`.
    #[must_use]
    pub fn with_start(mut self, start: u64) -> Self {
        self.start = start;
        self.counter = start;
        self
    }

    /// Prefix used for names and emails.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Domain used for emails.
    #[must_use]
    pub fn with_email_domain(mut self, domain: impl Into<String>) -> Self {
        self.email_domain = domain.into();
        self
    }

    // wraps to 0 after u64::MAX
    fn advance(&mut self) -> u64 {
        self.counter = self.counter.wrapping_add(1);
        self.counter
    }

    /// The next sequential id.
    pub fn next_id(&mut self) -> u64 {
        self.advance()
    }

    /// The next name, `{prefix}_{n}`.
    pub fn next_name(&mut self) -> String {
        let n = self.advance();
        format!("{}_{n}", self.prefix)
    }

    /// The next email, `{prefix}{n}@{domain}`.
    pub fn next_email(&mut self) -> String {
        let n = self.advance();
        format!("{}{n}@{}", self.prefix, self.email_domain)
    }

    /// The next string with a caller-chosen prefix, `{prefix}-{n}`.
    pub fn next_string(&mut self, prefix: &str) -> String {
        let n = self.advance();
        format!("{prefix}-{n}")
    }

    /// The last value handed out, or the start value if none yet.
    #[must_use]
    pub fn current(&self) -> u64 {
        self.counter
    }

    /// Rewind to the configured start.
    pub fn reset(&mut self) {
        tracing::debug!(from = self.counter, to = self.start, "reset test data counter");
        self.counter = self.start;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_counter() {
        let mut data = TestData::new();

        assert_eq!(data.next_id(), 1);
        assert_eq!(data.next_name(), "test_2");
        assert_eq!(data.next_email(), "test3@example.com");
        assert_eq!(data.next_string("order"), "order-4");
        assert_eq!(data.current(), 4);
    }

    #[test]
    fn test_with_start_and_reset() {
        let mut data = TestData::new().with_start(100);

        assert_eq!(data.current(), 100);
        assert_eq!(data.next_id(), 101);
        assert_eq!(data.next_id(), 102);

        data.reset();
        assert_eq!(data.next_id(), 101);
    }

    #[test]
    fn test_counter_wraps_at_max() {
        let mut data = TestData::new().with_start(u64::MAX);

        assert_eq!(data.next_id(), 0);
        assert_eq!(data.next_name(), "test_1");

        data.reset();
        assert_eq!(data.current(), u64::MAX);
    }

    #[test]
    fn test_deterministic_across_instances() {
        let mut a = TestData::new().with_prefix("p");
        let mut b = TestData::new().with_prefix("p");

        let first: Vec<String> = (0..3).map(|_| a.next_name()).collect();
        let second: Vec<String> = (0..3).map(|_| b.next_name()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_samples_wrap() {
        assert_eq!(sample_string(0), "alpha");
        assert_eq!(sample_string(SAMPLE_STRINGS.len()), "alpha");
        assert_eq!(sample_int(3), 42);
        assert_eq!(sample_int(SAMPLE_INTS.len() + 1), 1);
        assert_eq!(SAMPLE_NAMES.len(), 4);
    }
}
