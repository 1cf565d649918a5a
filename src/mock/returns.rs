//! Scripted return values.
//!
//! [`MockReturn`] hands out queued values in order, then falls back to a
//! default forever. Production code often calls a dependency more times than
//! a test scripts; the extra calls quietly get the default.

/// A saturating queue of return values for one mocked method.
///
/// # Example
///
/// ```rust
/// use testkit::mock::MockReturn;
///
/// let mut returns = MockReturn::new(0);
/// returns.add_return(42);
///
/// assert_eq!(returns.next(), 42);
/// assert_eq!(returns.next(), 0);
/// assert_eq!(returns.next(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockReturn<T> {
    queue: Vec<T>,
    default: T,
    cursor: usize,
}

impl<T> MockReturn<T> {
    /// Create an empty queue that yields `default` once exhausted.
    pub fn new(default: T) -> Self {
        Self {
            queue: Vec::new(),
            default,
            cursor: 0,
        }
    }

    /// Append scripted values in order.
    ///
    /// ```rust
    /// use testkit::mock::MockReturn;
    ///
    /// let mut returns = MockReturn::new(-1).with_returns([1, 2]);
    /// assert_eq!(returns.next(), 1);
    /// ```
    #[must_use]
    pub fn with_returns<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<T>,
    {
        self.queue.extend(values.into_iter().map(Into::into));
        self
    }

    /// Replace the fallback value used once the queue is exhausted.
    pub fn set_default(&mut self, value: impl Into<T>) -> &mut Self {
        self.default = value.into();
        self
    }

    /// The current fallback value.
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Append a value to the end of the queue.
    pub fn add_return(&mut self, value: impl Into<T>) -> &mut Self {
        self.queue.push(value.into());
        self
    }

    /// Number of scripted values not yet handed out.
    pub fn remaining(&self) -> usize {
        self.queue.len() - self.cursor
    }

    /// Returns `true` once every scripted value has been handed out.
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.queue.len()
    }

    /// Number of scripted values, consumed or not.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns `true` if no values have been scripted.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Rewind to the first scripted value.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Drop every scripted value. The default is kept.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.cursor = 0;
    }
}

impl<T: Clone> MockReturn<T> {
    /// Hand out the next scripted value, or the default when none remain.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> T {
        match self.queue.get(self.cursor) {
            Some(value) => {
                self.cursor += 1;
                tracing::trace!(position = self.cursor, "returned scripted value");
                value.clone()
            }
            None => self.default.clone(),
        }
    }
}

impl<T: Default> Default for MockReturn<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturates_at_default() {
        let mut returns = MockReturn::new(0);
        returns.add_return(42);

        assert_eq!(returns.next(), 42);
        assert_eq!(returns.next(), 0);
        assert_eq!(returns.next(), 0);
        assert!(returns.is_exhausted());
    }

    #[test]
    fn test_fifo_then_default() {
        let mut returns = MockReturn::new("d".to_string());
        returns.add_return("v1").add_return("v2");

        assert_eq!(returns.next(), "v1");
        assert_eq!(returns.next(), "v2");
        assert_eq!(returns.next(), "d");
    }

    #[test]
    fn test_reset_replays() {
        let mut returns = MockReturn::new(0).with_returns([1, 2]);

        assert_eq!(returns.next(), 1);
        assert_eq!(returns.next(), 2);
        returns.reset();

        assert_eq!(returns.remaining(), 2);
        assert_eq!(returns.next(), 1);
    }

    #[test]
    fn test_clear_keeps_default() {
        let mut returns = MockReturn::new(7).with_returns([1, 2]);
        returns.next();
        returns.clear();

        assert!(returns.is_empty());
        assert_eq!(returns.next(), 7);
        assert_eq!(*returns.default_value(), 7);
    }

    #[test]
    fn test_set_default_affects_later_reads_only() {
        let mut returns = MockReturn::new(1);

        assert_eq!(returns.next(), 1);
        returns.set_default(2);
        assert_eq!(returns.next(), 2);
    }

    #[test]
    fn test_add_after_exhaustion() {
        let mut returns = MockReturn::new(0);
        returns.add_return(1);
        returns.next();
        returns.next();

        // the cursor never moved past the end, so new values are reachable
        returns.add_return(2);
        assert_eq!(returns.remaining(), 1);
        assert_eq!(returns.next(), 2);
    }

    #[test]
    fn test_default_impl() {
        let mut returns: MockReturn<String> = MockReturn::default();
        assert_eq!(returns.next(), "");
        assert_eq!(returns.len(), 0);
    }
}
