//! Temporarily replace a value for the duration of a scope.

use std::mem;
use std::ops::{Deref, DerefMut};

/// Guard that holds a temporary value in a slot and restores the original on drop.
///
/// The original comes back even if the scope unwinds.
///
/// # Example
///
/// ```rust
/// use testkit::fixtures::TempSwap;
///
/// let mut retries = 3;
/// {
///     let mut guard = TempSwap::new(&mut retries, 0);
///     assert_eq!(*guard, 0);
///     assert_eq!(*guard.original(), 3);
///     *guard += 1;
/// }
/// assert_eq!(retries, 3);
/// ```
#[derive(Debug)]
pub struct TempSwap<'a, T> {
    slot: &'a mut T,
    original: T,
}

impl<'a, T> TempSwap<'a, T> {
    /// Put `value` into `slot`, keeping the previous contents aside.
    pub fn new(slot: &'a mut T, value: T) -> Self {
        let original = mem::replace(slot, value);
        Self { slot, original }
    }

    /// The value that will be restored.
    pub fn original(&self) -> &T {
        &self.original
    }
}

impl<T> Deref for TempSwap<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.slot
    }
}

impl<T> DerefMut for TempSwap<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.slot
    }
}

impl<T> Drop for TempSwap<'_, T> {
    fn drop(&mut self) {
        mem::swap(self.slot, &mut self.original);
    }
}

/// Shorthand for [`TempSwap::new`].
pub fn swap_temporarily<T>(slot: &mut T, value: T) -> TempSwap<'_, T> {
    TempSwap::new(slot, value)
}

/// Run `f` with `value` in `slot`, then put the original back.
///
/// ```rust
/// use testkit::fixtures::with_temp_value;
///
/// let mut mode = String::from("prod");
/// let seen = with_temp_value(&mut mode, String::from("test"), |m| m.clone());
///
/// assert_eq!(seen, "test");
/// assert_eq!(mode, "prod");
/// ```
pub fn with_temp_value<T, R>(slot: &mut T, value: T, f: impl FnOnce(&mut T) -> R) -> R {
    let mut guard = TempSwap::new(slot, value);
    f(&mut *guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restores_on_drop() {
        let mut value = vec![1, 2];
        {
            let mut guard = swap_temporarily(&mut value, vec![9]);
            guard.push(10);
            assert_eq!(*guard, vec![9, 10]);
        }
        assert_eq!(value, vec![1, 2]);
    }

    #[test]
    fn test_restores_on_unwind() {
        let mut value = 1;
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = TempSwap::new(&mut value, 2);
            panic!("boom");
        }));

        assert!(result.is_err());
        assert_eq!(value, 1);
    }

    #[test]
    fn test_with_temp_value_returns_result() {
        let mut limit = 10;
        let doubled = with_temp_value(&mut limit, 21, |l| *l * 2);

        assert_eq!(doubled, 42);
        assert_eq!(limit, 10);
    }

    #[test]
    fn test_nested_swaps() {
        let mut name = "outer";
        {
            let mut first = TempSwap::new(&mut name, "first");
            {
                let second = TempSwap::new(&mut *first, "second");
                assert_eq!(*second, "second");
                assert_eq!(*second.original(), "first");
            }
            assert_eq!(*first, "first");
        }
        assert_eq!(name, "outer");
    }
}
