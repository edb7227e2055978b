//! Per-scan tracking of already-seen cell values.

use crate::SideLength;

/// A scratch set recording which values in `1..=N` a scan has already seen.
///
/// Trackers are cheap and short-lived: each row, column, or sub-square scan
/// allocates a fresh one, so no seen-state can leak from one scan group
/// into the next.
///
/// # Examples
///
/// ```
/// use quadrille_core::{SideLength, ValueTracker};
///
/// let side = SideLength::new(4).unwrap();
/// let mut seen = ValueTracker::new(side);
///
/// assert!(seen.insert(3));
/// assert!(!seen.insert(3));
/// ```
#[derive(Debug, Clone)]
pub struct ValueTracker {
    seen: Vec<bool>,
}

impl ValueTracker {
    /// Creates an empty tracker for values `1..=side`.
    #[must_use]
    pub fn new(side: SideLength) -> Self {
        Self {
            seen: vec![false; side.get()],
        }
    }

    /// Records `value` as seen and reports whether it was new.
    ///
    /// Returns `false` if this tracker has already recorded the value.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not between 1 and N.
    pub fn insert(&mut self, value: u32) -> bool {
        let index = usize::try_from(value)
            .ok()
            .and_then(|value| value.checked_sub(1))
            .filter(|&index| index < self.seen.len());
        let Some(index) = index else {
            panic!(
                "value must be between 1 and {}, got {value}",
                self.seen.len()
            );
        };
        if self.seen[index] {
            false
        } else {
            self.seen[index] = true;
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn side() -> SideLength {
        SideLength::new(4).unwrap()
    }

    #[test]
    fn records_each_value_once() {
        let mut seen = ValueTracker::new(side());
        for value in 1..=4 {
            assert!(seen.insert(value));
        }
        for value in 1..=4 {
            assert!(!seen.insert(value));
        }
    }

    #[test]
    fn fresh_tracker_starts_empty() {
        let mut seen = ValueTracker::new(side());
        assert!(seen.insert(2));

        let mut fresh = ValueTracker::new(side());
        assert!(fresh.insert(2));
    }

    #[test]
    #[should_panic(expected = "value must be between 1 and 4")]
    fn rejects_zero() {
        let mut seen = ValueTracker::new(side());
        seen.insert(0);
    }

    #[test]
    #[should_panic(expected = "value must be between 1 and 4")]
    fn rejects_values_above_side() {
        let mut seen = ValueTracker::new(side());
        seen.insert(5);
    }
}
