//! Validated side length of a square puzzle grid.

use std::fmt::{self, Display};

/// The side length N of a square puzzle grid.
///
/// A usable side length is a perfect square greater than 1: the grid must
/// tile into √N×√N sub-squares, and 1×1 puzzles are rejected outright. The
/// perfect-square test uses the exact integer square root, so it stays
/// correct for side lengths where a floating-point comparison would start
/// to misclassify.
///
/// # Examples
///
/// ```
/// use quadrille_core::SideLength;
///
/// let side = SideLength::new(9).unwrap();
/// assert_eq!(side.get(), 9);
/// assert_eq!(side.box_size(), 3);
///
/// assert!(SideLength::new(5).is_none());
/// assert!(SideLength::new(1).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SideLength {
    side: usize,
    box_size: usize,
}

impl SideLength {
    /// Creates a side length from a raw column count.
    ///
    /// Returns `None` unless `side` is a perfect square greater than 1.
    #[must_use]
    pub fn new(side: usize) -> Option<Self> {
        if side <= 1 {
            return None;
        }
        let box_size = side.isqrt();
        (box_size * box_size == side).then_some(Self { side, box_size })
    }

    /// Returns the side length N.
    #[must_use]
    pub const fn get(self) -> usize {
        self.side
    }

    /// Returns the side length √N of one sub-square.
    #[must_use]
    pub const fn box_size(self) -> usize {
        self.box_size
    }
}

impl Display for SideLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.side, f)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn accepts_perfect_squares() {
        for (side, box_size) in [(4, 2), (9, 3), (16, 4), (25, 5), (10_000, 100)] {
            let length = SideLength::new(side).unwrap();
            assert_eq!(length.get(), side);
            assert_eq!(length.box_size(), box_size);
        }
    }

    #[test]
    fn rejects_non_squares() {
        for side in [2, 3, 5, 8, 12, 15, 24, 10_001] {
            assert_eq!(SideLength::new(side), None);
        }
    }

    #[test]
    fn rejects_degenerate_sides() {
        assert_eq!(SideLength::new(0), None);
        assert_eq!(SideLength::new(1), None);
    }

    #[test]
    fn displays_as_plain_number() {
        let side = SideLength::new(16).unwrap();
        assert_eq!(side.to_string(), "16");
    }

    proptest! {
        #[test]
        fn squares_of_box_sizes_construct(box_size in 2usize..=1_000) {
            let side = SideLength::new(box_size * box_size).unwrap();
            prop_assert_eq!(side.get(), box_size * box_size);
            prop_assert_eq!(side.box_size(), box_size);
        }

        #[test]
        fn non_squares_never_construct(side in 2usize..=1_000_000) {
            let root = side.isqrt();
            prop_assume!(root * root != side);
            prop_assert_eq!(SideLength::new(side), None);
        }
    }
}
