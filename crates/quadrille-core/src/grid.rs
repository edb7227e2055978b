//! Immutable square grid of puzzle cell values.

use crate::{SideLength, StructuralError};

/// An immutable N×N grid of cell values.
///
/// A grid is created once, by [`parse`](crate::parse()) from text rows or
/// by [`Grid::from_rows`] from already-split integers, and never mutated
/// afterwards. Construction guarantees the grid is square with a
/// perfect-square side and that no cell exceeds N. A cell may hold 0,
/// which is never a legal occupied value; constraint validation rejects it.
///
/// # Examples
///
/// ```
/// use quadrille_core::Grid;
///
/// let grid = Grid::from_rows(&[
///     vec![1, 4, 2, 3],
///     vec![2, 3, 1, 4],
///     vec![4, 2, 3, 1],
///     vec![3, 1, 4, 2],
/// ])?;
/// assert_eq!(grid.side().get(), 4);
/// assert_eq!(grid.value(2, 0), 4);
/// # Ok::<(), quadrille_core::StructuralError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    side: SideLength,
    cells: Vec<u32>,
}

impl Grid {
    /// Builds a grid from rows of integers.
    ///
    /// The first row's length establishes the reference length N; every
    /// row must have exactly N values, there must be exactly N rows, and
    /// no value may exceed N.
    ///
    /// # Errors
    ///
    /// Returns [`StructuralError::NotPerfectSquare`] if the first row's
    /// length is not a perfect square greater than 1,
    /// [`StructuralError::RowLengthMismatch`] for a row of differing
    /// length, [`StructuralError::OutOfRangeCell`] for a value above N,
    /// and [`StructuralError::RowCountMismatch`] if the number of rows
    /// differs from N.
    pub fn from_rows(rows: &[Vec<u32>]) -> Result<Self, StructuralError> {
        let columns = rows.first().map_or(0, Vec::len);
        let side = SideLength::new(columns)
            .ok_or(StructuralError::NotPerfectSquare { columns })?;
        let expected = side.get();

        let mut cells = Vec::with_capacity(expected * expected);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != expected {
                return Err(StructuralError::RowLengthMismatch {
                    row,
                    actual: values.len(),
                    expected,
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if !fits(value, expected) {
                    return Err(StructuralError::OutOfRangeCell {
                        row,
                        col,
                        value: i64::from(value),
                    });
                }
            }
            cells.extend_from_slice(values);
        }
        if rows.len() != expected {
            return Err(StructuralError::RowCountMismatch {
                rows: rows.len(),
                expected,
            });
        }

        Ok(Self { side, cells })
    }

    pub(crate) fn from_parts(side: SideLength, cells: Vec<u32>) -> Self {
        debug_assert_eq!(cells.len(), side.get() * side.get());
        Self { side, cells }
    }

    /// Returns the validated side length.
    #[must_use]
    pub const fn side(&self) -> SideLength {
        self.side
    }

    /// Returns the value at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside `0..N`.
    #[must_use]
    pub fn value(&self, row: usize, col: usize) -> u32 {
        let n = self.side.get();
        assert!(
            row < n && col < n,
            "cell ({row}, {col}) is outside a {n}x{n} grid"
        );
        self.cells[row * n + col]
    }
}

fn fits(value: u32, side: usize) -> bool {
    usize::try_from(value).is_ok_and(|value| value <= side)
}
