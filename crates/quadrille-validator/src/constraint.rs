//! Row, column, and sub-square uniqueness checks.

use quadrille_core::{Grid, ValueTracker};

/// Errors detected while checking uniqueness constraints on a parsed grid.
///
/// Row and column indices are zero-based. Validation short-circuits, so a
/// single grid yields at most one of these: the first violation found in
/// row, column, sub-square order.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConstraintError {
    /// The grid failed the defensive shape recheck.
    #[display("grid is not a validatable square")]
    InvalidGrid,
    /// A cell holds 0, which is never a legal occupied value.
    #[display("cell ({row}, {col}) holds 0")]
    ZeroValue {
        /// Row of the zero cell.
        row: usize,
        /// Column of the zero cell.
        col: usize,
    },
    /// A value occurs twice in one row.
    #[display("value {value} repeats in row {row} at column {col}")]
    DuplicateInRow {
        /// Row being scanned.
        row: usize,
        /// Column of the repeated occurrence.
        col: usize,
        /// The repeated value.
        value: u32,
    },
    /// A value occurs twice in one column.
    #[display("value {value} repeats in column {col} at row {row}")]
    DuplicateInColumn {
        /// Row of the repeated occurrence.
        row: usize,
        /// Column being scanned.
        col: usize,
        /// The repeated value.
        value: u32,
    },
    /// A value occurs twice in one √N×√N sub-square.
    #[display(
        "value {value} repeats in the sub-square at ({anchor_row}, {anchor_col}), cell ({row}, {col})"
    )]
    DuplicateInSubSquare {
        /// Top-left row of the sub-square.
        anchor_row: usize,
        /// Top-left column of the sub-square.
        anchor_col: usize,
        /// Row of the repeated occurrence.
        row: usize,
        /// Column of the repeated occurrence.
        col: usize,
        /// The repeated value.
        value: u32,
    },
}

/// Checks that `grid` satisfies the generalized sudoku constraints.
///
/// Every row, every column, and every √N×√N sub-square must contain each
/// value in `1..=N` exactly once. Rows are scanned first, then columns,
/// then sub-squares; the first violation stops the scan and is the one
/// reported.
///
/// # Errors
///
/// Returns the first [`ConstraintError`] found, in scan order.
///
/// # Examples
///
/// ```
/// use quadrille_core::parse;
/// use quadrille_validator::{ConstraintError, validate};
///
/// let grid = parse(["1,4,2,3", "2,3,1,4", "4,2,3,1", "3,1,4,2"])?;
/// assert_eq!(validate(&grid), Ok(()));
/// # Ok::<(), quadrille_core::StructuralError>(())
/// ```
pub fn validate(grid: &Grid) -> Result<(), ConstraintError> {
    if grid.side().get() <= 1 {
        return Err(ConstraintError::InvalidGrid);
    }
    log::debug!("start validating the puzzle");
    check_rows(grid)?;
    check_columns(grid)?;
    check_sub_squares(grid)?;
    Ok(())
}

fn check_rows(grid: &Grid) -> Result<(), ConstraintError> {
    log::debug!("start validating rows");
    let n = grid.side().get();
    for row in 0..n {
        let mut seen = ValueTracker::new(grid.side());
        for col in 0..n {
            let value = grid.value(row, col);
            if value == 0 {
                return violation(ConstraintError::ZeroValue { row, col });
            }
            if !seen.insert(value) {
                return violation(ConstraintError::DuplicateInRow { row, col, value });
            }
        }
    }
    Ok(())
}

fn check_columns(grid: &Grid) -> Result<(), ConstraintError> {
    log::debug!("start validating columns");
    let n = grid.side().get();
    for col in 0..n {
        let mut seen = ValueTracker::new(grid.side());
        for row in 0..n {
            let value = grid.value(row, col);
            if value == 0 {
                return violation(ConstraintError::ZeroValue { row, col });
            }
            if !seen.insert(value) {
                return violation(ConstraintError::DuplicateInColumn { row, col, value });
            }
        }
    }
    Ok(())
}

fn check_sub_squares(grid: &Grid) -> Result<(), ConstraintError> {
    log::debug!("start validating sub-squares");
    let n = grid.side().get();
    let box_size = grid.side().box_size();
    for anchor_row in (0..n).step_by(box_size) {
        for anchor_col in (0..n).step_by(box_size) {
            log::trace!("validating sub-square at ({anchor_row}, {anchor_col})");
            let mut seen = ValueTracker::new(grid.side());
            for row in anchor_row..anchor_row + box_size {
                for col in anchor_col..anchor_col + box_size {
                    let value = grid.value(row, col);
                    if value == 0 {
                        return violation(ConstraintError::ZeroValue { row, col });
                    }
                    if !seen.insert(value) {
                        return violation(ConstraintError::DuplicateInSubSquare {
                            anchor_row,
                            anchor_col,
                            row,
                            col,
                            value,
                        });
                    }
                }
            }
        }
    }
    Ok(())
}

fn violation(error: ConstraintError) -> Result<(), ConstraintError> {
    log::debug!("{error}");
    Err(error)
}
