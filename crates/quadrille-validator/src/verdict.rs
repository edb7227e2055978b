//! Verdict assembly: parsing and validation folded into one outcome.

use quadrille_core::{Grid, parse};

use crate::constraint::validate;

/// The outcome of checking one candidate solution.
///
/// Carries the boolean result plus ordered diagnostics explaining the
/// first structural or constraint failure, or confirming success. Verdicts
/// are plain data: nothing is printed, and the caller decides what to do
/// with the messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    valid: bool,
    diagnostics: Vec<String>,
}

impl Verdict {
    /// Reports whether the solution checked out.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns the diagnostics in the order they were produced.
    #[must_use]
    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }
}

/// Checks a candidate solution given as comma-separated text rows.
///
/// Runs the structural pass and, if it succeeds, the constraint pass. The
/// verdict for a given input is deterministic: re-running reports the same
/// result and the same first violation.
///
/// # Examples
///
/// ```
/// use quadrille_validator::check;
///
/// let verdict = check(["1,4,2,3", "2,3,1,4", "4,2,3,1", "3,1,4,2"]);
/// assert!(verdict.is_valid());
///
/// let verdict = check(["1,2,3", "4,5,6", "7,8,9"]);
/// assert!(!verdict.is_valid());
/// ```
pub fn check<I, S>(rows: I) -> Verdict
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    match parse(rows) {
        Ok(grid) => check_grid(&grid),
        Err(error) => {
            log::debug!("structural check failed: {error}");
            Verdict {
                valid: false,
                diagnostics: vec![error.to_string()],
            }
        }
    }
}

/// Checks an already-constructed grid against the uniqueness constraints.
#[must_use]
pub fn check_grid(grid: &Grid) -> Verdict {
    match validate(grid) {
        Ok(()) => Verdict {
            valid: true,
            diagnostics: vec![String::from(
                "every row, column, and sub-square holds each value exactly once",
            )],
        },
        Err(error) => Verdict {
            valid: false,
            diagnostics: vec![error.to_string()],
        },
    }
}

#[cfg(test)]
mod tests {
    use quadrille_core::StructuralError;

    use super::*;
    use crate::ConstraintError;

    #[test]
    fn confirms_a_valid_solution() {
        let verdict = check(["1,4,2,3", "2,3,1,4", "4,2,3,1", "3,1,4,2"]);
        assert!(verdict.is_valid());
        assert_eq!(
            verdict.diagnostics(),
            ["every row, column, and sub-square holds each value exactly once"]
        );
    }

    #[test]
    fn reports_a_row_duplicate() {
        let verdict = check(["1,4,2,4", "2,3,1,4", "4,2,3,1", "3,1,4,2"]);
        assert!(!verdict.is_valid());
        let expected = ConstraintError::DuplicateInRow {
            row: 0,
            col: 3,
            value: 4,
        };
        assert_eq!(verdict.diagnostics(), [expected.to_string()]);
    }

    #[test]
    fn reports_a_non_square_side() {
        let verdict = check(["1,2,3", "4,5,6", "7,8,9"]);
        assert!(!verdict.is_valid());
        let expected = StructuralError::NotPerfectSquare { columns: 3 };
        assert_eq!(verdict.diagnostics(), [expected.to_string()]);
    }

    #[test]
    fn reports_a_missing_row() {
        let verdict = check(["1,4,2,3", "2,3,1,4", "4,2,3,1"]);
        assert!(!verdict.is_valid());
        let expected = StructuralError::RowCountMismatch {
            rows: 3,
            expected: 4,
        };
        assert_eq!(verdict.diagnostics(), [expected.to_string()]);
    }

    #[test]
    fn reports_a_sub_square_duplicate_last() {
        // Rows and columns are complete; only the sub-square scan fails.
        let rows: Vec<String> = (0..9)
            .map(|row| {
                (0..9)
                    .map(|col| ((row + col) % 9 + 1).to_string())
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect();
        let verdict = check(&rows);
        assert!(!verdict.is_valid());
        let expected = ConstraintError::DuplicateInSubSquare {
            anchor_row: 0,
            anchor_col: 0,
            row: 1,
            col: 0,
            value: 2,
        };
        assert_eq!(verdict.diagnostics(), [expected.to_string()]);
    }

    #[test]
    fn checking_twice_yields_the_same_verdict() {
        let rows = ["1,4,2,4", "2,3,1,4", "4,2,3,1", "3,1,4,2"];
        assert_eq!(check(rows), check(rows));
    }

    #[test]
    fn rejects_empty_input() {
        let rows: [&str; 0] = [];
        let verdict = check(rows);
        assert!(!verdict.is_valid());
    }
}
