//! Text-row parsing and dimensional sizing.

use crate::{Grid, SideLength};

/// Column delimiter inside a puzzle row.
const FIELD_DELIMITER: char = ',';

/// Errors detected while sizing and parsing raw puzzle rows.
///
/// Each variant names the first offending position; row and column indices
/// are zero-based. Parsing stops at the first error, so a single input
/// yields at most one of these.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StructuralError {
    /// A row was empty before any splitting took place.
    #[display("row {row} is empty")]
    EmptyLine {
        /// Index of the empty row.
        row: usize,
    },
    /// A row did not split into at least two delimited fields.
    #[display("row {row} has no comma-delimited fields")]
    MalformedRow {
        /// Index of the malformed row.
        row: usize,
    },
    /// The first row's field count cannot be the side of a valid puzzle.
    #[display("{columns} columns is not a perfect square greater than 1")]
    NotPerfectSquare {
        /// Field count of the first row.
        columns: usize,
    },
    /// A row's field count differs from the first row's.
    #[display("row {row} has {actual} columns, expected {expected}")]
    RowLengthMismatch {
        /// Index of the offending row.
        row: usize,
        /// Field count of the offending row.
        actual: usize,
        /// Reference length established by the first row.
        expected: usize,
    },
    /// A field did not parse as an integer.
    #[display("cannot parse the value at row {row}, column {col}")]
    UnparsableCell {
        /// Row of the unparsable field.
        row: usize,
        /// Column of the unparsable field.
        col: usize,
    },
    /// A cell value lies outside `1..=N`.
    #[display("invalid value {value} at row {row}, column {col}")]
    OutOfRangeCell {
        /// Row of the out-of-range value.
        row: usize,
        /// Column of the out-of-range value.
        col: usize,
        /// The offending value.
        value: i64,
    },
    /// The number of rows differs from the reference length.
    #[display("{rows} rows for {expected} columns")]
    RowCountMismatch {
        /// Number of rows consumed.
        rows: usize,
        /// Reference length established by the first row.
        expected: usize,
    },
}

/// Parses an ordered sequence of text rows into a validated [`Grid`].
///
/// Each row is a comma-separated list of ASCII decimal integers, with no
/// whitespace allowance. The first row's field count establishes the
/// reference length N; every later row must match it, every cell must be
/// an integer in `1..=N`, and the total row count must equal N.
///
/// # Errors
///
/// Returns the first [`StructuralError`] encountered, in input order.
///
/// # Examples
///
/// ```
/// use quadrille_core::{StructuralError, parse};
///
/// let grid = parse(["1,4,2,3", "2,3,1,4", "4,2,3,1", "3,1,4,2"])?;
/// assert_eq!(grid.side().get(), 4);
///
/// let result = parse(["1,2,3", "4,5,6", "7,8,9"]);
/// assert_eq!(result, Err(StructuralError::NotPerfectSquare { columns: 3 }));
/// # Ok::<(), quadrille_core::StructuralError>(())
/// ```
pub fn parse<I, S>(rows: I) -> Result<Grid, StructuralError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut reference: Option<SideLength> = None;
    let mut cells = Vec::new();
    let mut row_count = 0;

    for (row, line) in rows.into_iter().enumerate() {
        let line = line.as_ref();
        if line.is_empty() {
            return Err(StructuralError::EmptyLine { row });
        }
        let fields: Vec<_> = line.split(FIELD_DELIMITER).collect();
        if fields.len() <= 1 {
            return Err(StructuralError::MalformedRow { row });
        }

        let side = if let Some(side) = reference {
            side
        } else {
            let columns = fields.len();
            let side = SideLength::new(columns)
                .ok_or(StructuralError::NotPerfectSquare { columns })?;
            log::debug!("reference length {side} established from the first row");
            cells.reserve_exact(side.get() * side.get());
            reference = Some(side);
            side
        };

        if fields.len() != side.get() {
            return Err(StructuralError::RowLengthMismatch {
                row,
                actual: fields.len(),
                expected: side.get(),
            });
        }
        for (col, field) in fields.iter().enumerate() {
            let value: i64 = field
                .parse()
                .map_err(|_| StructuralError::UnparsableCell { row, col })?;
            let Some(value) = in_range(value, side.get()) else {
                return Err(StructuralError::OutOfRangeCell { row, col, value });
            };
            cells.push(value);
        }
        row_count += 1;
    }

    let Some(side) = reference else {
        return Err(StructuralError::NotPerfectSquare { columns: 0 });
    };
    if row_count != side.get() {
        return Err(StructuralError::RowCountMismatch {
            rows: row_count,
            expected: side.get(),
        });
    }
    Ok(Grid::from_parts(side, cells))
}

fn in_range(value: i64, side: usize) -> Option<u32> {
    let value = u32::try_from(value).ok()?;
    let as_index = usize::try_from(value).ok()?;
    (1..=side).contains(&as_index).then_some(value)
}
