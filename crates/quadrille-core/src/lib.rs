//! Core data structures and parsing for generalized sudoku solution
//! checking.
//!
//! A candidate solution arrives as comma-separated text rows. [`parse()`]
//! sizes and validates those rows into an immutable [`Grid`]; the grid's
//! [`SideLength`] carries the reference length N and the √N side of one
//! sub-square. [`ValueTracker`] is the per-scan scratch set the constraint
//! checks are built on.
//!
//! Structural problems (empty or malformed rows, a first row whose length
//! is not a perfect square, mismatched row lengths or counts, unparsable
//! or out-of-range cells) are reported as [`StructuralError`] values, not
//! printed. Callers decide whether to log, print, or aggregate them.
//!
//! # Examples
//!
//! ```
//! use quadrille_core::parse;
//!
//! let grid = parse(["1,4,2,3", "2,3,1,4", "4,2,3,1", "3,1,4,2"])?;
//! assert_eq!(grid.side().get(), 4);
//! assert_eq!(grid.value(0, 1), 4);
//! # Ok::<(), quadrille_core::StructuralError>(())
//! ```

pub mod grid;
pub mod parse;
pub mod side_length;
pub mod value_tracker;

pub use self::{
    grid::Grid,
    parse::{StructuralError, parse},
    side_length::SideLength,
    value_tracker::ValueTracker,
};
