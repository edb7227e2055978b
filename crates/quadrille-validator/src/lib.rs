//! Constraint validation for generalized sudoku solutions.
//!
//! Builds on [`quadrille_core`]: a parsed [`Grid`](quadrille_core::Grid)
//! goes through [`validate`], which scans every row, every column, and
//! every √N×√N sub-square for repeated values, short-circuiting on the
//! first violation. [`check`] chains parsing and validation and folds the
//! outcome into a [`Verdict`]: the boolean result plus the diagnostics a
//! caller needs to report *why* a solution failed.
//!
//! # Examples
//!
//! ```
//! use quadrille_validator::check;
//!
//! let verdict = check(["1,4,2,3", "2,3,1,4", "4,2,3,1", "3,1,4,2"]);
//! assert!(verdict.is_valid());
//! ```

pub mod constraint;
pub mod verdict;

pub use self::{
    constraint::{ConstraintError, validate},
    verdict::{Verdict, check, check_grid},
};
