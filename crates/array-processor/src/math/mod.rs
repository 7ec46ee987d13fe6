//! Dense matrix container returned by the matrix operations.
//!
//! `Array2` keeps its elements in one row-major buffer with an explicit shape,
//! so a value of this type is rectangular by construction.
pub mod matrix;

pub use matrix::{Array2, ShapeError};
