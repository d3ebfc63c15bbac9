//! Exact fractions, matrices of them, and row reduction that records every
//! intermediate matrix.
//!
//! ```
//! use ratrref::{reduce_to_rref, Matrix};
//!
//! let mut mat: Matrix = "[[1, 2], [3, 4]]".parse()?;
//! let trace = reduce_to_rref(&mut mat)?;
//! assert_eq!(mat, Matrix::from_rows([[1, 0], [0, 1]])?);
//! assert_eq!(trace.pivot_steps(), 2);
//! # Ok::<(), ratrref::Error>(())
//! ```

mod error;
pub mod fmt;
pub mod int;
mod lin_alg;
mod matrix;
mod parse;
mod rational;

pub use error::{DimensionError, Error, Result};
pub use lin_alg::{reduce_to_rref, Phase, Trace};
pub use matrix::{Matrix, OneBased};
pub use rational::Rational;
