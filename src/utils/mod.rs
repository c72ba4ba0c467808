//! Matrix helpers and the SVD seam used by the solvers.

mod matrix;
pub(crate) mod svd;

pub use matrix::{balance_columns, balance_factor};
