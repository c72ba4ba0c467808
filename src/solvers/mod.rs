//! Least-squares solvers built on the thin SVD.

mod linear;
mod regressor;
mod ridge;
mod traits;
mod wls;

pub use linear::{linear, linear_svd, linear_usvd, solve, Design};
pub use regressor::{FittedLinear, LinearRegressor, LinearRegressorBuilder};
pub use ridge::{ridge, ridge2};
pub use traits::{FittedRegressor, RegressionError, Regressor};
pub use wls::{solve_weighted, wlinear, wlinear_svd, wlinear_usvd};
