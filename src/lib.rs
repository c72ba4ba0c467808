//! Linear least squares via the singular value decomposition.
//!
//! Fits `y = X c` for over-determined (and rank-deficient) systems with
//! optional observation weights and Tikhonov regularization. Every fit
//! reports the coefficients, the effective numerical rank, the residual
//! chi-square and the full parameter covariance matrix.
//!
//! The low-level entry points mirror a workspace-based API: a [`Workspace`]
//! is allocated once per problem shape and reused, and outputs go into
//! caller-owned buffers.
//!
//! # Example
//!
//! ```rust,ignore
//! use multifit::prelude::*;
//! use faer::{Col, Mat};
//!
//! let x = Mat::from_fn(3, 2, |i, j| if j == 0 { 1.0 } else { i as f64 });
//! let y = Col::from_fn(3, |i| [1.0, 2.0, 2.0][i]);
//!
//! let mut work = Workspace::new(3, 2)?;
//! let mut c = Col::zeros(2);
//! let mut cov = Mat::zeros(2, 2);
//! let summary = linear_svd(&x, &y, 1e-10, &mut c, &mut cov, &mut work)?;
//!
//! let est = estimate(&Col::from_fn(2, |j| [1.0, 3.0][j]), &c, &cov)?;
//! println!("rank = {}, y(3) = {} ± {}", summary.rank, est.value, est.std_error);
//! ```

pub mod core;
pub mod diagnostics;
pub mod inference;
pub mod solvers;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        Estimate, FitResult, FitSummary, IntervalType, Penalty, PredictionResult,
        RegressionOptions, RegressionOptionsBuilder, SolveOptions, Workspace,
    };
    pub use crate::diagnostics::{residuals, standardized_residuals};
    pub use crate::inference::estimate;
    pub use crate::solvers::{
        linear, linear_svd, linear_usvd, ridge, ridge2, solve, solve_weighted, wlinear,
        wlinear_svd, wlinear_usvd, Design, FittedLinear, FittedRegressor, LinearRegressor,
        RegressionError, Regressor,
    };
}

pub use crate::core::{Estimate, FitSummary, SolveOptions, Workspace};
pub use crate::solvers::{Design, RegressionError};
