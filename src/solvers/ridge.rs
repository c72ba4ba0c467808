//! Ridge regression (Tikhonov regularization) on the SVD solver core.
//!
//! Scalar ridge minimizes `‖y - X c‖² + λ² ‖c‖²` and is native to the core.
//! The diagonal form minimizes `‖y - X c‖² + ‖L c‖²` with
//! `L = diag(λ_1, …, λ_p)` through the change of variables
//!
//! ```text
//! X~ = X L⁻¹,   c~ = L c
//! ```
//!
//! which turns it into a standard-form problem with `λ = 1`. Neither form
//! balances columns, since balancing would change what the penalty means.

use crate::core::{FitSummary, SolveOptions, Workspace};
use crate::solvers::linear::{check_shapes, solve, Design};
use crate::solvers::traits::RegressionError;
use crate::solvers::wls::solve_weighted;
use faer::{Col, Mat};

/// Standard-form ridge regression with scalar `lambda`.
pub fn ridge(
    lambda: f64,
    x: &Mat<f64>,
    y: &Col<f64>,
    c: &mut Col<f64>,
    cov: &mut Mat<f64>,
    work: &mut Workspace,
) -> Result<FitSummary, RegressionError> {
    solve(Design::Matrix(x), y, &SolveOptions::ridge(lambda), c, cov, work)
}

/// Ridge regression with a diagonal penalty `L = diag(lambda)`.
///
/// The transformed design `X L⁻¹` is built in the workspace's design buffer
/// and solved in place. The coefficients are mapped back with `c = L⁻¹ c~`,
/// but the covariance is left in the transformed coordinates `c~ = L c`;
/// multiply entry `(i, j)` by `1 / (λ_i λ_j)` to express it for `c`.
///
/// Fails with [`RegressionError::SingularPenalty`] if any `λ_j` is zero.
pub fn ridge2(
    lambda: &Col<f64>,
    x: &Mat<f64>,
    y: &Col<f64>,
    c: &mut Col<f64>,
    cov: &mut Mat<f64>,
    work: &mut Workspace,
) -> Result<FitSummary, RegressionError> {
    ridge2_with_tolerance(lambda, x, y, f64::EPSILON, c, cov, work)
}

fn check_penalty(lambda: &Col<f64>, p: usize, c: &Col<f64>) -> Result<(), RegressionError> {
    if lambda.nrows() != p || lambda.nrows() != c.nrows() {
        return Err(RegressionError::PenaltyLength {
            lambda_len: lambda.nrows(),
            p,
        });
    }
    Ok(())
}

fn check_singular(lambda: &Col<f64>) -> Result<(), RegressionError> {
    match (0..lambda.nrows()).find(|&j| lambda[j] == 0.0) {
        Some(index) => Err(RegressionError::SingularPenalty { index }),
        None => Ok(()),
    }
}

/// [`ridge2`] with a caller-chosen singular-value tolerance.
pub(crate) fn ridge2_with_tolerance(
    lambda: &Col<f64>,
    x: &Mat<f64>,
    y: &Col<f64>,
    tolerance: f64,
    c: &mut Col<f64>,
    cov: &mut Mat<f64>,
    work: &mut Workspace,
) -> Result<FitSummary, RegressionError> {
    let p = x.ncols();
    check_penalty(lambda, p, c)?;
    work.check(x.nrows(), p)?;
    check_singular(lambda)?;
    check_shapes(x.nrows(), p, y.nrows(), c, cov)?;

    let a = work.design_mut();
    for j in 0..p {
        let inv = 1.0 / lambda[j];
        for i in 0..x.nrows() {
            a[(i, j)] = x[(i, j)] * inv;
        }
    }

    let options = SolveOptions {
        tolerance,
        ..SolveOptions::ridge(1.0)
    };
    let summary = solve(Design::Workspace, y, &options, c, cov, work)?;

    for j in 0..p {
        c[j] /= lambda[j];
    }

    Ok(summary)
}

/// Weighted counterpart of [`ridge2`].
///
/// The weighted core always copies its design, so `X L⁻¹` is materialized
/// once here. Covariance stays in the transformed coordinates.
#[allow(clippy::too_many_arguments)]
pub(crate) fn weighted_ridge2(
    lambda: &Col<f64>,
    x: &Mat<f64>,
    w: &Col<f64>,
    y: &Col<f64>,
    tolerance: f64,
    c: &mut Col<f64>,
    cov: &mut Mat<f64>,
    work: &mut Workspace,
) -> Result<FitSummary, RegressionError> {
    let p = x.ncols();
    check_penalty(lambda, p, c)?;
    check_singular(lambda)?;

    let x_tilde = Mat::from_fn(x.nrows(), p, |i, j| x[(i, j)] / lambda[j]);
    let options = SolveOptions {
        tolerance,
        ..SolveOptions::ridge(1.0)
    };
    let summary = solve_weighted(&x_tilde, w, y, &options, c, cov, work)?;

    for j in 0..p {
        c[j] /= lambda[j];
    }

    Ok(summary)
}
