//! Weighted least squares on the SVD solver core.
//!
//! Minimizes `Σ w_i (y_i - x_iᵗ c)²` by solving `√W y = √W X c`. Weights are
//! taken as known inverse variances, so the covariance `(Xᵗ W X)⁻¹` is not
//! rescaled by the residual variance. Negative weights are clamped to zero,
//! which drops the observation from the fit and from the chi-square.

use crate::core::{FitSummary, SolveOptions, Workspace};
use crate::solvers::linear::{
    apply_balance, apply_inverse, check_shapes, check_tolerance, fill_covariance, project,
    regularized_inverse, ridge_penalty,
};
use crate::solvers::traits::RegressionError;
use crate::utils::svd::factorize;
use faer::{Col, Mat, Scale};
use log::debug;

/// Solve the weighted problem with the given options.
///
/// Follows the same sequence as [`solve`](crate::solvers::solve) after the
/// rows of the working copy are scaled by `√w_i`. The returned chi-square is
/// `Σ w_i r_i²`, plus `λ² ‖c‖²` when a penalty is given, and
/// `cov = D⁻¹ QSI QSIᵗ D⁻¹`.
pub fn solve_weighted(
    x: &Mat<f64>,
    w: &Col<f64>,
    y: &Col<f64>,
    options: &SolveOptions,
    c: &mut Col<f64>,
    cov: &mut Mat<f64>,
    work: &mut Workspace,
) -> Result<FitSummary, RegressionError> {
    let n = x.nrows();
    let p = x.ncols();
    check_shapes(n, p, y.nrows(), c, cov)?;
    if w.nrows() != y.nrows() {
        return Err(RegressionError::WeightMismatch {
            w_len: w.nrows(),
            y_len: y.nrows(),
        });
    }
    work.check(n, p)?;
    check_tolerance(options.tolerance)?;

    work.a.copy_from(x.as_ref());
    for i in 0..n {
        let sqrt_wi = w[i].max(0.0).sqrt();
        let mut row = work.a.row_mut(i);
        row *= Scale(sqrt_wi);
        work.t[i] = sqrt_wi * y[i];
    }

    apply_balance(work, options.balance);
    factorize(work)?;
    project(&work.a, work.t.as_ref(), &mut work.xt);

    let rank = regularized_inverse(work, options.tolerance, options.lambda);
    apply_inverse(work, c);

    let fitted = x * &*c;
    let r2: f64 = (0..n)
        .map(|i| w[i].max(0.0) * (y[i] - fitted[i]).powi(2))
        .sum();
    let chisq = r2 + ridge_penalty(options.lambda, c);

    fill_covariance(work, 1.0, cov);

    debug!("weighted svd solve: n={n} p={p} rank={rank} chisq={chisq:.6e}");

    Ok(FitSummary { rank, chisq })
}

/// Balanced weighted least squares with machine-epsilon tolerance.
pub fn wlinear(
    x: &Mat<f64>,
    w: &Col<f64>,
    y: &Col<f64>,
    c: &mut Col<f64>,
    cov: &mut Mat<f64>,
    work: &mut Workspace,
) -> Result<FitSummary, RegressionError> {
    solve_weighted(x, w, y, &SolveOptions::default(), c, cov, work)
}

/// Balanced weighted least squares with a caller-chosen tolerance.
pub fn wlinear_svd(
    x: &Mat<f64>,
    w: &Col<f64>,
    y: &Col<f64>,
    tolerance: f64,
    c: &mut Col<f64>,
    cov: &mut Mat<f64>,
    work: &mut Workspace,
) -> Result<FitSummary, RegressionError> {
    solve_weighted(x, w, y, &SolveOptions::svd(tolerance), c, cov, work)
}

/// Unbalanced weighted least squares with a caller-chosen tolerance.
pub fn wlinear_usvd(
    x: &Mat<f64>,
    w: &Col<f64>,
    y: &Col<f64>,
    tolerance: f64,
    c: &mut Col<f64>,
    cov: &mut Mat<f64>,
    work: &mut Workspace,
) -> Result<FitSummary, RegressionError> {
    solve_weighted(x, w, y, &SolveOptions::usvd(tolerance), c, cov, work)
}
