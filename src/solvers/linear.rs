//! SVD-based linear least squares with optional Tikhonov regularization.
//!
//! Fits `y = X c` by factoring the (optionally balanced) design as
//! `A = U S Qᵗ` and applying the filtered pseudo-inverse
//!
//! ```text
//! c = D⁻¹ Q diag(s_j / (s_j² + λ²)) Uᵗ y
//! ```
//!
//! where `D` holds the balancing factors. Singular values at or below
//! `tolerance * s_0` are dropped, which makes rank-deficient and
//! ill-conditioned problems well defined: the result is the minimum-norm
//! solution of the truncated system. The normal equations are never formed.

use crate::core::{FitSummary, SolveOptions, Workspace};
use crate::solvers::traits::RegressionError;
use crate::utils::svd::factorize;
use crate::utils::balance_columns;
use faer::{Col, ColRef, Mat, Scale};
use log::{debug, trace, warn};

/// Where the solver reads the design matrix from.
#[derive(Debug, Clone, Copy)]
pub enum Design<'a> {
    /// A caller-owned matrix, copied into the workspace before factoring.
    Matrix(&'a Mat<f64>),
    /// The workspace's own design buffer, already filled via
    /// [`Workspace::design_mut`]. The copy step is skipped.
    Workspace,
}

impl Design<'_> {
    fn shape(&self, work: &Workspace) -> (usize, usize) {
        match self {
            Design::Matrix(x) => (x.nrows(), x.ncols()),
            Design::Workspace => (work.n_observations(), work.n_parameters()),
        }
    }
}

/// Shape checks shared by every solver entry point.
pub(crate) fn check_shapes(
    x_rows: usize,
    x_cols: usize,
    y_len: usize,
    c: &Col<f64>,
    cov: &Mat<f64>,
) -> Result<(), RegressionError> {
    if x_rows != y_len {
        return Err(RegressionError::ObservationMismatch { x_rows, y_len });
    }
    if x_cols != c.nrows() {
        return Err(RegressionError::ParameterMismatch {
            x_cols,
            c_len: c.nrows(),
        });
    }
    if cov.nrows() != cov.ncols() {
        return Err(RegressionError::CovarianceNotSquare {
            nrows: cov.nrows(),
            ncols: cov.ncols(),
        });
    }
    if c.nrows() != cov.nrows() {
        return Err(RegressionError::CovarianceMismatch {
            c_len: c.nrows(),
            cov_dim: cov.nrows(),
        });
    }
    Ok(())
}

pub(crate) fn check_tolerance(tolerance: f64) -> Result<(), RegressionError> {
    // Also rejects NaN.
    if tolerance > 0.0 {
        Ok(())
    } else {
        Err(RegressionError::InvalidTolerance(tolerance))
    }
}

/// Balance the workspace design, or reset the factors to one.
pub(crate) fn apply_balance(work: &mut Workspace, balance: bool) {
    if balance {
        balance_columns(&mut work.a, &mut work.d);
    } else {
        for j in 0..work.d.nrows() {
            work.d[j] = 1.0;
        }
    }
}

/// `xt = Uᵗ rhs`, reading `U` from the factored design buffer.
pub(crate) fn project(u: &Mat<f64>, rhs: ColRef<'_, f64>, xt: &mut Col<f64>) {
    *xt = u.transpose() * rhs;
}

/// Build `QSI = Q diag(α)` with `α_j = s_j / (s_j² + λ²)` and return the
/// effective rank.
pub(crate) fn regularized_inverse(work: &mut Workspace, tolerance: f64, lambda: f64) -> usize {
    let lambda_sq = lambda * lambda;
    let s0 = work.s[0];
    let mut rank = 0;

    work.qsi.copy_from(work.q.as_ref());

    for j in 0..work.s.nrows() {
        let sj = work.s[j];
        let alpha = if sj <= tolerance * s0 {
            0.0
        } else {
            rank += 1;
            sj / (sj * sj + lambda_sq)
        };
        let mut col = work.qsi.col_mut(j);
        col *= Scale(alpha);
    }

    trace!("singular values {:?}, rank {rank}", work.s.iter().collect::<Vec<_>>());
    rank
}

/// `c = D⁻¹ QSI xt`.
pub(crate) fn apply_inverse(work: &Workspace, c: &mut Col<f64>) {
    *c = &work.qsi * &work.xt;
    for i in 0..c.nrows() {
        c[i] /= work.d[i];
    }
}

/// `cov[i, j] = scale · (QSI row i)·(QSI row j) / (d_i d_j)`, both triangles.
pub(crate) fn fill_covariance(work: &Workspace, scale: f64, cov: &mut Mat<f64>) {
    let p = cov.nrows();
    let gram = &work.qsi * work.qsi.transpose();
    for i in 0..p {
        let d_i = work.d[i];
        for j in i..p {
            let value = gram[(i, j)] * scale / (d_i * work.d[j]);
            cov[(i, j)] = value;
            cov[(j, i)] = value;
        }
    }
}

/// `λ² ‖c‖²`.
pub(crate) fn ridge_penalty(lambda: f64, c: &Col<f64>) -> f64 {
    let lambda_sq = lambda * lambda;
    c.iter().map(|&ci| lambda_sq * ci * ci).sum()
}

/// Fitted values of the workspace design from its factors.
///
/// Used when the design lived in the workspace and was overwritten by `U`:
/// `A c = U S Qᵗ D c`. The full factorization is used, not the truncated one.
fn fitted_from_factors(work: &mut Workspace, c: &Col<f64>) -> Col<f64> {
    let dc = Col::from_fn(c.nrows(), |j| work.d[j] * c[j]);
    let qd = work.q.transpose() * &dc;
    work.xt = Col::from_fn(qd.nrows(), |k| work.s[k] * qd[k]);
    &work.a * &work.xt
}

/// Solve `y = X c` with the SVD, optional balancing and a scalar ridge penalty.
///
/// On success `c` holds the coefficients and `cov` the covariance
///
/// ```text
/// cov = s² D⁻¹ QSI QSIᵗ D⁻¹,   s² = ‖y - X c‖² / (n - rank)
/// ```
///
/// and the returned summary carries the effective rank and
/// `chisq = ‖y - X c‖² + λ² ‖c‖²`. All shape and tolerance errors are
/// reported before `c` or `cov` are touched.
///
/// When `rank == n` the noise variance has no degrees of freedom and the
/// covariance entries are non-finite.
pub fn solve(
    design: Design<'_>,
    y: &Col<f64>,
    options: &SolveOptions,
    c: &mut Col<f64>,
    cov: &mut Mat<f64>,
    work: &mut Workspace,
) -> Result<FitSummary, RegressionError> {
    let (n, p) = design.shape(work);
    check_shapes(n, p, y.nrows(), c, cov)?;
    work.check(n, p)?;
    check_tolerance(options.tolerance)?;

    if let Design::Matrix(x) = design {
        work.a.copy_from(x.as_ref());
    }

    apply_balance(work, options.balance);
    factorize(work)?;
    project(&work.a, y.as_ref(), &mut work.xt);

    let rank = regularized_inverse(work, options.tolerance, options.lambda);
    apply_inverse(work, c);

    let fitted = match design {
        Design::Matrix(x) => x * &*c,
        Design::Workspace => fitted_from_factors(work, c),
    };

    let r2: f64 = (0..n).map(|i| (y[i] - fitted[i]).powi(2)).sum();
    let chisq = r2 + ridge_penalty(options.lambda, c);

    if rank >= n {
        warn!("no residual degrees of freedom (n = {n}, rank = {rank}); covariance is not finite");
    }
    let s2 = r2 / (n as f64 - rank as f64);
    fill_covariance(work, s2, cov);

    debug!(
        "svd solve: n={n} p={p} rank={rank} lambda={} chisq={chisq:.6e}",
        options.lambda
    );

    Ok(FitSummary { rank, chisq })
}

/// Balanced least squares with machine-epsilon tolerance.
pub fn linear(
    x: &Mat<f64>,
    y: &Col<f64>,
    c: &mut Col<f64>,
    cov: &mut Mat<f64>,
    work: &mut Workspace,
) -> Result<FitSummary, RegressionError> {
    solve(Design::Matrix(x), y, &SolveOptions::default(), c, cov, work)
}

/// Balanced least squares with a caller-chosen singular-value tolerance.
pub fn linear_svd(
    x: &Mat<f64>,
    y: &Col<f64>,
    tolerance: f64,
    c: &mut Col<f64>,
    cov: &mut Mat<f64>,
    work: &mut Workspace,
) -> Result<FitSummary, RegressionError> {
    solve(Design::Matrix(x), y, &SolveOptions::svd(tolerance), c, cov, work)
}

/// Unbalanced least squares with a caller-chosen singular-value tolerance.
pub fn linear_usvd(
    x: &Mat<f64>,
    y: &Col<f64>,
    tolerance: f64,
    c: &mut Col<f64>,
    cov: &mut Mat<f64>,
    work: &mut Workspace,
) -> Result<FitSummary, RegressionError> {
    solve(Design::Matrix(x), y, &SolveOptions::usvd(tolerance), c, cov, work)
}
