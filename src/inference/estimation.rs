//! Point prediction and its standard error from a fitted covariance.

use crate::core::Estimate;
use crate::solvers::RegressionError;
use faer::{Col, Mat};

/// Evaluate `y = x · c` and `σ_y = √(xᵗ cov x)` for one observation vector.
///
/// Only the lower triangle of `cov` is read; the matrix is assumed symmetric.
pub fn estimate(x: &Col<f64>, c: &Col<f64>, cov: &Mat<f64>) -> Result<Estimate, RegressionError> {
    if x.nrows() != c.nrows() {
        return Err(RegressionError::ParameterMismatch {
            x_cols: x.nrows(),
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

    let p = x.nrows();
    let value: f64 = (0..p).map(|i| x[i] * c[i]).sum();

    let mut var = 0.0;
    for i in 0..p {
        let xi = x[i];
        var += xi * xi * cov[(i, i)];
        for j in 0..i {
            var += 2.0 * xi * x[j] * cov[(i, j)];
        }
    }

    Ok(Estimate {
        value,
        std_error: var.sqrt(),
    })
}
