//! Raw and standardized residuals.

use crate::solvers::RegressionError;
use faer::{Col, Mat};

/// Write `r = y - X c` into `r`.
///
/// Valid for any coefficient vector, not only a fitted one. Nothing is
/// written unless all shapes agree.
pub fn residuals(
    x: &Mat<f64>,
    y: &Col<f64>,
    c: &Col<f64>,
    r: &mut Col<f64>,
) -> Result<(), RegressionError> {
    if x.nrows() != y.nrows() {
        return Err(RegressionError::ObservationMismatch {
            x_rows: x.nrows(),
            y_len: y.nrows(),
        });
    }
    if x.ncols() != c.nrows() {
        return Err(RegressionError::ParameterMismatch {
            x_cols: x.ncols(),
            c_len: c.nrows(),
        });
    }
    if y.nrows() != r.nrows() {
        return Err(RegressionError::ResidualMismatch {
            y_len: y.nrows(),
            r_len: r.nrows(),
        });
    }

    *r = y - x * c;
    Ok(())
}

/// Compute standardized residuals `r_i / s` from the noise variance `s²`.
///
/// Meant for unweighted fits. For a weighted fit pass `√w_i r_i` with a
/// noise variance of 1 instead.
///
/// A non-positive or non-finite variance leaves exact-zero residuals at 0 and
/// maps everything else to NaN.
pub fn standardized_residuals(residuals: &Col<f64>, noise_variance: f64) -> Col<f64> {
    if !(noise_variance > 0.0) || !noise_variance.is_finite() {
        return Col::from_fn(residuals.nrows(), |i| {
            if residuals[i] == 0.0 {
                0.0
            } else {
                f64::NAN
            }
        });
    }

    let s = noise_variance.sqrt();
    Col::from_fn(residuals.nrows(), |i| residuals[i] / s)
}
