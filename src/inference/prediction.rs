//! Prediction interval calculations.

use crate::core::{IntervalType, PredictionResult};
use crate::inference::estimate;
use faer::{Col, Mat};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Two-sided Student-t critical value, or NaN when undefined.
pub fn t_critical(df: f64, confidence_level: f64) -> f64 {
    if !(df > 0.0) || !(confidence_level > 0.0 && confidence_level < 1.0) {
        return f64::NAN;
    }
    StudentsT::new(0.0, 1.0, df)
        .map(|t| t.inverse_cdf(1.0 - (1.0 - confidence_level) / 2.0))
        .unwrap_or(f64::NAN)
}

/// Computes intervals for each row of `x_new`.
///
/// # Arguments
/// * `x_new` - New observation rows (n_new × p)
/// * `coefficients` - Fitted coefficients
/// * `covariance` - Parameter covariance matrix
/// * `noise_variance` - Variance of a single observation, added for prediction intervals
/// * `df` - Residual degrees of freedom
/// * `confidence_level` - e.g. 0.95
/// * `interval_type` - Confidence or Prediction interval
///
/// Rows whose shape does not match the coefficients, or a fit without
/// residual degrees of freedom, produce NaN bounds.
pub fn compute_prediction_intervals(
    x_new: &Mat<f64>,
    coefficients: &Col<f64>,
    covariance: &Mat<f64>,
    noise_variance: f64,
    df: f64,
    confidence_level: f64,
    interval_type: IntervalType,
) -> PredictionResult {
    let n_new = x_new.nrows();
    let p = x_new.ncols();

    let mut fit = Col::zeros(n_new);
    let mut se = Col::zeros(n_new);

    for i in 0..n_new {
        let row = Col::from_fn(p, |j| x_new[(i, j)]);
        match estimate(&row, coefficients, covariance) {
            Ok(est) => {
                let var = match interval_type {
                    IntervalType::Confidence => est.std_error.powi(2),
                    IntervalType::Prediction => est.std_error.powi(2) + noise_variance,
                };
                fit[i] = est.value;
                se[i] = if var >= 0.0 { var.sqrt() } else { f64::NAN };
            }
            Err(_) => {
                fit[i] = f64::NAN;
                se[i] = f64::NAN;
            }
        }
    }

    PredictionResult::symmetric(fit, se, t_critical(df, confidence_level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_t_critical_large_df_approaches_normal() {
        let t = t_critical(1e6, 0.95);
        assert!((t - 1.959964).abs() < 1e-4);
    }

    #[test]
    fn test_t_critical_undefined() {
        assert!(t_critical(0.0, 0.95).is_nan());
        assert!(t_critical(5.0, 1.5).is_nan());
    }

    #[test]
    fn test_prediction_wider_than_confidence() {
        let x_new = Mat::from_fn(2, 2, |i, j| if j == 0 { 1.0 } else { i as f64 });
        let c = Col::from_fn(2, |i| [1.0, 2.0][i]);
        let cov = Mat::from_fn(2, 2, |i, j| if i == j { 0.1 } else { 0.0 });

        let conf = compute_prediction_intervals(&x_new, &c, &cov, 0.5, 10.0, 0.95, IntervalType::Confidence);
        let pred = compute_prediction_intervals(&x_new, &c, &cov, 0.5, 10.0, 0.95, IntervalType::Prediction);

        for i in 0..2 {
            assert_eq!(conf.fit[i], pred.fit[i]);
            assert!(pred.se[i] > conf.se[i]);
            assert!(pred.upper[i] - pred.lower[i] > conf.upper[i] - conf.lower[i]);
        }
        assert!((conf.se[1] - 0.2_f64.sqrt()).abs() < 1e-15);
    }
}
