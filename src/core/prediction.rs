//! Prediction types for interval estimation.

use faer::Col;

/// Type of interval to compute for predictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntervalType {
    /// Interval for the mean response; uses only the coefficient covariance.
    Confidence,

    /// Interval for a new observation; adds the noise variance.
    #[default]
    Prediction,
}

/// Predictions for a batch of rows, with interval bounds.
#[derive(Debug, Clone)]
pub struct PredictionResult {
    /// Point predictions.
    pub fit: Col<f64>,
    /// Lower interval bounds.
    pub lower: Col<f64>,
    /// Upper interval bounds.
    pub upper: Col<f64>,
    /// Standard errors used for the bounds.
    pub se: Col<f64>,
}

impl PredictionResult {
    /// Point predictions with degenerate bounds equal to the fit.
    pub fn point_only(fit: Col<f64>) -> Self {
        let n = fit.nrows();
        Self {
            lower: fit.clone(),
            upper: fit.clone(),
            se: Col::zeros(n),
            fit,
        }
    }

    /// Symmetric bounds `fit ± t_crit * se`.
    pub fn symmetric(fit: Col<f64>, se: Col<f64>, t_crit: f64) -> Self {
        let n = fit.nrows();
        let lower = Col::from_fn(n, |i| fit[i] - t_crit * se[i]);
        let upper = Col::from_fn(n, |i| fit[i] + t_crit * se[i]);
        Self {
            fit,
            lower,
            upper,
            se,
        }
    }

    /// Number of predictions.
    pub fn len(&self) -> usize {
        self.fit.nrows()
    }

    /// Returns true if there are no predictions.
    pub fn is_empty(&self) -> bool {
        self.fit.nrows() == 0
    }
}
