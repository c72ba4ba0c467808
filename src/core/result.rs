//! Fit result structures.

use faer::{Col, Mat};

/// Scalar outputs of one solver call.
///
/// The coefficient vector and covariance matrix are written into
/// caller-owned buffers; this carries the rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitSummary {
    /// Number of singular values above `tolerance * s_max`.
    pub rank: usize,
    /// Residual sum of squares (weighted if applicable) plus the ridge term.
    pub chisq: f64,
}

/// Point prediction and its standard error for one observation vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// `x · c`.
    pub value: f64,
    /// `√(xᵗ cov x)`.
    pub std_error: f64,
}

/// Complete result from a [`LinearRegressor`](crate::solvers::LinearRegressor) fit.
#[derive(Debug, Clone)]
pub struct FitResult {
    /// Fitted coefficients.
    pub coefficients: Col<f64>,
    /// Parameter covariance matrix of `coefficients`, also under a diagonal
    /// penalty.
    pub covariance: Mat<f64>,
    /// Effective numerical rank.
    pub rank: usize,
    /// Residual chi-square including the ridge penalty.
    pub chisq: f64,
    /// Raw residuals `y - X c`.
    pub residuals: Col<f64>,
    /// Fitted values `X c`.
    pub fitted_values: Col<f64>,
    /// Number of observations.
    pub n_observations: usize,
    /// Whether observation weights were supplied.
    pub weighted: bool,
    /// Tolerance used for rank determination.
    pub tolerance: f64,
}

impl FitResult {
    /// Residual degrees of freedom `n - rank`.
    pub fn residual_df(&self) -> usize {
        self.n_observations.saturating_sub(self.rank)
    }

    /// Standard errors, the square roots of the covariance diagonal.
    pub fn std_errors(&self) -> Col<f64> {
        Col::from_fn(self.coefficients.nrows(), |i| self.covariance[(i, i)].sqrt())
    }

    /// Variance of a single observation around the fitted surface.
    ///
    /// Weighted fits treat weights as known inverse variances, so the unit
    /// noise variance is 1. Unweighted fits estimate it from the residuals.
    pub fn noise_variance(&self) -> f64 {
        if self.weighted {
            1.0
        } else {
            let rss: f64 = self.residuals.iter().map(|&r| r * r).sum();
            rss / self.residual_df() as f64
        }
    }
}
