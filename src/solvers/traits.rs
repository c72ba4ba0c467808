//! Core traits and errors for least-squares estimators.

use crate::core::{FitResult, IntervalType, PredictionResult};
use faer::{Col, Mat};
use thiserror::Error;

/// Errors that can occur while fitting or evaluating a linear model.
///
/// Every variant is detected before any caller-supplied output buffer is
/// written, so buffers can be reused after a failed call.
#[derive(Debug, Error)]
pub enum RegressionError {
    #[error("number of observations in y ({y_len}) does not match rows of X ({x_rows})")]
    ObservationMismatch { x_rows: usize, y_len: usize },

    #[error("number of parameters c ({c_len}) does not match columns of X ({x_cols})")]
    ParameterMismatch { x_cols: usize, c_len: usize },

    #[error("number of weights ({w_len}) does not match number of observations ({y_len})")]
    WeightMismatch { w_len: usize, y_len: usize },

    #[error("number of residuals ({r_len}) does not match number of observations ({y_len})")]
    ResidualMismatch { y_len: usize, r_len: usize },

    #[error("covariance matrix is not square: {nrows}x{ncols}")]
    CovarianceNotSquare { nrows: usize, ncols: usize },

    #[error("number of parameters ({c_len}) does not match size of covariance matrix ({cov_dim})")]
    CovarianceMismatch { c_len: usize, cov_dim: usize },

    #[error("workspace sized for {work_n}x{work_p} cannot hold a {n}x{p} problem")]
    WorkspaceMismatch {
        work_n: usize,
        work_p: usize,
        n: usize,
        p: usize,
    },

    #[error("workspace dimensions must be positive, got {n}x{p}")]
    EmptyWorkspace { n: usize, p: usize },

    #[error("tolerance must be positive, got {0}")]
    InvalidTolerance(f64),

    #[error("lambda vector has length {lambda_len} but the model has {p} parameters")]
    PenaltyLength { lambda_len: usize, p: usize },

    #[error("lambda matrix is singular: entry {index} is zero")]
    SingularPenalty { index: usize },

    #[error("singular value decomposition failed to converge")]
    Factorization,

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] crate::core::OptionsError),
}

/// A least-squares estimator that can be fit to data.
///
/// Fitting returns a separate fitted model which owns the coefficients and
/// covariance.
pub trait Regressor {
    /// The type of the fitted model.
    type Fitted: FittedRegressor;

    /// Fit the model.
    ///
    /// # Arguments
    /// * `x` - Design matrix of shape (n_observations, n_parameters)
    /// * `y` - Response vector of length n_observations
    fn fit(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<Self::Fitted, RegressionError>;
}

/// A fitted linear model.
pub trait FittedRegressor {
    /// Point predictions `X c` for new rows.
    fn predict(&self, x: &Mat<f64>) -> Col<f64>;

    /// Access the fit results.
    fn result(&self) -> &FitResult;

    /// Get the coefficients (convenience method).
    fn coefficients(&self) -> &Col<f64> {
        &self.result().coefficients
    }

    /// Get the parameter covariance matrix (convenience method).
    fn covariance(&self) -> &Mat<f64> {
        &self.result().covariance
    }

    /// Effective rank of the balanced design matrix.
    fn rank(&self) -> usize {
        self.result().rank
    }

    /// Residual chi-square including any ridge penalty.
    fn chisq(&self) -> f64 {
        self.result().chisq
    }

    /// Predictions with confidence or prediction intervals.
    ///
    /// `interval = None` returns point predictions with zero-width bounds.
    fn predict_with_interval(
        &self,
        x: &Mat<f64>,
        interval: Option<IntervalType>,
        level: f64,
    ) -> PredictionResult;
}
