//! Solver options and estimator configuration.

use faer::Col;
use thiserror::Error;

/// Knobs for a single call into the SVD solver core.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveOptions {
    /// Singular values at or below `tolerance * s_max` are treated as zero.
    pub tolerance: f64,
    /// Whether to balance the columns of the design before factoring.
    pub balance: bool,
    /// Tikhonov parameter; the penalty added to chi-square is `λ² ‖c‖²`.
    pub lambda: f64,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            tolerance: f64::EPSILON,
            balance: true,
            lambda: 0.0,
        }
    }
}

impl SolveOptions {
    /// Balanced, unregularized solve with the given tolerance.
    pub fn svd(tolerance: f64) -> Self {
        Self {
            tolerance,
            ..Default::default()
        }
    }

    /// Unbalanced, unregularized solve with the given tolerance.
    pub fn usvd(tolerance: f64) -> Self {
        Self {
            tolerance,
            balance: false,
            lambda: 0.0,
        }
    }

    /// Standard-form ridge solve. Balancing is off because it would rescale
    /// the penalty.
    pub fn ridge(lambda: f64) -> Self {
        Self {
            tolerance: f64::EPSILON,
            balance: false,
            lambda,
        }
    }
}

/// Regularization applied by [`LinearRegressor`](crate::solvers::LinearRegressor).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Penalty {
    /// Plain least squares.
    #[default]
    None,
    /// Uniform ridge penalty `λ² ‖c‖²`.
    Scalar(f64),
    /// Diagonal Tikhonov matrix `diag(λ_1, …, λ_p)`; every entry must be non-zero.
    Diagonal(Col<f64>),
}

/// Configuration options for [`LinearRegressor`](crate::solvers::LinearRegressor).
#[derive(Debug, Clone)]
pub struct RegressionOptions {
    /// Relative singular-value tolerance (default: machine epsilon).
    pub tolerance: f64,
    /// Balance columns before factoring (default: true). Ignored under a penalty.
    pub balance: bool,
    /// Regularization (default: none).
    pub penalty: Penalty,
    /// Default confidence level for intervals (default: 0.95).
    pub confidence_level: f64,
}

impl Default for RegressionOptions {
    fn default() -> Self {
        Self {
            tolerance: f64::EPSILON,
            balance: true,
            penalty: Penalty::None,
            confidence_level: 0.95,
        }
    }
}

/// Errors that can occur when validating regression options.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("tolerance must be positive, got {0}")]
    InvalidTolerance(f64),
    #[error("confidence_level must be in (0, 1), got {0}")]
    InvalidConfidenceLevel(f64),
    #[error("lambda must be finite, got {0}")]
    InvalidLambda(f64),
    #[error("diagonal penalty entry {index} must be finite and non-zero, got {value}")]
    InvalidPenaltyEntry { index: usize, value: f64 },
}

impl RegressionOptions {
    /// Create a new builder for regression options.
    pub fn builder() -> RegressionOptionsBuilder {
        RegressionOptionsBuilder::default()
    }

    /// Options for scalar ridge regression.
    pub fn ridge(lambda: f64) -> Self {
        Self {
            penalty: Penalty::Scalar(lambda),
            ..Default::default()
        }
    }

    /// Validate the options and return an error if invalid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        // Written so that NaN fails as well.
        if !(self.tolerance > 0.0) {
            return Err(OptionsError::InvalidTolerance(self.tolerance));
        }
        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return Err(OptionsError::InvalidConfidenceLevel(self.confidence_level));
        }
        match &self.penalty {
            Penalty::None => {}
            Penalty::Scalar(lambda) => {
                if !lambda.is_finite() {
                    return Err(OptionsError::InvalidLambda(*lambda));
                }
            }
            Penalty::Diagonal(lambda) => {
                for index in 0..lambda.nrows() {
                    let value = lambda[index];
                    if value == 0.0 || !value.is_finite() {
                        return Err(OptionsError::InvalidPenaltyEntry { index, value });
                    }
                }
            }
        }
        Ok(())
    }
}

/// Builder for `RegressionOptions`.
#[derive(Debug, Clone, Default)]
pub struct RegressionOptionsBuilder {
    options: RegressionOptions,
}

impl RegressionOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the relative singular-value tolerance.
    pub fn tolerance(mut self, tol: f64) -> Self {
        self.options.tolerance = tol;
        self
    }

    /// Enable or disable column balancing.
    pub fn balance(mut self, balance: bool) -> Self {
        self.options.balance = balance;
        self
    }

    /// Use a uniform ridge penalty.
    pub fn lambda(mut self, lambda: f64) -> Self {
        self.options.penalty = Penalty::Scalar(lambda);
        self
    }

    /// Use a diagonal Tikhonov penalty.
    pub fn lambda_diagonal(mut self, lambda: Col<f64>) -> Self {
        self.options.penalty = Penalty::Diagonal(lambda);
        self
    }

    /// Set the confidence level for intervals.
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.options.confidence_level = level;
        self
    }

    /// Build and validate the options.
    pub fn build(self) -> Result<RegressionOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }

    /// Build without validation; the solvers still reject bad inputs.
    pub fn build_unchecked(self) -> RegressionOptions {
        self.options
    }
}
