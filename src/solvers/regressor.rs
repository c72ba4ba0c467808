//! Builder-configured estimator over the SVD solvers.

use crate::core::{
    Estimate, FitResult, IntervalType, Penalty, PredictionResult, RegressionOptions,
    RegressionOptionsBuilder, SolveOptions, Workspace,
};
use crate::diagnostics::residuals;
use crate::inference::{compute_prediction_intervals, estimate};
use crate::solvers::linear::{solve, Design};
use crate::solvers::ridge::{ridge2_with_tolerance, weighted_ridge2};
use crate::solvers::traits::{FittedRegressor, RegressionError, Regressor};
use crate::solvers::wls::solve_weighted;
use faer::{Col, Mat};
use log::debug;

/// Linear least-squares estimator with optional weights and ridge penalty.
///
/// Dispatches to the unweighted core, the weighted core or the diagonal
/// ridge transform depending on its configuration. A fresh workspace is
/// allocated per fit; use the free functions in [`crate::solvers`] to reuse
/// one across many fits of the same shape.
///
/// # Example
///
/// ```rust,ignore
/// use multifit::prelude::*;
/// use faer::{Mat, Col};
///
/// let fitted = LinearRegressor::builder()
///     .tolerance(1e-10)
///     .lambda(0.5)
///     .build()?
///     .fit(&x, &y)?;
///
/// println!("rank = {}, chisq = {}", fitted.rank(), fitted.chisq());
/// ```
#[derive(Debug, Clone)]
pub struct LinearRegressor {
    options: RegressionOptions,
    weights: Option<Col<f64>>,
}

impl LinearRegressor {
    /// Create a new regressor with the given options.
    pub fn new(options: RegressionOptions) -> Self {
        Self {
            options,
            weights: None,
        }
    }

    /// Set the observation weights (inverse variances).
    pub fn with_weights(mut self, weights: Col<f64>) -> Self {
        self.weights = Some(weights);
        self
    }

    /// Create a builder for configuring the regressor.
    pub fn builder() -> LinearRegressorBuilder {
        LinearRegressorBuilder::default()
    }

    /// Options in effect for this regressor.
    pub fn options(&self) -> &RegressionOptions {
        &self.options
    }

    fn solve_options(&self) -> SolveOptions {
        match self.options.penalty {
            Penalty::Scalar(lambda) => SolveOptions {
                tolerance: self.options.tolerance,
                balance: false,
                lambda,
            },
            _ => SolveOptions {
                tolerance: self.options.tolerance,
                balance: self.options.balance,
                lambda: 0.0,
            },
        }
    }
}

impl Regressor for LinearRegressor {
    type Fitted = FittedLinear;

    fn fit(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<Self::Fitted, RegressionError> {
        self.options.validate()?;

        let n = x.nrows();
        let p = x.ncols();
        let mut work = Workspace::new(n, p)?;
        let mut coefficients = Col::zeros(p);
        let mut covariance = Mat::zeros(p, p);

        let tolerance = self.options.tolerance;
        let summary = match (&self.options.penalty, &self.weights) {
            (Penalty::Diagonal(lambda), None) => ridge2_with_tolerance(
                lambda,
                x,
                y,
                tolerance,
                &mut coefficients,
                &mut covariance,
                &mut work,
            )?,
            (Penalty::Diagonal(lambda), Some(w)) => weighted_ridge2(
                lambda,
                x,
                w,
                y,
                tolerance,
                &mut coefficients,
                &mut covariance,
                &mut work,
            )?,
            (_, Some(w)) => solve_weighted(
                x,
                w,
                y,
                &self.solve_options(),
                &mut coefficients,
                &mut covariance,
                &mut work,
            )?,
            (_, None) => solve(
                Design::Matrix(x),
                y,
                &self.solve_options(),
                &mut coefficients,
                &mut covariance,
                &mut work,
            )?,
        };

        // ridge2 reports the covariance of L c; express it for c.
        if let Penalty::Diagonal(lambda) = &self.options.penalty {
            for i in 0..p {
                for j in 0..p {
                    covariance[(i, j)] /= lambda[i] * lambda[j];
                }
            }
        }

        let mut resid = Col::zeros(n);
        residuals(x, y, &coefficients, &mut resid)?;
        let fitted_values = Col::from_fn(n, |i| y[i] - resid[i]);

        debug!(
            "linear regressor fit: n={n} p={p} rank={} weighted={}",
            summary.rank,
            self.weights.is_some()
        );

        Ok(FittedLinear {
            options: self.options.clone(),
            result: FitResult {
                coefficients,
                covariance,
                rank: summary.rank,
                chisq: summary.chisq,
                residuals: resid,
                fitted_values,
                n_observations: n,
                weighted: self.weights.is_some(),
                tolerance: self.options.tolerance,
            },
        })
    }
}

/// A fitted linear model.
#[derive(Debug, Clone)]
pub struct FittedLinear {
    options: RegressionOptions,
    result: FitResult,
}

impl FittedLinear {
    /// Get the options used to fit this model.
    pub fn options(&self) -> &RegressionOptions {
        &self.options
    }

    /// Prediction and standard error for a single observation vector.
    pub fn estimate(&self, x: &Col<f64>) -> Result<Estimate, RegressionError> {
        estimate(x, &self.result.coefficients, &self.result.covariance)
    }

    /// Intervals at the confidence level configured in the options.
    pub fn predict_interval(&self, x: &Mat<f64>, interval: IntervalType) -> PredictionResult {
        self.predict_with_interval(x, Some(interval), self.options.confidence_level)
    }
}

impl FittedRegressor for FittedLinear {
    fn predict(&self, x: &Mat<f64>) -> Col<f64> {
        x * &self.result.coefficients
    }

    fn result(&self) -> &FitResult {
        &self.result
    }

    fn predict_with_interval(
        &self,
        x: &Mat<f64>,
        interval: Option<IntervalType>,
        level: f64,
    ) -> PredictionResult {
        match interval {
            None => PredictionResult::point_only(self.predict(x)),
            Some(interval_type) => compute_prediction_intervals(
                x,
                &self.result.coefficients,
                &self.result.covariance,
                self.result.noise_variance(),
                self.result.residual_df() as f64,
                level,
                interval_type,
            ),
        }
    }
}

/// Builder for `LinearRegressor`.
#[derive(Debug, Clone, Default)]
pub struct LinearRegressorBuilder {
    builder: RegressionOptionsBuilder,
    weights: Option<Col<f64>>,
}

impl LinearRegressorBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the relative singular-value tolerance.
    pub fn tolerance(mut self, tol: f64) -> Self {
        self.builder = self.builder.tolerance(tol);
        self
    }

    /// Enable or disable column balancing.
    pub fn balance(mut self, balance: bool) -> Self {
        self.builder = self.builder.balance(balance);
        self
    }

    /// Use a uniform ridge penalty.
    pub fn lambda(mut self, lambda: f64) -> Self {
        self.builder = self.builder.lambda(lambda);
        self
    }

    /// Use a diagonal Tikhonov penalty.
    pub fn lambda_diagonal(mut self, lambda: Col<f64>) -> Self {
        self.builder = self.builder.lambda_diagonal(lambda);
        self
    }

    /// Set the default confidence level for intervals.
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.builder = self.builder.confidence_level(level);
        self
    }

    /// Set the observation weights.
    pub fn weights(mut self, weights: Col<f64>) -> Self {
        self.weights = Some(weights);
        self
    }

    /// Build and validate the regressor.
    pub fn build(self) -> Result<LinearRegressor, RegressionError> {
        let options = self.builder.build()?;
        Ok(LinearRegressor {
            options,
            weights: self.weights,
        })
    }
}
