//! Residual diagnostics.
//!
//! # Example
//!
//! ```rust,ignore
//! use multifit::diagnostics::{residuals, standardized_residuals};
//!
//! let mut r = Col::zeros(y.nrows());
//! residuals(&x, &y, &c, &mut r)?;
//! // Unweighted fit: s² estimated from the residuals.
//! let z = standardized_residuals(&r, fitted.result().noise_variance());
//! ```

mod residuals;

pub use residuals::{residuals, standardized_residuals};
