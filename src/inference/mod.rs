//! Prediction variance and intervals from a fitted covariance matrix.

mod estimation;
mod prediction;

pub use estimation::estimate;
pub use prediction::{compute_prediction_intervals, t_critical};
