//! Core types: options, results, prediction containers and the workspace.

mod options;
mod prediction;
mod result;
mod workspace;

pub use options::{
    OptionsError, Penalty, RegressionOptions, RegressionOptionsBuilder, SolveOptions,
};
pub use prediction::{IntervalType, PredictionResult};
pub use result::{Estimate, FitResult, FitSummary};
pub use workspace::Workspace;
