//! Argument validation tests.
//!
//! Every rejected call must leave the caller's output buffers untouched.

mod common;

use faer::{Col, Mat};
use multifit::diagnostics::residuals;
use multifit::inference::estimate;
use multifit::solvers::{linear_svd, ridge, solve, wlinear, Design};
use multifit::{RegressionError, SolveOptions, Workspace};

fn sentinel_buffers(p: usize, q: usize) -> (Col<f64>, Mat<f64>) {
    (Col::from_fn(p, |_| 42.0), Mat::from_fn(q, q, |_, _| 42.0))
}

fn untouched(c: &Col<f64>, cov: &Mat<f64>) -> bool {
    c.iter().all(|&v| v == 42.0)
        && (0..cov.nrows()).all(|i| (0..cov.ncols()).all(|j| cov[(i, j)] == 42.0))
}

#[test]
fn test_non_positive_tolerance_rejected() {
    let (x, y) = common::three_point_line();
    let mut work = Workspace::new(3, 2).expect("workspace should allocate");

    for tol in [0.0, -1e-8, f64::NAN] {
        let (mut c, mut cov) = sentinel_buffers(2, 2);
        let err = linear_svd(&x, &y, tol, &mut c, &mut cov, &mut work).unwrap_err();
        assert!(matches!(err, RegressionError::InvalidTolerance(_)));
        assert!(untouched(&c, &cov));
    }
}

#[test]
fn test_observation_mismatch() {
    let (x, _) = common::three_point_line();
    let y = Col::zeros(4);
    let mut work = Workspace::new(3, 2).expect("workspace should allocate");
    let (mut c, mut cov) = sentinel_buffers(2, 2);

    let err = ridge(1.0, &x, &y, &mut c, &mut cov, &mut work).unwrap_err();

    assert!(matches!(err, RegressionError::ObservationMismatch { x_rows: 3, y_len: 4 }));
    assert!(untouched(&c, &cov));
}

#[test]
fn test_parameter_mismatch() {
    let (x, y) = common::three_point_line();
    let mut work = Workspace::new(3, 2).expect("workspace should allocate");
    let (mut c, mut cov) = sentinel_buffers(3, 2);

    let err = linear_svd(&x, &y, 1e-10, &mut c, &mut cov, &mut work).unwrap_err();

    assert!(matches!(err, RegressionError::ParameterMismatch { x_cols: 2, c_len: 3 }));
    assert!(untouched(&c, &cov));
}

#[test]
fn test_covariance_not_square() {
    let (x, y) = common::three_point_line();
    let mut work = Workspace::new(3, 2).expect("workspace should allocate");
    let mut c = Col::from_fn(2, |_| 42.0);
    let mut cov = Mat::from_fn(2, 3, |_, _| 42.0);

    let err = linear_svd(&x, &y, 1e-10, &mut c, &mut cov, &mut work).unwrap_err();

    assert!(matches!(err, RegressionError::CovarianceNotSquare { nrows: 2, ncols: 3 }));
    assert!(untouched(&c, &cov));
}

#[test]
fn test_covariance_mismatch() {
    let (x, y) = common::three_point_line();
    let mut work = Workspace::new(3, 2).expect("workspace should allocate");
    let (mut c, mut cov) = sentinel_buffers(2, 3);

    let err = linear_svd(&x, &y, 1e-10, &mut c, &mut cov, &mut work).unwrap_err();

    assert!(matches!(err, RegressionError::CovarianceMismatch { c_len: 2, cov_dim: 3 }));
    assert!(untouched(&c, &cov));
}

#[test]
fn test_workspace_mismatch() {
    let (x, y) = common::three_point_line();
    let mut work = Workspace::new(4, 2).expect("workspace should allocate");
    let (mut c, mut cov) = sentinel_buffers(2, 2);

    let err = linear_svd(&x, &y, 1e-10, &mut c, &mut cov, &mut work).unwrap_err();

    assert!(matches!(
        err,
        RegressionError::WorkspaceMismatch { work_n: 4, work_p: 2, n: 3, p: 2 }
    ));
    assert!(untouched(&c, &cov));
}

#[test]
fn test_weight_mismatch() {
    let (x, y) = common::three_point_line();
    let w = Col::from_fn(2, |_| 1.0);
    let mut work = Workspace::new(3, 2).expect("workspace should allocate");
    let (mut c, mut cov) = sentinel_buffers(2, 2);

    let err = wlinear(&x, &w, &y, &mut c, &mut cov, &mut work).unwrap_err();

    assert!(matches!(err, RegressionError::WeightMismatch { w_len: 2, y_len: 3 }));
    assert!(untouched(&c, &cov));
}

#[test]
fn test_in_place_checks_workspace_design() {
    let y = Col::zeros(5);
    let mut work = Workspace::new(3, 2).expect("workspace should allocate");
    let (mut c, mut cov) = sentinel_buffers(2, 2);

    let err = solve(Design::Workspace, &y, &SolveOptions::default(), &mut c, &mut cov, &mut work).unwrap_err();

    assert!(matches!(err, RegressionError::ObservationMismatch { x_rows: 3, y_len: 5 }));
    assert!(untouched(&c, &cov));
}

#[test]
fn test_empty_workspace_rejected() {
    assert!(matches!(
        Workspace::new(0, 3),
        Err(RegressionError::EmptyWorkspace { n: 0, p: 3 })
    ));
    assert!(matches!(
        Workspace::new(3, 0),
        Err(RegressionError::EmptyWorkspace { n: 3, p: 0 })
    ));
}

#[test]
fn test_estimate_shape_errors() {
    let c = Col::zeros(2);

    let err = estimate(&Col::zeros(3), &c, &Mat::zeros(2, 2)).unwrap_err();
    assert!(matches!(err, RegressionError::ParameterMismatch { x_cols: 3, c_len: 2 }));

    let err = estimate(&Col::zeros(2), &c, &Mat::zeros(2, 3)).unwrap_err();
    assert!(matches!(err, RegressionError::CovarianceNotSquare { nrows: 2, ncols: 3 }));

    let err = estimate(&Col::zeros(2), &c, &Mat::zeros(3, 3)).unwrap_err();
    assert!(matches!(err, RegressionError::CovarianceMismatch { c_len: 2, cov_dim: 3 }));
}

#[test]
fn test_residuals_for_arbitrary_coefficients() {
    let (x, y, _) = common::generate_linear_data(15, 2, 0.5, 31);
    let c = Col::from_fn(3, |j| [0.5, -2.0, 7.0][j]);
    let mut r = Col::zeros(15);

    residuals(&x, &y, &c, &mut r).expect("shapes match");

    for i in 0..15 {
        let fit = 0.5 * x[(i, 0)] - 2.0 * x[(i, 1)] + 7.0 * x[(i, 2)];
        assert!(common::approx_eq(r[i], y[i] - fit, 1e-12));
    }
}

#[test]
fn test_failed_call_keeps_workspace_usable() {
    let (x, y) = common::three_point_line();
    let mut work = Workspace::new(3, 2).expect("workspace should allocate");
    let (mut c, mut cov) = sentinel_buffers(2, 2);

    assert!(linear_svd(&x, &y, 0.0, &mut c, &mut cov, &mut work).is_err());
    let summary = linear_svd(&x, &y, 1e-10, &mut c, &mut cov, &mut work).expect("fit should succeed");

    assert_eq!(summary.rank, 2);
    assert!(common::approx_eq(c[0], 7.0 / 6.0, 1e-12));
}
