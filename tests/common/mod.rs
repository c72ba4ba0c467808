//! Common test utilities and data generators.
#![allow(dead_code)]

use faer::{Col, Mat};
use multifit::Workspace;

/// Route `log` output through the test harness.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Output buffers plus a workspace for an `n × p` problem.
pub fn buffers(n: usize, p: usize) -> (Col<f64>, Mat<f64>, Workspace) {
    (
        Col::zeros(p),
        Mat::zeros(p, p),
        Workspace::new(n, p).expect("workspace should allocate"),
    )
}

/// The three-point line fit: X = [[1,0],[1,1],[1,2]], y = [1,2,2].
pub fn three_point_line() -> (Mat<f64>, Col<f64>) {
    let x = Mat::from_fn(3, 2, |i, j| if j == 0 { 1.0 } else { i as f64 });
    let y = Col::from_fn(3, |i| [1.0, 2.0, 2.0][i]);
    (x, y)
}

/// Generate linear data `y = X beta + noise` with an intercept column.
///
/// Column 0 is all ones; the remaining columns are deterministic
/// pseudo-random values in [-1, 1]. `beta[j] = j + 1`.
pub fn generate_linear_data(
    n_samples: usize,
    n_features: usize,
    noise_std: f64,
    seed: u64,
) -> (Mat<f64>, Col<f64>, Col<f64>) {
    // Simple deterministic "random" for reproducibility
    let mut rng_state = seed;
    let mut next_rand = move || -> f64 {
        rng_state = rng_state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((rng_state >> 32) as f64) / (u32::MAX as f64) * 2.0 - 1.0
    };

    let p = n_features + 1;
    let beta = Col::from_fn(p, |j| (j + 1) as f64);
    let mut x = Mat::zeros(n_samples, p);
    let mut y = Col::zeros(n_samples);

    for i in 0..n_samples {
        x[(i, 0)] = 1.0;
        let mut yi = beta[0];
        for j in 1..p {
            x[(i, j)] = next_rand();
            yi += x[(i, j)] * beta[j];
        }
        y[i] = yi + noise_std * next_rand();
    }

    (x, y, beta)
}

/// Design [1, x, x] with an exactly duplicated column and y = 1 + 2x.
pub fn generate_duplicate_column_data(n_samples: usize) -> (Mat<f64>, Col<f64>) {
    let x = Mat::from_fn(n_samples, 3, |i, j| if j == 0 { 1.0 } else { i as f64 * 0.25 });
    let y = Col::from_fn(n_samples, |i| 1.0 + 2.0 * (i as f64 * 0.25));
    (x, y)
}

/// Euclidean norm of a coefficient vector.
pub fn norm(c: &Col<f64>) -> f64 {
    c.iter().map(|&v| v * v).sum::<f64>().sqrt()
}

/// Approximate equality check for floating point values.
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}
