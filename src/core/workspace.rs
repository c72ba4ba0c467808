//! Pre-sized scratch buffers shared by the SVD solvers.

use crate::solvers::RegressionError;
use faer::{Col, Mat};

/// Scratch storage for fitting an `n × p` least-squares problem.
///
/// A workspace is allocated once per problem shape and reused across fits.
/// Every solve overwrites all of its buffers, so nothing carries over from
/// one call to the next. Solvers borrow it mutably for the whole call, which
/// keeps two in-flight fits from sharing the same buffers.
#[derive(Debug, Clone)]
pub struct Workspace {
    n: usize,
    p: usize,
    /// Working copy of the design matrix; holds `U` after factorization.
    pub(crate) a: Mat<f64>,
    /// Right singular vectors (`p × p`).
    pub(crate) q: Mat<f64>,
    /// `Q` with column `j` scaled by the regularized inverse of `s_j`.
    pub(crate) qsi: Mat<f64>,
    /// Singular values in descending order, zero-padded to length `p`.
    pub(crate) s: Col<f64>,
    /// Column balancing factors.
    pub(crate) d: Col<f64>,
    /// Response projected onto the left singular vectors.
    pub(crate) xt: Col<f64>,
    /// Weighted response `√w ⊙ y`.
    pub(crate) t: Col<f64>,
}

impl Workspace {
    /// Allocate a workspace for `n` observations and `p` parameters.
    pub fn new(n: usize, p: usize) -> Result<Self, RegressionError> {
        if n == 0 || p == 0 {
            return Err(RegressionError::EmptyWorkspace { n, p });
        }

        Ok(Self {
            n,
            p,
            a: Mat::zeros(n, p),
            q: Mat::zeros(p, p),
            qsi: Mat::zeros(p, p),
            s: Col::zeros(p),
            d: Col::zeros(p),
            xt: Col::zeros(p),
            t: Col::zeros(n),
        })
    }

    /// Number of observations this workspace was sized for.
    pub fn n_observations(&self) -> usize {
        self.n
    }

    /// Number of parameters this workspace was sized for.
    pub fn n_parameters(&self) -> usize {
        self.p
    }

    /// Returns true if the workspace can hold an `n × p` problem.
    pub fn fits(&self, n: usize, p: usize) -> bool {
        self.n == n && self.p == p
    }

    /// Singular values left behind by the most recent solve.
    pub fn singular_values(&self) -> &Col<f64> {
        &self.s
    }

    /// Column balancing factors used by the most recent solve.
    pub fn balance_factors(&self) -> &Col<f64> {
        &self.d
    }

    /// Mutable access to the internal design buffer.
    ///
    /// Fill it and pass [`Design::Workspace`](crate::solvers::Design) to solve
    /// without copying a separate design matrix.
    pub fn design_mut(&mut self) -> &mut Mat<f64> {
        &mut self.a
    }

    pub(crate) fn check(&self, n: usize, p: usize) -> Result<(), RegressionError> {
        if self.fits(n, p) {
            Ok(())
        } else {
            Err(RegressionError::WorkspaceMismatch {
                work_n: self.n,
                work_p: self.p,
                n,
                p,
            })
        }
    }
}
