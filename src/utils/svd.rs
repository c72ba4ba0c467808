//! Thin SVD of the workspace design buffer.

use crate::core::Workspace;
use crate::solvers::RegressionError;

/// Factor the workspace's `A` buffer as `U S Qᵗ`.
///
/// `U` overwrites `A`, the singular values land in `S` in descending order
/// and the right singular vectors in `Q`. With fewer observations than
/// parameters only `min(n, p)` triplets exist; the remaining columns of `A`
/// and `Q` and the tail of `S` are zeroed so they never contribute.
pub(crate) fn factorize(work: &mut Workspace) -> Result<(), RegressionError> {
    let n = work.a.nrows();
    let p = work.a.ncols();
    let k = n.min(p);

    let svd = work
        .a
        .as_ref()
        .thin_svd()
        .map_err(|_| RegressionError::Factorization)?;
    let s = svd.S().column_vector();

    work.a.subcols_mut(0, k).copy_from(svd.U());
    work.q.subcols_mut(0, k).copy_from(svd.V());
    for j in 0..p {
        if j < k {
            work.s[j] = s[j];
            continue;
        }
        work.s[j] = 0.0;
        for i in 0..n {
            work.a[(i, j)] = 0.0;
        }
        for i in 0..p {
            work.q[(i, j)] = 0.0;
        }
    }

    Ok(())
}
