//! Matrix utility functions.

use faer::{Col, Mat, Scale};

/// Power-of-two factor bringing a column norm into `[0.5, 1]`.
///
/// Zero and non-finite norms are left alone (factor 1).
pub fn balance_factor(norm: f64) -> f64 {
    if norm == 0.0 || !norm.is_finite() {
        return 1.0;
    }

    let mut s = norm;
    let mut f = 1.0;
    while s > 1.0 {
        s /= 2.0;
        f *= 2.0;
    }
    while s < 0.5 {
        s *= 2.0;
        f /= 2.0;
    }
    f
}

/// Balance the columns of `a` in place, recording the factors in `d`.
///
/// Column `j` is divided by `d[j]`, so `a_original = a_balanced * diag(d)`.
pub fn balance_columns(a: &mut Mat<f64>, d: &mut Col<f64>) {
    debug_assert_eq!(a.ncols(), d.nrows());

    for j in 0..a.ncols() {
        let f = balance_factor(a.col(j).norm_l2());
        d[j] = f;
        if f != 1.0 {
            let mut col = a.col_mut(j);
            col *= Scale(1.0 / f);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_factor_powers_of_two() {
        assert_eq!(balance_factor(1.0), 1.0);
        assert_eq!(balance_factor(0.75), 1.0);
        assert_eq!(balance_factor(3.0), 4.0);
        assert_eq!(balance_factor(0.1), 0.125);
        assert_eq!(balance_factor(0.0), 1.0);
        assert_eq!(balance_factor(f64::INFINITY), 1.0);
        assert_eq!(balance_factor(f64::NAN), 1.0);
    }

    #[test]
    fn test_balance_columns_normalizes() {
        let mut a = Mat::from_fn(4, 3, |i, j| match j {
            0 => 1000.0 * (i + 1) as f64,
            1 => 1e-4 * (i + 1) as f64,
            _ => 0.0,
        });
        let original = a.clone();
        let mut d = Col::zeros(3);

        balance_columns(&mut a, &mut d);

        for j in 0..2 {
            let norm = a.col(j).norm_l2();
            assert!((0.5..=1.0).contains(&norm), "column {j} norm {norm}");
            for i in 0..4 {
                assert!((a[(i, j)] * d[j] - original[(i, j)]).abs() < 1e-12 * original[(i, j)].abs().max(1.0));
            }
        }
        // Zero column untouched
        assert_eq!(d[2], 1.0);
        assert!((0..4).all(|i| a[(i, 2)] == 0.0));
    }
}
