use crate::norm::Norm;
use crate::scalar::{round_to, RoundMode};
use crate::traits::FloatScalar;

use super::Matrix;

/// QR decomposition factors: `A = Q * R`.
///
/// Q is M×N with orthonormal columns, R is N×N upper triangular.
///
/// # Example
///
/// ```
/// use statrix::Matrix;
///
/// let a = Matrix::from_rows(3, 3, &[
///     12.0_f64, -51.0, 4.0,
///     6.0, 167.0, -68.0,
///     -4.0, 24.0, -41.0,
/// ]);
/// let qr = a.qr();
/// let back = qr.q() * qr.r();
/// assert!((back[(0, 0)] - 12.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct Qr<T> {
    q: Matrix<T>,
    r: Matrix<T>,
}

impl<T: FloatScalar> Qr<T> {
    /// The orthogonal factor Q (M×N).
    #[inline]
    pub fn q(&self) -> &Matrix<T> {
        &self.q
    }

    /// The upper-triangular factor R (N×N).
    #[inline]
    pub fn r(&self) -> &Matrix<T> {
        &self.r
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// QR decomposition by Householder reflections.
    ///
    /// For each column k the Euclidean norm of the sub-column `k..m` is
    /// taken (always the Euclidean norm, whatever norm the caller's
    /// stack has active), the Householder vector is formed in place, and
    /// the remaining columns are reflected; the R diagonal accumulates
    /// sign-negated norms. Q is rebuilt by applying the stored
    /// reflections backwards, skipping columns whose Householder pivot
    /// rounds to zero at 6 decimal digits — rank-deficient columns
    /// contribute no reflection.
    ///
    /// Panics unless `nrows >= ncols`.
    pub fn qr(&self) -> Qr<T> {
        let m = self.nrows;
        let n = self.ncols;
        assert!(m >= n, "QR decomposition requires nrows >= ncols");

        let mut qr = self.clone();
        let mut rdiag = vec![T::zero(); n];

        for k in 0..n {
            let mut nrm = Norm::Euclidean.apply(&qr.data[k * m + k..(k + 1) * m]);
            if nrm != T::zero() {
                // flip so the reflection subtracts from the pivot
                if qr[(k, k)] < T::zero() {
                    nrm = -nrm;
                }
                for i in k..m {
                    qr[(i, k)] = qr[(i, k)] / nrm;
                }
                qr[(k, k)] = qr[(k, k)] + T::one();

                for j in (k + 1)..n {
                    let mut s = T::zero();
                    for i in k..m {
                        s = s + qr[(i, k)] * qr[(i, j)];
                    }
                    s = (T::zero() - s) / qr[(k, k)];
                    for i in k..m {
                        qr[(i, j)] = qr[(i, j)] + s * qr[(i, k)];
                    }
                }
            }
            rdiag[k] = T::zero() - nrm;
        }

        // R from the upper triangle of the working matrix + stored diagonal
        let mut r = Matrix::zeros(n, n);
        for j in 0..n {
            for i in 0..n {
                if i < j {
                    r[(i, j)] = qr[(i, j)];
                } else if i == j {
                    r[(i, j)] = rdiag[i];
                }
            }
        }

        // Q by back-accumulating the reflections
        let mut q = Matrix::zeros(m, n);
        for k in (0..n).rev() {
            q[(k, k)] = T::one();
            for j in k..n {
                if round_to(qr[(k, k)], 6, RoundMode::HalfUp) != T::zero() {
                    let mut s = T::zero();
                    for i in k..m {
                        s = s + qr[(i, k)] * q[(i, j)];
                    }
                    s = (T::zero() - s) / qr[(k, k)];
                    for i in k..m {
                        q[(i, j)] = q[(i, j)] + s * qr[(i, k)];
                    }
                }
            }
        }

        Qr { q, r }
    }

    /// Whether any diagonal entry rounds to zero at `precision` decimal
    /// digits. Run against the R factor of a QR decomposition, a `true`
    /// result flags rank deficiency.
    pub fn diag_has_zero(&self, precision: i32) -> bool {
        let n = self.nrows.min(self.ncols);
        for i in 0..n {
            if round_to(self[(i, i)], precision, RoundMode::HalfUp) == T::zero() {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_reconstructs(a: &Matrix<f64>, tol: f64) {
        let qr = a.qr();
        let back = qr.q() * qr.r();
        assert_eq!(back.nrows(), a.nrows());
        for i in 0..a.nrows() {
            for j in 0..a.ncols() {
                assert!(
                    (back[(i, j)] - a[(i, j)]).abs() < tol,
                    "QR[({},{})] = {}, expected {}",
                    i,
                    j,
                    back[(i, j)],
                    a[(i, j)]
                );
            }
        }
    }

    fn assert_orthonormal_cols(q: &Matrix<f64>, tol: f64) {
        let qtq = q.transpose() * q;
        for i in 0..qtq.nrows() {
            for j in 0..qtq.ncols() {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!(
                    (qtq[(i, j)] - expected).abs() < tol,
                    "QtQ[({},{})] = {}",
                    i,
                    j,
                    qtq[(i, j)]
                );
            }
        }
    }

    #[test]
    fn qr_3x3_classic() {
        let a = Matrix::from_rows(
            3,
            3,
            &[12.0, -51.0, 4.0, 6.0, 167.0, -68.0, -4.0, 24.0, -41.0],
        );
        assert_reconstructs(&a, 1e-10);
        let qr = a.qr();
        assert_orthonormal_cols(qr.q(), 1e-10);
    }

    #[test]
    fn qr_r_is_upper_triangular() {
        let a = Matrix::from_rows(
            3,
            3,
            &[2.0, 1.0, -1.0, -3.0, -1.0, 2.0, -2.0, 1.0, 2.0],
        );
        let qr = a.qr();
        let r = qr.r();
        for i in 0..3 {
            for j in 0..i {
                assert_eq!(r[(i, j)], 0.0, "R[({},{})]", i, j);
            }
        }
    }

    #[test]
    fn qr_tall_matrix() {
        let a = Matrix::from_rows(4, 2, &[1.0, 0.0, 1.0, 1.0, 1.0, 2.0, 1.0, 3.0]);
        let qr = a.qr();
        assert_eq!(qr.q().nrows(), 4);
        assert_eq!(qr.q().ncols(), 2);
        assert_eq!(qr.r().nrows(), 2);
        assert_reconstructs(&a, 1e-10);
        assert_orthonormal_cols(qr.q(), 1e-10);
    }

    #[test]
    fn qr_identity() {
        let id = Matrix::<f64>::eye(3);
        assert_reconstructs(&id, 1e-12);
    }

    #[test]
    #[should_panic(expected = "nrows >= ncols")]
    fn qr_wide_panics() {
        let a = Matrix::<f64>::zeros(2, 3);
        let _ = a.qr();
    }

    #[test]
    fn qr_det_magnitude_matches() {
        // |det A| = |prod of R diagonal|
        let a = Matrix::<f64>::from_rows(3, 3, &[6.0, 1.0, 1.0, 4.0, -2.0, 5.0, 2.0, 8.0, 7.0]);
        let qr = a.qr();
        let r = qr.r();
        let mut rdet = 1.0;
        for i in 0..3 {
            rdet *= r[(i, i)];
        }
        assert!((rdet.abs() - 306.0).abs() < 1e-9);
    }

    #[test]
    fn diag_has_zero_flags_rank_deficiency() {
        // second column is a multiple of the first
        let a = Matrix::from_rows(3, 2, &[1.0, 2.0, 1.0, 2.0, 1.0, 2.0]);
        let qr = a.qr();
        assert!(qr.r().diag_has_zero(6));

        let full = Matrix::from_rows(2, 2, &[1.0, 0.0, 0.0, 1.0]);
        assert!(!full.qr().r().diag_has_zero(6));
    }
}
