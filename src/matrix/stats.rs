use crate::covariance::CovMat;
use crate::traits::FloatScalar;
use crate::vector::stats::{cov_slice, std_slice, var_slice};
use crate::vector::Bias;
use crate::Vector;

use super::Matrix;

// ── Column statistics ───────────────────────────────────────────────
// Columns are observations of one variable each; both builders extract
// every column once up front and reuse the buffers for the O(cols²)
// pairwise pass.

impl<T: FloatScalar> Matrix<T> {
    /// Covariance matrix of the columns.
    ///
    /// Diagonal entries are column variances, off-diagonal entries
    /// pairwise covariances.
    ///
    /// ```
    /// use statrix::{Bias, Matrix};
    /// let m = Matrix::<f64>::from_rows(3, 2, &[1.0, 2.0, 2.0, 4.0, 3.0, 6.0]);
    /// let c = m.cov_mat(Bias::Unbiased);
    /// assert!((c.at(0, 0) - 1.0).abs() < 1e-12);
    /// assert!((c.at(0, 1) - 2.0).abs() < 1e-12);
    /// assert!((c.at(1, 1) - 4.0).abs() < 1e-12);
    /// ```
    pub fn cov_mat(&self, bias: Bias) -> CovMat<T> {
        let n = self.ncols;
        let cols: Vec<Vector<T>> = (0..n).map(|j| self.col(j)).collect();
        let mut q = CovMat::covariance(n);
        for i in 0..n {
            q.set(i, i, var_slice(cols[i].as_slice(), bias));
            for j in (i + 1)..n {
                q.set(i, j, cov_slice(cols[i].as_slice(), cols[j].as_slice(), bias));
            }
        }
        q
    }

    /// Correlation matrix of the columns.
    ///
    /// Diagonal entries are 1; off-diagonal entries are pairwise
    /// covariances scaled by the product of the column standard
    /// deviations.
    pub fn cor_mat(&self, bias: Bias) -> CovMat<T> {
        let n = self.ncols;
        let cols: Vec<Vector<T>> = (0..n).map(|j| self.col(j)).collect();
        let stds: Vec<T> = cols.iter().map(|c| std_slice(c.as_slice())).collect();
        let mut q = CovMat::correlation(n);
        for i in 0..n {
            q.set(i, i, T::one());
            for j in (i + 1)..n {
                let cov = cov_slice(cols[i].as_slice(), cols[j].as_slice(), bias);
                q.set(i, j, cov / (stds[i] * stds[j]));
            }
        }
        q
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // three observations of three variables:
    // x2 = 2 * x1, x3 runs against x1
    fn data() -> Matrix<f64> {
        Matrix::from_rows(
            3,
            3,
            &[1.0, 2.0, 6.0, 2.0, 4.0, 4.0, 3.0, 6.0, 2.0],
        )
    }

    #[test]
    fn cov_mat_values() {
        let c = data().cov_mat(Bias::Unbiased);
        assert!(c.is_cov());
        assert!((c.at(0, 0) - 1.0).abs() < 1e-12);
        assert!((c.at(1, 1) - 4.0).abs() < 1e-12);
        assert!((c.at(2, 2) - 4.0).abs() < 1e-12);
        assert!((c.at(0, 1) - 2.0).abs() < 1e-12);
        assert!((c.at(0, 2) + 2.0).abs() < 1e-12);
        // symmetric access
        assert_eq!(c.at(1, 0), c.at(0, 1));
    }

    #[test]
    fn cov_mat_biased_scales() {
        let unbiased = data().cov_mat(Bias::Unbiased);
        let biased = data().cov_mat(Bias::Biased);
        // n = 3: biased = unbiased * 2/3
        assert!((biased.at(0, 0) - unbiased.at(0, 0) * 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn cor_mat_values() {
        let c = data().cor_mat(Bias::Unbiased);
        assert!(c.is_cor());
        for i in 0..3 {
            assert_eq!(c.at(i, i), 1.0);
        }
        // perfectly correlated and anti-correlated columns
        assert!((c.at(0, 1) - 1.0).abs() < 1e-12);
        assert!((c.at(0, 2) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn cor_mat_bounds() {
        let m = Matrix::<f64>::from_rows(
            4,
            2,
            &[1.0, 7.0, 2.0, 3.0, 3.0, 9.0, 4.0, 1.0],
        );
        let c = m.cor_mat(Bias::Unbiased);
        assert!(c.at(0, 1).abs() <= 1.0 + 1e-12);
    }
}
