//! Covariance / correlation matrices.

use crate::error::Error;
use crate::symmetric::SymMat;
use crate::traits::{FloatScalar, MatrixMut, MatrixRef};
use crate::{Matrix, Vector};

/// A symmetric matrix tagged as holding covariances or correlations.
///
/// The flag distinguishes the two representations (diagonal of
/// variances versus diagonal of ones) and drives the conversions
/// between them.
///
/// # Examples
///
/// ```
/// use statrix::{Bias, Matrix};
///
/// let m = Matrix::from_rows(3, 2, &[1.0, 2.0, 2.0, 4.0, 3.0, 6.0]);
/// let cov = m.cov_mat(Bias::Unbiased);
/// let cor = cov.to_cor_mat();
/// assert!(cor.is_cor());
/// assert_eq!(cor.at(0, 0), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CovMat<T> {
    sym: SymMat<T>,
    correlation: bool,
}

impl<T: FloatScalar> CovMat<T> {
    /// An `n x n` zero matrix tagged as covariance.
    pub fn covariance(n: usize) -> Self {
        Self {
            sym: SymMat::new(n),
            correlation: false,
        }
    }

    /// An `n x n` zero matrix tagged as correlation.
    pub fn correlation(n: usize) -> Self {
        Self {
            sym: SymMat::new(n),
            correlation: true,
        }
    }

    /// Wrap an existing symmetric matrix.
    pub fn from_sym(sym: SymMat<T>, correlation: bool) -> Self {
        Self { sym, correlation }
    }

    /// Whether this holds covariances.
    #[inline]
    pub fn is_cov(&self) -> bool {
        !self.correlation
    }

    /// Whether this holds correlations.
    #[inline]
    pub fn is_cor(&self) -> bool {
        self.correlation
    }

    /// Matrix order.
    #[inline]
    pub fn size(&self) -> usize {
        self.sym.size()
    }

    /// Element at `(i, j)` (symmetric access).
    #[inline]
    pub fn at(&self, i: usize, j: usize) -> T {
        self.sym.at(i, j)
    }

    /// Write `(i, j)` and, by aliasing, `(j, i)`.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        self.sym.set(i, j, value);
    }

    /// The underlying symmetric matrix.
    pub fn to_sym_mat(&self) -> SymMat<T> {
        self.sym.clone()
    }

    /// Expand to a dense [`Matrix`].
    pub fn to_dense(&self) -> Matrix<T> {
        self.sym.to_dense()
    }

    /// Convert to a correlation matrix.
    ///
    /// Each off-diagonal entry is divided by the product of the square
    /// roots of the two corresponding diagonal entries (the standard
    /// deviations); the diagonal becomes 1. Already-correlation
    /// matrices are returned unchanged.
    pub fn to_cor_mat(&self) -> Self {
        if self.correlation {
            return self.clone();
        }
        let n = self.size();
        let mut m = Self::correlation(n);
        for i in 0..n {
            m.set(i, i, T::one());
            for j in (i + 1)..n {
                let stdp = self.at(i, i).sqrt() * self.at(j, j).sqrt();
                m.set(i, j, self.at(i, j) / stdp);
            }
        }
        m
    }

    /// Convert to a covariance matrix using supplied standard
    /// deviations (one per variable; a correlation matrix no longer
    /// carries them).
    ///
    /// The diagonal becomes `std[i]²` and each off-diagonal entry is
    /// scaled by `std[i] * std[j]`. Fails with
    /// [`Error::LengthMismatch`] when the vector's length differs from
    /// the matrix order. Already-covariance matrices are returned
    /// unchanged.
    pub fn to_cov_mat(&self, stds: &Vector<T>) -> Result<Self, Error> {
        if !self.correlation {
            return Ok(self.clone());
        }
        let n = self.size();
        if stds.len() != n {
            return Err(Error::LengthMismatch {
                expected: n,
                got: stds.len(),
            });
        }
        let mut m = Self::covariance(n);
        for i in 0..n {
            m.set(i, i, stds[i] * stds[i]);
            for j in (i + 1)..n {
                m.set(i, j, self.at(i, j) * stds[i] * stds[j]);
            }
        }
        Ok(m)
    }
}

// ── MatrixRef / MatrixMut ───────────────────────────────────────────

impl<T: FloatScalar> MatrixRef<T> for CovMat<T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.size()
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.size()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> T {
        self.at(row, col)
    }
}

impl<T: FloatScalar> MatrixMut<T> for CovMat<T> {
    #[inline]
    fn set(&mut self, row: usize, col: usize, value: T) {
        CovMat::set(self, row, col, value);
    }
}
