use crate::diagonal::DiagMat;
use crate::error::Error;
use crate::traits::{FloatScalar, Scalar};

use super::Matrix;

// ── Square-matrix operations ────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Sum of diagonal elements.
    ///
    /// ```
    /// use statrix::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m.trace(), 5.0);
    /// ```
    pub fn trace(&self) -> T {
        let n = self.nrows.min(self.ncols);
        let mut acc = T::zero();
        for i in 0..n {
            acc = acc + self[(i, i)];
        }
        acc
    }

    /// Overwrite with the identity matrix in place.
    ///
    /// Panics if the matrix is not square.
    pub fn to_identity(&mut self) {
        assert!(self.is_square(), "identity requires a square matrix");
        for x in self.data.iter_mut() {
            *x = T::zero();
        }
        for i in 0..self.nrows {
            self[(i, i)] = T::one();
        }
    }

    /// Extract the diagonal into a [`DiagMat`].
    pub fn diagonal(&self) -> DiagMat<T> {
        let n = self.nrows.min(self.ncols);
        DiagMat::from_fn(n, |i| self[(i, i)])
    }

    /// Whether the matrix equals its transpose.
    pub fn is_symmetric(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        for i in 0..self.nrows {
            for j in (i + 1)..self.nrows {
                if self[(i, j)] != self[(j, i)] {
                    return false;
                }
            }
        }
        true
    }

    /// The submatrix with row `i` and column `j` struck out.
    fn strike(&self, row: usize, col: usize) -> Self {
        Matrix::from_fn(self.nrows - 1, self.ncols - 1, |i, j| {
            let si = if i < row { i } else { i + 1 };
            let sj = if j < col { j } else { j + 1 };
            self[(si, sj)]
        })
    }

    /// Determinant by cofactor expansion along the first row.
    ///
    /// O(n!) — intended for the small matrices this crate works with.
    /// Panics if the matrix is not square.
    ///
    /// ```
    /// use statrix::Matrix;
    /// let m = Matrix::from_rows(3, 3, &[6.0, 1.0, 1.0, 4.0, -2.0, 5.0, 2.0, 8.0, 7.0]);
    /// assert_eq!(m.det(), -306.0);
    /// ```
    pub fn det(&self) -> T {
        assert!(self.is_square(), "determinant requires a square matrix");
        let n = self.nrows;
        if n == 0 {
            return T::one();
        }
        if n == 1 {
            return self[(0, 0)];
        }
        let mut det = T::zero();
        for j in 0..n {
            let c = self[(0, j)] * self.strike(0, j).det();
            if j % 2 == 1 {
                det = det - c;
            } else {
                det = det + c;
            }
        }
        det
    }

    /// The (i, j) minor: determinant of the matrix with row `i` and
    /// column `j` struck out. Panics if the matrix is not square.
    pub fn minor(&self, i: usize, j: usize) -> T {
        assert!(self.is_square(), "minor requires a square matrix");
        self.strike(i, j).det()
    }

    /// The (i, j) cofactor: the minor with the checkerboard sign.
    pub fn cofactor(&self, i: usize, j: usize) -> T {
        let minor = self.minor(i, j);
        if (i + j) % 2 == 1 {
            T::zero() - minor
        } else {
            minor
        }
    }

    /// The matrix of cofactors. Panics if the matrix is not square.
    pub fn cofactor_matrix(&self) -> Self {
        assert!(
            self.is_square(),
            "cofactor matrix requires a square matrix"
        );
        Matrix::from_fn(self.nrows, self.ncols, |i, j| self.cofactor(i, j))
    }

    /// The adjugate (transposed cofactor matrix).
    pub fn adjugate(&self) -> Self {
        self.cofactor_matrix().transpose()
    }

    /// Whether the determinant is zero.
    pub fn is_singular(&self) -> bool {
        self.det() == T::zero()
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// Inverse via the adjugate, with the determinant computed once.
    ///
    /// Fails with [`Error::Singular`] when the determinant is zero.
    /// Panics if the matrix is not square.
    ///
    /// ```
    /// use statrix::Matrix;
    /// let m = Matrix::<f64>::from_rows(2, 2, &[4.0, 7.0, 2.0, 6.0]);
    /// let inv = m.inverse().unwrap();
    /// let id = &m * &inv;
    /// assert!((id[(0, 0)] - 1.0).abs() < 1e-12);
    /// assert!(id[(0, 1)].abs() < 1e-12);
    /// ```
    pub fn inverse(&self) -> Result<Self, Error> {
        assert!(self.is_square(), "inverse requires a square matrix");
        let det = self.det();
        if det == T::zero() {
            return Err(Error::Singular);
        }
        Ok(self.adjugate() * (T::one() / det))
    }
}
