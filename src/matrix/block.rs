use crate::error::Error;
use crate::traits::Scalar;

use super::Matrix;

// ── Concatenation and extraction ────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Horizontal concatenation: `[self | rhs]`.
    ///
    /// Fails unless the row counts agree.
    ///
    /// ```
    /// use statrix::Matrix;
    /// let a = Matrix::from_rows(2, 1, &[1.0, 3.0]);
    /// let b = Matrix::from_rows(2, 2, &[2.0, 9.0, 4.0, 9.0]);
    /// let m = a.join_cols(&b).unwrap();
    /// assert_eq!(m.ncols(), 3);
    /// assert_eq!(m[(0, 1)], 2.0);
    /// ```
    pub fn join_cols(&self, rhs: &Self) -> Result<Self, Error> {
        if self.nrows != rhs.nrows {
            return Err(Error::ShapeMismatch {
                expected: (self.nrows, rhs.ncols),
                got: (rhs.nrows, rhs.ncols),
            });
        }
        // column-major: the joined storage is one buffer after the other
        let mut data = self.data.clone();
        data.extend_from_slice(&rhs.data);
        Ok(Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols + rhs.ncols,
        })
    }

    /// Vertical concatenation: `[self; rhs]`.
    ///
    /// Fails unless the column counts agree.
    pub fn join_rows(&self, rhs: &Self) -> Result<Self, Error> {
        if self.ncols != rhs.ncols {
            return Err(Error::ShapeMismatch {
                expected: (rhs.nrows, self.ncols),
                got: (rhs.nrows, rhs.ncols),
            });
        }
        let nrows = self.nrows + rhs.nrows;
        Ok(Matrix::from_fn(nrows, self.ncols, |i, j| {
            if i < self.nrows {
                self[(i, j)]
            } else {
                rhs[(i - self.nrows, j)]
            }
        }))
    }

    /// Direct sum: block-diagonal concatenation.
    ///
    /// ```
    /// use statrix::Matrix;
    /// let a = Matrix::from_rows(1, 1, &[1.0]);
    /// let b = Matrix::from_rows(2, 2, &[2.0, 0.0, 0.0, 3.0]);
    /// let s = a.direct_sum(&b);
    /// assert_eq!(s.nrows(), 3);
    /// assert_eq!(s[(0, 0)], 1.0);
    /// assert_eq!(s[(2, 2)], 3.0);
    /// assert_eq!(s[(0, 2)], 0.0);
    /// ```
    pub fn direct_sum(&self, rhs: &Self) -> Self {
        let mut m = Matrix::zeros(self.nrows + rhs.nrows, self.ncols + rhs.ncols);
        for j in 0..self.ncols {
            for i in 0..self.nrows {
                m[(i, j)] = self[(i, j)];
            }
        }
        for j in 0..rhs.ncols {
            for i in 0..rhs.nrows {
                m[(self.nrows + i, self.ncols + j)] = rhs[(i, j)];
            }
        }
        m
    }

    /// Copy the rows at the given indices, in the given order.
    ///
    /// Panics if any index is out of range.
    pub fn select_rows(&self, indices: &[usize]) -> Self {
        Matrix::from_fn(indices.len(), self.ncols, |i, j| self[(indices[i], j)])
    }

    /// Copy the columns at the given indices, in the given order.
    ///
    /// Panics if any index is out of range.
    pub fn select_cols(&self, indices: &[usize]) -> Self {
        Matrix::from_fn(self.nrows, indices.len(), |i, j| self[(i, indices[j])])
    }

    /// The first `min(5, nrows)` rows.
    pub fn head(&self) -> Self {
        let h = self.nrows.min(5);
        Matrix::from_fn(h, self.ncols, |i, j| self[(i, j)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_cols() {
        let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 5.0, 6.0]);
        let b = Matrix::from_rows(2, 1, &[3.0, 7.0]);
        let m = a.join_cols(&b).unwrap();
        assert_eq!((m.nrows(), m.ncols()), (2, 3));
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m[(1, 2)], 7.0);
        assert_eq!(m[(1, 0)], 5.0);
    }

    #[test]
    fn join_cols_row_mismatch() {
        let a = Matrix::<f64>::zeros(2, 2);
        let b = Matrix::<f64>::zeros(3, 1);
        assert!(matches!(
            a.join_cols(&b),
            Err(Error::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn join_rows() {
        let a = Matrix::from_rows(1, 2, &[1.0, 2.0]);
        let b = Matrix::from_rows(2, 2, &[3.0, 4.0, 5.0, 6.0]);
        let m = a.join_rows(&b).unwrap();
        assert_eq!((m.nrows(), m.ncols()), (3, 2));
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(1, 1)], 4.0);
        assert_eq!(m[(2, 0)], 5.0);
    }

    #[test]
    fn join_rows_col_mismatch() {
        let a = Matrix::<f64>::zeros(2, 2);
        let b = Matrix::<f64>::zeros(1, 3);
        assert!(a.join_rows(&b).is_err());
    }

    #[test]
    fn direct_sum_blocks() {
        let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = Matrix::from_rows(1, 1, &[9.0]);
        let s = a.direct_sum(&b);
        assert_eq!((s.nrows(), s.ncols()), (3, 3));
        assert_eq!(s[(1, 1)], 4.0);
        assert_eq!(s[(2, 2)], 9.0);
        assert_eq!(s[(2, 0)], 0.0);
        assert_eq!(s[(0, 2)], 0.0);
    }

    #[test]
    fn select_rows_and_cols() {
        let m = Matrix::from_rows(3, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        let r = m.select_rows(&[2, 0]);
        assert_eq!(r.nrows(), 2);
        assert_eq!(r[(0, 0)], 7.0);
        assert_eq!(r[(1, 2)], 3.0);

        let c = m.select_cols(&[1]);
        assert_eq!(c.ncols(), 1);
        assert_eq!(c[(2, 0)], 8.0);
    }

    #[test]
    fn head_clamps() {
        let m = Matrix::from_fn(7, 2, |i, j| (i * 2 + j) as f64);
        let h = m.head();
        assert_eq!(h.nrows(), 5);
        assert_eq!(h[(4, 1)], 9.0);

        let small = Matrix::from_fn(3, 2, |i, j| (i + j) as f64);
        assert_eq!(small.head().nrows(), 3);
    }
}
