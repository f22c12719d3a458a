use crate::traits::{FloatScalar, Scalar};

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Squared Frobenius norm (sum of all elements squared).
    pub fn frobenius_norm_squared(&self) -> T {
        let mut acc = T::zero();
        for &x in &self.data {
            acc = acc + x * x;
        }
        acc
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// Frobenius norm (square root of the sum of squared elements).
    ///
    /// ```
    /// use statrix::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
    /// assert!((m.frobenius_norm() - 30.0_f64.sqrt()).abs() < 1e-12);
    /// ```
    pub fn frobenius_norm(&self) -> T {
        self.frobenius_norm_squared().sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frobenius() {
        let m = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
        assert!((m.frobenius_norm() - 30.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn frobenius_squared_integer() {
        let m = Matrix::from_rows(2, 2, &[1, 2, 3, 4]);
        assert_eq!(m.frobenius_norm_squared(), 30);
    }
}
