use core::ops::{Div, Mul, Neg, Sub};

use crate::error::Error;
use crate::traits::Scalar;

use super::Vector;

#[inline]
fn check_len<T: Scalar>(a: &Vector<T>, b: &Vector<T>) -> Result<(), Error> {
    if a.len() != b.len() {
        return Err(Error::LengthMismatch {
            expected: a.len(),
            got: b.len(),
        });
    }
    Ok(())
}

// ── Scalar arithmetic (never fails) ─────────────────────────────────

impl<T: Scalar> Vector<T> {
    /// Add a scalar to every element, producing a new vector.
    ///
    /// ```
    /// use statrix::Vector;
    /// let v = Vector::from_slice(&[1.0, 2.0]).add(10.0);
    /// assert_eq!(v.as_slice(), &[11.0, 12.0]);
    /// ```
    pub fn add(&self, x: T) -> Self {
        self.map(|a| a + x)
    }

    /// Subtract a scalar from every element, producing a new vector.
    pub fn subtract(&self, x: T) -> Self {
        self.map(|a| a - x)
    }

    /// Multiply every element by a scalar, producing a new vector.
    ///
    /// ```
    /// use statrix::Vector;
    /// let v = Vector::from_slice(&[1.0, 2.0]).scale(3.0);
    /// assert_eq!(v.as_slice(), &[3.0, 6.0]);
    /// ```
    pub fn scale(&self, x: T) -> Self {
        self.map(|a| a * x)
    }

    /// Divide every element by a scalar, producing a new vector.
    pub fn divide(&self, x: T) -> Self {
        self.map(|a| a / x)
    }
}

// ── Pairwise arithmetic (length-checked) ────────────────────────────

impl<T: Scalar> Vector<T> {
    /// Element-wise sum. Fails on unequal lengths.
    ///
    /// ```
    /// use statrix::Vector;
    /// let a = Vector::from_slice(&[1.0, 2.0]);
    /// let b = Vector::from_slice(&[10.0, 20.0]);
    /// assert_eq!(a.sum_with(&b).unwrap().as_slice(), &[11.0, 22.0]);
    /// ```
    pub fn sum_with(&self, other: &Self) -> Result<Self, Error> {
        check_len(self, other)?;
        Ok(Vector {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| a + b)
                .collect(),
        })
    }

    /// Element-wise difference. Fails on unequal lengths.
    pub fn difference(&self, other: &Self) -> Result<Self, Error> {
        check_len(self, other)?;
        Ok(Vector {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| a - b)
                .collect(),
        })
    }

    /// Element-wise product. Fails on unequal lengths.
    pub fn product(&self, other: &Self) -> Result<Self, Error> {
        check_len(self, other)?;
        Ok(Vector {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| a * b)
                .collect(),
        })
    }

    /// Element-wise quotient. Fails on unequal lengths.
    pub fn quotient(&self, other: &Self) -> Result<Self, Error> {
        check_len(self, other)?;
        Ok(Vector {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| a / b)
                .collect(),
        })
    }

    /// Dot product. Fails on unequal lengths.
    ///
    /// ```
    /// use statrix::Vector;
    /// let a = Vector::from_slice(&[1.0, 2.0, 3.0]);
    /// let b = Vector::from_slice(&[4.0, 5.0, 6.0]);
    /// assert_eq!(a.dot(&b).unwrap(), 32.0);
    /// ```
    pub fn dot(&self, other: &Self) -> Result<T, Error> {
        check_len(self, other)?;
        Ok(dot_unchecked(&self.data, &other.data))
    }

    /// Cross product of two 3-element vectors.
    ///
    /// Fails unless both vectors have length 3.
    ///
    /// ```
    /// use statrix::Vector;
    /// let x = Vector::from_slice(&[1.0, 0.0, 0.0]);
    /// let y = Vector::from_slice(&[0.0, 1.0, 0.0]);
    /// let z = x.cross(&y).unwrap();
    /// assert_eq!(z.as_slice(), &[0.0, 0.0, 1.0]);
    /// ```
    pub fn cross(&self, other: &Self) -> Result<Self, Error> {
        if self.len() != 3 {
            return Err(Error::LengthMismatch {
                expected: 3,
                got: self.len(),
            });
        }
        if other.len() != 3 {
            return Err(Error::LengthMismatch {
                expected: 3,
                got: other.len(),
            });
        }
        Ok(Vector {
            data: vec![
                self[1] * other[2] - self[2] * other[1],
                self[2] * other[0] - self[0] * other[2],
                self[0] * other[1] - self[1] * other[0],
            ],
        })
    }
}

/// Dot product over two slices already known to have equal length.
pub(crate) fn dot_unchecked<T: Scalar>(a: &[T], b: &[T]) -> T {
    let mut acc = T::zero();
    for (&x, &y) in a.iter().zip(b.iter()) {
        acc = acc + x * y;
    }
    acc
}

// ── Operators ───────────────────────────────────────────────────────

impl<T: Scalar> core::ops::Add for &Vector<T> {
    type Output = Vector<T>;

    fn add(self, rhs: &Vector<T>) -> Vector<T> {
        assert_eq!(
            self.len(),
            rhs.len(),
            "length mismatch: {} + {}",
            self.len(),
            rhs.len(),
        );
        Vector {
            data: self
                .data
                .iter()
                .zip(rhs.data.iter())
                .map(|(&a, &b)| a + b)
                .collect(),
        }
    }
}

impl<T: Scalar> core::ops::Add for Vector<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl<T: Scalar> Sub for &Vector<T> {
    type Output = Vector<T>;

    fn sub(self, rhs: &Vector<T>) -> Vector<T> {
        assert_eq!(
            self.len(),
            rhs.len(),
            "length mismatch: {} - {}",
            self.len(),
            rhs.len(),
        );
        Vector {
            data: self
                .data
                .iter()
                .zip(rhs.data.iter())
                .map(|(&a, &b)| a - b)
                .collect(),
        }
    }
}

impl<T: Scalar> Sub for Vector<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl<T: Scalar> Neg for &Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Vector<T> {
        self.map(|x| T::zero() - x)
    }
}

impl<T: Scalar> Neg for Vector<T> {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

impl<T: Scalar> Mul<T> for &Vector<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: T) -> Vector<T> {
        self.scale(rhs)
    }
}

impl<T: Scalar> Mul<T> for Vector<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.scale(rhs)
    }
}

impl<T: Scalar> Div<T> for &Vector<T> {
    type Output = Vector<T>;

    fn div(self, rhs: T) -> Vector<T> {
        self.divide(rhs)
    }
}

impl<T: Scalar> Div<T> for Vector<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        self.divide(rhs)
    }
}
