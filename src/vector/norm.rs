use crate::norm::{Norm, NormStack};
use crate::traits::FloatScalar;

use super::Vector;

impl<T: FloatScalar> Vector<T> {
    /// Evaluate a norm over the elements.
    ///
    /// ```
    /// use statrix::{Norm, Vector};
    /// let v = Vector::from_slice(&[3.0_f64, 4.0]);
    /// assert!((v.norm(Norm::Euclidean) - 5.0).abs() < 1e-12);
    /// assert!((v.norm(Norm::Manhattan) - 7.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn norm(&self, norm: Norm) -> T {
        norm.apply(&self.data)
    }

    /// Evaluate the norm currently active on a [`NormStack`].
    ///
    /// ```
    /// use statrix::{Norm, NormStack, Vector};
    /// let v = Vector::from_slice(&[3.0_f64, 4.0]);
    /// let mut stack = NormStack::new();
    /// stack.push(Norm::Maximum);
    /// assert_eq!(v.norm_in(&stack), 4.0);
    /// ```
    #[inline]
    pub fn norm_in(&self, stack: &NormStack) -> T {
        self.norm(stack.active())
    }

    /// Scale the vector in place to unit length under `norm`.
    ///
    /// ```
    /// use statrix::{Norm, Vector};
    /// let mut v = Vector::from_slice(&[3.0_f64, 4.0]);
    /// v.normalize(Norm::Euclidean);
    /// assert!((v.norm(Norm::Euclidean) - 1.0).abs() < 1e-12);
    /// ```
    pub fn normalize(&mut self, norm: Norm) {
        let n = self.norm(norm);
        for x in self.data.iter_mut() {
            *x = *x / n;
        }
    }

    /// Scale the vector in place to unit length under the active norm of
    /// a [`NormStack`].
    pub fn normalize_in(&mut self, stack: &NormStack) {
        self.normalize(stack.active());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn norm_variants() {
        let v = Vector::from_slice(&[1.0_f64, -2.0, 2.0]);
        assert!((v.norm(Norm::Euclidean) - 3.0).abs() < 1e-12);
        assert!((v.norm(Norm::Manhattan) - 5.0).abs() < 1e-12);
        assert_eq!(v.norm(Norm::Maximum), 2.0);
        assert_eq!(v.norm(Norm::Minimum), 1.0);
        assert!((v.norm(Norm::P(2.0)) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_each_norm() {
        for norm in [
            Norm::Euclidean,
            Norm::Manhattan,
            Norm::P(3.0),
            Norm::Maximum,
            Norm::Minimum,
        ] {
            let mut v = Vector::from_slice(&[1.0_f64, -2.0, 4.0]);
            v.normalize(norm);
            assert!(
                (v.norm(norm) - 1.0).abs() < 1e-12,
                "norm {:?} not unit after normalization",
                norm
            );
        }
    }

    #[test]
    fn norm_follows_stack() {
        let v = Vector::from_slice(&[3.0_f64, -4.0]);
        let mut stack = NormStack::new();
        assert!((v.norm_in(&stack) - 5.0).abs() < 1e-12);

        stack.push(Norm::Manhattan);
        assert!((v.norm_in(&stack) - 7.0).abs() < 1e-12);

        stack.pop();
        assert!((v.norm_in(&stack) - 5.0).abs() < 1e-12);
    }
}
