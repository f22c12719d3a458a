use crate::scalar::{round_to, RoundMode};
use crate::traits::FloatScalar;

use super::Vector;

// ── In-place transforms ─────────────────────────────────────────────

impl<T: FloatScalar> Vector<T> {
    /// Natural-log transform: `x → ln x`.
    ///
    /// ```
    /// use statrix::Vector;
    /// let mut v = Vector::from_slice(&[1.0_f64, std::f64::consts::E]);
    /// v.log_transform();
    /// assert!((v[0]).abs() < 1e-12);
    /// assert!((v[1] - 1.0).abs() < 1e-12);
    /// ```
    pub fn log_transform(&mut self) {
        for x in self.data.iter_mut() {
            *x = x.ln();
        }
    }

    /// Inverse-hyperbolic-sine transform: `x → asinh(xθ) / θ`.
    ///
    /// A log-like variance stabilizer that, unlike `ln`, is defined at
    /// zero and for negative values.
    pub fn asinh_transform(&mut self, theta: T) {
        for x in self.data.iter_mut() {
            *x = (*x * theta).asinh() / theta;
        }
    }

    /// Box-Cox transform: `x → (x^λ − 1) / λ`.
    pub fn box_cox_transform(&mut self, lambda: T) {
        for x in self.data.iter_mut() {
            *x = (x.powf(lambda) - T::one()) / lambda;
        }
    }

    /// Round every element to `digits` decimal digits with the given
    /// tie mode.
    ///
    /// ```
    /// use statrix::{RoundMode, Vector};
    /// let mut v = Vector::from_slice(&[2.5_f64, -1.25]);
    /// v.cleanup(0, RoundMode::HalfEven);
    /// assert_eq!(v.as_slice(), &[2.0, -1.0]);
    /// ```
    pub fn cleanup(&mut self, digits: i32, mode: RoundMode) {
        for x in self.data.iter_mut() {
            *x = round_to(*x, digits, mode);
        }
    }

    /// A rounded copy; see [`cleanup`](Self::cleanup).
    pub fn get_clean(&self, digits: i32, mode: RoundMode) -> Self {
        let mut v = self.clone();
        v.cleanup(digits, mode);
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_transform() {
        let mut v = Vector::from_slice(&[1.0_f64, 10.0, 100.0]);
        v.log_transform();
        assert!((v[0]).abs() < 1e-12);
        assert!((v[2] - 2.0 * v[1]).abs() < 1e-12);
    }

    #[test]
    fn asinh_transform_defined_at_zero() {
        let mut v = Vector::from_slice(&[0.0_f64, 1.0, -1.0]);
        v.asinh_transform(2.0);
        assert_eq!(v[0], 0.0);
        assert!((v[1] - 2.0_f64.asinh() / 2.0).abs() < 1e-12);
        // odd function
        assert!((v[1] + v[2]).abs() < 1e-12);
    }

    #[test]
    fn box_cox_lambda_one_shifts() {
        let mut v = Vector::from_slice(&[1.0_f64, 2.0, 5.0]);
        v.box_cox_transform(1.0);
        assert_eq!(v.as_slice(), &[0.0, 1.0, 4.0]);
    }

    #[test]
    fn box_cox_lambda_two() {
        let mut v = Vector::from_slice(&[3.0_f64]);
        v.box_cox_transform(2.0);
        assert!((v[0] - 4.0).abs() < 1e-12);
    }

    #[test]
    fn cleanup_rounds_all() {
        let mut v = Vector::from_slice(&[1.005_f64, 2.5, -2.5]);
        v.cleanup(0, RoundMode::HalfUp);
        assert_eq!(v.as_slice(), &[1.0, 3.0, -3.0]);
    }

    #[test]
    fn get_clean_leaves_original() {
        let v = Vector::from_slice(&[1.234_f64, 5.678]);
        let clean = v.get_clean(1, RoundMode::HalfUp);
        assert_eq!(clean.as_slice(), &[1.2, 5.7]);
        assert_eq!(v[0], 1.234);
    }
}
