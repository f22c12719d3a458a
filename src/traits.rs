use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

use crate::Matrix;

/// Trait for types that can be used as vector / matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer widths.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point elements.
///
/// Required by operations that need `sqrt`, `ln`, `abs`, etc.
/// (norms, statistical moments, transforms, decompositions).
pub trait FloatScalar: Scalar + Float {
    /// Convert an `f64` constant into `Self`.
    fn from_f64(x: f64) -> Self;

    /// Widen `self` to `f64`.
    fn as_f64(self) -> f64;
}

/// Concrete impls for real floats — trivial delegation.
macro_rules! impl_float_scalar {
    ($($t:ty),*) => {
        $(
            impl FloatScalar for $t {
                #[inline] fn from_f64(x: f64) -> $t { x as $t }
                #[inline] fn as_f64(self) -> f64 { self as f64 }
            }
        )*
    };
}

impl_float_scalar!(f32, f64);

/// Read-only element access to a matrix-like type.
///
/// Implemented by dense [`Matrix`], packed [`SymMat`](crate::SymMat), and
/// [`DiagMat`](crate::DiagMat), so algorithms can operate over any storage
/// layout. Elements are returned by value: packed layouts have no
/// addressable storage for implied entries (a diagonal matrix's
/// off-diagonal zeros, for instance).
pub trait MatrixRef<T: Scalar> {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn get(&self, row: usize, col: usize) -> T;
}

/// Mutable element access to a matrix-like type.
///
/// Writes that the layout cannot represent (off-diagonal entries of a
/// [`DiagMat`](crate::DiagMat)) are dropped.
pub trait MatrixMut<T: Scalar>: MatrixRef<T> {
    fn set(&mut self, row: usize, col: usize, value: T);
}

/// Expand any matrix-like value into a dense [`Matrix`].
///
/// ```
/// use statrix::{DiagMat, Vector, to_dense};
/// let d = DiagMat::from_diag(&Vector::from_slice(&[1.0, 2.0]));
/// let m = to_dense(&d);
/// assert_eq!(m[(0, 0)], 1.0);
/// assert_eq!(m[(0, 1)], 0.0);
/// ```
pub fn to_dense<T: Scalar, M: MatrixRef<T>>(m: &M) -> Matrix<T> {
    Matrix::from_fn(m.nrows(), m.ncols(), |i, j| m.get(i, j))
}
