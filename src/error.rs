/// Errors from vector, matrix, and configuration operations.
///
/// Dimension- and data-dependent failures are reported explicitly rather
/// than as zero-shaped results, so callers can never silently continue
/// with a degenerate value.
///
/// ```
/// use statrix::{Error, Vector};
///
/// let a = Vector::from_slice(&[1.0_f64, 2.0]);
/// let b = Vector::from_slice(&[1.0_f64, 2.0, 3.0]);
/// assert_eq!(
///     a.sum_with(&b).unwrap_err(),
///     Error::LengthMismatch { expected: 2, got: 3 },
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Two vectors of unequal length were combined element-wise.
    LengthMismatch {
        /// Length of the left-hand operand.
        expected: usize,
        /// Length of the right-hand operand.
        got: usize,
    },
    /// Two matrices of incompatible shape were combined.
    ShapeMismatch {
        /// Expected `(rows, cols)`.
        expected: (usize, usize),
        /// Got `(rows, cols)`.
        got: (usize, usize),
    },
    /// Matrix is singular (zero determinant); no inverse exists.
    Singular,
    /// A norm identifier did not match any supported form.
    InvalidNorm(String),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::LengthMismatch { expected, got } => {
                write!(f, "length mismatch: expected {}, got {}", expected, got)
            }
            Error::ShapeMismatch { expected, got } => {
                write!(
                    f,
                    "shape mismatch: expected {}x{}, got {}x{}",
                    expected.0, expected.1, got.0, got.1
                )
            }
            Error::Singular => write!(f, "matrix is singular"),
            Error::InvalidNorm(s) => write!(f, "unrecognized norm identifier: {:?}", s),
        }
    }
}

impl std::error::Error for Error {}
