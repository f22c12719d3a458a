//! # statrix
//!
//! Dense linear algebra and descriptive statistics over one numeric
//! element kind at a time: vectors, column-major matrices, packed
//! symmetric / diagonal / covariance matrices, and configurable vector
//! norms.
//!
//! ## Quick start
//!
//! ```
//! use statrix::{Bias, Matrix, Norm, Vector};
//!
//! // invert a matrix and check the round trip
//! let a = Matrix::from_rows(2, 2, &[4.0_f64, 7.0, 2.0, 6.0]);
//! let id = &a * &a.inverse().unwrap();
//! assert!((id[(0, 0)] - 1.0).abs() < 1e-12);
//!
//! // column statistics
//! let data = Matrix::<f64>::from_rows(3, 2, &[1.0, 2.0, 2.0, 4.0, 3.0, 6.0]);
//! let cor = data.cor_mat(Bias::Unbiased);
//! assert!((cor.at(0, 1) - 1.0).abs() < 1e-12);
//!
//! // norms are explicit parameters
//! let v = Vector::from_slice(&[3.0_f64, 4.0]);
//! assert!((v.norm(Norm::Euclidean) - 5.0).abs() < 1e-12);
//! assert!((v.norm(Norm::Manhattan) - 7.0).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`vector`] — [`Vector<T>`]: fixed-length numeric buffer with
//!   element-wise arithmetic, reductions (mean, variance, covariance,
//!   correlation, cosine, Hamming, median), five norms, in-place
//!   transforms (log, asinh, Box-Cox, rounding cleanup), Fisher–Yates
//!   shuffling, and sampling with or without replacement.
//!
//! - [`matrix`] — [`Matrix<T>`]: dense column-major matrix with
//!   arithmetic, block operations, cofactor determinant / adjugate /
//!   inverse, Householder [`Qr`] decomposition, and covariance /
//!   correlation matrix construction.
//!
//! - [`symmetric`] / [`diagonal`] / [`covariance`] — [`SymMat<T>`]
//!   (packed upper-triangle storage plus graph queries),
//!   [`DiagMat<T>`] (diagonal-only storage), and [`CovMat<T>`]
//!   (covariance/correlation tagging and conversions).
//!
//! - [`norm`] — [`Norm`] identifiers and the never-empty [`NormStack`]
//!   selecting the active norm. The stack is an explicit context value
//!   passed to the computations that consult it; operations that pin a
//!   norm (cosine similarity, QR) use the Euclidean norm regardless of
//!   the stack.
//!
//! - [`scalar`] — tie-aware decimal rounding ([`round_to`] with four
//!   [`RoundMode`]s), [`factorial`] / [`choose`], and degree/radian
//!   conversion.
//!
//! - [`traits`] — [`Scalar`] / [`FloatScalar`] element traits and the
//!   [`MatrixRef`] / [`MatrixMut`] storage-polymorphism traits shared
//!   by the dense and packed layouts.
//!
//! ## Error handling
//!
//! Shape- and data-dependent failures ([`Error`]) are returned, never
//! encoded as zero-shaped results: element-wise vector methods report
//! length mismatches, joins report shape mismatches, inversion reports
//! singularity, and norm parsing reports unrecognized identifiers.
//! Operator overloads (`+`, `-`, `*`) panic on dimension mismatch like
//! any indexing bug.
//!
//! Randomized operations (shuffles, sampling, random graphs) take a
//! caller-supplied `rand` generator, so seeded runs are deterministic.

pub mod aliases;
pub mod covariance;
pub mod diagonal;
pub mod error;
pub mod matrix;
pub mod norm;
pub mod scalar;
pub mod symmetric;
pub mod traits;
pub mod vector;

pub use aliases::*;
pub use covariance::CovMat;
pub use diagonal::DiagMat;
pub use error::Error;
pub use matrix::{Matrix, Qr};
pub use norm::{Norm, NormStack};
pub use scalar::{choose, deg_to_rad, factorial, rad_to_deg, round_to, sign, RoundMode};
pub use symmetric::SymMat;
pub use traits::{to_dense, FloatScalar, MatrixMut, MatrixRef, Scalar};
pub use vector::{Bias, Vector};
