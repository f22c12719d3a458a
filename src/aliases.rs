//! Pre-defined type aliases for common element kinds.

use crate::{CovMat, DiagMat, Matrix, SymMat, Vector};

// ── Vector scalar aliases ───────────────────────────────────────────

/// Vector with `f32` elements.
pub type Vectorf32 = Vector<f32>;
/// Vector with `f64` elements.
pub type Vectorf64 = Vector<f64>;
/// Vector with `i32` elements.
pub type Vectori32 = Vector<i32>;
/// Vector with `i64` elements.
pub type Vectori64 = Vector<i64>;
/// Vector with `u32` elements.
pub type Vectoru32 = Vector<u32>;
/// Vector with `u64` elements.
pub type Vectoru64 = Vector<u64>;

// ── Matrix scalar aliases ───────────────────────────────────────────

/// Matrix with `f32` elements.
pub type Matrixf32 = Matrix<f32>;
/// Matrix with `f64` elements.
pub type Matrixf64 = Matrix<f64>;
/// Matrix with `i32` elements.
pub type Matrixi32 = Matrix<i32>;
/// Matrix with `i64` elements.
pub type Matrixi64 = Matrix<i64>;
/// Matrix with `u32` elements.
pub type Matrixu32 = Matrix<u32>;
/// Matrix with `u64` elements.
pub type Matrixu64 = Matrix<u64>;

// ── Specialized matrix aliases ──────────────────────────────────────

/// Packed symmetric matrix with `f32` elements.
pub type SymMatf32 = SymMat<f32>;
/// Packed symmetric matrix with `f64` elements.
pub type SymMatf64 = SymMat<f64>;
/// Packed symmetric matrix with `i8` elements (adjacency graphs).
pub type SymMati8 = SymMat<i8>;

/// Diagonal matrix with `f32` elements.
pub type DiagMatf32 = DiagMat<f32>;
/// Diagonal matrix with `f64` elements.
pub type DiagMatf64 = DiagMat<f64>;

/// Covariance / correlation matrix with `f32` elements.
pub type CovMatf32 = CovMat<f32>;
/// Covariance / correlation matrix with `f64` elements.
pub type CovMatf64 = CovMat<f64>;
