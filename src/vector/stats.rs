use core::cmp::Ordering;

use crate::error::Error;
use crate::norm::Norm;
use crate::traits::{FloatScalar, Scalar};

use super::ops::dot_unchecked;
use super::Vector;

/// Divisor choice for variance and covariance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bias {
    /// Divide by `n - 1` (Bessel-corrected sample moment).
    #[default]
    Unbiased,
    /// Divide by `n` (population moment).
    Biased,
}

// ── Slice-level kernels ─────────────────────────────────────────────
// Shared by Vector methods and the covariance/correlation matrix
// builders, which operate on already-extracted columns.

pub(crate) fn mean_slice<T: FloatScalar>(xs: &[T]) -> T {
    let mut acc = T::zero();
    for &x in xs {
        acc = acc + x;
    }
    acc / T::from_f64(xs.len() as f64)
}

pub(crate) fn var_slice<T: FloatScalar>(xs: &[T], bias: Bias) -> T {
    let mean = mean_slice(xs);
    let mut acc = T::zero();
    for &x in xs {
        let d = x - mean;
        acc = acc + d * d;
    }
    let divisor = match bias {
        Bias::Biased => xs.len(),
        Bias::Unbiased => xs.len() - 1,
    };
    acc / T::from_f64(divisor as f64)
}

pub(crate) fn std_slice<T: FloatScalar>(xs: &[T]) -> T {
    var_slice(xs, Bias::Unbiased).sqrt()
}

pub(crate) fn cov_slice<T: FloatScalar>(a: &[T], b: &[T], bias: Bias) -> T {
    let a_mean = mean_slice(a);
    let b_mean = mean_slice(b);
    let mut acc = T::zero();
    for (&x, &y) in a.iter().zip(b.iter()) {
        acc = acc + (x - a_mean) * (y - b_mean);
    }
    let divisor = match bias {
        Bias::Biased => a.len(),
        Bias::Unbiased => a.len() - 1,
    };
    acc / T::from_f64(divisor as f64)
}

// ── Reductions ──────────────────────────────────────────────────────

impl<T: Scalar> Vector<T> {
    /// Sum of all elements.
    ///
    /// ```
    /// use statrix::Vector;
    /// let v = Vector::from_slice(&[1.0, 2.0, 3.0]);
    /// assert_eq!(v.sum(), 6.0);
    /// ```
    pub fn sum(&self) -> T {
        let mut acc = T::zero();
        for &x in &self.data {
            acc = acc + x;
        }
        acc
    }

    /// Hamming distance: element mismatches up to the shorter length,
    /// plus the length difference.
    ///
    /// ```
    /// use statrix::Vector;
    /// let a = Vector::from_slice(&[1, 2, 3]);
    /// let b = Vector::from_slice(&[1, 9, 3, 4]);
    /// assert_eq!(a.hamming(&b), 2);
    /// ```
    pub fn hamming(&self, other: &Self) -> usize {
        let overlap = self.len().min(other.len());
        let mut count = self.len().abs_diff(other.len());
        for i in 0..overlap {
            if self.data[i] != other.data[i] {
                count += 1;
            }
        }
        count
    }
}

impl<T: FloatScalar> Vector<T> {
    /// Arithmetic mean.
    pub fn mean(&self) -> T {
        mean_slice(&self.data)
    }

    /// Variance with the given divisor.
    ///
    /// ```
    /// use statrix::{Bias, Vector};
    /// let v = Vector::from_slice(&[2.0_f64, 4.0, 6.0]);
    /// assert!((v.var(Bias::Unbiased) - 4.0).abs() < 1e-12);
    /// assert!((v.var(Bias::Biased) - 8.0 / 3.0).abs() < 1e-12);
    /// ```
    pub fn var(&self, bias: Bias) -> T {
        var_slice(&self.data, bias)
    }

    /// Standard deviation (square root of the unbiased variance).
    pub fn std(&self) -> T {
        std_slice(&self.data)
    }

    /// Covariance with another vector. Fails on unequal lengths.
    pub fn cov(&self, other: &Self, bias: Bias) -> Result<T, Error> {
        if self.len() != other.len() {
            return Err(Error::LengthMismatch {
                expected: self.len(),
                got: other.len(),
            });
        }
        Ok(cov_slice(&self.data, &other.data, bias))
    }

    /// Pearson correlation (unbiased covariance over the product of the
    /// standard deviations). Fails on unequal lengths.
    ///
    /// ```
    /// use statrix::Vector;
    /// let a = Vector::from_slice(&[1.0_f64, 2.0, 3.0]);
    /// let b = Vector::from_slice(&[2.0_f64, 4.0, 6.0]);
    /// assert!((a.cor(&b).unwrap() - 1.0).abs() < 1e-12);
    /// ```
    pub fn cor(&self, other: &Self) -> Result<T, Error> {
        if self.len() != other.len() {
            return Err(Error::LengthMismatch {
                expected: self.len(),
                got: other.len(),
            });
        }
        Ok(cov_slice(&self.data, &other.data, Bias::Unbiased)
            / (std_slice(&self.data) * std_slice(&other.data)))
    }

    /// Cosine similarity. Always evaluated under the Euclidean norm,
    /// whatever norm the caller's stack has active. Fails on unequal
    /// lengths.
    ///
    /// ```
    /// use statrix::Vector;
    /// let a = Vector::from_slice(&[1.0_f64, 0.0]);
    /// let b = Vector::from_slice(&[0.0_f64, 1.0]);
    /// assert!(a.cosine(&b).unwrap().abs() < 1e-12);
    /// ```
    pub fn cosine(&self, other: &Self) -> Result<T, Error> {
        if self.len() != other.len() {
            return Err(Error::LengthMismatch {
                expected: self.len(),
                got: other.len(),
            });
        }
        let d = dot_unchecked(&self.data, &other.data);
        Ok(d / (Norm::Euclidean.apply(&self.data) * Norm::Euclidean.apply(&other.data)))
    }
}

// ── Median ──────────────────────────────────────────────────────────

fn float_cmp<T: FloatScalar>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// k-th smallest element of a scratch buffer (0-based), by introselect.
fn select_kth<T: FloatScalar>(work: &mut [T], k: usize) -> T {
    let (_, kth, _) = work.select_nth_unstable_by(k, float_cmp);
    *kth
}

/// Median of a scratch buffer: the middle order statistic, or the mean
/// of the two middle ones for even lengths.
fn median_of<T: FloatScalar>(work: &mut [T]) -> T {
    let n = work.len();
    let two = T::one() + T::one();
    if n % 2 == 1 {
        select_kth(work, n / 2)
    } else {
        let hi = select_kth(work, n / 2);
        // after selection, the lower half sits left of the pivot
        let mut lo = work[0];
        for &x in &work[1..n / 2] {
            if x > lo {
                lo = x;
            }
        }
        (lo + hi) / two
    }
}

impl<T: FloatScalar> Vector<T> {
    /// Exact median.
    ///
    /// Odd lengths return the middle order statistic; even lengths the
    /// mean of the two middle ones. The empty vector yields 0.
    ///
    /// ```
    /// use statrix::Vector;
    /// let v = Vector::from_slice(&[5.0_f64, 1.0, 3.0]);
    /// assert_eq!(v.median(), 3.0);
    /// let w = Vector::from_slice(&[4.0_f64, 1.0, 3.0, 2.0]);
    /// assert_eq!(w.median(), 2.5);
    /// ```
    pub fn median(&self) -> T {
        let n = self.len();
        let two = T::one() + T::one();
        match n {
            0 => T::zero(),
            1 => self.data[0],
            2 => (self.data[0] + self.data[1]) / two,
            _ => {
                let mut work = self.data.clone();
                median_of(&mut work)
            }
        }
    }

    /// Median via binning (the binmedian scheme).
    ///
    /// Values within one standard deviation of the mean are bucketed
    /// into `bins` bins (0 selects `ceil(n / 1000)`, clamped to `n` for
    /// short vectors); values outside only contribute counts. The bucket
    /// holding each median rank is then resolved by exact selection, as
    /// are ranks that land outside the binned range entirely, so the
    /// result always equals [`median`](Self::median).
    ///
    /// The binning pays off when most values cluster inside
    /// `mean ± std`; for adversarial distributions it degrades to plain
    /// selection over a partition.
    pub fn binmedian(&self, bins: usize) -> T {
        let n = self.len();
        let two = T::one() + T::one();
        match n {
            0 => return T::zero(),
            1 => return self.data[0],
            2 => return (self.data[0] + self.data[1]) / two,
            _ => {}
        }

        let mut b = if bins == 0 {
            (n + 999) / 1000
        } else {
            bins
        };
        if n < 20 || b > n {
            b = n;
        }

        if n % 2 == 1 {
            self.rank_via_bins(n / 2, b)
        } else {
            let lo = self.rank_via_bins(n / 2 - 1, b);
            let hi = self.rank_via_bins(n / 2, b);
            (lo + hi) / two
        }
    }

    /// k-th smallest element (0-based), located through the bin pass.
    fn rank_via_bins(&self, k: usize, b: usize) -> T {
        let mean = self.mean();
        let std = self.std();
        let lo_edge = mean - std;
        let hi_edge = mean + std;
        let bin_width = (hi_edge - lo_edge) / T::from_f64(b as f64);

        // degenerate spread: every value is identical
        if bin_width <= T::zero() {
            let mut work = self.data.clone();
            return select_kth(&mut work, k);
        }

        let mut below: Vec<T> = Vec::new();
        let mut above: Vec<T> = Vec::new();
        let mut binned: Vec<Vec<T>> = vec![Vec::new(); b];

        for &x in &self.data {
            if x < lo_edge {
                below.push(x);
            } else if x > hi_edge {
                above.push(x);
            } else {
                let mut idx = ((x - lo_edge) / bin_width).floor().as_f64() as usize;
                if idx >= b {
                    idx = b - 1;
                }
                binned[idx].push(x);
            }
        }

        if k < below.len() {
            return select_kth(&mut below, k);
        }
        let mut cum = below.len();
        for bin in binned.iter_mut() {
            if k < cum + bin.len() {
                return select_kth(bin, k - cum);
            }
            cum += bin.len();
        }
        select_kth(&mut above, k - cum)
    }
}
