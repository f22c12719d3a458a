use core::fmt::{self, Write as _};

use rand::Rng;

use crate::scalar::{round_to, RoundMode};
use crate::traits::{FloatScalar, Scalar};
use crate::Vector;

use super::Matrix;

// ── Aggregation ─────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Sum of all elements.
    pub fn sum(&self) -> T {
        let mut acc = T::zero();
        for &x in &self.data {
            acc = acc + x;
        }
        acc
    }
}

// ── Row / column access ─────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Copy row `i` into a [`Vector`].
    ///
    /// ```
    /// use statrix::Matrix;
    /// let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(m.row(1).as_slice(), &[4.0, 5.0, 6.0]);
    /// ```
    pub fn row(&self, i: usize) -> Vector<T> {
        Vector::from_fn(self.ncols, |j| self[(i, j)])
    }

    /// Copy column `j` into a [`Vector`].
    pub fn col(&self, j: usize) -> Vector<T> {
        Vector::from_slice(&self.data[j * self.nrows..(j + 1) * self.nrows])
    }

    /// Overwrite row `i` from a [`Vector`].
    ///
    /// Panics unless the vector length matches the column count.
    pub fn set_row(&mut self, i: usize, v: &Vector<T>) {
        assert_eq!(v.len(), self.ncols, "vector length mismatch");
        for j in 0..self.ncols {
            self[(i, j)] = v[j];
        }
    }

    /// Overwrite column `j` from a [`Vector`].
    ///
    /// Panics unless the vector length matches the row count.
    pub fn set_col(&mut self, j: usize, v: &Vector<T>) {
        assert_eq!(v.len(), self.nrows, "vector length mismatch");
        for i in 0..self.nrows {
            self[(i, j)] = v[i];
        }
    }

    /// Swap two rows in place.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a != b {
            for j in 0..self.ncols {
                self.data.swap(j * self.nrows + a, j * self.nrows + b);
            }
        }
    }

    /// Swap two columns in place.
    pub fn swap_cols(&mut self, a: usize, b: usize) {
        if a != b {
            for i in 0..self.nrows {
                self.data.swap(a * self.nrows + i, b * self.nrows + i);
            }
        }
    }

    /// Zero every element.
    pub fn reset(&mut self) {
        for x in self.data.iter_mut() {
            *x = T::zero();
        }
    }

    /// Set every element to `value`.
    pub fn fill_with(&mut self, value: T) {
        for x in self.data.iter_mut() {
            *x = value;
        }
    }
}

// ── Randomization ───────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Fisher–Yates shuffle of the whole storage in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut m = self.data.len();
        while m > 0 {
            let i = rng.gen_range(0..m);
            m -= 1;
            self.data.swap(m, i);
        }
    }

    /// Fisher–Yates shuffle of column `j` in place.
    pub fn shuffle_col<R: Rng + ?Sized>(&mut self, j: usize, rng: &mut R) {
        let base = j * self.nrows;
        let mut m = self.nrows;
        while m > 0 {
            let i = rng.gen_range(0..m);
            m -= 1;
            self.data.swap(base + m, base + i);
        }
    }

    /// Fisher–Yates shuffle of row `i` in place.
    pub fn shuffle_row<R: Rng + ?Sized>(&mut self, i: usize, rng: &mut R) {
        let mut m = self.ncols;
        while m > 0 {
            let j = rng.gen_range(0..m);
            m -= 1;
            self.data.swap(m * self.nrows + i, j * self.nrows + i);
        }
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// Overwrite every element with a uniform draw from [0, 1).
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for x in self.data.iter_mut() {
            *x = T::from_f64(rng.gen::<f64>());
        }
    }

    /// Overwrite every element with a uniform draw from [a, b).
    pub fn randomize_range<R: Rng + ?Sized>(&mut self, a: T, b: T, rng: &mut R) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let d = hi - lo;
        for x in self.data.iter_mut() {
            *x = lo + d * T::from_f64(rng.gen::<f64>());
        }
    }

    /// Round every element to `digits` decimal digits with the given
    /// tie mode.
    pub fn cleanup(&mut self, digits: i32, mode: RoundMode) {
        for x in self.data.iter_mut() {
            *x = round_to(*x, digits, mode);
        }
    }

    /// A rounded copy; see [`cleanup`](Self::cleanup).
    pub fn get_clean(&self, digits: i32, mode: RoundMode) -> Self {
        let mut m = self.clone();
        m.cleanup(digits, mode);
        m
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.nrows;
        let n = self.ncols;

        // measure column widths
        let mut widths: Vec<usize> = vec![0; n];
        for j in 0..n {
            for i in 0..m {
                let w = WriteCounting::count(|wc| write!(wc, "{}", self[(i, j)]));
                if w > widths[j] {
                    widths[j] = w;
                }
            }
        }

        for i in 0..m {
            write!(f, "│")?;
            for j in 0..n {
                if j > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:>width$}", self[(i, j)], width = widths[j])?;
            }
            write!(f, "│")?;
            if i + 1 < m {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

struct WriteCounting {
    count: usize,
}

impl WriteCounting {
    fn count(f: impl FnOnce(&mut Self) -> fmt::Result) -> usize {
        let mut wc = WriteCounting { count: 0 };
        let _ = f(&mut wc);
        wc.count
    }
}

impl fmt::Write for WriteCounting {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.count += s.len();
        Ok(())
    }
}
