use rand::Rng;

use crate::traits::{FloatScalar, Scalar};

use super::Vector;

// ── Randomization ───────────────────────────────────────────────────
// All randomized operations draw from a caller-supplied generator, so
// deterministic runs just need a seeded `StdRng`.

impl<T: FloatScalar> Vector<T> {
    /// Overwrite every element with a uniform draw from [0, 1).
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for x in self.data.iter_mut() {
            *x = T::from_f64(rng.gen::<f64>());
        }
    }

    /// Overwrite every element with a uniform draw from [a, b)
    /// (argument order is irrelevant).
    pub fn randomize_range<R: Rng + ?Sized>(&mut self, a: T, b: T, rng: &mut R) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let d = hi - lo;
        for x in self.data.iter_mut() {
            *x = lo + d * T::from_f64(rng.gen::<f64>());
        }
    }
}

impl<T: Scalar> Vector<T> {
    /// Fisher–Yates shuffle in place.
    ///
    /// ```
    /// use rand::{rngs::StdRng, SeedableRng};
    /// use statrix::Vector;
    ///
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let mut v = Vector::from_slice(&[1, 2, 3, 4, 5]);
    /// v.shuffle(&mut rng);
    /// assert_eq!(v.len(), 5);
    /// ```
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut m = self.len();
        while m > 0 {
            let i = rng.gen_range(0..m);
            m -= 1;
            self.data.swap(m, i);
        }
    }

    /// Fisher–Yates shuffle over the concatenation of two vectors.
    ///
    /// Walks the combined index space `0..a.len() + b.len()` exactly as
    /// [`shuffle`](Self::shuffle) walks a single buffer, writing each
    /// swap back into whichever vector owns the index, so every
    /// permutation of the combined elements is equally likely.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, other: &mut Self, rng: &mut R) {
        let a_len = self.len();
        let mut m = a_len + other.len();
        while m > 0 {
            let i = rng.gen_range(0..m);
            m -= 1;
            let at_m = if m < a_len {
                self.data[m]
            } else {
                other.data[m - a_len]
            };
            let at_i = if i < a_len {
                self.data[i]
            } else {
                other.data[i - a_len]
            };
            if m < a_len {
                self.data[m] = at_i;
            } else {
                other.data[m - a_len] = at_i;
            }
            if i < a_len {
                self.data[i] = at_m;
            } else {
                other.data[i - a_len] = at_m;
            }
        }
    }

    /// Draw `n` elements without replacement.
    ///
    /// Runs a partial Fisher–Yates over a working copy — only the last
    /// `n` positions are shuffled — and returns that tail. `n` is
    /// clamped to the vector length.
    pub fn sample<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Self {
        let n = n.min(self.len());
        let mut work = self.data.clone();
        let mut m = work.len();
        let stop = m - n;
        while m > stop {
            let i = rng.gen_range(0..m);
            m -= 1;
            work.swap(m, i);
        }
        let mut out = Vec::with_capacity(n);
        for i in (work.len() - n..work.len()).rev() {
            out.push(work[i]);
        }
        Vector { data: out }
    }

    /// Draw `n` elements uniformly with replacement. `n` is clamped to
    /// the vector length.
    pub fn resample<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Self {
        let n = n.min(self.len());
        let m = self.len();
        let mut out = Vec::with_capacity(n);
        for _ in 0..n {
            out.push(self.data[rng.gen_range(0..m)]);
        }
        Vector { data: out }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sorted(v: &Vector<i32>) -> Vec<i32> {
        let mut s = v.as_slice().to_vec();
        s.sort_unstable();
        s
    }

    #[test]
    fn randomize_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut v = Vector::<f64>::zeros(100);
        v.randomize(&mut rng);
        assert!(v.iter().all(|&x| (0.0..1.0).contains(&x)));
    }

    #[test]
    fn randomize_range_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut v = Vector::<f64>::zeros(100);
        v.randomize_range(5.0, -3.0, &mut rng);
        assert!(v.iter().all(|&x| (-3.0..5.0).contains(&x)));
    }

    #[test]
    fn shuffle_preserves_elements() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut v = Vector::from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]);
        v.shuffle(&mut rng);
        assert_eq!(sorted(&v), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn shuffle_with_preserves_combined_elements() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut a = Vector::from_slice(&[1, 2, 3]);
        let mut b = Vector::from_slice(&[4, 5, 6, 7]);
        a.shuffle_with(&mut b, &mut rng);

        assert_eq!(a.len(), 3);
        assert_eq!(b.len(), 4);
        let mut all = a.as_slice().to_vec();
        all.extend_from_slice(b.as_slice());
        all.sort_unstable();
        assert_eq!(all, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn shuffle_with_mixes_across_vectors() {
        // over many trials, elements must cross between the two vectors
        let mut rng = StdRng::seed_from_u64(13);
        let mut crossings = 0;
        for _ in 0..50 {
            let mut a = Vector::from_slice(&[1, 2, 3]);
            let mut b = Vector::from_slice(&[4, 5, 6]);
            a.shuffle_with(&mut b, &mut rng);
            if a.iter().any(|&x| x > 3) {
                crossings += 1;
            }
        }
        assert!(crossings > 25);
    }

    #[test]
    fn sample_without_replacement() {
        let mut rng = StdRng::seed_from_u64(5);
        let v = Vector::from_slice(&[10, 20, 30, 40, 50, 60]);
        let s = v.sample(4, &mut rng);
        assert_eq!(s.len(), 4);

        // distinct, and all drawn from the source
        let picked = sorted(&s);
        for w in picked.windows(2) {
            assert_ne!(w[0], w[1]);
        }
        assert!(picked.iter().all(|x| v.as_slice().contains(x)));
    }

    #[test]
    fn sample_clamps_to_len() {
        let mut rng = StdRng::seed_from_u64(5);
        let v = Vector::from_slice(&[1, 2, 3]);
        let s = v.sample(10, &mut rng);
        assert_eq!(sorted(&s), vec![1, 2, 3]);
    }

    #[test]
    fn resample_with_replacement() {
        let mut rng = StdRng::seed_from_u64(9);
        let v = Vector::from_slice(&[1, 2, 3]);
        let s = v.resample(3, &mut rng);
        assert_eq!(s.len(), 3);
        assert!(s.iter().all(|x| v.as_slice().contains(x)));
    }
}
