//! Packed symmetric matrices and graph helpers over them.

use rand::Rng;

use crate::error::Error;
use crate::scalar::choose;
use crate::traits::{MatrixMut, MatrixRef, Scalar};
use crate::{to_dense, Matrix, Vector};

/// Flat offset of `(i, j)` in upper-triangle packed storage of order `n`.
///
/// Symmetric in its first two arguments, so `(i, j)` and `(j, i)` alias
/// the same slot.
#[inline]
fn sym_index(i: usize, j: usize, n: usize) -> usize {
    let (i, j) = if i <= j { (i, j) } else { (j, i) };
    i * n - i * (i + 1) / 2 + j
}

/// Symmetric matrix in packed upper-triangle storage.
///
/// Only `n(n+1)/2` elements are stored; `at(i, j)` and `at(j, i)` read
/// and write the same packed slot, so the matrix cannot be made
/// asymmetric through this interface.
///
/// Interpreted as a graph adjacency matrix (non-zero entries are
/// edges), it also provides degree, neighbourhood, and clustering
/// queries.
///
/// # Examples
///
/// ```
/// use statrix::SymMat;
///
/// let mut s = SymMat::<f64>::new(3);
/// s.set(0, 2, 5.0);
/// assert_eq!(s.at(2, 0), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SymMat<T> {
    data: Vec<T>,
    size: usize,
}

// ── Construction and access ─────────────────────────────────────────

impl<T: Scalar> SymMat<T> {
    /// Create an `n x n` zero symmetric matrix.
    pub fn new(n: usize) -> Self {
        Self {
            data: vec![T::zero(); n * (n + 1) / 2],
            size: n,
        }
    }

    /// Create by calling `f(i, j)` for each upper-triangle pair `i <= j`.
    pub fn from_fn(n: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut m = Self::new(n);
        for i in 0..n {
            for j in i..n {
                m.set(i, j, f(i, j));
            }
        }
        m
    }

    /// Copy a dense matrix that is already symmetric.
    ///
    /// Fails with [`Error::ShapeMismatch`] when the matrix is not
    /// square or not symmetric.
    pub fn from_dense(m: &Matrix<T>) -> Result<Self, Error> {
        if !m.is_square() || !m.is_symmetric() {
            return Err(Error::ShapeMismatch {
                expected: (m.nrows(), m.nrows()),
                got: (m.nrows(), m.ncols()),
            });
        }
        Ok(Self::from_fn(m.nrows(), |i, j| m[(i, j)]))
    }

    /// Matrix order (rows == cols).
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Element at `(i, j)`. Panics when out of range.
    #[inline]
    pub fn at(&self, i: usize, j: usize) -> T {
        assert!(i < self.size && j < self.size, "index out of range");
        self.data[sym_index(i, j, self.size)]
    }

    /// Write `(i, j)` and, by aliasing, `(j, i)`. Panics when out of range.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        assert!(i < self.size && j < self.size, "index out of range");
        self.data[sym_index(i, j, self.size)] = value;
    }

    /// Copy row (equivalently column) `i` into a [`Vector`].
    pub fn row(&self, i: usize) -> Vector<T> {
        Vector::from_fn(self.size, |j| self.at(i, j))
    }

    /// The transpose — a symmetric matrix is its own transpose.
    pub fn transpose(&self) -> Self {
        self.clone()
    }

    /// Expand to a dense [`Matrix`].
    pub fn to_dense(&self) -> Matrix<T> {
        to_dense(self)
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

// ── Graph interpretation ────────────────────────────────────────────

impl<T: Scalar> SymMat<T> {
    /// Reset, then connect each unordered pair `i < j` with probability
    /// `p` (edge weight 1). The diagonal stays zero.
    ///
    /// `p = 0.0` never connects and `p = 1.0` always connects, exactly.
    pub fn random_unweighted_graph<R: Rng + ?Sized>(&mut self, p: f64, rng: &mut R) {
        self.reset();
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if rng.gen::<f64>() < p {
                    self.set(i, j, T::one());
                }
            }
        }
    }

    /// Indices of the nodes adjacent to `n` (non-zero off-diagonal
    /// entries in row `n`).
    pub fn neighbourhood(&self, n: usize) -> Vec<usize> {
        let mut nodes = Vec::new();
        for i in 0..self.size {
            if i != n && self.at(n, i) != T::zero() {
                nodes.push(i);
            }
        }
        nodes
    }

    /// Number of nodes adjacent to `n`.
    pub fn degree(&self, n: usize) -> usize {
        let mut deg = 0;
        for i in 0..self.size {
            if i != n && self.at(n, i) != T::zero() {
                deg += 1;
            }
        }
        deg
    }

    /// Local clustering coefficient of node `n`: connected neighbour
    /// pairs over all neighbour pairs. 0 when the degree is below 2.
    pub fn cluster_coeff(&self, n: usize) -> f64 {
        let nb = self.neighbourhood(n);
        let combos = choose(nb.len() as u32, 2);
        if combos == 0.0 {
            return 0.0;
        }
        let mut links = 0usize;
        for a in 0..nb.len() {
            for b in (a + 1)..nb.len() {
                if self.at(nb[a], nb[b]) != T::zero() {
                    links += 1;
                }
            }
        }
        links as f64 / combos
    }

    /// Mean local clustering coefficient over all nodes.
    pub fn avg_cluster_coeff(&self) -> f64 {
        let mut acc = 0.0;
        for i in 0..self.size {
            acc += self.cluster_coeff(i);
        }
        acc / self.size as f64
    }

    /// Global clustering coefficient: closed triplets over all triplets
    /// (each node's local coefficient weighted by its triplet count).
    pub fn global_cluster_coeff(&self) -> f64 {
        let mut closed = 0.0;
        let mut total = 0.0;
        for i in 0..self.size {
            let triplets = choose(self.degree(i) as u32, 2);
            closed += self.cluster_coeff(i) * triplets;
            total += triplets;
        }
        if total == 0.0 {
            0.0
        } else {
            closed / total
        }
    }
}

// ── MatrixRef / MatrixMut ───────────────────────────────────────────

impl<T: Scalar> MatrixRef<T> for SymMat<T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.size
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.size
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> T {
        self.at(row, col)
    }
}

impl<T: Scalar> MatrixMut<T> for SymMat<T> {
    #[inline]
    fn set(&mut self, row: usize, col: usize, value: T) {
        SymMat::set(self, row, col, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn packed_length() {
        let s = SymMat::<f64>::new(4);
        assert_eq!(s.data.len(), 10);
        assert_eq!(s.size(), 4);
    }

    #[test]
    fn index_covers_triangle_without_collisions() {
        let n = 5;
        let mut seen = vec![false; n * (n + 1) / 2];
        for i in 0..n {
            for j in i..n {
                let idx = sym_index(i, j, n);
                assert!(!seen[idx], "slot {} hit twice", idx);
                seen[idx] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn symmetric_aliasing() {
        let mut s = SymMat::<f64>::new(4);
        for i in 0..4 {
            for j in 0..4 {
                s.set(i, j, (i * 10 + j) as f64);
                assert_eq!(s.at(j, i), (i * 10 + j) as f64);
            }
        }
    }

    #[test]
    fn from_dense_requires_symmetry() {
        let sym = Matrix::from_rows(2, 2, &[1.0, 2.0, 2.0, 3.0]);
        let s = SymMat::from_dense(&sym).unwrap();
        assert_eq!(s.at(0, 1), 2.0);
        assert_eq!(s.to_dense(), sym);

        let asym = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        assert!(SymMat::from_dense(&asym).is_err());
        assert!(SymMat::from_dense(&Matrix::<f64>::zeros(2, 3)).is_err());
    }

    #[test]
    fn transpose_is_identity() {
        let s = SymMat::from_fn(3, |i, j| (i + j) as f64);
        assert_eq!(s.transpose(), s);
    }

    #[test]
    fn row_reads_both_triangles() {
        let mut s = SymMat::<f64>::new(3);
        s.set(0, 1, 5.0);
        s.set(1, 2, 7.0);
        assert_eq!(s.row(1).as_slice(), &[5.0, 0.0, 7.0]);
    }

    #[test]
    fn full_graph_degrees() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut g = SymMat::<i8>::new(6);
        g.random_unweighted_graph(1.0, &mut rng);
        for n in 0..6 {
            assert_eq!(g.degree(n), 5);
            assert_eq!(g.at(n, n), 0);
        }
    }

    #[test]
    fn empty_graph_degrees() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut g = SymMat::<i8>::new(6);
        g.fill_with(1);
        g.random_unweighted_graph(0.0, &mut rng);
        for n in 0..6 {
            assert_eq!(g.degree(n), 0);
            assert!(g.neighbourhood(n).is_empty());
        }
    }

    #[test]
    fn neighbourhood_lists_edges() {
        let mut g = SymMat::<i8>::new(4);
        g.set(0, 2, 1);
        g.set(0, 3, 1);
        assert_eq!(g.neighbourhood(0), vec![2, 3]);
        assert_eq!(g.neighbourhood(2), vec![0]);
        assert_eq!(g.degree(0), 2);
    }

    #[test]
    fn triangle_clusters_fully() {
        let mut g = SymMat::<i8>::new(3);
        g.set(0, 1, 1);
        g.set(1, 2, 1);
        g.set(0, 2, 1);
        for n in 0..3 {
            assert_eq!(g.cluster_coeff(n), 1.0);
        }
        assert_eq!(g.avg_cluster_coeff(), 1.0);
        assert_eq!(g.global_cluster_coeff(), 1.0);
    }

    #[test]
    fn path_has_no_clustering() {
        // 0 - 1 - 2: node 1's neighbours are unconnected
        let mut g = SymMat::<i8>::new(3);
        g.set(0, 1, 1);
        g.set(1, 2, 1);
        assert_eq!(g.cluster_coeff(1), 0.0);
        assert_eq!(g.cluster_coeff(0), 0.0); // degree 1
        assert_eq!(g.global_cluster_coeff(), 0.0);
    }

    #[test]
    fn cycle_with_chord() {
        // 4-cycle plus one chord: 0-1, 1-2, 2-3, 3-0, 0-2
        let mut g = SymMat::<i8>::new(4);
        g.set(0, 1, 1);
        g.set(1, 2, 1);
        g.set(2, 3, 1);
        g.set(3, 0, 1);
        g.set(0, 2, 1);
        // node 1: neighbours {0, 2}, connected by the chord
        assert_eq!(g.cluster_coeff(1), 1.0);
        // node 0: neighbours {1, 2, 3}; pairs (1,2) and (2,3) linked
        assert!((g.cluster_coeff(0) - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn weighted_entries_count_as_edges() {
        let mut g = SymMat::<f64>::new(3);
        g.set(0, 1, 0.25);
        assert_eq!(g.degree(0), 1);
        assert_eq!(g.neighbourhood(1), vec![0]);
    }
}
