//! Dense all-pairs distance storage.

use std::ops::Index;

use super::euclidean::euclidean_distance;
use crate::dataset::Dataset;

/// Sentinel stored on the diagonal so a point never wins a minimum search
/// against itself.
///
/// Must exceed `sqrt(dimension)` for unit-scaled data, and in practice any
/// distance between realistic coordinates.
pub const MAX_DISTANCE: f64 = 1e9;

/// Result of a minimum search over a row or column.
///
/// `index` is `None` when no candidate beat [`MAX_DISTANCE`], which is the
/// case for an empty subset or a row holding only its own diagonal entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest {
    /// Smallest distance found.
    pub distance: f64,
    /// Dataset index of the point at that distance.
    pub index: Option<usize>,
}

impl Nearest {
    /// The "nothing found" marker: [`MAX_DISTANCE`] with no index.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            distance: MAX_DISTANCE,
            index: None,
        }
    }

    fn scan(distances: impl Iterator<Item = (usize, f64)>) -> Self {
        distances.fold(Self::none(), |best, (index, distance)| {
            if distance < best.distance {
                Self {
                    distance,
                    index: Some(index),
                }
            } else {
                best
            }
        })
    }
}

/// Square, symmetric table of Euclidean distances between every pair of
/// points in a [`Dataset`].
///
/// The matrix occupies `n * n` floats; tens of thousands of points already
/// need hundreds of megabytes, which bounds the practical dataset size.
///
/// # Examples
/// ```
/// use chaincluster_core::{Dataset, DistanceMatrix};
///
/// let dataset = Dataset::from_rows(vec![vec![0.0], vec![1.0], vec![3.0]])?;
/// let matrix = DistanceMatrix::new(&dataset);
/// assert_eq!(matrix.distance(0, 2), 3.0);
/// assert_eq!(matrix.distance(2, 0), 3.0);
/// assert_eq!(matrix.distance(1, 1), DistanceMatrix::max_distance());
///
/// let nearest = matrix.min_of_row(0);
/// assert_eq!(nearest.distance, 1.0);
/// assert_eq!(nearest.index, Some(1));
/// # Ok::<(), chaincluster_core::DatasetError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    size: usize,
    values: Vec<f64>,
}

impl DistanceMatrix {
    /// Computes all pairwise distances of `dataset` in `O(n^2 * d)`.
    ///
    /// An empty dataset produces an empty matrix.
    #[must_use]
    pub fn new(dataset: &Dataset) -> Self {
        let size = dataset.len();
        let mut values = vec![MAX_DISTANCE; size.saturating_mul(size)];
        for (row, left) in dataset.iter().enumerate() {
            for (col, right) in dataset.iter().enumerate().skip(row + 1) {
                let distance = euclidean_distance(left, right);
                values[row * size + col] = distance;
                values[col * size + row] = distance;
            }
        }
        Self { size, values }
    }

    /// Euclidean distance between two arbitrary points.
    ///
    /// Used for entries of the matrix and for distances to points that are
    /// not part of the dataset, such as a cluster centroid.
    #[must_use]
    pub fn calc_distance(left: &[f64], right: &[f64]) -> f64 {
        euclidean_distance(left, right)
    }

    /// Returns the diagonal sentinel, [`MAX_DISTANCE`].
    #[must_use]
    pub const fn max_distance() -> f64 {
        MAX_DISTANCE
    }

    /// Number of rows (and columns).
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns whether the matrix was built from an empty dataset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the stored distance, or `None` when either index is out of
    /// range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.values.get(row * self.size + col).copied()
    }

    /// Returns the stored distance between `row` and `col`.
    ///
    /// # Panics
    /// Panics when either index is out of range, like slice indexing.
    #[must_use]
    pub fn distance(&self, row: usize, col: usize) -> f64 {
        self[(row, col)]
    }

    fn row(&self, row: usize) -> &[f64] {
        let start = row.saturating_mul(self.size);
        self.values
            .get(start..start.saturating_add(self.size))
            .unwrap_or(&[])
    }

    /// Smallest entry of `row` and the column holding it.
    #[must_use]
    pub fn min_of_row(&self, row: usize) -> Nearest {
        Nearest::scan(self.row(row).iter().copied().enumerate())
    }

    /// Smallest entry of `col`; identical to [`Self::min_of_row`] because the
    /// matrix is symmetric.
    #[must_use]
    pub fn min_of_col(&self, col: usize) -> Nearest {
        self.min_of_row(col)
    }

    /// Smallest entry of `row` among the columns listed in `subset`.
    ///
    /// The returned index is the matching member of `subset`; removing it
    /// from the caller's collection is left to the caller. An empty subset
    /// yields [`Nearest::none`].
    #[must_use]
    pub fn min_of_row_in(&self, row: usize, subset: impl IntoIterator<Item = usize>) -> Nearest {
        let entries = self.row(row);
        Nearest::scan(
            subset
                .into_iter()
                .filter_map(|col| entries.get(col).map(|&distance| (col, distance))),
        )
    }

    /// Smallest entry of `col` among the rows listed in `subset`.
    #[must_use]
    pub fn min_of_col_in(&self, col: usize, subset: impl IntoIterator<Item = usize>) -> Nearest {
        self.min_of_row_in(col, subset)
    }

    /// The `k` smallest entries of `row` among the columns in `subset`, in
    /// ascending order.
    ///
    /// Fewer than `k` values are returned when the subset is smaller than
    /// `k`. The diagonal sentinel sorts last, so `row` itself only appears
    /// when the subset holds no more than `k - 1` other points.
    #[must_use]
    pub fn k_nearest_in(
        &self,
        row: usize,
        subset: impl IntoIterator<Item = usize>,
        k: usize,
    ) -> Vec<f64> {
        if k == 0 {
            return Vec::new();
        }
        let entries = self.row(row);
        let mut distances: Vec<f64> = subset
            .into_iter()
            .filter_map(|col| entries.get(col).copied())
            .collect();
        if k < distances.len() {
            distances.select_nth_unstable_by(k - 1, f64::total_cmp);
            distances.truncate(k);
        }
        distances.sort_unstable_by(f64::total_cmp);
        distances
    }
}

impl Index<(usize, usize)> for DistanceMatrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.size && col < self.size,
            "index ({row}, {col}) out of range for {n}x{n} distance matrix",
            n = self.size,
        );
        &self.values[row * self.size + col]
    }
}
