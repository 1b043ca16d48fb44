//! Validated point storage consumed by the clustering run.

use crate::{distance::MAX_DISTANCE, error::DatasetError};

/// Immutable set of points sharing one dimensionality.
///
/// Points are stored row-major in a single buffer and addressed by their
/// position in the input, which is the index every other component uses.
///
/// # Examples
/// ```
/// use chaincluster_core::Dataset;
///
/// let dataset = Dataset::from_rows(vec![vec![0.0, 1.0], vec![2.0, 3.0]])?;
/// assert_eq!(dataset.len(), 2);
/// assert_eq!(dataset.dimension(), 2);
/// assert_eq!(dataset.point(1), Some(&[2.0, 3.0][..]));
/// assert_eq!(dataset.point(2), None);
/// # Ok::<(), chaincluster_core::DatasetError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    values: Vec<f64>,
    dimension: usize,
    len: usize,
}

impl Dataset {
    /// Builds a dataset from explicit rows.
    ///
    /// An empty row list is accepted and produces an empty dataset with
    /// dimension zero.
    ///
    /// # Errors
    /// Returns [`DatasetError::ZeroDimension`] when the rows are empty
    /// vectors, [`DatasetError::DimensionMismatch`] when a row's length
    /// differs from the first row, [`DatasetError::NonFinite`] when a
    /// coordinate is NaN or infinite, and [`DatasetError::ExtentTooLarge`]
    /// when the diagonal of the bounding box reaches [`MAX_DISTANCE`].
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, DatasetError> {
        let Some(first) = rows.first() else {
            return Ok(Self {
                values: Vec::new(),
                dimension: 0,
                len: 0,
            });
        };
        let dimension = first.len();
        if dimension == 0 {
            return Err(DatasetError::ZeroDimension);
        }

        let len = rows.len();
        let mut values = Vec::with_capacity(len.saturating_mul(dimension));
        for (row, coords) in rows.into_iter().enumerate() {
            if coords.len() != dimension {
                return Err(DatasetError::DimensionMismatch {
                    row,
                    expected: dimension,
                    found: coords.len(),
                });
            }
            if let Some((column, &value)) = coords.iter().enumerate().find(|(_, v)| !v.is_finite())
            {
                return Err(DatasetError::NonFinite { row, column, value });
            }
            values.extend(coords);
        }

        // Every pairwise distance must stay below the diagonal sentinel.
        let extent = bounding_box_diagonal(&values, dimension);
        if extent >= MAX_DISTANCE {
            return Err(DatasetError::ExtentTooLarge {
                extent,
                limit: MAX_DISTANCE,
            });
        }

        Ok(Self {
            values,
            dimension,
            len,
        })
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the dataset holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Shared dimensionality of every point; zero for an empty dataset.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the coordinates of the point at `index`.
    #[must_use]
    pub fn point(&self, index: usize) -> Option<&[f64]> {
        let start = index.checked_mul(self.dimension)?;
        let end = start.checked_add(self.dimension)?;
        if index >= self.len {
            return None;
        }
        self.values.get(start..end)
    }

    /// Iterates over all points in index order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[f64]> {
        // `chunks_exact` panics on a zero width; an empty dataset has no values.
        self.values.chunks_exact(self.dimension.max(1))
    }
}

/// Upper bound on any pairwise Euclidean distance among `values`.
fn bounding_box_diagonal(values: &[f64], dimension: usize) -> f64 {
    let mut low = vec![f64::INFINITY; dimension];
    let mut high = vec![f64::NEG_INFINITY; dimension];
    for point in values.chunks_exact(dimension) {
        for ((&value, min), max) in point.iter().zip(&mut low).zip(&mut high) {
            *min = min.min(value);
            *max = max.max(value);
        }
    }
    low.iter()
        .zip(&high)
        .map(|(&min, &max)| (max - min) * (max - min))
        .sum::<f64>()
        .sqrt()
}
