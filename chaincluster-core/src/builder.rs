//! Builder utilities for configuring chain-clustering runs.
//!
//! Exposes the tuning surface and the validation applied before constructing
//! [`ChainClusterAlg`] instances.

use std::num::NonZeroUsize;

use crate::{Result, chain_cluster_alg::ChainClusterAlg, dataset::Dataset, error::ChainClusterError};

pub(crate) fn validate_num_seed_points(value: usize) -> Result<NonZeroUsize> {
    NonZeroUsize::new(value).ok_or(ChainClusterError::InvalidNumSeedPoints { got: value })
}

pub(crate) fn validate_linking_strength(value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ChainClusterError::InvalidLinkingStrength { got: value })
    }
}

/// Configures and constructs [`ChainClusterAlg`] instances.
///
/// # Examples
/// ```
/// use chaincluster_core::{ChainClusterBuilder, Dataset};
///
/// let dataset = Dataset::from_rows(vec![vec![0.0], vec![1.0]])?;
/// let alg = ChainClusterBuilder::new()
///     .with_num_seed_points(4)
///     .with_linking_strength(3.0)
///     .build(&dataset)?;
/// assert_eq!(alg.num_seed_points().get(), 4);
/// assert_eq!(alg.linking_strength(), 3.0);
/// # Ok::<(), chaincluster_core::ChainClusterError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ChainClusterBuilder {
    num_seed_points: usize,
    linking_strength: f64,
}

impl Default for ChainClusterBuilder {
    fn default() -> Self {
        Self {
            num_seed_points: 3,
            linking_strength: 2.0,
        }
    }
}

impl ChainClusterBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use chaincluster_core::ChainClusterBuilder;
    ///
    /// let builder = ChainClusterBuilder::new();
    /// assert_eq!(builder.num_seed_points(), 3);
    /// assert_eq!(builder.linking_strength(), 2.0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of seed points.
    ///
    /// The value is the neighbour count used to score seeds and pick each
    /// cluster's search radius, and the free-pool size at which generation
    /// stops.
    #[must_use]
    pub fn with_num_seed_points(mut self, count: usize) -> Self {
        self.num_seed_points = count;
        self
    }

    /// Returns the configured number of seed points.
    #[must_use]
    pub fn num_seed_points(&self) -> usize {
        self.num_seed_points
    }

    /// Overrides the linking strength.
    ///
    /// Larger values lower the density cutoff `exp(-linking_strength)` and
    /// produce larger, more chain-like clusters.
    ///
    /// # Examples
    /// ```
    /// use chaincluster_core::ChainClusterBuilder;
    ///
    /// let builder = ChainClusterBuilder::new().with_linking_strength(0.5);
    /// assert_eq!(builder.linking_strength(), 0.5);
    /// ```
    #[must_use]
    pub fn with_linking_strength(mut self, strength: f64) -> Self {
        self.linking_strength = strength;
        self
    }

    /// Returns the configured linking strength.
    #[must_use]
    pub fn linking_strength(&self) -> f64 {
        self.linking_strength
    }

    /// Validates the configuration and constructs a [`ChainClusterAlg`] bound
    /// to `dataset`.
    ///
    /// # Errors
    /// Returns [`ChainClusterError::InvalidNumSeedPoints`] when the seed
    /// count is zero and [`ChainClusterError::InvalidLinkingStrength`] when
    /// the strength is not a finite positive number.
    pub fn build(self, dataset: &Dataset) -> Result<ChainClusterAlg<'_>> {
        let num_seed_points = validate_num_seed_points(self.num_seed_points)?;
        let linking_strength = validate_linking_strength(self.linking_strength)?;
        Ok(ChainClusterAlg::new(
            dataset,
            num_seed_points,
            linking_strength,
        ))
    }
}
