//! Partitioning of a dataset into chain clusters.
//!
//! Provides the [`ChainClusterAlg`] entry point, which repeatedly seeds a new
//! cluster at the free point with the tightest neighbourhood and grows it
//! until the free pool or the cluster budget runs out.

use std::num::NonZeroUsize;

use tracing::{info, instrument, warn};

use crate::{
    Result,
    assignments::{AssignmentError, ClusterAssignments},
    builder::{validate_linking_strength, validate_num_seed_points},
    chain_cluster::ChainCluster,
    cluster::Cluster,
    dataset::Dataset,
    distance::{DistanceMatrix, MAX_DISTANCE},
    error::ChainClusterError,
    free_points::FreePoints,
};

/// Counts reported by [`ChainClusterAlg::generate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateSummary {
    /// Number of clusters built.
    pub clusters: usize,
    /// Points that ended up in some cluster.
    pub assigned: usize,
    /// Points left in the free pool.
    pub unassigned: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Seed {
    index: usize,
    search_radius: f64,
}

/// Owns the clusters produced from one [`Dataset`].
///
/// # Examples
/// ```
/// use chaincluster_core::{ChainClusterBuilder, Cluster, Dataset};
///
/// let dataset = Dataset::from_rows(vec![
///     vec![0.0, 0.0],
///     vec![0.3, 0.0],
///     vec![0.0, 0.4],
///     vec![10.0, 10.0],
///     vec![10.2, 10.0],
///     vec![10.0, 10.25],
///     vec![50.0, -50.0],
///     vec![-50.0, 50.0],
/// ])?;
/// let mut alg = ChainClusterBuilder::new()
///     .with_num_seed_points(2)
///     .with_linking_strength(2.0)
///     .build(&dataset)?;
///
/// let summary = alg.generate()?;
/// assert_eq!(summary.clusters, 2);
/// assert_eq!(alg.clusters()[0].content(), &[3, 4, 5]);
/// assert_eq!(alg.clusters()[1].content(), &[0, 1, 2]);
/// assert_eq!(alg.free_points().to_vec(), vec![6, 7]);
/// # Ok::<(), chaincluster_core::ChainClusterError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ChainClusterAlg<'a> {
    dataset: &'a Dataset,
    num_seed_points: NonZeroUsize,
    linking_strength: f64,
    clusters: Vec<ChainCluster<'a>>,
    free_points: FreePoints,
}

impl<'a> ChainClusterAlg<'a> {
    pub(crate) fn new(
        dataset: &'a Dataset,
        num_seed_points: NonZeroUsize,
        linking_strength: f64,
    ) -> Self {
        Self {
            dataset,
            num_seed_points,
            linking_strength,
            clusters: Vec::new(),
            free_points: FreePoints::full(dataset.len()),
        }
    }

    /// The dataset this instance clusters.
    #[must_use]
    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    /// Neighbour count used for seed scoring and as the free-pool floor.
    #[must_use]
    pub fn num_seed_points(&self) -> NonZeroUsize {
        self.num_seed_points
    }

    /// Configured linking strength.
    #[must_use]
    pub fn linking_strength(&self) -> f64 {
        self.linking_strength
    }

    /// Density cutoff derived from the linking strength,
    /// `exp(-linking_strength)`.
    #[must_use]
    pub fn density_cutoff(&self) -> f64 {
        (-self.linking_strength).exp()
    }

    /// Changes the number of seed points for the next [`Self::generate`].
    ///
    /// Clusters from an earlier run are left untouched.
    ///
    /// # Errors
    /// Returns [`ChainClusterError::InvalidNumSeedPoints`] for zero.
    pub fn set_num_seed_points(&mut self, count: usize) -> Result<()> {
        self.num_seed_points = validate_num_seed_points(count)?;
        Ok(())
    }

    /// Changes the linking strength for the next [`Self::generate`].
    ///
    /// Clusters from an earlier run are left untouched.
    ///
    /// # Errors
    /// Returns [`ChainClusterError::InvalidLinkingStrength`] when `strength`
    /// is not a finite positive number.
    pub fn set_linking_strength(&mut self, strength: f64) -> Result<()> {
        self.linking_strength = validate_linking_strength(strength)?;
        Ok(())
    }

    /// Partitions the dataset from scratch.
    ///
    /// Clusters of any previous run are discarded and every point starts
    /// free. Clusters are seeded and grown while fewer than `len / 2` exist
    /// and more than `num_seed_points` points remain free. Points still free
    /// at the end are not assigned to any cluster.
    ///
    /// Seed selection scans every free row against every free column, so a
    /// run costs `O(n^2)` per cluster on top of the `O(n^2)` matrix.
    ///
    /// # Errors
    /// Returns [`ChainClusterError::SeedSelectionFailed`] if no free point
    /// can be scored as a seed, which indicates a broken internal invariant.
    #[instrument(
        name = "chain.generate",
        err,
        skip(self),
        fields(
            points = self.dataset.len(),
            num_seed_points = %self.num_seed_points,
            linking_strength = self.linking_strength,
        ),
    )]
    pub fn generate(&mut self) -> Result<GenerateSummary> {
        self.clusters.clear();
        let points = self.dataset.len();
        let min_free = self.num_seed_points.get();
        let max_clusters = points / 2;
        let density_cutoff = self.density_cutoff();

        let mut pool = FreePoints::full(points);
        self.free_points = pool.clone();
        if points <= min_free {
            warn!(
                points,
                num_seed_points = min_free,
                "dataset too small to seed a cluster"
            );
        }

        let matrix = DistanceMatrix::new(self.dataset);
        let mut clusters = Vec::new();
        while clusters.len() < max_clusters && pool.len() > min_free {
            let seed = select_seed(&matrix, &pool, self.num_seed_points)?;
            clusters.push(ChainCluster::grow(
                seed.index,
                &mut pool,
                seed.search_radius,
                density_cutoff,
                &matrix,
                self.dataset,
            ));
        }

        clusters.sort_by(|left, right| right.num_points().cmp(&left.num_points()));
        let summary = GenerateSummary {
            clusters: clusters.len(),
            assigned: points - pool.len(),
            unassigned: pool.len(),
        };
        self.clusters = clusters;
        self.free_points = pool;
        info!(
            clusters = summary.clusters,
            assigned = summary.assigned,
            unassigned = summary.unassigned,
            "chain clustering completed"
        );
        Ok(summary)
    }

    /// Clusters of the last run, largest first.
    ///
    /// Clusters of equal size keep the order in which they were built.
    #[must_use]
    pub fn clusters(&self) -> &[ChainCluster<'a>] {
        &self.clusters
    }

    /// Points left unassigned by the last run; every point before the first
    /// run.
    #[must_use]
    pub fn free_points(&self) -> &FreePoints {
        &self.free_points
    }

    /// Per-point labels for the last run, where a label is the cluster's
    /// position in [`Self::clusters`].
    ///
    /// # Errors
    /// Returns [`AssignmentError`] if the owned clusters do not form a
    /// partition, which [`Self::generate`] never produces.
    pub fn assignments(&self) -> core::result::Result<ClusterAssignments, AssignmentError> {
        ClusterAssignments::from_clusters(self.dataset.len(), &self.clusters)
    }
}

/// Picks the free point whose `k` nearest free neighbours are closest on
/// average. Its search radius is the distance to the `k`-th of them.
fn select_seed(matrix: &DistanceMatrix, pool: &FreePoints, k: NonZeroUsize) -> Result<Seed> {
    let free = pool.to_vec();
    let mut best: Option<Seed> = None;
    let mut best_mean = MAX_DISTANCE;

    for &row in &free {
        let nearest = matrix.k_nearest_in(row, free.iter().copied(), k.get());
        let Some(&search_radius) = nearest.last() else {
            continue;
        };
        let mean = nearest.iter().sum::<f64>() / nearest.len() as f64;
        if mean < best_mean {
            best_mean = mean;
            best = Some(Seed {
                index: row,
                search_radius,
            });
        }
    }

    best.ok_or(ChainClusterError::SeedSelectionFailed {
        free_points: pool.len(),
    })
}
