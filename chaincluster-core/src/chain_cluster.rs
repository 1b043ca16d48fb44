//! Growth of a single cluster by density-linked chaining.
//!
//! Starting from a seed, every free point is scored by a Gaussian falloff of
//! its distance to the current point, multiplied by the density carried along
//! the chain. Points above the cutoff join the cluster and become new chain
//! ends, so a cluster can snake far from its seed as long as each hop stays
//! dense enough.

use tracing::{debug, instrument};

use crate::{
    cluster::Cluster,
    dataset::Dataset,
    distance::{DistanceMatrix, MAX_DISTANCE},
    free_points::FreePoints,
};

/// Gaussian link density `exp(-dist^2 / radius^2)`.
///
/// A zero radius arises when a seed's nearest neighbours are duplicates; the
/// limit is used there, giving `1` for coincident points and `0` otherwise.
///
/// # Examples
/// ```
/// use chaincluster_core::calc_density;
///
/// assert_eq!(calc_density(0.0, 2.0), 1.0);
/// assert!((calc_density(2.0, 2.0) - (-1.0_f64).exp()).abs() < 1e-12);
/// assert_eq!(calc_density(0.0, 0.0), 1.0);
/// assert_eq!(calc_density(0.5, 0.0), 0.0);
/// ```
#[must_use]
pub fn calc_density(distance: f64, search_radius: f64) -> f64 {
    if search_radius > 0.0 {
        (-(distance * distance) / (search_radius * search_radius)).exp()
    } else if distance <= 0.0 {
        1.0
    } else {
        0.0
    }
}

/// Cluster grown from a seed by [`ChainCluster::grow`].
///
/// Immutable once built; the centroid and medoid are computed when growth
/// finishes.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainCluster<'a> {
    dataset: &'a Dataset,
    content: Vec<usize>,
    centre_of_mass: Vec<f64>,
    medoid_index: usize,
}

impl<'a> ChainCluster<'a> {
    /// Grows one cluster from `seed`, claiming its members from `pool`.
    ///
    /// Every chain end scans the whole pool once. A candidate joins when its
    /// propagated density exceeds `density_cutoff`. Candidates closer than
    /// `search_radius` pass on the rewarded density `(1 + density) / 2`;
    /// farther ones pass on the plain density. Chain ends are expanded depth
    /// first in the order they were found, so `content` starts with the seed
    /// and lists members in discovery order.
    ///
    /// `seed` is removed from the pool if it is still there.
    ///
    /// # Examples
    /// ```
    /// use chaincluster_core::{ChainCluster, Cluster, Dataset, DistanceMatrix, FreePoints};
    ///
    /// let dataset = Dataset::from_rows(vec![vec![0.0], vec![0.5], vec![9.0]])?;
    /// let matrix = DistanceMatrix::new(&dataset);
    /// let mut pool = FreePoints::full(dataset.len());
    ///
    /// let cluster = ChainCluster::grow(0, &mut pool, 1.0, (-2.0_f64).exp(), &matrix, &dataset);
    /// assert_eq!(cluster.content(), &[0, 1]);
    /// assert_eq!(pool.to_vec(), vec![2]);
    /// # Ok::<(), chaincluster_core::DatasetError>(())
    /// ```
    #[must_use]
    #[instrument(
        name = "chain.grow",
        level = "debug",
        skip(pool, matrix, dataset),
        fields(free_points = pool.len()),
    )]
    pub fn grow(
        seed: usize,
        pool: &mut FreePoints,
        search_radius: f64,
        density_cutoff: f64,
        matrix: &DistanceMatrix,
        dataset: &'a Dataset,
    ) -> Self {
        let content = local_search(seed, pool, search_radius, density_cutoff, matrix);
        let centre_of_mass = calc_centre_of_mass(dataset, &content);
        let medoid_index = find_medoid(dataset, &content, &centre_of_mass);
        debug!(
            size = content.len(),
            medoid = medoid_index,
            "chain cluster grown"
        );
        Self {
            dataset,
            content,
            centre_of_mass,
            medoid_index,
        }
    }
}

/// Depth-first density search from `seed`.
///
/// An explicit stack replaces recursion. Children are pushed in reverse so
/// they pop in discovery order, and each child's subtree completes before its
/// next sibling starts, as a recursive walk would.
fn local_search(
    seed: usize,
    pool: &mut FreePoints,
    search_radius: f64,
    density_cutoff: f64,
    matrix: &DistanceMatrix,
) -> Vec<usize> {
    let mut content = Vec::new();
    let mut stack = vec![(seed, 1.0_f64)];

    while let Some((point, incoming)) = stack.pop() {
        content.push(point);
        pool.remove(point);

        let accepted: Vec<(usize, f64)> = pool
            .iter()
            .filter_map(|candidate| {
                let distance = matrix.distance(point, candidate);
                let density = incoming * calc_density(distance, search_radius);
                if density <= density_cutoff {
                    return None;
                }
                let propagated = if distance < search_radius {
                    (1.0 + density) / 2.0
                } else {
                    density
                };
                Some((candidate, propagated))
            })
            .collect();

        for &(candidate, _) in &accepted {
            pool.remove(candidate);
        }
        stack.extend(accepted.into_iter().rev());
    }

    content
}

fn calc_centre_of_mass(dataset: &Dataset, content: &[usize]) -> Vec<f64> {
    let mut centre = vec![0.0; dataset.dimension()];
    for point in content.iter().filter_map(|&index| dataset.point(index)) {
        for (sum, &value) in centre.iter_mut().zip(point) {
            *sum += value;
        }
    }
    let count = content.len().max(1) as f64;
    for value in &mut centre {
        *value /= count;
    }
    centre
}

fn find_medoid(dataset: &Dataset, content: &[usize], centre: &[f64]) -> usize {
    let mut best_distance = MAX_DISTANCE;
    let mut best_index = content.first().copied().unwrap_or_default();
    for &index in content {
        let Some(point) = dataset.point(index) else {
            continue;
        };
        let distance = DistanceMatrix::calc_distance(point, centre);
        if distance < best_distance {
            best_distance = distance;
            best_index = index;
        }
    }
    best_index
}

impl Cluster for ChainCluster<'_> {
    fn content(&self) -> &[usize] {
        &self.content
    }

    fn point(&self, member: usize) -> Option<&[f64]> {
        self.content
            .get(member)
            .and_then(|&index| self.dataset.point(index))
    }

    fn centre_of_mass(&self) -> &[f64] {
        &self.centre_of_mass
    }

    fn medoid_index(&self) -> usize {
        self.medoid_index
    }
}
