//! Per-point labels derived from a set of clusters.
//!
//! Converts a ranked cluster list into one optional label per dataset index,
//! validating that no index is claimed twice.

use thiserror::Error;

use crate::cluster::Cluster;

/// Identifier assigned to a cluster: its rank in the largest-first ordering.
///
/// # Examples
/// ```
/// use chaincluster_core::ClusterId;
///
/// let id = ClusterId::new(4);
/// assert_eq!(id.get(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClusterId(u64);

impl ClusterId {
    /// Creates a new cluster identifier.
    #[rustfmt::skip]
    #[must_use]
    pub fn new(id: u64) -> Self { Self(id) }

    /// Returns the underlying numeric identifier.
    #[rustfmt::skip]
    #[must_use]
    pub fn get(self) -> u64 { self.0 }
}

/// Error returned when clusters do not form a partition of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AssignmentError {
    /// A cluster referenced an index outside the dataset.
    #[error("cluster {cluster} references index {index} but the dataset has {len} points")]
    OutOfRange {
        /// Cluster holding the bad index.
        cluster: ClusterId,
        /// The offending index.
        index: usize,
        /// Number of points in the dataset.
        len: usize,
    },
    /// Two clusters (or one cluster twice) claimed the same index.
    #[error("index {index} is claimed by cluster {first} and cluster {second}")]
    Overlap {
        /// The doubly claimed index.
        index: usize,
        /// Cluster that claimed it first.
        first: ClusterId,
        /// Cluster that claimed it again.
        second: ClusterId,
    },
}

impl std::fmt::Display for ClusterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Label per dataset index; `None` marks a point left unassigned.
///
/// # Examples
/// ```
/// use chaincluster_core::{ClusterAssignments, ClusterId, Cluster};
///
/// struct Members(Vec<usize>);
///
/// impl Cluster for Members {
///     fn content(&self) -> &[usize] { &self.0 }
///     fn point(&self, _: usize) -> Option<&[f64]> { None }
///     fn centre_of_mass(&self) -> &[f64] { &[] }
///     fn medoid_index(&self) -> usize { self.0[0] }
/// }
///
/// let clusters = [Members(vec![2, 0]), Members(vec![3])];
/// let assignments = ClusterAssignments::from_clusters(5, &clusters)?;
/// assert_eq!(assignments.label(0), Some(ClusterId::new(0)));
/// assert_eq!(assignments.label(3), Some(ClusterId::new(1)));
/// assert_eq!(assignments.unassigned().collect::<Vec<_>>(), vec![1, 4]);
/// # Ok::<(), chaincluster_core::AssignmentError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterAssignments {
    labels: Vec<Option<ClusterId>>,
    cluster_count: usize,
}

impl ClusterAssignments {
    /// Labels `len` points from `clusters`, numbering clusters by position.
    ///
    /// # Errors
    /// Returns [`AssignmentError::OutOfRange`] when a member index is not
    /// below `len`, and [`AssignmentError::Overlap`] when an index is claimed
    /// more than once.
    pub fn from_clusters<'c, C>(
        len: usize,
        clusters: impl IntoIterator<Item = &'c C>,
    ) -> Result<Self, AssignmentError>
    where
        C: Cluster + ?Sized + 'c,
    {
        let mut labels = vec![None; len];
        let mut cluster_count = 0usize;
        for (rank, cluster) in clusters.into_iter().enumerate() {
            let id = ClusterId::new(rank as u64);
            for &index in cluster.content() {
                let slot = labels.get_mut(index).ok_or(AssignmentError::OutOfRange {
                    cluster: id,
                    index,
                    len,
                })?;
                if let Some(first) = *slot {
                    return Err(AssignmentError::Overlap {
                        index,
                        first,
                        second: id,
                    });
                }
                *slot = Some(id);
            }
            cluster_count += 1;
        }
        Ok(Self {
            labels,
            cluster_count,
        })
    }

    /// Labels in dataset order.
    #[must_use]
    pub fn labels(&self) -> &[Option<ClusterId>] {
        &self.labels
    }

    /// Label of the point at `index`; `None` when unassigned or out of range.
    #[must_use]
    pub fn label(&self, index: usize) -> Option<ClusterId> {
        self.labels.get(index).copied().flatten()
    }

    /// Number of clusters the labels were built from.
    #[must_use]
    pub fn cluster_count(&self) -> usize {
        self.cluster_count
    }

    /// Indices that belong to no cluster, ascending.
    pub fn unassigned(&self) -> impl Iterator<Item = usize> + '_ {
        self.labels
            .iter()
            .enumerate()
            .filter_map(|(index, label)| label.is_none().then_some(index))
    }

    /// Indices labelled `id`, ascending.
    #[must_use]
    pub fn members_of(&self, id: ClusterId) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter_map(|(index, label)| (*label == Some(id)).then_some(index))
            .collect()
    }
}
