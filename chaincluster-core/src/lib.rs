//! Density-linked chain clustering.
//!
//! Partitions a fixed set of points into variable-sized clusters. Each
//! cluster starts at the free point with the tightest neighbourhood and grows
//! by chaining through points whose Gaussian link density, carried along the
//! chain, stays above a cutoff. Clusters can therefore be elongated and
//! non-convex. Results are ranked largest first; points that never clear the
//! cutoff stay unassigned.
//!
//! ```
//! use chaincluster_core::{ChainClusterBuilder, Cluster, Dataset};
//!
//! let dataset = Dataset::from_rows(vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.05],
//!     vec![0.2, 0.0],
//!     vec![8.0, 8.0],
//! ])?;
//! let mut alg = ChainClusterBuilder::new()
//!     .with_num_seed_points(1)
//!     .build(&dataset)?;
//! alg.generate()?;
//!
//! let largest = &alg.clusters()[0];
//! assert!(largest.content().contains(&largest.medoid_index()));
//! # Ok::<(), chaincluster_core::ChainClusterError>(())
//! ```

mod assignments;
mod builder;
mod chain_cluster;
mod chain_cluster_alg;
mod cluster;
mod dataset;
mod distance;
mod error;
mod free_points;
#[cfg(test)]
mod test_utils;

pub use crate::{
    assignments::{AssignmentError, ClusterAssignments, ClusterId},
    builder::ChainClusterBuilder,
    chain_cluster::{ChainCluster, calc_density},
    chain_cluster_alg::{ChainClusterAlg, GenerateSummary},
    cluster::Cluster,
    dataset::Dataset,
    distance::{DistanceMatrix, MAX_DISTANCE, Nearest, euclidean_distance},
    error::{ChainClusterError, ChainClusterErrorCode, DatasetError, DatasetErrorCode, Result},
    free_points::FreePoints,
};
