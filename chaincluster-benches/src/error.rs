//! Benchmark setup error type.
//!
//! Aggregates the errors that may arise during benchmark data preparation so
//! setup functions can propagate failures with `?` instead of `.expect()`.

use crate::source::SyntheticError;
use chaincluster_core::ChainClusterError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic data generation failed.
    #[error("synthetic dataset generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Building or running the clustering failed.
    #[error("chain clustering failed: {0}")]
    Clustering(#[from] ChainClusterError),
}
