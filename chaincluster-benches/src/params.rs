//! Benchmark parameter types.

use std::fmt;

/// Parameters for a distance-matrix benchmark run.
#[derive(Clone, Debug)]
pub struct MatrixBenchParams {
    /// Number of points in the dataset.
    pub point_count: usize,
}

impl fmt::Display for MatrixBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.point_count)
    }
}

/// Parameters for a `generate()` benchmark run.
#[derive(Clone, Debug)]
pub struct GenerateBenchParams {
    /// Number of points in the dataset.
    pub point_count: usize,
    /// Neighbour count used for seed scoring.
    pub num_seed_points: usize,
}

impl fmt::Display for GenerateBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},k={}", self.point_count, self.num_seed_points)
    }
}
