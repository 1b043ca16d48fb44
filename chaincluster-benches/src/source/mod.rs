//! Synthetic datasets for benchmarking.

mod errors;
mod generation;

pub use errors::SyntheticError;

use chaincluster_core::Dataset;
use generation::{build_blob_centroids, standard_normal_sample, validate_blob_config};
use rand::{SeedableRng, rngs::SmallRng};

/// Configuration for Gaussian blob synthetic data.
#[derive(Clone, Debug)]
pub struct GaussianBlobConfig {
    /// Number of points to generate.
    pub point_count: usize,
    /// Dimensionality of each point.
    pub dimensions: usize,
    /// Number of Gaussian clusters.
    pub cluster_count: usize,
    /// Radius of the circle the centroids sit on.
    pub separation: f64,
    /// Standard deviation of each blob along every axis.
    pub spread: f64,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

impl GaussianBlobConfig {
    /// Blobs that chain clustering separates cleanly at its default
    /// linking strength.
    #[must_use]
    pub const fn well_separated(point_count: usize, dimensions: usize, seed: u64) -> Self {
        Self {
            point_count,
            dimensions,
            cluster_count: 5,
            separation: 20.0,
            spread: 0.5,
            seed,
        }
    }
}

/// Generates a [`Dataset`] of Gaussian blobs.
///
/// Points are dealt to the centroids round-robin, so blob sizes differ by at
/// most one.
///
/// # Errors
/// Returns [`SyntheticError`] when the configuration is invalid.
pub fn gaussian_blobs(config: &GaussianBlobConfig) -> Result<Dataset, SyntheticError> {
    validate_blob_config(config)?;

    let centroids = build_blob_centroids(config, &mut SmallRng::seed_from_u64(config.seed));
    let mut rng = SmallRng::seed_from_u64(config.seed ^ 0xA5A5_A5A5_A5A5_A5A5_u64);
    let mut rows = Vec::with_capacity(config.point_count);
    for centroid in centroids.iter().cycle().take(config.point_count) {
        let mut row = Vec::with_capacity(config.dimensions);
        for &centre in centroid {
            row.push(centre + standard_normal_sample(&mut rng)? * config.spread);
        }
        rows.push(row);
    }

    Ok(Dataset::from_rows(rows)?)
}
