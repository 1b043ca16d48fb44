//! Numeric generator helper routines.

use super::{GaussianBlobConfig, SyntheticError};
use rand::{Rng, rngs::SmallRng};
use std::f64::consts::PI;

pub(super) fn validate_blob_config(config: &GaussianBlobConfig) -> Result<(), SyntheticError> {
    if config.point_count == 0 {
        return Err(SyntheticError::ZeroPoints);
    }
    if config.dimensions == 0 {
        return Err(SyntheticError::ZeroDimensions);
    }
    if config.cluster_count == 0 {
        return Err(SyntheticError::ZeroClusters);
    }
    if config.cluster_count > config.point_count {
        return Err(SyntheticError::ClusterCountExceedsPointCount {
            cluster_count: config.cluster_count,
            point_count: config.point_count,
        });
    }
    validate_positive(config.separation, "separation")?;
    validate_positive(config.spread, "spread")
}

fn validate_positive(value: f64, parameter: &'static str) -> Result<(), SyntheticError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SyntheticError::InvalidFloatParameter { parameter })
    }
}

/// Places centroids evenly on a circle in the first two axes; further axes
/// get a small random offset.
#[expect(
    clippy::cast_precision_loss,
    reason = "centroid placement uses index-derived floating-point angles"
)]
pub(super) fn build_blob_centroids(
    config: &GaussianBlobConfig,
    rng: &mut SmallRng,
) -> Vec<Vec<f64>> {
    (0..config.cluster_count)
        .map(|cluster_index| {
            let angle = (cluster_index as f64 / config.cluster_count as f64) * (2.0 * PI);
            let mut centroid = vec![0.0_f64; config.dimensions];
            if let Some(value) = centroid.get_mut(0) {
                *value = config.separation * angle.cos();
            }
            if let Some(value) = centroid.get_mut(1) {
                *value = config.separation * angle.sin();
            }
            for value in centroid.iter_mut().skip(2) {
                *value = rng.gen_range((-0.2 * config.separation)..(0.2 * config.separation));
            }
            centroid
        })
        .collect()
}

/// Box-Muller draw from the standard normal distribution.
pub(super) fn standard_normal_sample(rng: &mut SmallRng) -> Result<f64, SyntheticError> {
    let mut u1 = rng.gen_range(0.0_f64..1.0_f64);
    if u1 <= f64::EPSILON {
        u1 = f64::EPSILON;
    }
    let u2 = rng.gen_range(0.0_f64..1.0_f64);
    let radius = (-2.0_f64 * u1.ln()).sqrt();
    let theta = 2.0_f64 * PI * u2;
    let sample = radius * theta.cos();
    if sample.is_finite() {
        Ok(sample)
    } else {
        Err(SyntheticError::InvalidFloatParameter {
            parameter: "standard_normal_sample",
        })
    }
}
