//! Benchmark support crate for chaincluster.
//!
//! Provides the synthetic datasets and parameter types used by the Criterion
//! benchmarks for distance-matrix construction and chain clustering.

pub mod error;
pub mod params;
pub mod source;
