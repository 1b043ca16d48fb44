//! Distance primitives for the chain-clustering run.
//!
//! A run computes every pairwise Euclidean distance once and serves minimum
//! queries from the resulting [`DistanceMatrix`]. Searches may be restricted
//! to a subset of columns so callers can look only at still-unassigned
//! points.

mod euclidean;
mod matrix;

pub use self::euclidean::euclidean_distance;
pub use self::matrix::{DistanceMatrix, MAX_DISTANCE, Nearest};
