//! Shared test utilities used across chaincluster crates.

pub mod ci;
pub mod recording;
