//! Signal evaluation: score mapping and row aggregation.

pub mod aggregation;
pub mod scoring;

pub use aggregation::*;
pub use scoring::*;
