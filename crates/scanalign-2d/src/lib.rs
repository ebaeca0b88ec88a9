#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Linear algebra utilities.
pub mod linalg;

/// Point cloud containers.
pub mod pointcloud;

/// Homogeneous transform constructors.
pub mod transforms;

mod utils;
