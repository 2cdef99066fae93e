//! Coordinate handling for geospatial data
//!
//! This module provides structures and functionality for handling
//! different coordinate systems and transformations.

mod bbox;
mod point;
mod transform;
mod crs;
mod ellipsoid;
mod projection;
pub mod registry;
mod srs;
#[cfg(test)]
mod tests;

// Re-export key types
pub use self::bbox::BoundingBox;
pub use self::point::Point;
pub use self::transform::CoordinateTransformer;
pub use self::crs::{CoordinateSystem, CoordinateSystemFactory};
pub use self::ellipsoid::Ellipsoid;
pub use self::projection::Projection;
pub use self::registry::{CrsDefinition, CrsRegistry};
pub use self::srs::{Crs, SpatialReference, SrsRef};
