pub mod errors;
pub mod config;
pub mod coordinate;
pub mod feature;
pub mod filters;
pub mod utils;
pub mod commands;

pub use errors::{FeatureError, FeatureResult};
pub use coordinate::{BoundingBox, Crs, Ellipsoid, Point, SpatialReference, SrsRef};
pub use feature::{Feature, FeatureProfile, FilterContext, GeometryType};
pub use filters::{FeatureFailure, FeatureFilter, FilterOutput, TransformFilter};
