//! Feature data model
//!
//! Features, the profile describing their frame, and the context that
//! carries that profile through a chain of filters.

mod feature;
mod profile;
mod context;

pub use self::feature::{Feature, FeatureId};
pub use self::profile::{FeatureProfile, GeometryType};
pub use self::context::FilterContext;
