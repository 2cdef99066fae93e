//! Spatial reference abstraction used by feature filters

use std::fmt;
use std::sync::Arc;

use super::ellipsoid::Ellipsoid;
use super::point::Point;
use super::registry::{self, CrsDefinition};
use super::transform::CoordinateTransformer;
use crate::errors::{FeatureError, FeatureResult};

/// A coordinate frame that features can be expressed in
///
/// Implementations must be safe to share between threads; filters and
/// feature profiles hold them as `Arc<dyn SpatialReference>`.
pub trait SpatialReference: fmt::Debug + Send + Sync {
    /// Display name of the frame
    fn name(&self) -> String;

    /// True for longitude/latitude based frames
    fn is_geographic(&self) -> bool;

    /// Earth model of a geographic frame
    fn ellipsoid(&self) -> Option<&Ellipsoid>;

    /// Reproject `points` in place from `source` into this frame
    fn transform_points(&self, source: &dyn SpatialReference, points: &mut [Point]) -> FeatureResult<()>;

    /// Full definition, when the frame is registry backed
    fn definition(&self) -> Option<&CrsDefinition> {
        None
    }
}

/// Shared handle to a spatial reference
pub type SrsRef = Arc<dyn SpatialReference>;

/// Registry backed spatial reference
#[derive(Debug, Clone, PartialEq)]
pub struct Crs {
    definition: CrsDefinition,
}

impl Crs {
    pub fn new(definition: CrsDefinition) -> Self {
        Crs { definition }
    }

    /// Build from an EPSG code
    pub fn from_epsg(epsg: u32) -> FeatureResult<Self> {
        registry::global_registry()
            .get(epsg)
            .map(Crs::new)
            .ok_or_else(|| FeatureError::UnknownCrs(format!("EPSG:{}", epsg)))
    }

    /// Build from a string such as "EPSG:4326" or "UTM 33N"
    pub fn from_string(crs_str: &str) -> FeatureResult<Self> {
        registry::lookup(crs_str).map(Crs::new)
    }

    /// Wrap into a shared handle
    pub fn shared(self) -> SrsRef {
        Arc::new(self)
    }

    pub fn epsg(&self) -> u32 {
        self.definition.epsg
    }
}

impl SpatialReference for Crs {
    fn name(&self) -> String {
        self.definition.name.clone()
    }

    fn is_geographic(&self) -> bool {
        self.definition.is_geographic()
    }

    fn ellipsoid(&self) -> Option<&Ellipsoid> {
        if self.is_geographic() {
            Some(&self.definition.ellipsoid)
        } else {
            None
        }
    }

    fn transform_points(&self, source: &dyn SpatialReference, points: &mut [Point]) -> FeatureResult<()> {
        let source_definition = source.definition().ok_or_else(|| FeatureError::UnsupportedTransformation {
            from: source.name(),
            to: self.definition.label(),
        })?;

        CoordinateTransformer::new(source_definition, &self.definition).transform_points(points)
    }

    fn definition(&self) -> Option<&CrsDefinition> {
        Some(&self.definition)
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.definition.label())
    }
}
