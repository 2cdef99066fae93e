//! Feature profile: frame and geometry metadata for a batch of features

use std::fmt;
use std::str::FromStr;

use crate::coordinate::SrsRef;
use crate::errors::FeatureError;

/// Kind of geometry carried by the features of a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GeometryType {
    #[default]
    Unknown,
    Point,
    Line,
    Polygon,
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GeometryType::Unknown => "unknown",
            GeometryType::Point => "point",
            GeometryType::Line => "line",
            GeometryType::Polygon => "polygon",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for GeometryType {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "point" | "points" => Ok(GeometryType::Point),
            "line" | "linestring" => Ok(GeometryType::Line),
            "polygon" => Ok(GeometryType::Polygon),
            "unknown" => Ok(GeometryType::Unknown),
            other => Err(FeatureError::ConfigError(format!("Unknown geometry type: {}", other))),
        }
    }
}

/// Describes the frame and shape of a batch of features
#[derive(Debug, Clone)]
pub struct FeatureProfile {
    srs: SrsRef,
    geometry_type: GeometryType,
    dimensionality: u32,
    multi_geometry: bool,
}

impl FeatureProfile {
    pub fn new(srs: SrsRef, geometry_type: GeometryType, dimensionality: u32, multi_geometry: bool) -> Self {
        FeatureProfile {
            srs,
            geometry_type,
            dimensionality,
            multi_geometry,
        }
    }

    /// Reference system the features are expressed in
    pub fn srs(&self) -> &SrsRef {
        &self.srs
    }

    pub fn geometry_type(&self) -> GeometryType {
        self.geometry_type
    }

    /// Number of meaningful vertex components (2 or 3)
    pub fn dimensionality(&self) -> u32 {
        self.dimensionality
    }

    pub fn is_multi_geometry(&self) -> bool {
        self.multi_geometry
    }
}
