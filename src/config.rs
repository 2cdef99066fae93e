//! Run configuration
//!
//! Settings for the command line tool, read from an optional TOML file:
//!
//! ```toml
//! [transform]
//! source = "EPSG:4326"
//! target = "EPSG:4979"
//! geocentric = true
//! geometry = "polygon"
//! multi = false
//! dimensionality = 3
//! precision = 6
//! ```

use std::fs;

use log::debug;

use crate::errors::{FeatureError, FeatureResult};
use crate::feature::GeometryType;

/// Default number of decimals written for output coordinates
pub const DEFAULT_PRECISION: usize = 6;

/// Settings for a transform run
#[derive(Debug, Clone, PartialEq)]
pub struct TransformConfig {
    /// Frame of the input features
    pub source: Option<String>,
    /// Frame to transform into
    pub target: Option<String>,
    /// Convert geographic output to geocentric coordinates
    pub geocentric: bool,
    /// Geometry type recorded in the profile
    pub geometry: GeometryType,
    /// Multi-geometry flag recorded in the profile
    pub multi: bool,
    /// Forced dimensionality, detected from the input when unset
    pub dimensionality: Option<u32>,
    /// Decimals written for output coordinates
    pub precision: usize,
}

impl Default for TransformConfig {
    fn default() -> Self {
        TransformConfig {
            source: None,
            target: None,
            geocentric: false,
            geometry: GeometryType::Unknown,
            multi: false,
            dimensionality: None,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl TransformConfig {
    /// Parse configuration from a TOML string
    pub fn from_str(content: &str) -> FeatureResult<Self> {
        let toml_value: toml::Value = content.parse()
            .map_err(|e| FeatureError::ConfigError(format!("Failed to parse TOML: {}", e)))?;

        let mut config = TransformConfig::default();
        let table = match toml_value.get("transform") {
            Some(table) => table,
            None => return Ok(config),
        };

        config.source = Self::get_string(table, "source")?;
        config.target = Self::get_string(table, "target")?;

        if let Some(value) = table.get("geocentric") {
            config.geocentric = value.as_bool()
                .ok_or_else(|| Self::type_error("geocentric", "a boolean"))?;
        }
        if let Some(value) = table.get("multi") {
            config.multi = value.as_bool()
                .ok_or_else(|| Self::type_error("multi", "a boolean"))?;
        }
        if let Some(geometry) = Self::get_string(table, "geometry")? {
            config.geometry = geometry.parse()?;
        }
        if let Some(value) = table.get("dimensionality") {
            let dims = value.as_integer()
                .ok_or_else(|| Self::type_error("dimensionality", "an integer"))?;
            if dims != 2 && dims != 3 {
                return Err(FeatureError::ConfigError(format!("dimensionality must be 2 or 3, got {}", dims)));
            }
            config.dimensionality = Some(dims as u32);
        }
        if let Some(value) = table.get("precision") {
            let precision = value.as_integer()
                .filter(|p| (0..=15).contains(p))
                .ok_or_else(|| Self::type_error("precision", "an integer between 0 and 15"))?;
            config.precision = precision as usize;
        }

        debug!("Loaded transform configuration: {:?}", config);
        Ok(config)
    }

    /// Read configuration from a TOML file
    pub fn from_file(path: &str) -> FeatureResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    fn get_string(table: &toml::Value, key: &str) -> FeatureResult<Option<String>> {
        match table.get(key) {
            Some(value) => value.as_str()
                .map(|s| Some(s.to_string()))
                .ok_or_else(|| Self::type_error(key, "a string")),
            None => Ok(None),
        }
    }

    fn type_error(key: &str, expected: &str) -> FeatureError {
        FeatureError::ConfigError(format!("transform.{} must be {}", key, expected))
    }
}
