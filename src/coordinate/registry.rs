//! Registry of coordinate reference system definitions
//!
//! Definitions are read from `crs_definitions.toml`, which is embedded in
//! the binary and parsed once on first use.

use std::collections::HashMap;

use lazy_static::lazy_static;
use log::{debug, warn};

use super::crs::{CoordinateSystem, CoordinateSystemFactory};
use super::ellipsoid::Ellipsoid;
use super::projection::Projection;
use crate::errors::{FeatureError, FeatureResult};

lazy_static! {
    static ref CRS_REGISTRY: CrsRegistry = {
        let content = include_str!("../../crs_definitions.toml");
        CrsRegistry::from_str(content).unwrap_or_else(|e| {
            warn!("Failed to parse CRS definitions: {}", e);
            CrsRegistry::default()
        })
    };
}

/// Full definition of a coordinate reference system
#[derive(Debug, Clone, PartialEq)]
pub struct CrsDefinition {
    /// EPSG code
    pub epsg: u32,
    /// Human readable name
    pub name: String,
    /// Projection method
    pub projection: Projection,
    /// Ellipsoid the system is based on
    pub ellipsoid: Ellipsoid,
    /// Latitude limit in degrees for Mercator style projections
    pub max_latitude: Option<f64>,
}

impl CrsDefinition {
    /// UTM zone on WGS 84
    pub fn utm(zone: u8, north: bool) -> Self {
        let system = CoordinateSystem::UTM(zone, north);
        let hemisphere = if north { "N" } else { "S" };
        CrsDefinition {
            epsg: system.epsg_code(),
            name: format!("WGS 84 / UTM zone {}{}", zone, hemisphere),
            projection: Projection::TransverseMercator { zone, north },
            ellipsoid: Ellipsoid::wgs84(),
            max_latitude: None,
        }
    }

    pub fn is_geographic(&self) -> bool {
        self.projection.is_geographic()
    }

    /// "EPSG:xxxx - name" label used in logs and errors
    pub fn label(&self) -> String {
        format!("EPSG:{} ({})", self.epsg, self.name)
    }
}

/// Lookup table of ellipsoids and CRS definitions
#[derive(Debug, Default)]
pub struct CrsRegistry {
    ellipsoids: HashMap<String, Ellipsoid>,
    definitions: HashMap<u32, CrsDefinition>,
}

impl CrsRegistry {
    /// Parse registry definitions from a TOML string
    pub fn from_str(content: &str) -> FeatureResult<Self> {
        let toml_value: toml::Value = content.parse()
            .map_err(|e| FeatureError::ConfigError(format!("Failed to parse TOML: {}", e)))?;

        let mut registry = CrsRegistry::default();

        if let Some(table) = toml_value.get("ellipsoids").and_then(|v| v.as_table()) {
            for (key, entry) in table {
                let ellipsoid = Self::parse_ellipsoid(key, entry)?;
                registry.ellipsoids.insert(key.clone(), ellipsoid);
            }
        }

        if let Some(table) = toml_value.get("crs").and_then(|v| v.as_table()) {
            for (key, entry) in table {
                let epsg = key.parse::<u32>()
                    .map_err(|_| FeatureError::ConfigError(format!("Invalid EPSG key: {}", key)))?;
                let definition = registry.parse_definition(epsg, entry)?;
                registry.definitions.insert(epsg, definition);
            }
        }

        debug!("Loaded {} ellipsoids and {} CRS definitions",
               registry.ellipsoids.len(), registry.definitions.len());

        Ok(registry)
    }

    fn parse_ellipsoid(key: &str, entry: &toml::Value) -> FeatureResult<Ellipsoid> {
        let name = entry.get("name").and_then(|v| v.as_str()).unwrap_or(key);
        let semi_major = Self::get_float(entry, "semi_major")
            .ok_or_else(|| FeatureError::ConfigError(format!("Ellipsoid {} lacks semi_major", key)))?;
        let inverse_flattening = Self::get_float(entry, "inverse_flattening").unwrap_or(0.0);

        if semi_major <= 0.0 || inverse_flattening < 0.0 {
            return Err(FeatureError::ConfigError(format!("Ellipsoid {} has invalid axes", key)));
        }

        Ok(Ellipsoid::new(name, semi_major, inverse_flattening))
    }

    fn parse_definition(&self, epsg: u32, entry: &toml::Value) -> FeatureResult<CrsDefinition> {
        let name = entry.get("name").and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| format!("EPSG:{}", epsg));

        let kind = entry.get("projection").and_then(|v| v.as_str())
            .ok_or_else(|| FeatureError::ConfigError(format!("EPSG:{} lacks a projection", epsg)))?;
        let zone = match entry.get("zone").and_then(|v| v.as_integer()) {
            Some(z) => Some(u8::try_from(z).map_err(|_| FeatureError::ConfigError(
                format!("EPSG:{} has invalid UTM zone {}", epsg, z)))?),
            None => None,
        };
        let north = entry.get("north").and_then(|v| v.as_bool()).unwrap_or(true);
        let projection = Projection::from_name(kind, zone, north)?;

        let ellipsoid_key = entry.get("ellipsoid").and_then(|v| v.as_str()).unwrap_or("WGS84");
        let ellipsoid = self.ellipsoids.get(ellipsoid_key).cloned()
            .ok_or_else(|| FeatureError::ConfigError(
                format!("EPSG:{} references unknown ellipsoid {}", epsg, ellipsoid_key)))?;

        Ok(CrsDefinition {
            epsg,
            name,
            projection,
            ellipsoid,
            max_latitude: Self::get_float(entry, "max_latitude"),
        })
    }

    // TOML integers are accepted where floats are expected
    fn get_float(entry: &toml::Value, key: &str) -> Option<f64> {
        entry.get(key).and_then(|v| v.as_float().or_else(|| v.as_integer().map(|i| i as f64)))
    }

    /// Get a definition by EPSG code, including generated UTM zones
    pub fn get(&self, epsg: u32) -> Option<CrsDefinition> {
        if let Some(definition) = self.definitions.get(&epsg) {
            return Some(definition.clone());
        }
        match CoordinateSystemFactory::from_epsg(epsg).ok()? {
            CoordinateSystem::UTM(zone, north) => Some(CrsDefinition::utm(zone, north)),
            _ => None,
        }
    }

    /// Resolve a coordinate system identifier to its definition
    pub fn resolve(&self, system: CoordinateSystem) -> FeatureResult<CrsDefinition> {
        self.get(system.epsg_code())
            .ok_or_else(|| FeatureError::UnknownCrs(system.description()))
    }

    /// Look up an ellipsoid by registry key
    pub fn ellipsoid(&self, key: &str) -> Option<&Ellipsoid> {
        self.ellipsoids.get(key)
    }

    /// EPSG codes with an explicit entry, sorted
    pub fn codes(&self) -> Vec<u32> {
        let mut codes: Vec<u32> = self.definitions.keys().copied().collect();
        codes.sort_unstable();
        codes
    }
}

/// The process-wide registry loaded from the embedded definitions
pub fn global_registry() -> &'static CrsRegistry {
    &CRS_REGISTRY
}

/// Resolve a CRS string such as "EPSG:3857" against the global registry
pub fn lookup(crs_str: &str) -> FeatureResult<CrsDefinition> {
    let system = CoordinateSystemFactory::from_string(crs_str)?;
    global_registry().resolve(system)
}
