//! Coordinate Reference System identifiers

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::{FeatureError, FeatureResult};

lazy_static! {
    static ref EPSG_PATTERN: Regex = Regex::new(r"^(?:EPSG:)?(\d+)$").unwrap();
    static ref UTM_PATTERN: Regex = Regex::new(r"^UTM\s*(\d{1,2})\s*([NS])$").unwrap();
}

/// Identifier for common coordinate systems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateSystem {
    /// WGS 84 (EPSG:4326)
    WGS84,
    /// Web Mercator (EPSG:3857)
    WebMercator,
    /// UTM Zone (EPSG:326xx for northern hemisphere, 327xx for southern)
    UTM(u8, bool),
    /// Other EPSG code
    Other(u32),
}

impl CoordinateSystem {
    /// Get the EPSG code for this coordinate system
    pub fn epsg_code(&self) -> u32 {
        match self {
            CoordinateSystem::WGS84 => 4326,
            CoordinateSystem::WebMercator => 3857,
            CoordinateSystem::UTM(zone, is_northern) => {
                if *is_northern {
                    32600 + *zone as u32
                } else {
                    32700 + *zone as u32
                }
            },
            CoordinateSystem::Other(code) => *code,
        }
    }

    /// Get a description of this coordinate system
    pub fn description(&self) -> String {
        match self {
            CoordinateSystem::WGS84 => "WGS 84 (EPSG:4326)".to_string(),
            CoordinateSystem::WebMercator => "Web Mercator (EPSG:3857)".to_string(),
            CoordinateSystem::UTM(zone, is_northern) => {
                if *is_northern {
                    format!("UTM Zone {}N (EPSG:{})", zone, self.epsg_code())
                } else {
                    format!("UTM Zone {}S (EPSG:{})", zone, self.epsg_code())
                }
            },
            CoordinateSystem::Other(code) => format!("EPSG:{}", code),
        }
    }
}

/// Factory for creating coordinate systems
pub struct CoordinateSystemFactory;

impl CoordinateSystemFactory {
    /// Create a coordinate system from an EPSG code
    pub fn from_epsg(epsg: u32) -> FeatureResult<CoordinateSystem> {
        match epsg {
            0 => Err(FeatureError::UnknownCrs("EPSG:0".to_string())),
            4326 => Ok(CoordinateSystem::WGS84),
            3857 => Ok(CoordinateSystem::WebMercator),
            32601..=32660 => Ok(CoordinateSystem::UTM((epsg - 32600) as u8, true)),
            32701..=32760 => Ok(CoordinateSystem::UTM((epsg - 32700) as u8, false)),
            _ => Ok(CoordinateSystem::Other(epsg)),
        }
    }

    /// Parse a coordinate system from a string
    ///
    /// Accepts "EPSG:4326", "4326" and "UTM 33N" style identifiers.
    pub fn from_string(crs_str: &str) -> FeatureResult<CoordinateSystem> {
        let crs_str = crs_str.trim().to_uppercase();

        if let Some(caps) = EPSG_PATTERN.captures(&crs_str) {
            let epsg = caps[1].parse::<u32>()
                .map_err(|_| FeatureError::UnknownCrs(format!("Invalid EPSG code: {}", &caps[1])))?;
            return Self::from_epsg(epsg);
        }

        if let Some(caps) = UTM_PATTERN.captures(&crs_str) {
            let zone = caps[1].parse::<u8>()
                .map_err(|_| FeatureError::UnknownCrs(format!("Invalid UTM zone: {}", &caps[1])))?;
            if !(1..=60).contains(&zone) {
                return Err(FeatureError::UnknownCrs(format!("UTM zone out of range: {}", zone)));
            }
            return Ok(CoordinateSystem::UTM(zone, &caps[2] == "N"));
        }

        Err(FeatureError::UnknownCrs(format!("Unsupported CRS format: {}", crs_str)))
    }
}
