//! Custom error types for feature processing

use std::fmt;
use std::io;

/// Feature processing error types
#[derive(Debug)]
pub enum FeatureError {
    /// I/O error
    IoError(io::Error),
    /// CRS string or code that the registry does not know
    UnknownCrs(String),
    /// No projection path between the two systems
    UnsupportedTransformation { from: String, to: String },
    /// Coordinate outside the valid domain of a projection
    OutOfDomain { crs: String, x: f64, y: f64 },
    /// NaN or infinite vertex component
    NonFiniteCoordinate { x: f64, y: f64, z: f64 },
    /// Operation requires a geographic reference system
    NotGeographic(String),
    /// Malformed text input
    ParseError { line: usize, message: String },
    /// Invalid configuration value
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for FeatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureError::IoError(e) => write!(f, "I/O error: {}", e),
            FeatureError::UnknownCrs(s) => write!(f, "Unknown coordinate reference system: {}", s),
            FeatureError::UnsupportedTransformation { from, to } => {
                write!(f, "Unsupported coordinate transformation from {} to {}", from, to)
            }
            FeatureError::OutOfDomain { crs, x, y } => {
                write!(f, "Coordinate ({}, {}) is outside the domain of {}", x, y, crs)
            }
            FeatureError::NonFiniteCoordinate { x, y, z } => {
                write!(f, "Non-finite coordinate ({}, {}, {})", x, y, z)
            }
            FeatureError::NotGeographic(s) => write!(f, "{} is not a geographic reference system", s),
            FeatureError::ParseError { line, message } => write!(f, "Parse error on line {}: {}", line, message),
            FeatureError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            FeatureError::GenericError(msg) => write!(f, "Feature error: {}", msg),
        }
    }
}

impl std::error::Error for FeatureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FeatureError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for FeatureError {
    fn from(error: io::Error) -> Self {
        FeatureError::IoError(error)
    }
}

impl From<String> for FeatureError {
    fn from(msg: String) -> Self {
        FeatureError::GenericError(msg)
    }
}

/// Result type for feature operations
pub type FeatureResult<T> = Result<T, FeatureError>;
