//! Ellipsoidal earth model
//!
//! Converts between geodetic (latitude, longitude, height) and
//! earth-centered, earth-fixed Cartesian coordinates.

use super::point::Point;

/// Iteration cap for the geocentric to geodetic solver
const MAX_ITERATIONS: usize = 10;
/// Latitude convergence threshold in radians
const CONVERGENCE: f64 = 1e-14;

/// An oblate ellipsoid of revolution
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipsoid {
    /// Display name (e.g. "WGS 84")
    pub name: String,
    /// Semi-major (equatorial) axis in meters
    pub semi_major: f64,
    /// Flattening, 0.0 for a sphere
    pub flattening: f64,
}

impl Ellipsoid {
    /// WGS 84 semi-major axis in meters
    pub const WGS84_SEMI_MAJOR: f64 = 6378137.0;
    /// WGS 84 inverse flattening
    pub const WGS84_INVERSE_FLATTENING: f64 = 298.257223563;

    /// Create an ellipsoid from its semi-major axis and inverse flattening
    ///
    /// An inverse flattening of 0.0 denotes a sphere.
    pub fn new(name: &str, semi_major: f64, inverse_flattening: f64) -> Self {
        let flattening = if inverse_flattening == 0.0 { 0.0 } else { 1.0 / inverse_flattening };
        Ellipsoid {
            name: name.to_string(),
            semi_major,
            flattening,
        }
    }

    /// The WGS 84 ellipsoid
    pub fn wgs84() -> Self {
        Ellipsoid::new("WGS 84", Self::WGS84_SEMI_MAJOR, Self::WGS84_INVERSE_FLATTENING)
    }

    /// A sphere of the given radius
    pub fn sphere(name: &str, radius: f64) -> Self {
        Ellipsoid::new(name, radius, 0.0)
    }

    /// Semi-minor (polar) axis in meters
    pub fn semi_minor(&self) -> f64 {
        self.semi_major * (1.0 - self.flattening)
    }

    /// First eccentricity squared
    pub fn eccentricity_squared(&self) -> f64 {
        2.0 * self.flattening - self.flattening * self.flattening
    }

    /// First eccentricity
    pub fn eccentricity(&self) -> f64 {
        self.eccentricity_squared().sqrt()
    }

    /// Second eccentricity squared
    pub fn second_eccentricity_squared(&self) -> f64 {
        let e2 = self.eccentricity_squared();
        e2 / (1.0 - e2)
    }

    /// Radius of curvature in the prime vertical at a geodetic latitude
    pub fn prime_vertical_radius(&self, latitude: f64) -> f64 {
        let sin_lat = latitude.sin();
        self.semi_major / (1.0 - self.eccentricity_squared() * sin_lat * sin_lat).sqrt()
    }

    /// Same shape regardless of name
    pub fn same_shape(&self, other: &Ellipsoid) -> bool {
        self.semi_major == other.semi_major && self.flattening == other.flattening
    }

    /// Convert geodetic coordinates to geocentric Cartesian coordinates
    ///
    /// # Arguments
    /// * `latitude` - Geodetic latitude in radians
    /// * `longitude` - Longitude in radians
    /// * `height` - Height above the ellipsoid in meters
    ///
    /// # Returns
    /// The (x, y, z) position in meters
    pub fn geodetic_to_geocentric(&self, latitude: f64, longitude: f64, height: f64) -> Point {
        let n = self.prime_vertical_radius(latitude);
        let (sin_lat, cos_lat) = latitude.sin_cos();
        let (sin_lon, cos_lon) = longitude.sin_cos();

        let x = (n + height) * cos_lat * cos_lon;
        let y = (n + height) * cos_lat * sin_lon;
        let z = (n * (1.0 - self.eccentricity_squared()) + height) * sin_lat;

        Point::new_3d(x, y, z)
    }

    /// Convert geocentric Cartesian coordinates back to geodetic coordinates
    ///
    /// # Returns
    /// (latitude radians, longitude radians, height meters)
    pub fn geocentric_to_geodetic(&self, x: f64, y: f64, z: f64) -> (f64, f64, f64) {
        let e2 = self.eccentricity_squared();
        let longitude = y.atan2(x);
        let p = x.hypot(y);

        // tan(lat) = (z + e^2 N sin(lat)) / p
        let mut latitude = z.atan2(p * (1.0 - e2));
        for _ in 0..MAX_ITERATIONS {
            let n = self.prime_vertical_radius(latitude);
            let next = (z + e2 * n * latitude.sin()).atan2(p);
            let delta = (next - latitude).abs();
            latitude = next;
            if delta < CONVERGENCE {
                break;
            }
        }

        // Stable at the poles, unlike p / cos(lat) - N
        let (sin_lat, cos_lat) = latitude.sin_cos();
        let n = self.prime_vertical_radius(latitude);
        let height = p * cos_lat + z * sin_lat - self.semi_major * self.semi_major / n;

        (latitude, longitude, height)
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Ellipsoid::wgs84()
    }
}
