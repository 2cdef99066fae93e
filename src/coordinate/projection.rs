//! Map projection formulas
//!
//! Forward functions take geodetic longitude/latitude in degrees and return
//! projected easting/northing in meters; inverse functions go the other way.
//! Domain checks are left to the caller.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use super::ellipsoid::Ellipsoid;
use crate::errors::{FeatureError, FeatureResult};

/// UTM scale factor on the central meridian
pub const UTM_SCALE_FACTOR: f64 = 0.9996;
/// UTM false easting in meters
pub const UTM_FALSE_EASTING: f64 = 500000.0;
/// UTM false northing for southern zones in meters
pub const UTM_FALSE_NORTHING_SOUTH: f64 = 10000000.0;

const MAX_ITERATIONS: usize = 15;
const CONVERGENCE: f64 = 1e-12;

/// Projection method of a coordinate reference system
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Longitude/latitude in degrees
    Geographic,
    /// Spherical Mercator on the semi-major axis (EPSG:3857)
    WebMercator,
    /// Ellipsoidal Mercator (EPSG:3395)
    Mercator,
    /// UTM transverse Mercator zone
    TransverseMercator { zone: u8, north: bool },
}

impl Projection {
    /// Build a projection from its registry name
    pub fn from_name(name: &str, zone: Option<u8>, north: bool) -> FeatureResult<Self> {
        match name {
            "geographic" => Ok(Projection::Geographic),
            "web_mercator" => Ok(Projection::WebMercator),
            "mercator" => Ok(Projection::Mercator),
            "transverse_mercator" => {
                let zone = zone.ok_or_else(|| FeatureError::ConfigError(
                    "transverse_mercator definition requires a zone".to_string()))?;
                if !(1..=60).contains(&zone) {
                    return Err(FeatureError::ConfigError(format!("Invalid UTM zone: {}", zone)));
                }
                Ok(Projection::TransverseMercator { zone, north })
            },
            other => Err(FeatureError::ConfigError(format!("Unknown projection kind: {}", other))),
        }
    }

    /// Registry name of this projection
    pub fn kind_name(&self) -> &'static str {
        match self {
            Projection::Geographic => "geographic",
            Projection::WebMercator => "web_mercator",
            Projection::Mercator => "mercator",
            Projection::TransverseMercator { .. } => "transverse_mercator",
        }
    }

    pub fn is_geographic(&self) -> bool {
        matches!(self, Projection::Geographic)
    }

    /// Longitude of the central meridian in degrees
    pub fn central_meridian(&self) -> f64 {
        match self {
            Projection::TransverseMercator { zone, .. } => *zone as f64 * 6.0 - 183.0,
            _ => 0.0,
        }
    }

    /// Project geodetic degrees to map coordinates
    pub fn forward(&self, ellipsoid: &Ellipsoid, lon: f64, lat: f64) -> (f64, f64) {
        match self {
            Projection::Geographic => (lon, lat),
            Projection::WebMercator => {
                let a = ellipsoid.semi_major;
                let x = a * lon.to_radians();
                let y = a * (FRAC_PI_4 + lat.to_radians() / 2.0).tan().ln();
                (x, y)
            },
            Projection::Mercator => mercator_forward(ellipsoid, lon, lat),
            Projection::TransverseMercator { north, .. } => {
                let (x, y) = transverse_mercator_forward(ellipsoid, self.central_meridian(), lon, lat);
                let false_northing = if *north { 0.0 } else { UTM_FALSE_NORTHING_SOUTH };
                (x + UTM_FALSE_EASTING, y + false_northing)
            },
        }
    }

    /// Unproject map coordinates to geodetic degrees (longitude, latitude)
    pub fn inverse(&self, ellipsoid: &Ellipsoid, x: f64, y: f64) -> (f64, f64) {
        match self {
            Projection::Geographic => (x, y),
            Projection::WebMercator => {
                let a = ellipsoid.semi_major;
                let lon = (x / a).to_degrees();
                let lat = (2.0 * (y / a).exp().atan() - FRAC_PI_2).to_degrees();
                (lon, lat)
            },
            Projection::Mercator => mercator_inverse(ellipsoid, x, y),
            Projection::TransverseMercator { north, .. } => {
                let false_northing = if *north { 0.0 } else { UTM_FALSE_NORTHING_SOUTH };
                transverse_mercator_inverse(
                    ellipsoid,
                    self.central_meridian(),
                    x - UTM_FALSE_EASTING,
                    y - false_northing,
                )
            },
        }
    }
}

fn mercator_forward(ellipsoid: &Ellipsoid, lon: f64, lat: f64) -> (f64, f64) {
    let a = ellipsoid.semi_major;
    let e = ellipsoid.eccentricity();
    let phi = lat.to_radians();
    let e_sin = e * phi.sin();

    let x = a * lon.to_radians();
    let y = a * ((FRAC_PI_4 + phi / 2.0).tan() * ((1.0 - e_sin) / (1.0 + e_sin)).powf(e / 2.0)).ln();
    (x, y)
}

fn mercator_inverse(ellipsoid: &Ellipsoid, x: f64, y: f64) -> (f64, f64) {
    let a = ellipsoid.semi_major;
    let e = ellipsoid.eccentricity();
    let t = (-y / a).exp();

    let mut phi = FRAC_PI_2 - 2.0 * t.atan();
    for _ in 0..MAX_ITERATIONS {
        let e_sin = e * phi.sin();
        let next = FRAC_PI_2 - 2.0 * (t * ((1.0 - e_sin) / (1.0 + e_sin)).powf(e / 2.0)).atan();
        let delta = (next - phi).abs();
        phi = next;
        if delta < CONVERGENCE {
            break;
        }
    }

    ((x / a).to_degrees(), phi.to_degrees())
}

/// Meridian arc length from the equator to latitude `phi` (radians)
fn meridian_arc(ellipsoid: &Ellipsoid, phi: f64) -> f64 {
    let e2 = ellipsoid.eccentricity_squared();
    let e4 = e2 * e2;
    let e6 = e4 * e2;

    ellipsoid.semi_major * (
        (1.0 - e2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0) * phi
            - (3.0 * e2 / 8.0 + 3.0 * e4 / 32.0 + 45.0 * e6 / 1024.0) * (2.0 * phi).sin()
            + (15.0 * e4 / 256.0 + 45.0 * e6 / 1024.0) * (4.0 * phi).sin()
            - (35.0 * e6 / 3072.0) * (6.0 * phi).sin()
    )
}

// Snyder, Map Projections: A Working Manual, eq. 8-9 and 8-10
fn transverse_mercator_forward(ellipsoid: &Ellipsoid, lon0: f64, lon: f64, lat: f64) -> (f64, f64) {
    let k0 = UTM_SCALE_FACTOR;
    let e2 = ellipsoid.eccentricity_squared();
    let ep2 = ellipsoid.second_eccentricity_squared();

    let phi = lat.to_radians();
    let (sin_phi, cos_phi) = phi.sin_cos();
    let tan_phi = phi.tan();

    let n = ellipsoid.semi_major / (1.0 - e2 * sin_phi * sin_phi).sqrt();
    let t = tan_phi * tan_phi;
    let c = ep2 * cos_phi * cos_phi;
    let a = normalize_longitude(lon - lon0).to_radians() * cos_phi;
    let m = meridian_arc(ellipsoid, phi);

    let a2 = a * a;
    let a3 = a2 * a;
    let a4 = a3 * a;
    let a5 = a4 * a;
    let a6 = a5 * a;

    let x = k0 * n * (
        a + (1.0 - t + c) * a3 / 6.0
            + (5.0 - 18.0 * t + t * t + 72.0 * c - 58.0 * ep2) * a5 / 120.0
    );
    let y = k0 * (
        m + n * tan_phi * (
            a2 / 2.0
                + (5.0 - t + 9.0 * c + 4.0 * c * c) * a4 / 24.0
                + (61.0 - 58.0 * t + t * t + 600.0 * c - 330.0 * ep2) * a6 / 720.0
        )
    );

    (x, y)
}

// Snyder eq. 8-12 through 8-25, with the footpoint latitude series 3-26
fn transverse_mercator_inverse(ellipsoid: &Ellipsoid, lon0: f64, x: f64, y: f64) -> (f64, f64) {
    let k0 = UTM_SCALE_FACTOR;
    let a = ellipsoid.semi_major;
    let e2 = ellipsoid.eccentricity_squared();
    let e4 = e2 * e2;
    let e6 = e4 * e2;
    let ep2 = ellipsoid.second_eccentricity_squared();

    let m = y / k0;
    let mu = m / (a * (1.0 - e2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0));

    let sqrt_1_e2 = (1.0 - e2).sqrt();
    let e1 = (1.0 - sqrt_1_e2) / (1.0 + sqrt_1_e2);
    let e1_2 = e1 * e1;
    let e1_3 = e1_2 * e1;
    let e1_4 = e1_3 * e1;

    let phi1 = mu
        + (3.0 * e1 / 2.0 - 27.0 * e1_3 / 32.0) * (2.0 * mu).sin()
        + (21.0 * e1_2 / 16.0 - 55.0 * e1_4 / 32.0) * (4.0 * mu).sin()
        + (151.0 * e1_3 / 96.0) * (6.0 * mu).sin()
        + (1097.0 * e1_4 / 512.0) * (8.0 * mu).sin();

    let (sin_phi1, cos_phi1) = phi1.sin_cos();
    let tan_phi1 = phi1.tan();
    let c1 = ep2 * cos_phi1 * cos_phi1;
    let t1 = tan_phi1 * tan_phi1;
    let denom = 1.0 - e2 * sin_phi1 * sin_phi1;
    let n1 = a / denom.sqrt();
    let r1 = a * (1.0 - e2) / denom.powf(1.5);
    let d = x / (n1 * k0);

    let d2 = d * d;
    let d3 = d2 * d;
    let d4 = d3 * d;
    let d5 = d4 * d;
    let d6 = d5 * d;

    let phi = phi1 - (n1 * tan_phi1 / r1) * (
        d2 / 2.0
            - (5.0 + 3.0 * t1 + 10.0 * c1 - 4.0 * c1 * c1 - 9.0 * ep2) * d4 / 24.0
            + (61.0 + 90.0 * t1 + 298.0 * c1 + 45.0 * t1 * t1 - 252.0 * ep2 - 3.0 * c1 * c1) * d6 / 720.0
    );
    let lambda = (
        d - (1.0 + 2.0 * t1 + c1) * d3 / 6.0
            + (5.0 - 2.0 * c1 + 28.0 * t1 - 3.0 * c1 * c1 + 8.0 * ep2 + 24.0 * t1 * t1) * d5 / 120.0
    ) / cos_phi1;

    (normalize_longitude(lon0 + lambda.to_degrees()), phi.to_degrees())
}

/// Wrap a longitude into [-180, 180)
pub(crate) fn normalize_longitude(lon: f64) -> f64 {
    (lon + 180.0).rem_euclid(360.0) - 180.0
}
