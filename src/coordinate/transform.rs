//! Coordinate transformation functionality

use log::debug;

use super::point::Point;
use super::projection::{normalize_longitude, Projection};
use super::registry::CrsDefinition;
use crate::errors::{FeatureError, FeatureResult};

/// Latitude limit for Mercator definitions that do not set one
const DEFAULT_MERCATOR_LATITUDE_LIMIT: f64 = 85.0;
/// Largest distance from a UTM central meridian in degrees at which the
/// transverse Mercator series stays below a metre of error
const MAX_CENTRAL_MERIDIAN_OFFSET: f64 = 8.0;

/// Transformer for converting points between two coordinate systems
///
/// Points are unprojected from the source into geodetic coordinates,
/// moved onto the target ellipsoid through geocentric space when the two
/// ellipsoids differ, then projected into the target. No datum shift is
/// applied.
pub struct CoordinateTransformer<'a> {
    source: &'a CrsDefinition,
    target: &'a CrsDefinition,
}

impl<'a> CoordinateTransformer<'a> {
    pub fn new(source: &'a CrsDefinition, target: &'a CrsDefinition) -> Self {
        CoordinateTransformer { source, target }
    }

    /// True when source and target are the same system
    pub fn is_identity(&self) -> bool {
        self.source.epsg == self.target.epsg
    }

    /// Transform a single point
    pub fn transform_point(&self, point: &Point) -> FeatureResult<Point> {
        if !point.is_finite() {
            return Err(FeatureError::NonFiniteCoordinate { x: point.x, y: point.y, z: point.z });
        }
        if self.is_identity() {
            return Ok(*point);
        }

        let (mut lon, mut lat) = self.unproject(point)?;
        let mut height = point.z;

        let source_ellipsoid = &self.source.ellipsoid;
        let target_ellipsoid = &self.target.ellipsoid;
        if !source_ellipsoid.same_shape(target_ellipsoid) {
            let ecef = source_ellipsoid.geodetic_to_geocentric(lat.to_radians(), lon.to_radians(), height);
            let (lat_rad, lon_rad, h) = target_ellipsoid.geocentric_to_geodetic(ecef.x, ecef.y, ecef.z);
            lat = lat_rad.to_degrees();
            lon = lon_rad.to_degrees();
            height = h;
        }

        let (x, y) = self.project(point, lon, lat)?;
        if !x.is_finite() || !y.is_finite() {
            return Err(self.out_of_domain(self.target, point));
        }

        Ok(Point::new_3d(x, y, height))
    }

    /// Transform a slice of points in place
    ///
    /// Either every point is transformed or, on error, none are touched.
    pub fn transform_points(&self, points: &mut [Point]) -> FeatureResult<()> {
        if self.is_identity() {
            if let Some(bad) = points.iter().find(|p| !p.is_finite()) {
                return Err(FeatureError::NonFiniteCoordinate { x: bad.x, y: bad.y, z: bad.z });
            }
            return Ok(());
        }

        let transformed = points.iter()
            .map(|p| self.transform_point(p))
            .collect::<FeatureResult<Vec<Point>>>()?;
        points.copy_from_slice(&transformed);

        debug!("Transformed {} points from EPSG:{} to EPSG:{}",
               points.len(), self.source.epsg, self.target.epsg);
        Ok(())
    }

    fn unproject(&self, point: &Point) -> FeatureResult<(f64, f64)> {
        let (lon, lat) = self.source.projection.inverse(&self.source.ellipsoid, point.x, point.y);
        if !lon.is_finite() || !lat.is_finite() || lat.abs() > 90.0 {
            return Err(self.out_of_domain(self.source, point));
        }
        Ok((lon, lat))
    }

    fn project(&self, point: &Point, lon: f64, lat: f64) -> FeatureResult<(f64, f64)> {
        let projection = &self.target.projection;
        match projection {
            Projection::Geographic => {},
            Projection::WebMercator | Projection::Mercator => {
                let limit = self.target.max_latitude.unwrap_or(DEFAULT_MERCATOR_LATITUDE_LIMIT);
                if lat.abs() > limit {
                    return Err(self.out_of_domain(self.target, point));
                }
            },
            Projection::TransverseMercator { .. } => {
                let offset = normalize_longitude(lon - projection.central_meridian());
                if offset.abs() > MAX_CENTRAL_MERIDIAN_OFFSET || lat.abs() >= 90.0 {
                    return Err(self.out_of_domain(self.target, point));
                }
            },
        }
        Ok(projection.forward(&self.target.ellipsoid, lon, lat))
    }

    fn out_of_domain(&self, definition: &CrsDefinition, point: &Point) -> FeatureError {
        FeatureError::OutOfDomain { crs: definition.label(), x: point.x, y: point.y }
    }
}
