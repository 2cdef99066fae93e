//! Tests for point transformation between registry systems

use approx::assert_abs_diff_eq;

use crate::coordinate::registry::lookup;
use crate::coordinate::{CoordinateTransformer, Crs, Point, SpatialReference};
use crate::errors::FeatureError;

#[test]
fn test_identity_leaves_points_untouched() {
    let wgs84 = lookup("EPSG:4326").unwrap();
    let transformer = CoordinateTransformer::new(&wgs84, &wgs84);
    let mut points = vec![Point::new_3d(10.0, 20.0, 5.0), Point::new(-170.0, -80.0)];
    let original = points.clone();

    transformer.transform_points(&mut points).unwrap();
    assert!(transformer.is_identity());
    assert_eq!(points, original);
}

#[test]
fn test_wgs84_to_web_mercator() {
    let wgs84 = lookup("EPSG:4326").unwrap();
    let mercator = lookup("EPSG:3857").unwrap();
    let transformer = CoordinateTransformer::new(&wgs84, &mercator);

    let p = transformer.transform_point(&Point::new_3d(180.0, 0.0, 12.0)).unwrap();
    assert_abs_diff_eq!(p.x, 20037508.342789244, epsilon = 1e-6);
    assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-6);
    assert_eq!(p.z, 12.0);
}

#[test]
fn test_web_mercator_out_of_domain_is_atomic() {
    let wgs84 = lookup("EPSG:4326").unwrap();
    let mercator = lookup("EPSG:3857").unwrap();
    let transformer = CoordinateTransformer::new(&wgs84, &mercator);

    let mut points = vec![Point::new(0.0, 0.0), Point::new(0.0, 86.0)];
    let original = points.clone();

    let result = transformer.transform_points(&mut points);
    assert!(matches!(result, Err(FeatureError::OutOfDomain { .. })));
    assert_eq!(points, original);
}

#[test]
fn test_invalid_latitude_rejected() {
    let wgs84 = lookup("EPSG:4326").unwrap();
    let utm = lookup("EPSG:32633").unwrap();
    let transformer = CoordinateTransformer::new(&wgs84, &utm);

    assert!(matches!(
        transformer.transform_point(&Point::new(15.0, 91.0)),
        Err(FeatureError::OutOfDomain { .. })
    ));
}

#[test]
fn test_non_finite_rejected() {
    let wgs84 = lookup("EPSG:4326").unwrap();
    let transformer = CoordinateTransformer::new(&wgs84, &wgs84);

    let mut points = vec![Point::new(f64::NAN, 0.0)];
    assert!(matches!(
        transformer.transform_points(&mut points),
        Err(FeatureError::NonFiniteCoordinate { .. })
    ));
}

#[test]
fn test_utm_far_from_zone_rejected() {
    let wgs84 = lookup("EPSG:4326").unwrap();
    let utm = lookup("EPSG:32633").unwrap();
    let transformer = CoordinateTransformer::new(&wgs84, &utm);

    assert!(transformer.transform_point(&Point::new(23.0, 45.0)).is_ok());
    assert!(transformer.transform_point(&Point::new(7.0, 45.0)).is_ok());
    assert!(matches!(
        transformer.transform_point(&Point::new(23.5, 45.0)),
        Err(FeatureError::OutOfDomain { .. })
    ));
    assert!(transformer.transform_point(&Point::new(40.0, 45.0)).is_err());
    assert!(transformer.transform_point(&Point::new(-165.0, 45.0)).is_err());
}

#[test]
fn test_utm_round_trip_at_zone_limit() {
    let wgs84 = lookup("EPSG:4326").unwrap();
    let utm = lookup("EPSG:32633").unwrap();
    let forward = CoordinateTransformer::new(&wgs84, &utm);
    let inverse = CoordinateTransformer::new(&utm, &wgs84);

    for lat in [0.0, 30.0, 50.0, 70.0, 84.0] {
        for lon in [7.0, 23.0] {
            let projected = forward.transform_point(&Point::new(lon, lat)).unwrap();
            let back = inverse.transform_point(&projected).unwrap();
            assert_abs_diff_eq!(back.x, lon, epsilon = 1e-5);
            assert_abs_diff_eq!(back.y, lat, epsilon = 1e-6);
        }
    }
}

#[test]
fn test_utm_across_antimeridian() {
    let wgs84 = lookup("EPSG:4326").unwrap();
    let zone60 = lookup("UTM 60N").unwrap();
    let zone1 = lookup("UTM 1N").unwrap();

    // 3.5 degrees east of the zone 60 central meridian
    let east = CoordinateTransformer::new(&wgs84, &zone60)
        .transform_point(&Point::new(-179.5, 10.0))
        .unwrap();
    assert_abs_diff_eq!(east.x, 883810.155, epsilon = 1e-2);
    assert_abs_diff_eq!(east.y, 1107450.028, epsilon = 1e-2);

    let back = CoordinateTransformer::new(&zone60, &wgs84).transform_point(&east).unwrap();
    assert_abs_diff_eq!(back.x, -179.5, epsilon = 1e-7);
    assert_abs_diff_eq!(back.y, 10.0, epsilon = 1e-7);

    // Mirror image 3.5 degrees west of the zone 1 central meridian
    let west = CoordinateTransformer::new(&wgs84, &zone1)
        .transform_point(&Point::new(179.5, 10.0))
        .unwrap();
    assert_abs_diff_eq!(west.x, 1000000.0 - east.x, epsilon = 1e-6);
    assert_abs_diff_eq!(west.y, east.y, epsilon = 1e-6);

    let back = CoordinateTransformer::new(&zone1, &wgs84).transform_point(&west).unwrap();
    assert_abs_diff_eq!(back.x, 179.5, epsilon = 1e-7);
}

#[test]
fn test_mercator_to_utm_chain() {
    let wgs84 = lookup("EPSG:4326").unwrap();
    let mercator = lookup("EPSG:3857").unwrap();
    let utm = lookup("EPSG:32633").unwrap();

    let vienna = Point::new(16.3738, 48.2082);
    let projected = CoordinateTransformer::new(&wgs84, &mercator).transform_point(&vienna).unwrap();
    let via_mercator = CoordinateTransformer::new(&mercator, &utm).transform_point(&projected).unwrap();
    let direct = CoordinateTransformer::new(&wgs84, &utm).transform_point(&vienna).unwrap();

    assert_abs_diff_eq!(via_mercator.x, direct.x, epsilon = 1e-4);
    assert_abs_diff_eq!(via_mercator.y, direct.y, epsilon = 1e-4);
}

#[test]
fn test_ellipsoid_change_through_geocentric() {
    let nad83 = lookup("EPSG:4269").unwrap();
    let wgs84 = lookup("EPSG:4326").unwrap();
    let p = CoordinateTransformer::new(&nad83, &wgs84)
        .transform_point(&Point::new_3d(-100.0, 40.0, 250.0))
        .unwrap();

    // GRS 1980 and WGS 84 differ by well under a millimetre
    assert_abs_diff_eq!(p.x, -100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(p.y, 40.0, epsilon = 1e-8);
    assert_abs_diff_eq!(p.z, 250.0, epsilon = 1e-3);

    let sphere = lookup("EPSG:4047").unwrap();
    let q = CoordinateTransformer::new(&sphere, &wgs84)
        .transform_point(&Point::new(30.0, 45.0))
        .unwrap();
    assert_abs_diff_eq!(q.x, 30.0, epsilon = 1e-9);
    assert!(q.y != 45.0);
}

#[test]
fn test_crs_spatial_reference() {
    let wgs84 = Crs::from_string("EPSG:4326").unwrap();
    let mercator = Crs::from_epsg(3857).unwrap();

    assert!(wgs84.is_geographic());
    assert!(wgs84.ellipsoid().is_some());
    assert!(!mercator.is_geographic());
    assert!(mercator.ellipsoid().is_none());

    let mut points = vec![Point::new(0.0, 0.0), Point::new(90.0, 0.0)];
    mercator.transform_points(&wgs84, &mut points).unwrap();
    assert_abs_diff_eq!(points[1].x, 20037508.342789244 / 2.0, epsilon = 1e-6);
}
