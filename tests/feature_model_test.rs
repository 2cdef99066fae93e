//! Tests for the feature data model and text encoding

use std::io::Cursor;

use featurekit::coordinate::{BoundingBox, Crs, Point};
use featurekit::feature::{Feature, FeatureProfile, FilterContext, GeometryType};
use featurekit::utils::feature_text::{format_feature, parse_features};

#[test]
fn test_parse_multi_part_features() {
    let input = "# header\n1,2;3,4|5,6,7\n\n  8,9  \n";
    let parsed = parse_features(Cursor::new(input)).unwrap();

    assert_eq!(parsed.features.len(), 2);
    assert_eq!(parsed.dimensionality, 3);

    let first = &parsed.features[0];
    assert_eq!(first.id, 2);
    assert_eq!(first.num_parts(), 2);
    assert_eq!(first.num_points(), 3);
    assert_eq!(first.part(1).unwrap()[0], Point::new_3d(5.0, 6.0, 7.0));

    assert_eq!(parsed.features[1].id, 4);
    assert_eq!(parsed.features[1].part(0).unwrap()[0], Point::new(8.0, 9.0));
}

#[test]
fn test_parse_rejects_bad_vertices() {
    assert!(parse_features(Cursor::new("1\n")).is_err());
    assert!(parse_features(Cursor::new("1,2,3,4\n")).is_err());
    assert!(parse_features(Cursor::new("1,2;\n")).is_err());
}

#[test]
fn test_format_feature() {
    let feature = Feature::with_parts(1, vec![
        vec![Point::new_3d(1.0, 2.5, 3.0), Point::new(4.0, 5.0)],
        vec![Point::new(-1.0, -2.0)],
    ]);

    assert_eq!(format_feature(&feature, 2, 1), "1.0,2.5;4.0,5.0|-1.0,-2.0");
    assert_eq!(format_feature(&feature, 3, 1), "1.0,2.5,3.0;4.0,5.0,0.0|-1.0,-2.0,0.0");
}

#[test]
fn test_feature_bounds() {
    let mut feature = Feature::new(9);
    assert!(feature.bounds().is_none());

    feature.add_part(vec![Point::new_3d(1.0, 5.0, 2.0)]);
    feature.add_part(vec![Point::new_3d(-3.0, 7.0, -2.0), Point::new(0.0, 0.0)]);

    let bounds = feature.bounds().unwrap();
    assert_eq!(bounds, BoundingBox {
        min_x: -3.0,
        min_y: 0.0,
        min_z: -2.0,
        max_x: 1.0,
        max_y: 7.0,
        max_z: 2.0,
    });
    assert_eq!(bounds.width(), 4.0);
    assert_eq!(bounds.center(), Point::new_3d(-1.0, 3.5, 0.0));
    assert!(bounds.contains(&Point::new(0.0, 1.0)));
}

#[test]
fn test_bounding_box_union() {
    let a = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
    let b = BoundingBox::from_point(&Point::new_3d(5.0, -1.0, 3.0));
    let u = a.union(&b);

    assert_eq!((u.min_x, u.min_y, u.min_z), (0.0, -1.0, 0.0));
    assert_eq!((u.max_x, u.max_y, u.max_z), (5.0, 1.0, 3.0));
}

#[test]
fn test_geometry_type_parsing() {
    assert_eq!("Polygon".parse::<GeometryType>().unwrap(), GeometryType::Polygon);
    assert_eq!("linestring".parse::<GeometryType>().unwrap(), GeometryType::Line);
    assert_eq!(" point ".parse::<GeometryType>().unwrap(), GeometryType::Point);
    assert!("surface".parse::<GeometryType>().is_err());
    assert_eq!(GeometryType::Line.to_string(), "line");
}

#[test]
fn test_context_copies_are_independent() {
    let srs = Crs::from_epsg(4326).unwrap().shared();
    let context = FilterContext::new(FeatureProfile::new(srs, GeometryType::Point, 2, false));

    let geocentric = context.with_geocentric(true);
    let bounded = context.with_extent(Some(BoundingBox::new(0.0, 0.0, 1.0, 1.0)));

    assert!(!context.is_geocentric());
    assert!(context.extent().is_none());
    assert!(geocentric.is_geocentric());
    assert!(bounded.extent().is_some());
    assert_eq!(bounded.profile().geometry_type(), GeometryType::Point);
}
