//! Integration tests for the feature transform workflow

extern crate std;

use std::io::Cursor;

use featurekit::commands::{build_cli, DescribeCommand, TransformCommand};
use featurekit::config::TransformConfig;
use featurekit::coordinate::Crs;
use featurekit::feature::GeometryType;
use featurekit::utils::feature_text;
use featurekit::utils::logger::Logger;
use featurekit::{FeatureError, SpatialReference};

fn config(source: &str, target: &str, geocentric: bool) -> TransformConfig {
    TransformConfig {
        source: Some(source.to_string()),
        target: Some(target.to_string()),
        geocentric,
        precision: 3,
        ..TransformConfig::default()
    }
}

fn run(command: &TransformCommand, input: &str) -> (featurekit::FilterOutput, Vec<String>) {
    let mut buffer = Vec::new();
    let output = command.run(Cursor::new(input.as_bytes()), &mut buffer).unwrap();
    let text = String::from_utf8(buffer).unwrap();
    (output, text.lines().map(str::to_string).collect())
}

#[test]
fn test_complete_transform_workflow() {
    let logger = Logger::disabled();
    let command = TransformCommand::from_config("-", config("EPSG:4326", "EPSG:3857", false), &logger);

    let input = "# two features\n0,0;180,0\n\n10,10|20,20\n";
    let (output, lines) = run(&command, input);

    std::assert!(output.is_complete());
    std::assert_eq!(lines.len(), 2);
    std::assert!(lines[0].starts_with("0.000,"));
    std::assert!(lines[0].contains(";20037508.343,"));
    std::assert_eq!(lines[1].split('|').count(), 2);
    std::assert_eq!(output.context.profile().srs().name(), "WGS 84 / Pseudo-Mercator");
    std::assert_eq!(output.context.profile().dimensionality(), 2);
}

#[test]
fn test_failed_features_are_reported_inline() {
    let logger = Logger::disabled();
    let command = TransformCommand::from_config("-", config("EPSG:4326", "EPSG:3857", false), &logger);

    let (output, lines) = run(&command, "1,1\n0,89.5\n2,2\n");

    std::assert_eq!(output.failed_ids(), vec![2]);
    std::assert_eq!(lines.len(), 3);
    std::assert!(lines[1].starts_with("# failed 2:"));
    std::assert!(!lines[2].starts_with('#'));
}

#[test]
fn test_geocentric_output_is_three_dimensional() {
    let logger = Logger::disabled();
    let command = TransformCommand::from_config("-", config("EPSG:4326", "EPSG:4326", true), &logger);

    let (output, lines) = run(&command, "0,0\n90,0\n");

    std::assert!(output.context.is_geocentric());
    std::assert_eq!(lines[0], "6378137.000,0.000,0.000");
    std::assert!(lines[1].starts_with("0.000,6378137.000,"));
}

#[test]
fn test_utm_target_by_name() {
    let logger = Logger::disabled();
    let command = TransformCommand::from_config("-", config("EPSG:4326", "UTM 33N", false), &logger);

    let (output, lines) = run(&command, "15,45,100\n");

    std::assert!(output.is_complete());
    let parsed = feature_text::parse_features(Cursor::new(lines[0].as_bytes())).unwrap();
    let p = parsed.features[0].part(0).unwrap()[0];
    std::assert!((p.x - 500000.0).abs() < 1e-3);
    std::assert!((p.y - 4982950.4).abs() < 1.0);
    std::assert_eq!(p.z, 100.0);
}

#[test]
fn test_missing_target_is_an_error() {
    let logger = Logger::disabled();
    let settings = TransformConfig {
        source: Some("EPSG:4326".to_string()),
        ..TransformConfig::default()
    };
    let command = TransformCommand::from_config("-", settings, &logger);

    let mut buffer = Vec::new();
    let result = command.run(Cursor::new("0,0\n".as_bytes()), &mut buffer);
    std::assert!(matches!(result, Err(FeatureError::GenericError(_))));
}

#[test]
fn test_malformed_input_is_an_error() {
    let logger = Logger::disabled();
    let command = TransformCommand::from_config("-", config("EPSG:4326", "EPSG:3857", false), &logger);

    let mut buffer = Vec::new();
    let result = command.run(Cursor::new("0,0\n1,x\n".as_bytes()), &mut buffer);
    std::assert!(matches!(result, Err(FeatureError::ParseError { line: 2, .. })));
}

#[test]
fn test_empty_input_still_yields_output_frame() {
    let logger = Logger::disabled();
    let command = TransformCommand::from_config("-", config("EPSG:4326", "EPSG:3857", false), &logger);

    let (output, lines) = run(&command, "# nothing here\n");

    std::assert!(lines.is_empty());
    std::assert_eq!(output.context.profile().srs().name(), "WGS 84 / Pseudo-Mercator");
    std::assert!(output.context.extent().is_none());
}

#[test]
fn test_large_batch_failure_indices() {
    let logger = Logger::disabled();
    let command = TransformCommand::from_config("-", config("EPSG:4326", "EPSG:3857", false), &logger);

    let mut input = String::new();
    for i in 0..600 {
        if i == 450 {
            input.push_str("0,88\n");
        } else {
            input.push_str(&format!("{},{}\n", i % 180, (i % 80) as f64 / 2.0));
        }
    }
    let (output, lines) = run(&command, &input);

    std::assert_eq!(lines.len(), 600);
    std::assert_eq!(output.failures.len(), 1);
    std::assert_eq!(output.failures[0].index, 450);
    std::assert_eq!(output.failures[0].feature_id, 451);
    std::assert!(lines[450].starts_with("# failed 451:"));
}

#[test]
fn test_cli_flags_override_config() {
    let matches = build_cli()
        .try_get_matches_from(["featurekit", "--from", "EPSG:4326", "--to", "EPSG:3395", "--geometry", "polygon", "-g", "--multi"])
        .unwrap();
    let logger = Logger::disabled();
    let command = TransformCommand::new(&matches, &logger).unwrap();

    let (output, _) = run(&command, "0,0\n");
    let profile = output.context.profile();
    std::assert_eq!(profile.geometry_type(), GeometryType::Polygon);
    std::assert!(profile.is_multi_geometry());
    // World Mercator is projected, so no geocentric output
    std::assert!(!output.context.is_geocentric());
}

#[test]
fn test_config_file_settings() {
    let content = r#"
[transform]
source = "EPSG:4326"
target = "EPSG:4979"
geocentric = true
geometry = "line"
dimensionality = 3
precision = 2
"#;
    let settings = TransformConfig::from_str(content).unwrap();
    std::assert_eq!(settings.geometry, GeometryType::Line);
    std::assert_eq!(settings.dimensionality, Some(3));
    std::assert_eq!(settings.precision, 2);

    std::assert!(TransformConfig::from_str("[transform]\ngeocentric = \"yes\"").is_err());
    std::assert!(TransformConfig::from_str("[transform]\ndimensionality = 4").is_err());
    std::assert_eq!(TransformConfig::from_str("").unwrap(), TransformConfig::default());
}

#[test]
fn test_describe_crs() {
    let description = DescribeCommand::describe(&Crs::from_string("EPSG:3857").unwrap());
    std::assert!(description.contains("WGS 84 / Pseudo-Mercator"));
    std::assert!(description.contains("web_mercator"));
    std::assert!(description.contains("Geographic:  false"));
    std::assert!(description.contains("Latitude limit"));

    let utm = DescribeCommand::describe(&Crs::from_string("UTM 33N").unwrap());
    std::assert!(utm.contains("32633"));
    std::assert!(utm.contains("transverse_mercator"));
}

#[test]
fn test_log_file_records_summary() {
    let path = std::env::temp_dir().join("featurekit_integration_test.log");
    let logger = Logger::new(path.to_str().unwrap()).unwrap();
    let command = TransformCommand::from_config("-", config("EPSG:4326", "EPSG:3857", false), &logger);

    run(&command, "0,0\n0,89\n");

    let contents = std::fs::read_to_string(&path).unwrap();
    std::assert!(contents.contains("Batch: 2 features, 1 failed"));
    std::assert!(contents.contains("Feature 2 (index 1)"));
}
