//! Plain text feature encoding used by the command line tool
//!
//! One feature per line. Parts are separated by `|`, vertices by `;` and
//! vertex components by `,`. Blank lines and `#` comments are skipped.
//!
//! ```text
//! # a two-part line feature
//! 0,0;1,1|2,2,10;3,3,10
//! ```

use std::io::BufRead;

use crate::coordinate::Point;
use crate::errors::{FeatureError, FeatureResult};
use crate::feature::Feature;

/// Features read from text plus the widest vertex seen
#[derive(Debug, Default)]
pub struct ParsedFeatures {
    pub features: Vec<Feature>,
    /// 3 if any vertex had a height component, otherwise 2
    pub dimensionality: u32,
}

/// Read features from a buffered reader
///
/// Feature ids are the 1-based line numbers they were read from.
pub fn parse_features<R: BufRead>(reader: R) -> FeatureResult<ParsedFeatures> {
    let mut parsed = ParsedFeatures {
        features: Vec::new(),
        dimensionality: 2,
    };

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut feature = Feature::new(line_number as u64);
        for part_str in trimmed.split('|') {
            let mut part = Vec::new();
            for vertex_str in part_str.split(';') {
                let (point, dims) = parse_vertex(vertex_str, line_number)?;
                parsed.dimensionality = parsed.dimensionality.max(dims);
                part.push(point);
            }
            feature.add_part(part);
        }
        parsed.features.push(feature);
    }

    Ok(parsed)
}

fn parse_vertex(vertex_str: &str, line: usize) -> FeatureResult<(Point, u32)> {
    let values = vertex_str.split(',')
        .map(|c| c.trim().parse::<f64>())
        .collect::<Result<Vec<f64>, _>>()
        .map_err(|e| FeatureError::ParseError {
            line,
            message: format!("Invalid vertex '{}': {}", vertex_str.trim(), e),
        })?;

    match values.as_slice() {
        [x, y] => Ok((Point::new(*x, *y), 2)),
        [x, y, z] => Ok((Point::new_3d(*x, *y, *z), 3)),
        _ => Err(FeatureError::ParseError {
            line,
            message: format!("Vertex '{}' must have 2 or 3 components", vertex_str.trim()),
        }),
    }
}

/// Encode a feature as one text line
///
/// # Arguments
/// * `feature` - Feature to encode
/// * `dimensionality` - 2 drops the height component
/// * `precision` - Digits after the decimal point
pub fn format_feature(feature: &Feature, dimensionality: u32, precision: usize) -> String {
    feature.parts().iter()
        .map(|part| {
            part.iter()
                .map(|p| {
                    if dimensionality >= 3 {
                        format!("{:.*},{:.*},{:.*}", precision, p.x, precision, p.y, precision, p.z)
                    } else {
                        format!("{:.*},{:.*}", precision, p.x, precision, p.y)
                    }
                })
                .collect::<Vec<_>>()
                .join(";")
        })
        .collect::<Vec<_>>()
        .join("|")
}
