//! Reprojection and geocentric conversion of feature geometry

use log::{debug, info, warn};

use super::{FeatureFailure, FeatureFilter, FilterOutput};
use crate::coordinate::{BoundingBox, Point, SpatialReference, SrsRef};
use crate::errors::{FeatureError, FeatureResult};
use crate::feature::{Feature, FeatureProfile, FilterContext};

/// Filter that moves features into a target reference system
///
/// Every part of a feature is reprojected from the context frame into the
/// output frame. When `make_geocentric` is set and the output frame is
/// geographic, the reprojected (longitude, latitude, height) vertices are
/// then converted to geocentric coordinates on the output ellipsoid.
#[derive(Debug, Clone)]
pub struct TransformFilter {
    output_srs: SrsRef,
    make_geocentric: bool,
}

impl TransformFilter {
    /// Create a new transform filter
    ///
    /// # Arguments
    /// * `output_srs` - Reference system to transform into
    /// * `make_geocentric` - Convert geographic output to geocentric coordinates
    pub fn new(output_srs: SrsRef, make_geocentric: bool) -> Self {
        TransformFilter {
            output_srs,
            make_geocentric,
        }
    }

    pub fn output_srs(&self) -> &SrsRef {
        &self.output_srs
    }

    pub fn makes_geocentric(&self) -> bool {
        self.make_geocentric
    }

    /// Whether output vertices end up in geocentric space
    pub fn produces_geocentric(&self) -> bool {
        self.make_geocentric && self.output_srs.is_geographic()
    }

    /// Transform every part of one feature in place
    ///
    /// Processing stops at the first part that fails. Parts before it stay
    /// transformed, the failing part and those after it are untouched.
    pub fn push_feature(&self, feature: &mut Feature, context: &FilterContext) -> FeatureResult<()> {
        let source_srs = context.profile().srs();

        for (index, part) in feature.parts_mut().enumerate() {
            let mut vertices = part.to_vec();

            if context.is_geocentric() {
                Self::geocentric_to_geodetic(&**source_srs, &mut vertices)?;
            }

            self.output_srs.transform_points(&**source_srs, &mut vertices)?;

            if self.produces_geocentric() {
                self.geodetic_to_geocentric(&mut vertices)?;
            }

            part.copy_from_slice(&vertices);
            debug!("Transformed part {} ({} vertices)", index, vertices.len());
        }

        Ok(())
    }

    /// ECEF to (longitude, latitude, height) on the source ellipsoid
    fn geocentric_to_geodetic(source_srs: &dyn SpatialReference, vertices: &mut [Point]) -> FeatureResult<()> {
        let ellipsoid = source_srs.ellipsoid()
            .ok_or_else(|| FeatureError::NotGeographic(source_srs.name()))?;

        for vertex in vertices.iter_mut() {
            let (lat, lon, height) = ellipsoid.geocentric_to_geodetic(vertex.x, vertex.y, vertex.z);
            vertex.set(lon.to_degrees(), lat.to_degrees(), height);
        }
        Ok(())
    }

    fn geodetic_to_geocentric(&self, vertices: &mut [Point]) -> FeatureResult<()> {
        let ellipsoid = self.output_srs.ellipsoid()
            .ok_or_else(|| FeatureError::NotGeographic(self.output_srs.name()))?;

        for vertex in vertices.iter_mut() {
            *vertex = ellipsoid.geodetic_to_geocentric(
                vertex.y.to_radians(),
                vertex.x.to_radians(),
                vertex.z,
            );
        }
        Ok(())
    }
}

impl FeatureFilter for TransformFilter {
    fn push(&self, features: &mut [Feature], context: &FilterContext) -> FilterOutput {
        let mut failures = Vec::new();
        let mut extent: Option<BoundingBox> = None;

        for (index, feature) in features.iter_mut().enumerate() {
            match self.push_feature(feature, context) {
                Ok(()) => {
                    if let Some(bounds) = feature.bounds() {
                        extent = Some(match extent {
                            Some(current) => current.union(&bounds),
                            None => bounds,
                        });
                    }
                },
                Err(error) => {
                    warn!("Feature {} failed to transform: {}", feature.id, error);
                    failures.push(FeatureFailure {
                        index,
                        feature_id: feature.id,
                        error,
                    });
                },
            }
        }

        info!("Transformed {} of {} features from {} to {}",
              features.len() - failures.len(), features.len(),
              context.profile().srs().name(), self.output_srs.name());

        let input_profile = context.profile();
        let profile = FeatureProfile::new(
            self.output_srs.clone(),
            input_profile.geometry_type(),
            input_profile.dimensionality(),
            input_profile.is_multi_geometry(),
        );

        let output_context = context
            .with_profile(profile)
            .with_geocentric(self.produces_geocentric())
            .with_extent(extent);

        FilterOutput {
            context: output_context,
            failures,
        }
    }
}
