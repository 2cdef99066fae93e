//! Filter context passed between pipeline stages

use std::sync::Arc;

use super::profile::FeatureProfile;
use crate::coordinate::BoundingBox;

/// Per-batch metadata that travels alongside features
///
/// Filters never modify the context they receive; they return a new one
/// describing their output.
#[derive(Debug, Clone)]
pub struct FilterContext {
    profile: Arc<FeatureProfile>,
    geocentric: bool,
    extent: Option<BoundingBox>,
}

impl FilterContext {
    /// Context for features expressed in the profile's frame
    pub fn new(profile: FeatureProfile) -> Self {
        FilterContext {
            profile: Arc::new(profile),
            geocentric: false,
            extent: None,
        }
    }

    pub fn profile(&self) -> &FeatureProfile {
        &self.profile
    }

    /// True when vertices are geocentric (ECEF) coordinates
    pub fn is_geocentric(&self) -> bool {
        self.geocentric
    }

    /// Extent of the batch in the context's frame, if known
    pub fn extent(&self) -> Option<&BoundingBox> {
        self.extent.as_ref()
    }

    /// Copy with a different profile
    pub fn with_profile(&self, profile: FeatureProfile) -> Self {
        FilterContext {
            profile: Arc::new(profile),
            ..self.clone()
        }
    }

    /// Copy with a different geocentric flag
    pub fn with_geocentric(&self, geocentric: bool) -> Self {
        FilterContext {
            geocentric,
            ..self.clone()
        }
    }

    /// Copy with a different extent
    pub fn with_extent(&self, extent: Option<BoundingBox>) -> Self {
        FilterContext {
            extent,
            ..self.clone()
        }
    }
}
