//! Feature filters
//!
//! A filter consumes a batch of features together with the context that
//! describes them, modifies the features in place and returns the context
//! for the next stage.

mod transform_filter;

pub use self::transform_filter::TransformFilter;

use crate::errors::FeatureError;
use crate::feature::{Feature, FeatureId, FilterContext};

/// A stage of a feature processing chain
pub trait FeatureFilter {
    /// Process every feature of a batch
    ///
    /// # Arguments
    /// * `features` - Features to modify in place
    /// * `context` - Description of the features' current frame
    ///
    /// # Returns
    /// The context describing the output, plus any per-feature failures
    fn push(&self, features: &mut [Feature], context: &FilterContext) -> FilterOutput;
}

/// A feature that a filter could not process
#[derive(Debug)]
pub struct FeatureFailure {
    /// Position of the feature in the batch
    pub index: usize,
    /// Identifier of the feature
    pub feature_id: FeatureId,
    /// Why the feature failed
    pub error: FeatureError,
}

/// Result of running a filter over a batch
#[derive(Debug)]
pub struct FilterOutput {
    /// Context describing the filtered features
    pub context: FilterContext,
    /// Features that failed, in batch order
    pub failures: Vec<FeatureFailure>,
}

impl FilterOutput {
    /// True when every feature of the batch succeeded
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Identifiers of the failed features
    pub fn failed_ids(&self) -> Vec<FeatureId> {
        self.failures.iter().map(|f| f.feature_id).collect()
    }

    /// Whether the feature at `index` failed
    pub fn has_failed(&self, index: usize) -> bool {
        self.failures.iter().any(|f| f.index == index)
    }
}
