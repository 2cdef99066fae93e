//! Feature geometry container

use crate::coordinate::{BoundingBox, Point};

/// Identifier assigned to a feature by its source
pub type FeatureId = u64;

/// A vector feature made of one or more vertex sequences
///
/// Each part is one ring, line string or point list. Coordinates are only
/// meaningful relative to the frame of the accompanying filter context.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Feature {
    /// Feature identifier
    pub id: FeatureId,
    parts: Vec<Vec<Point>>,
}

impl Feature {
    /// Create an empty feature
    pub fn new(id: FeatureId) -> Self {
        Feature { id, parts: Vec::new() }
    }

    /// Create a feature from existing parts
    pub fn with_parts(id: FeatureId, parts: Vec<Vec<Point>>) -> Self {
        Feature { id, parts }
    }

    /// Append a part
    pub fn add_part(&mut self, part: Vec<Point>) {
        self.parts.push(part);
    }

    pub fn num_parts(&self) -> usize {
        self.parts.len()
    }

    /// Total vertex count over all parts
    pub fn num_points(&self) -> usize {
        self.parts.iter().map(Vec::len).sum()
    }

    pub fn part(&self, index: usize) -> Option<&[Point]> {
        self.parts.get(index).map(Vec::as_slice)
    }

    pub fn parts(&self) -> &[Vec<Point>] {
        &self.parts
    }

    pub fn parts_mut(&mut self) -> impl Iterator<Item = &mut [Point]> {
        self.parts.iter_mut().map(Vec::as_mut_slice)
    }

    /// Extent of all vertices, `None` when the feature has no vertices
    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(self.parts.iter().flatten())
    }
}
