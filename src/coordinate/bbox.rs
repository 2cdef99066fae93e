//! Bounding box structure for feature extents

use super::point::Point;

/// An axis-aligned 3D bounding box in a coordinate system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum X coordinate
    pub min_x: f64,
    /// Minimum Y coordinate
    pub min_y: f64,
    /// Minimum Z coordinate
    pub min_z: f64,
    /// Maximum X coordinate
    pub max_x: f64,
    /// Maximum Y coordinate
    pub max_y: f64,
    /// Maximum Z coordinate
    pub max_z: f64,
}

impl BoundingBox {
    /// Create a new 2D bounding box with a flat Z range
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        BoundingBox {
            min_x,
            min_y,
            min_z: 0.0,
            max_x,
            max_y,
            max_z: 0.0,
        }
    }

    /// Degenerate box covering a single point
    pub fn from_point(point: &Point) -> Self {
        BoundingBox {
            min_x: point.x,
            min_y: point.y,
            min_z: point.z,
            max_x: point.x,
            max_y: point.y,
            max_z: point.z,
        }
    }

    /// Smallest box covering every point, or `None` for an empty iterator
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bbox = BoundingBox::from_point(first);
        for point in iter {
            bbox.expand_to_include(point);
        }
        Some(bbox)
    }

    /// Grow the box so it contains `point`
    pub fn expand_to_include(&mut self, point: &Point) {
        self.min_x = self.min_x.min(point.x);
        self.min_y = self.min_y.min(point.y);
        self.min_z = self.min_z.min(point.z);
        self.max_x = self.max_x.max(point.x);
        self.max_y = self.max_y.max(point.y);
        self.max_z = self.max_z.max(point.z);
    }

    /// Smallest box covering both boxes
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            min_z: self.min_z.min(other.min_z),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
            max_z: self.max_z.max(other.max_z),
        }
    }

    /// Get the width of the bounding box
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Get the height of the bounding box
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Get the center point of the bounding box
    pub fn center(&self) -> Point {
        Point::new_3d(
            self.min_x + self.width() / 2.0,
            self.min_y + self.height() / 2.0,
            (self.min_z + self.max_z) / 2.0,
        )
    }

    /// Check if this bounding box contains a point
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.min_x && point.x <= self.max_x &&
            point.y >= self.min_y && point.y <= self.max_y &&
            point.z >= self.min_z && point.z <= self.max_z
    }
}
