//! Point structure for representing vertices

/// A vertex in a coordinate system
///
/// Components are (longitude, latitude, height) in geographic systems,
/// (easting, northing, height) in projected systems and (x, y, z) in
/// geocentric space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate (longitude in geographic systems)
    pub x: f64,
    /// Y coordinate (latitude in geographic systems)
    pub y: f64,
    /// Z coordinate (height above the ellipsoid, 0.0 for 2D data)
    pub z: f64,
}

impl Point {
    /// Create a new 2D point at zero height
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y, z: 0.0 }
    }

    /// Create a new 3D point
    pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Point { x, y, z }
    }

    /// Check that every component is a finite number
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Overwrite all three components
    pub fn set(&mut self, x: f64, y: f64, z: f64) {
        self.x = x;
        self.y = y;
        self.z = z;
    }
}

impl From<(f64, f64, f64)> for Point {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Point::new_3d(x, y, z)
    }
}
