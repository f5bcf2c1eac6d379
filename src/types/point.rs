//! Coordinate type read from DXF group code triplets

use crate::types::Vector2;
use std::fmt;

/// A coordinate read from the group-code stream.
///
/// DXF points are written as an `x` code, the matching `y` code (`x + 10`)
/// and an optional `z` code (`x + 20`). Many producers omit the `z` value
/// for 2D entities, so it is kept as an `Option` rather than defaulted to
/// zero — consumers that care can tell "absent" apart from "0.0".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
}

impl Point {
    /// Create a 2D point (no z value)
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y, z: None }
    }

    /// Create a 3D point
    pub const fn with_z(x: f64, y: f64, z: f64) -> Self {
        Point { x, y, z: Some(z) }
    }

    /// Origin with no z value
    pub const ORIGIN: Point = Point::new(0.0, 0.0);

    /// Project onto the XY plane
    pub fn to_vector2(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }
}

impl From<Vector2> for Point {
    fn from(v: Vector2) -> Self {
        Point::new(v.x, v.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.z {
            Some(z) => write!(f, "({}, {}, {})", self.x, self.y, z),
            None => write!(f, "({}, {})", self.x, self.y),
        }
    }
}
