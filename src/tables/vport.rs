//! VPORT table entry

use crate::types::Point;

/// A viewport configuration record.
#[derive(Debug, Clone, PartialEq)]
pub struct VPort {
    /// Viewport name, usually "*ACTIVE" (code 2)
    pub name: String,
    /// Lower-left corner (codes 10/20)
    pub lower_left: Point,
    /// Upper-right corner (codes 11/21)
    pub upper_right: Point,
    /// View center (codes 12/22)
    pub center: Point,
    /// View height (code 40)
    pub height: f64,
    /// Width/height aspect ratio (code 41)
    pub aspect_ratio: f64,
}

impl VPort {
    pub fn new() -> Self {
        VPort {
            name: String::new(),
            lower_left: Point::ORIGIN,
            upper_right: Point::new(1.0, 1.0),
            center: Point::ORIGIN,
            height: 1.0,
            aspect_ratio: 1.0,
        }
    }
}

impl Default for VPort {
    fn default() -> Self {
        Self::new()
    }
}
