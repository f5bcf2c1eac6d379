//! ARC entity

use super::EntityCommon;
use crate::types::Point;

/// A circular arc. Angles are in degrees, counter-clockwise from the
/// positive X axis, as stored in the file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arc {
    pub common: EntityCommon,
    /// Center (codes 10/20/30)
    pub center: Point,
    /// Radius (code 40)
    pub radius: f64,
    /// Start angle in degrees (code 50)
    pub start_angle: f64,
    /// End angle in degrees (code 51)
    pub end_angle: f64,
}

impl Arc {
    pub fn new() -> Self {
        Arc {
            common: EntityCommon::new(),
            center: Point::ORIGIN,
            radius: 0.0,
            start_angle: 0.0,
            end_angle: 360.0,
        }
    }
}
