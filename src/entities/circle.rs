//! CIRCLE entity

use super::EntityCommon;
use crate::types::Point;

/// A full circle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Circle {
    pub common: EntityCommon,
    /// Center (codes 10/20/30)
    pub center: Point,
    /// Radius (code 40)
    pub radius: f64,
}

impl Circle {
    pub fn new() -> Self {
        Circle {
            common: EntityCommon::new(),
            center: Point::ORIGIN,
            radius: 0.0,
        }
    }
}
