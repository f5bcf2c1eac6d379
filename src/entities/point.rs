//! POINT entity

use super::EntityCommon;
use crate::types::Point;

/// A single point in model space.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelPoint {
    pub common: EntityCommon,
    /// Location (codes 10/20/30)
    pub location: Point,
}

impl ModelPoint {
    pub fn new() -> Self {
        ModelPoint {
            common: EntityCommon::new(),
            location: Point::ORIGIN,
        }
    }
}
