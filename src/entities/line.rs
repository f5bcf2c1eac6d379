//! LINE entity

use super::EntityCommon;
use crate::types::Point;

/// A straight line segment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Line {
    pub common: EntityCommon,
    /// Start point (codes 10/20/30)
    pub start: Point,
    /// End point (codes 11/21/31)
    pub end: Point,
}

impl Line {
    pub fn new() -> Self {
        Line {
            common: EntityCommon::new(),
            start: Point::ORIGIN,
            end: Point::ORIGIN,
        }
    }
}
