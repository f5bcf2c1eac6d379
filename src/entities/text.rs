//! TEXT entity

use super::EntityCommon;
use crate::types::Point;

/// A single-line text entity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Text {
    pub common: EntityCommon,
    /// Text value (code 1)
    pub value: String,
    /// Insertion point (codes 10/20/30)
    pub position: Point,
    /// Second alignment point (codes 11/21/31), meaningful when aligned
    pub alignment_point: Option<Point>,
    /// Text height (code 40)
    pub height: f64,
    /// Rotation in degrees (code 50)
    pub rotation: f64,
    /// Horizontal justification (code 72)
    pub horizontal_alignment: i16,
    /// Vertical justification (code 73)
    pub vertical_alignment: i16,
    /// Style name (code 7)
    pub style: Option<String>,
}

impl Text {
    pub fn new() -> Self {
        Self::default()
    }
}
