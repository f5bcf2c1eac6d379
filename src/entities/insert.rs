//! INSERT entity (block reference)

use super::EntityCommon;
use crate::types::Point;

/// A reference to a block, placed with translation, rotation and scale.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub common: EntityCommon,
    /// Referenced block name (code 2)
    pub name: String,
    /// Insertion point (codes 10/20/30)
    pub position: Point,
    /// X scale factor (code 41)
    pub x_scale: f64,
    /// Y scale factor (code 42)
    pub y_scale: f64,
    /// Rotation in degrees (code 50)
    pub rotation: f64,
    /// Column/row repeat counts and spacing (codes 70/71, 44/45)
    pub column_count: i32,
    pub row_count: i32,
    pub column_spacing: f64,
    pub row_spacing: f64,
}

impl Insert {
    pub fn new() -> Self {
        Insert {
            common: EntityCommon::new(),
            name: String::new(),
            position: Point::ORIGIN,
            x_scale: 1.0,
            y_scale: 1.0,
            rotation: 0.0,
            column_count: 1,
            row_count: 1,
            column_spacing: 0.0,
            row_spacing: 0.0,
        }
    }
}

impl Default for Insert {
    fn default() -> Self {
        Self::new()
    }
}
