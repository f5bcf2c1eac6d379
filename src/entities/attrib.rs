//! ATTRIB entity (attribute instance)

use super::EntityCommon;
use crate::types::Point;

/// A filled-in attribute attached to an INSERT.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attrib {
    pub common: EntityCommon,
    /// Attribute tag (code 2)
    pub tag: String,
    /// Attribute value (code 1)
    pub value: String,
    /// Insertion point (codes 10/20/30)
    pub position: Point,
    /// Text height (code 40)
    pub height: f64,
    /// Rotation in degrees (code 50)
    pub rotation: f64,
    /// Attribute flags (code 70); bit 1 means invisible
    pub flags: i32,
}

impl Attrib {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_invisible(&self) -> bool {
        self.flags & 1 != 0
    }
}
