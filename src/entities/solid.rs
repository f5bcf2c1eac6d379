//! SOLID entity (also covers TRACE)

use super::EntityCommon;
use crate::types::Point;

/// A filled quadrilateral.
///
/// TRACE entities carry the same record layout and are parsed into this
/// type as well. Corners 3 and 4 are stored in the file's native
/// (Z-order) sequence; for a triangle the fourth corner repeats the
/// third.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Solid {
    pub common: EntityCommon,
    /// Corners (codes 10, 11, 12, 13)
    pub corners: [Point; 4],
}

impl Solid {
    pub fn new() -> Self {
        Self::default()
    }
}
