//! 3DFACE entity

use super::EntityCommon;
use crate::types::Point;
use bitflags::bitflags;

bitflags! {
    /// Invisible edge flags (code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct InvisibleEdgeFlags: i32 {
        const FIRST = 1;
        const SECOND = 2;
        const THIRD = 4;
        const FOURTH = 8;
    }
}

/// A three- or four-sided face.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Face3d {
    pub common: EntityCommon,
    /// Corners (codes 10, 11, 12, 13); triangle when 3 and 4 coincide
    pub corners: [Point; 4],
    pub invisible_edges: InvisibleEdgeFlags,
}

impl Face3d {
    pub fn new() -> Self {
        Self::default()
    }
}
