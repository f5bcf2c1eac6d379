//! LWPOLYLINE entity (lightweight 2D polyline with bulges)

use super::EntityCommon;
use bitflags::bitflags;

bitflags! {
    /// LWPOLYLINE flags (code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LwPolylineFlags: i32 {
        const CLOSED = 1;
        const PLINEGEN = 128;
    }
}

/// A vertex in a lightweight polyline.
///
/// `bulge` encodes an arc segment to the next vertex: tan(angle/4) of the
/// included angle, positive counter-clockwise. 0 means a straight segment.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LwVertex {
    pub x: f64,
    pub y: f64,
    /// Bulge to the next vertex (code 42)
    pub bulge: f64,
    /// Segment start width (code 40)
    pub start_width: f64,
    /// Segment end width (code 41)
    pub end_width: f64,
}

impl LwVertex {
    pub fn new(x: f64, y: f64) -> Self {
        LwVertex {
            x,
            y,
            bulge: 0.0,
            start_width: 0.0,
            end_width: 0.0,
        }
    }
}

/// A lightweight (2D) polyline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LwPolyline {
    pub common: EntityCommon,
    pub vertices: Vec<LwVertex>,
    /// Declared vertex count (code 90); informational, actual list wins
    pub declared_vertex_count: Option<i64>,
    pub flags: LwPolylineFlags,
    /// Constant width applying to every segment (code 43)
    pub constant_width: f64,
    /// Elevation (code 38)
    pub elevation: f64,
}

impl LwPolyline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_closed(&self) -> bool {
        self.flags.contains(LwPolylineFlags::CLOSED)
    }
}
