//! POLYLINE entity with its VERTEX children
//!
//! The heavyweight polyline is a container entity: a `0/POLYLINE` header
//! followed by `0/VERTEX` entities, terminated by `0/SEQEND`. The parser
//! folds the children into the [`Polyline`] record.

use super::EntityCommon;
use crate::types::Point;
use bitflags::bitflags;

bitflags! {
    /// POLYLINE flags (code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PolylineFlags: i32 {
        const CLOSED = 1;
        const CURVE_FIT = 2;
        const SPLINE_FIT = 4;
        const IS_3D = 8;
        const IS_3D_MESH = 16;
        const MESH_CLOSED_N = 32;
        const POLYFACE_MESH = 64;
        const CONTINUOUS_PATTERN = 128;
    }
}

/// A vertex of a heavyweight polyline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vertex {
    pub location: Point,
    /// Bulge to the next vertex (code 42)
    pub bulge: f64,
    /// Vertex flags (code 70)
    pub flags: i32,
}

impl Vertex {
    pub fn new(location: Point) -> Self {
        Vertex {
            location,
            bulge: 0.0,
            flags: 0,
        }
    }
}

/// A heavyweight polyline with its collected vertices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    pub common: EntityCommon,
    pub vertices: Vec<Vertex>,
    pub flags: PolylineFlags,
    /// Default start/end widths (codes 40/41)
    pub start_width: f64,
    pub end_width: f64,
}

impl Polyline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_closed(&self) -> bool {
        self.flags.contains(PolylineFlags::CLOSED)
    }
}
