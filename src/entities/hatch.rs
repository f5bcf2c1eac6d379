//! HATCH entity
//!
//! The hatch body contains count-driven sub-records: code 91 announces
//! the boundary loop count, each loop is either a polyline record or an
//! edge list, code 78 announces pattern definition lines and code 98
//! announces seed points. The parser consumes exactly the announced
//! records and returns to ordinary code dispatch afterwards.

use super::EntityCommon;
use crate::types::Point;
use bitflags::bitflags;

bitflags! {
    /// Boundary loop type flags (code 92)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LoopTypeFlags: i32 {
        const EXTERNAL = 1;
        const POLYLINE = 2;
        const DERIVED = 4;
        const TEXTBOX = 8;
        const OUTERMOST = 16;
    }
}

/// A vertex of a polyline-type boundary loop.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LoopVertex {
    pub x: f64,
    pub y: f64,
    pub bulge: f64,
}

/// One edge of an edge-list boundary loop (code 72 selects the kind).
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryEdge {
    /// Edge type 1
    Line { start: Point, end: Point },
    /// Edge type 2; angles in degrees
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counter_clockwise: bool,
    },
    /// Edge type 3; angles in degrees
    Ellipse {
        center: Point,
        major_axis_end: Point,
        axis_ratio: f64,
        start_angle: f64,
        end_angle: f64,
        counter_clockwise: bool,
    },
    /// Edge type 4
    Spline {
        degree: usize,
        rational: bool,
        periodic: bool,
        knots: Vec<f64>,
        control_points: Vec<Point>,
        weights: Vec<f64>,
    },
}

/// A single boundary loop: a polyline record or an edge list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundaryLoop {
    pub loop_type: LoopTypeFlags,
    /// Present when the POLYLINE flag is set
    pub polyline_vertices: Option<Vec<LoopVertex>>,
    /// Whether the polyline sub-record declared itself closed (code 73)
    pub polyline_closed: bool,
    /// Present for edge-list loops
    pub edges: Vec<BoundaryEdge>,
}

/// One line family of a hatch pattern definition (after code 78).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatternDefLine {
    /// Line angle in degrees (code 53)
    pub angle: f64,
    /// Base point (codes 43/44)
    pub base: Point,
    /// Offset to the next line (codes 45/46)
    pub offset: Point,
    /// Dash lengths (code 49, repeated per code 79 count)
    pub dashes: Vec<f64>,
}

/// A hatch with its boundary description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hatch {
    pub common: EntityCommon,
    /// Pattern name (code 2)
    pub pattern_name: String,
    /// Solid fill flag (code 70)
    pub is_solid: bool,
    /// Associative flag (code 71)
    pub is_associative: bool,
    pub boundary_loops: Vec<BoundaryLoop>,
    pub pattern_lines: Vec<PatternDefLine>,
    /// Seed points (codes 10/20 after code 98)
    pub seed_points: Vec<Point>,
}

impl Hatch {
    pub fn new() -> Self {
        Self::default()
    }
}
