//! SPLINE entity

use super::EntityCommon;
use crate::types::Point;
use bitflags::bitflags;

bitflags! {
    /// SPLINE flags (code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SplineFlags: i32 {
        const CLOSED = 1;
        const PERIODIC = 2;
        const RATIONAL = 4;
        const PLANAR = 8;
        const LINEAR = 16;
    }
}

/// A NURBS curve.
///
/// Control points arrive as repeated code 10 triplets, knots as repeated
/// code 40 groups and weights as repeated code 41 groups. The declared
/// counts (codes 72-74) are informational; the actual lists win.
#[derive(Debug, Clone, PartialEq)]
pub struct Spline {
    pub common: EntityCommon,
    pub flags: SplineFlags,
    /// Degree of the curve (code 71)
    pub degree: usize,
    /// Knot vector (code 40, repeated)
    pub knots: Vec<f64>,
    /// Control points (codes 10/20/30, repeated)
    pub control_points: Vec<Point>,
    /// Fit points (codes 11/21/31, repeated)
    pub fit_points: Vec<Point>,
    /// Weights for rational splines (code 41, repeated)
    pub weights: Vec<f64>,
}

impl Spline {
    pub fn new() -> Self {
        Spline {
            common: EntityCommon::new(),
            flags: SplineFlags::default(),
            degree: 3,
            knots: Vec::new(),
            control_points: Vec::new(),
            fit_points: Vec::new(),
            weights: Vec::new(),
        }
    }

    pub fn is_rational(&self) -> bool {
        self.flags.contains(SplineFlags::RATIONAL) && !self.weights.is_empty()
    }
}

impl Default for Spline {
    fn default() -> Self {
        Self::new()
    }
}
