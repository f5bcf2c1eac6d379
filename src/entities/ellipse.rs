//! ELLIPSE entity

use super::EntityCommon;
use crate::types::Point;

/// An ellipse or elliptical arc.
///
/// The major axis is stored as an endpoint relative to the center; its
/// length is the x radius and its direction the ellipse rotation. The
/// minor radius is `axis_ratio` times the major.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    pub common: EntityCommon,
    /// Center (codes 10/20/30)
    pub center: Point,
    /// Major axis endpoint, relative to the center (codes 11/21/31)
    pub major_axis_end: Point,
    /// Minor-to-major axis ratio (code 40)
    pub axis_ratio: f64,
    /// Start parameter in radians (code 41); 0 for a full ellipse
    pub start_param: f64,
    /// End parameter in radians (code 42); 2π for a full ellipse
    pub end_param: f64,
}

impl Ellipse {
    pub fn new() -> Self {
        Ellipse {
            common: EntityCommon::new(),
            center: Point::ORIGIN,
            major_axis_end: Point::ORIGIN,
            axis_ratio: 1.0,
            start_param: 0.0,
            end_param: std::f64::consts::TAU,
        }
    }
}

impl Default for Ellipse {
    fn default() -> Self {
        Self::new()
    }
}
