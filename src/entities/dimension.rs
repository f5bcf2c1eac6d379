//! DIMENSION entity

use super::EntityCommon;
use crate::types::Point;

/// A dimension annotation.
///
/// Dimensions reference an anonymous block (code 2) holding their
/// pre-rendered geometry; the interpreter expands that block like an
/// INSERT. Only rotated/aligned dimensions (type 0 in the low bits of
/// code 70) are expanded; other kinds are carried in the document but
/// skipped by the interpreter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dimension {
    pub common: EntityCommon,
    /// Name of the anonymous geometry block (code 2)
    pub block_name: String,
    /// Definition point (codes 10/20/30)
    pub definition_point: Point,
    /// Middle point of the dimension text (codes 11/21/31)
    pub text_midpoint: Point,
    /// Dimension type (code 70); low 3 bits select the kind
    pub dimension_type: i32,
    /// Explicit text override (code 1)
    pub text: Option<String>,
    /// Measured value (code 42), when the writer recorded it
    pub actual_measurement: Option<f64>,
}

impl Dimension {
    pub fn new() -> Self {
        Self::default()
    }

    /// Kind selector from the low bits of code 70.
    pub fn kind(&self) -> i32 {
        self.dimension_type & 0x07
    }
}
