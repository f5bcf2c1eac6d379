//! MTEXT entity

use super::EntityCommon;
use crate::types::Point;

/// A multi-line text entity.
///
/// Long text is spread over code 3 continuation chunks followed by a
/// final code 1 chunk; the parser concatenates them in file order into
/// `text`. Inline formatting codes are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MText {
    pub common: EntityCommon,
    /// Full text with continuation chunks joined (codes 3*, 1)
    pub text: String,
    /// Insertion point (codes 10/20/30)
    pub position: Point,
    /// Nominal text height (code 40)
    pub height: f64,
    /// Reference rectangle width (code 41)
    pub width: f64,
    /// Rotation in degrees (code 50)
    pub rotation: f64,
    /// Attachment point 1-9 (code 71)
    pub attachment_point: i16,
    /// Style name (code 7)
    pub style: Option<String>,
}

impl MText {
    pub fn new() -> Self {
        Self::default()
    }
}
