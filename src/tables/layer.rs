//! LAYER table entry

use crate::types::AciColor;
use bitflags::bitflags;

bitflags! {
    /// Layer state flags (code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LayerFlags: i32 {
        const FROZEN = 1;
        const FROZEN_IN_NEW_VIEWPORTS = 2;
        const LOCKED = 4;
    }
}

/// A layer record.
///
/// A negative color index (code 62) is the file's way of marking the
/// layer switched off; the magnitude still names the layer's color.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// Layer name (code 2)
    pub name: String,
    /// Raw color index as read, sign preserved (code 62)
    pub color_index: i16,
    /// Decoded color (magnitude of the index)
    pub color: AciColor,
    /// Line type name (code 6)
    pub line_type: String,
    pub flags: LayerFlags,
    /// Lineweight in 1/100 mm (code 370)
    pub lineweight: Option<i16>,
}

impl Layer {
    pub fn new() -> Self {
        Layer {
            name: String::new(),
            color_index: 7,
            color: AciColor::Index(7),
            line_type: "CONTINUOUS".to_string(),
            flags: LayerFlags::default(),
            lineweight: None,
        }
    }

    /// Whether entities on this layer should be drawn.
    pub fn is_visible(&self) -> bool {
        self.color_index >= 0 && !self.flags.contains(LayerFlags::FROZEN)
    }
}

impl Default for Layer {
    fn default() -> Self {
        Self::new()
    }
}
