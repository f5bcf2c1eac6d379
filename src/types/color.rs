//! Color representation for DXF entities
//!
//! Entities carry an AutoCAD Color Index (ACI, code 62) and optionally a
//! 24-bit true color (code 420). ACI indices 0 and 256 are inheritance
//! sentinels (ByBlock / ByLayer); 1-255 address a fixed palette.

use once_cell::sync::Lazy;
use std::fmt;

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Build from a packed `0x00RRGGBB` value (code 420 encoding)
    pub const fn from_u32(v: u32) -> Self {
        Rgb {
            r: ((v >> 16) & 0xFF) as u8,
            g: ((v >> 8) & 0xFF) as u8,
            b: (v & 0xFF) as u8,
        }
    }

    /// Pack into a `0x00RRGGBB` value
    pub const fn to_u32(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// An AutoCAD Color Index value with its inheritance sentinels decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AciColor {
    /// Inherit from the containing block (index 0)
    ByBlock,
    /// Inherit from the entity's layer (index 256)
    #[default]
    ByLayer,
    /// Palette index 1-255
    Index(u8),
}

impl AciColor {
    /// Decode a raw code 62 value.
    ///
    /// Negative indices are how layer records mark themselves as switched
    /// off; the magnitude still names the color.
    pub fn from_index(index: i16) -> Self {
        match index {
            0 => AciColor::ByBlock,
            256 => AciColor::ByLayer,
            1..=255 => AciColor::Index(index as u8),
            _ if index < 0 => AciColor::Index((-index).min(255) as u8),
            _ => AciColor::ByLayer,
        }
    }

    /// Palette RGB for this index, or `None` for the inheritance sentinels.
    pub fn rgb(&self) -> Option<Rgb> {
        match self {
            AciColor::Index(i) => Some(ACI_PALETTE[*i as usize]),
            _ => None,
        }
    }

    /// Raw index value (0 / 256 for the sentinels)
    pub fn index(&self) -> u16 {
        match self {
            AciColor::ByBlock => 0,
            AciColor::ByLayer => 256,
            AciColor::Index(i) => *i as u16,
        }
    }
}

impl fmt::Display for AciColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AciColor::ByBlock => write!(f, "ByBlock"),
            AciColor::ByLayer => write!(f, "ByLayer"),
            AciColor::Index(i) => write!(f, "Index({})", i),
        }
    }
}

/// The fixed 256-entry ACI palette.
///
/// Entries 1-9 and 250-255 are the classic fixed colors; 10-249 follow
/// the standard banded hue/value/saturation layout: ten entries per hue
/// band (24 bands, 15 degrees apart), alternating full and washed-out
/// saturation across five brightness steps. Entry 0 is ByBlock and never
/// looked up directly; it maps to black.
pub static ACI_PALETTE: Lazy<[Rgb; 256]> = Lazy::new(|| {
    let mut table = [Rgb::BLACK; 256];
    table[1] = Rgb::from_u32(0xFF0000);
    table[2] = Rgb::from_u32(0xFFFF00);
    table[3] = Rgb::from_u32(0x00FF00);
    table[4] = Rgb::from_u32(0x00FFFF);
    table[5] = Rgb::from_u32(0x0000FF);
    table[6] = Rgb::from_u32(0xFF00FF);
    table[7] = Rgb::from_u32(0xFFFFFF);
    table[8] = Rgb::from_u32(0x808080);
    table[9] = Rgb::from_u32(0xC0C0C0);

    const VALUE_STEPS: [f64; 5] = [1.0, 0.65, 0.5, 0.35, 0.25];
    for i in 10..=249usize {
        let c = i - 10;
        let hue = (c / 10) as f64 * 15.0;
        let value = VALUE_STEPS[(c % 10) / 2];
        let saturation = if c % 2 == 0 { 1.0 } else { 0.33 };
        table[i] = hsv_to_rgb(hue, saturation, value);
    }

    table[250] = Rgb::from_u32(0x333333);
    table[251] = Rgb::from_u32(0x505050);
    table[252] = Rgb::from_u32(0x696969);
    table[253] = Rgb::from_u32(0x828282);
    table[254] = Rgb::from_u32(0xBEBEBE);
    table[255] = Rgb::from_u32(0xFFFFFF);
    table
});

fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let c = v * s;
    let hp = (h % 360.0) / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = v - c;
    Rgb::new(
        ((r1 + m) * 255.0).round() as u8,
        ((g1 + m) * 255.0).round() as u8,
        ((b1 + m) * 255.0).round() as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_decoding() {
        assert_eq!(AciColor::from_index(0), AciColor::ByBlock);
        assert_eq!(AciColor::from_index(256), AciColor::ByLayer);
        assert_eq!(AciColor::from_index(1), AciColor::Index(1));
    }

    #[test]
    fn test_negative_index_keeps_color() {
        // layer-off marker; magnitude is still the color
        assert_eq!(AciColor::from_index(-3), AciColor::Index(3));
    }

    #[test]
    fn test_primary_palette_entries() {
        assert_eq!(AciColor::Index(1).rgb(), Some(Rgb::from_u32(0xFF0000)));
        assert_eq!(AciColor::Index(5).rgb(), Some(Rgb::from_u32(0x0000FF)));
        assert_eq!(AciColor::Index(7).rgb(), Some(Rgb::from_u32(0xFFFFFF)));
        assert_eq!(AciColor::Index(255).rgb(), Some(Rgb::WHITE));
    }

    #[test]
    fn test_sentinels_have_no_rgb() {
        assert_eq!(AciColor::ByBlock.rgb(), None);
        assert_eq!(AciColor::ByLayer.rgb(), None);
    }

    #[test]
    fn test_rgb_packing() {
        let c = Rgb::from_u32(0x123456);
        assert_eq!((c.r, c.g, c.b), (0x12, 0x34, 0x56));
        assert_eq!(c.to_u32(), 0x123456);
        assert_eq!(c.to_string(), "#123456");
    }

    #[test]
    fn test_full_saturation_band_starts_red() {
        // index 10 is hue 0, full value/saturation
        assert_eq!(ACI_PALETTE[10], Rgb::new(255, 0, 0));
    }
}
