//! STYLE table entry

/// A text style record.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Style name (code 2)
    pub name: String,
    /// Primary font file (code 3)
    pub font_file: String,
    /// Big-font file for asian encodings (code 4)
    pub big_font_file: String,
    /// Fixed height, 0 when not fixed (code 40)
    pub fixed_height: f64,
    /// Width factor (code 41)
    pub width_factor: f64,
    /// Oblique angle in degrees (code 50)
    pub oblique_angle: f64,
}

impl TextStyle {
    pub fn new() -> Self {
        TextStyle {
            name: String::new(),
            font_file: String::new(),
            big_font_file: String::new(),
            fixed_height: 0.0,
            width_factor: 1.0,
            oblique_angle: 0.0,
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new()
    }
}
