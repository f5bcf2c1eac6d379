//! DIMSTYLE table entry

/// A dimension style record.
///
/// Only the handful of variables that affect geometry scale are kept;
/// dimensions carry their rendered geometry in anonymous blocks, so most
/// style variables never influence this pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct DimStyle {
    /// Style name (code 2)
    pub name: String,
    /// Overall scale factor, DIMSCALE (code 40)
    pub scale: f64,
    /// Arrow size, DIMASZ (code 41)
    pub arrow_size: f64,
    /// Text height, DIMTXT (code 140)
    pub text_height: f64,
}

impl DimStyle {
    pub fn new() -> Self {
        DimStyle {
            name: String::new(),
            scale: 1.0,
            arrow_size: 0.18,
            text_height: 0.18,
        }
    }
}

impl Default for DimStyle {
    fn default() -> Self {
        Self::new()
    }
}
