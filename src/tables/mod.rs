//! Symbol tables from the TABLES section
//!
//! Each table keeps its entries in an [`IndexMap`] keyed by name, so
//! lookups are by name but iteration preserves file order.

use indexmap::IndexMap;

pub mod dimstyle;
pub mod layer;
pub mod linetype;
pub mod textstyle;
pub mod vport;

pub use dimstyle::DimStyle;
pub use layer::{Layer, LayerFlags};
pub use linetype::LineType;
pub use textstyle::TextStyle;
pub use vport::VPort;

/// All symbol tables of a document.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub layers: IndexMap<String, Layer>,
    pub line_types: IndexMap<String, LineType>,
    pub text_styles: IndexMap<String, TextStyle>,
    pub dim_styles: IndexMap<String, DimStyle>,
    pub viewports: IndexMap<String, VPort>,
}

impl Tables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a layer by name.
    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.get(name)
    }
}
