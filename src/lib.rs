//! # dxf-scene
//!
//! A DXF drawing parser and 2D geometry interpreter.
//!
//! The pipeline has two stages:
//!
//! 1. **Parse** — [`parser::parse`] turns DXF text into a
//!    [`DxfDocument`]: header variables, symbol tables, block
//!    definitions and entities. Unknown sections, entity types and group
//!    codes are tolerated and reported through the document's
//!    [`Notifications`]; only a desynchronized token stream aborts.
//! 2. **Interpret** — [`geometry::interpret`] tessellates the document's
//!    model-space entities into renderable [`Primitive`] values:
//!    polylines for curves, triangle meshes for filled shapes, text runs
//!    and nested groups for expanded block references.
//!
//! ```no_run
//! use dxf_scene::{geometry, parser, InterpreterConfig, Rgb};
//!
//! # fn main() -> dxf_scene::Result<()> {
//! let text = std::fs::read_to_string("drawing.dxf")?;
//! let doc = parser::parse(&text)?;
//! let config = InterpreterConfig::new(Rgb::BLACK).with_font("default");
//! let primitives = geometry::interpret(&doc, &config)?;
//! # let _ = primitives;
//! # Ok(())
//! # }
//! ```

pub mod document;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod notification;
pub mod parser;
pub mod scanner;
pub mod tables;
pub mod types;
pub mod xdata;

pub use document::{Block, DxfDocument, HeaderValue};
pub use error::{DxfError, Result};
pub use geometry::{interpret, Interpreter, InterpreterConfig, Primitive, TextRun};
pub use notification::{Notification, NotificationKind, Notifications};
pub use parser::parse;
pub use scanner::{Group, GroupScanner, GroupValue};
pub use types::{AciColor, Handle, Point, Rgb, Transform2, Vector2};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_present() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_minimal_document_roundtrip() {
        let doc = parse("0\nSECTION\n2\nENTITIES\n0\nENDSEC\n0\nEOF\n").unwrap();
        assert!(doc.entities.is_empty());
        assert!(doc.notifications.is_empty());
    }
}
