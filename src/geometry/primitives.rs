//! Renderable output primitives
//!
//! The interpreter flattens entities into these. Leaf primitives carry
//! their resolved color; coordinates are world coordinates for top-level
//! entities and block-local inside a [`Primitive::Group`], whose
//! transform places the whole subtree.

use crate::types::{Rgb, Transform2, Vector2};

/// A positioned text run for the renderer's text layout.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub position: Vector2,
    /// Text height in drawing units
    pub height: f64,
    /// Rotation in radians
    pub rotation: f64,
    pub color: Rgb,
}

/// A renderable primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Connected line segments; `closed` joins the last point to the first
    Polyline {
        points: Vec<Vector2>,
        closed: bool,
        color: Rgb,
    },
    /// Indexed triangle list for filled shapes
    Mesh {
        vertices: Vec<Vector2>,
        triangles: Vec<[u32; 3]>,
        color: Rgb,
    },
    /// Isolated points
    Points { points: Vec<Vector2>, color: Rgb },
    /// A text run
    Text(TextRun),
    /// An expanded block reference: children are block-local, placed by
    /// the transform
    Group {
        transform: Transform2,
        children: Vec<Primitive>,
    },
}

impl Primitive {
    /// Number of leaf primitives in this subtree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Primitive::Group { children, .. } => children.iter().map(Primitive::leaf_count).sum(),
            _ => 1,
        }
    }
}
