//! DXF entity types
//!
//! One struct per supported entity type, each embedding [`EntityCommon`]
//! for the properties every entity shares. The [`Entity`] enum is the
//! closed set of types this parser produces; anything else in the file is
//! skipped with a notification.

use crate::types::{AciColor, Handle, Rgb};
use crate::xdata::ExtendedData;

pub mod arc;
pub mod attdef;
pub mod attrib;
pub mod circle;
pub mod dimension;
pub mod ellipse;
pub mod face3d;
pub mod hatch;
pub mod insert;
pub mod line;
pub mod lwpolyline;
pub mod mtext;
pub mod point;
pub mod polyline;
pub mod solid;
pub mod spline;
pub mod text;

pub use arc::Arc;
pub use attdef::AttDef;
pub use attrib::Attrib;
pub use circle::Circle;
pub use dimension::Dimension;
pub use ellipse::Ellipse;
pub use face3d::{Face3d, InvisibleEdgeFlags};
pub use hatch::{BoundaryEdge, BoundaryLoop, Hatch, LoopTypeFlags, LoopVertex, PatternDefLine};
pub use insert::Insert;
pub use line::Line;
pub use lwpolyline::{LwPolyline, LwPolylineFlags, LwVertex};
pub use mtext::MText;
pub use point::ModelPoint;
pub use polyline::{Polyline, PolylineFlags, Vertex};
pub use solid::Solid;
pub use spline::{Spline, SplineFlags};
pub use text::Text;

/// Properties shared by every entity.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCommon {
    /// Handle (code 5), or a synthesized one when the file omits it
    pub handle: Option<Handle>,
    /// Layer name (code 8)
    pub layer: String,
    /// Raw ACI color index exactly as read (code 62)
    pub color_index: Option<i16>,
    /// Decoded ACI color (sentinels resolved to ByBlock/ByLayer)
    pub color: AciColor,
    /// 24-bit true color (code 420), takes precedence over the index
    pub true_color: Option<Rgb>,
    /// Line type name (code 6)
    pub line_type: Option<String>,
    /// Line type scale (code 48)
    pub line_type_scale: f64,
    /// Visibility (code 60: 0 visible, 1 invisible)
    pub visible: bool,
    /// Paper space flag (code 67)
    pub in_paper_space: bool,
    /// Owner handle (code 330)
    pub owner_handle: Option<String>,
    /// Lineweight in 1/100 mm (code 370)
    pub lineweight: Option<i16>,
    /// XDATA side channel (codes 1000-1071)
    pub extended_data: Option<ExtendedData>,
}

impl EntityCommon {
    pub fn new() -> Self {
        EntityCommon {
            handle: None,
            layer: "0".to_string(),
            color_index: None,
            color: AciColor::ByLayer,
            true_color: None,
            line_type: None,
            line_type_scale: 1.0,
            visible: true,
            in_paper_space: false,
            owner_handle: None,
            lineweight: None,
            extended_data: None,
        }
    }
}

impl Default for EntityCommon {
    fn default() -> Self {
        EntityCommon::new()
    }
}

/// The closed set of entity types produced by the parser.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Arc(Arc),
    AttDef(AttDef),
    Attrib(Attrib),
    Circle(Circle),
    Dimension(Dimension),
    Ellipse(Ellipse),
    Face3d(Face3d),
    Hatch(Hatch),
    Insert(Insert),
    Line(Line),
    LwPolyline(LwPolyline),
    MText(MText),
    Point(ModelPoint),
    Polyline(Polyline),
    Solid(Solid),
    Spline(Spline),
    Text(Text),
}

impl Entity {
    /// Shared properties of the entity.
    pub fn common(&self) -> &EntityCommon {
        match self {
            Entity::Arc(e) => &e.common,
            Entity::AttDef(e) => &e.common,
            Entity::Attrib(e) => &e.common,
            Entity::Circle(e) => &e.common,
            Entity::Dimension(e) => &e.common,
            Entity::Ellipse(e) => &e.common,
            Entity::Face3d(e) => &e.common,
            Entity::Hatch(e) => &e.common,
            Entity::Insert(e) => &e.common,
            Entity::Line(e) => &e.common,
            Entity::LwPolyline(e) => &e.common,
            Entity::MText(e) => &e.common,
            Entity::Point(e) => &e.common,
            Entity::Polyline(e) => &e.common,
            Entity::Solid(e) => &e.common,
            Entity::Spline(e) => &e.common,
            Entity::Text(e) => &e.common,
        }
    }

    pub fn common_mut(&mut self) -> &mut EntityCommon {
        match self {
            Entity::Arc(e) => &mut e.common,
            Entity::AttDef(e) => &mut e.common,
            Entity::Attrib(e) => &mut e.common,
            Entity::Circle(e) => &mut e.common,
            Entity::Dimension(e) => &mut e.common,
            Entity::Ellipse(e) => &mut e.common,
            Entity::Face3d(e) => &mut e.common,
            Entity::Hatch(e) => &mut e.common,
            Entity::Insert(e) => &mut e.common,
            Entity::Line(e) => &mut e.common,
            Entity::LwPolyline(e) => &mut e.common,
            Entity::MText(e) => &mut e.common,
            Entity::Point(e) => &mut e.common,
            Entity::Polyline(e) => &mut e.common,
            Entity::Solid(e) => &mut e.common,
            Entity::Spline(e) => &mut e.common,
            Entity::Text(e) => &mut e.common,
        }
    }

    /// The DXF type name for the entity.
    pub fn type_name(&self) -> &'static str {
        match self {
            Entity::Arc(_) => "ARC",
            Entity::AttDef(_) => "ATTDEF",
            Entity::Attrib(_) => "ATTRIB",
            Entity::Circle(_) => "CIRCLE",
            Entity::Dimension(_) => "DIMENSION",
            Entity::Ellipse(_) => "ELLIPSE",
            Entity::Face3d(_) => "3DFACE",
            Entity::Hatch(_) => "HATCH",
            Entity::Insert(_) => "INSERT",
            Entity::Line(_) => "LINE",
            Entity::LwPolyline(_) => "LWPOLYLINE",
            Entity::MText(_) => "MTEXT",
            Entity::Point(_) => "POINT",
            Entity::Polyline(_) => "POLYLINE",
            Entity::Solid(_) => "SOLID",
            Entity::Spline(_) => "SPLINE",
            Entity::Text(_) => "TEXT",
        }
    }
}
