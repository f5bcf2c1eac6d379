//! The parsed drawing model

use crate::entities::Entity;
use crate::notification::Notifications;
use crate::scanner::GroupValue;
use crate::tables::Tables;
use crate::types::Point;
use indexmap::IndexMap;

/// A header variable value: a scalar group or a coordinate.
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderValue {
    Text(String),
    Integer(i64),
    Double(f64),
    Boolean(bool),
    Point(Point),
}

impl From<GroupValue> for HeaderValue {
    fn from(v: GroupValue) -> Self {
        match v {
            GroupValue::Text(s) => HeaderValue::Text(s),
            GroupValue::Integer(i) => HeaderValue::Integer(i),
            GroupValue::Double(d) => HeaderValue::Double(d),
            GroupValue::Boolean(b) => HeaderValue::Boolean(b),
        }
    }
}

/// A block definition: a named group of entities with a base point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    /// Block name (code 2)
    pub name: String,
    /// Secondary name field (code 3), usually identical
    pub name2: String,
    /// Handle (code 5), synthesized when absent
    pub handle: Option<crate::types::Handle>,
    /// Layer of the block record itself (code 8)
    pub layer: String,
    /// Base point subtracted on insertion (codes 10/20/30)
    pub base_point: Point,
    /// Xref path for external references (code 1)
    pub xref_path: String,
    /// Block flags (code 70)
    pub flags: i32,
    /// Paper space flag (code 67)
    pub in_paper_space: bool,
    /// Owner handle (code 330)
    pub owner_handle: Option<String>,
    /// Entities in block-local coordinates
    pub entities: Vec<Entity>,
}

impl Block {
    pub fn new(name: impl Into<String>) -> Self {
        Block {
            name: name.into(),
            ..Block::default()
        }
    }
}

/// The complete parsed drawing.
#[derive(Debug, Clone, Default)]
pub struct DxfDocument {
    /// HEADER variables, keyed by `$NAME`
    pub header: IndexMap<String, HeaderValue>,
    /// Symbol tables (layers, line types, styles, ...)
    pub tables: Tables,
    /// Block definitions, keyed by name
    pub blocks: IndexMap<String, Block>,
    /// Top-level (non-block) entities in file order
    pub entities: Vec<Entity>,
    /// Non-fatal diagnostics collected during the parse
    pub notifications: Notifications,
}

impl DxfDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// A header variable, if the file declared it.
    pub fn header_var(&self, name: &str) -> Option<&HeaderValue> {
        self.header.get(name)
    }

    /// A block definition by name.
    pub fn block(&self, name: &str) -> Option<&Block> {
        self.blocks.get(name)
    }

    /// Entities of a given DXF type name.
    pub fn entities_of_type<'a>(&'a self, type_name: &'a str) -> impl Iterator<Item = &'a Entity> {
        self.entities
            .iter()
            .filter(move |e| e.type_name() == type_name)
    }
}
