//! Geometry interpretation
//!
//! Turns a parsed [`DxfDocument`] into flat renderable primitives:
//! curves are tessellated into polylines, filled shapes into triangle
//! meshes, text into positioned runs, and block references into nested
//! groups carrying their placement transform. Top-level entities are
//! independent of each other, so the pass runs in parallel across them.

use std::sync::Mutex;

use ahash::{AHashMap, AHashSet};
use rayon::prelude::*;

use crate::document::DxfDocument;
use crate::entities::{
    Arc, Attrib, BoundaryEdge, BoundaryLoop, Circle, Dimension, Ellipse, Entity, EntityCommon,
    Face3d, Hatch, Insert, Line, LwPolyline, MText, ModelPoint, Polyline, Solid, Spline, Text,
};
use crate::error::{DxfError, Result};
use crate::types::{Rgb, Transform2, Vector2};

pub mod bspline;
pub mod primitives;

pub use primitives::{Primitive, TextRun};

/// Segments used to tessellate full circles and arcs.
const CIRCLE_SEGMENTS: usize = 32;
/// Samples used along an ellipse.
const ELLIPSE_SAMPLES: usize = 50;
/// Block references deeper than this abort the expansion.
pub const MAX_BLOCK_DEPTH: usize = 64;

/// Interpreter configuration.
///
/// The contrast color defaults to white on a black background and black
/// on anything else, and substitutes for any resolved color that would
/// vanish against the background.
#[derive(Debug, Clone)]
pub struct InterpreterConfig {
    pub bg_color: Rgb,
    pub contrast_color: Rgb,
    /// Font resource identifier; text runs are only produced when one is
    /// configured
    pub font: Option<String>,
}

impl InterpreterConfig {
    pub fn new(bg_color: Rgb) -> Self {
        let contrast_color = if bg_color == Rgb::BLACK {
            Rgb::WHITE
        } else {
            Rgb::BLACK
        };
        InterpreterConfig {
            bg_color,
            contrast_color,
            font: None,
        }
    }

    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        InterpreterConfig::new(Rgb::BLACK)
    }
}

/// Interpret every model-space entity of a document.
pub fn interpret(doc: &DxfDocument, config: &InterpreterConfig) -> Result<Vec<Primitive>> {
    Interpreter::new(doc, config.clone()).interpret()
}

/// Per-chain block expansion state: the names currently being expanded
/// and the nesting depth.
struct ExpandState {
    visited: AHashSet<String>,
    depth: usize,
}

impl ExpandState {
    fn new() -> Self {
        ExpandState {
            visited: AHashSet::new(),
            depth: 0,
        }
    }
}

/// One interpretation pass over a document.
pub struct Interpreter<'a> {
    doc: &'a DxfDocument,
    config: InterpreterConfig,
    /// Block-local primitives per block name, valid for this pass only.
    /// Block-local output is placement-independent, so one expansion
    /// serves every reference to the block.
    cache: Mutex<AHashMap<String, Vec<Primitive>>>,
}

impl<'a> Interpreter<'a> {
    pub fn new(doc: &'a DxfDocument, config: InterpreterConfig) -> Self {
        Interpreter {
            doc,
            config,
            cache: Mutex::new(AHashMap::new()),
        }
    }

    /// Interpret all top-level model-space entities.
    pub fn interpret(&self) -> Result<Vec<Primitive>> {
        let per_entity: Result<Vec<Vec<Primitive>>> = self
            .doc
            .entities
            .par_iter()
            .map(|entity| self.interpret_entity(entity, &mut ExpandState::new()))
            .collect();
        Ok(per_entity?.into_iter().flatten().collect())
    }

    /// Interpret one entity into zero or more primitives.
    fn interpret_entity(&self, entity: &Entity, state: &mut ExpandState) -> Result<Vec<Primitive>> {
        if !self.is_drawable(entity.common()) {
            return Ok(Vec::new());
        }
        let color = self.resolve_color(entity.common());
        let prims = match entity {
            Entity::Point(e) => self.point_primitives(e, color),
            Entity::Line(e) => self.line_primitives(e, color),
            Entity::Circle(e) => self.circle_primitives(e, color),
            Entity::Arc(e) => self.arc_primitives(e, color),
            Entity::Ellipse(e) => self.ellipse_primitives(e, color),
            Entity::LwPolyline(e) => self.lwpolyline_primitives(e, color),
            Entity::Polyline(e) => self.polyline_primitives(e, color),
            Entity::Spline(e) => self.spline_primitives(e, color),
            Entity::Solid(e) => self.solid_primitives(e, color),
            Entity::Face3d(e) => self.face3d_primitives(e, color),
            Entity::Text(e) => self.text_primitives(e, color),
            Entity::MText(e) => self.mtext_primitives(e, color),
            Entity::Attrib(e) => self.attrib_primitives(e, color),
            // definitions are templates, not drawing content
            Entity::AttDef(_) => Vec::new(),
            Entity::Hatch(e) => self.hatch_primitives(e, color),
            Entity::Insert(e) => self.insert_primitives(e, state)?,
            Entity::Dimension(e) => self.dimension_primitives(e, state)?,
        };
        Ok(prims)
    }

    /// Model-space visibility: the entity's own flag, paper space, and
    /// the layer's off/frozen state.
    fn is_drawable(&self, common: &EntityCommon) -> bool {
        if !common.visible || common.in_paper_space {
            return false;
        }
        match self.doc.tables.layer(&common.layer) {
            Some(layer) => layer.is_visible(),
            None => true,
        }
    }

    /// Entity RGB, then layer RGB, then the contrast color; a result that
    /// matches the background is replaced by the contrast color so the
    /// geometry stays visible.
    fn resolve_color(&self, common: &EntityCommon) -> Rgb {
        let rgb = common
            .true_color
            .or_else(|| common.color.rgb())
            .or_else(|| {
                self.doc
                    .tables
                    .layer(&common.layer)
                    .and_then(|layer| layer.color.rgb())
            })
            .unwrap_or(self.config.contrast_color);
        if rgb == self.config.bg_color {
            self.config.contrast_color
        } else {
            rgb
        }
    }

    fn point_primitives(&self, e: &ModelPoint, color: Rgb) -> Vec<Primitive> {
        vec![Primitive::Points {
            points: vec![e.location.to_vector2()],
            color,
        }]
    }

    fn line_primitives(&self, e: &Line, color: Rgb) -> Vec<Primitive> {
        vec![Primitive::Polyline {
            points: vec![e.start.to_vector2(), e.end.to_vector2()],
            closed: false,
            color,
        }]
    }

    fn circle_primitives(&self, e: &Circle, color: Rgb) -> Vec<Primitive> {
        vec![Primitive::Polyline {
            points: circle_ring(e.center.to_vector2(), e.radius),
            closed: true,
            color,
        }]
    }

    fn arc_primitives(&self, e: &Arc, color: Rgb) -> Vec<Primitive> {
        let points = arc_points(
            e.center.to_vector2(),
            e.radius,
            e.start_angle.to_radians(),
            e.end_angle.to_radians(),
            CIRCLE_SEGMENTS,
        );
        vec![Primitive::Polyline {
            points,
            closed: false,
            color,
        }]
    }

    fn ellipse_primitives(&self, e: &Ellipse, color: Rgb) -> Vec<Primitive> {
        let points = ellipse_points(
            e.center.to_vector2(),
            e.major_axis_end.to_vector2(),
            e.axis_ratio,
            e.start_param,
            e.end_param,
        );
        let full = (e.end_param - e.start_param).abs() >= std::f64::consts::TAU - 1e-9;
        vec![Primitive::Polyline {
            points,
            closed: full,
            color,
        }]
    }

    fn lwpolyline_primitives(&self, e: &LwPolyline, color: Rgb) -> Vec<Primitive> {
        let vertices: Vec<(Vector2, f64)> = e
            .vertices
            .iter()
            .map(|v| (Vector2::new(v.x, v.y), v.bulge))
            .collect();
        if vertices.is_empty() {
            return Vec::new();
        }
        vec![Primitive::Polyline {
            points: expand_bulged(&vertices, e.is_closed()),
            closed: e.is_closed(),
            color,
        }]
    }

    fn polyline_primitives(&self, e: &Polyline, color: Rgb) -> Vec<Primitive> {
        let vertices: Vec<(Vector2, f64)> = e
            .vertices
            .iter()
            .map(|v| (v.location.to_vector2(), v.bulge))
            .collect();
        if vertices.is_empty() {
            return Vec::new();
        }
        vec![Primitive::Polyline {
            points: expand_bulged(&vertices, e.is_closed()),
            closed: e.is_closed(),
            color,
        }]
    }

    fn spline_primitives(&self, e: &Spline, color: Rgb) -> Vec<Primitive> {
        let points = if e.control_points.is_empty() {
            // degraded file with only fit points; draw through them
            e.fit_points.iter().map(|p| p.to_vector2()).collect()
        } else {
            let ctrl: Vec<Vector2> = e.control_points.iter().map(|p| p.to_vector2()).collect();
            let weights: &[f64] = if e.is_rational() { &e.weights } else { &[] };
            bspline::sample_curve(&ctrl, weights, e.degree, &e.knots)
        };
        if points.len() < 2 {
            return Vec::new();
        }
        vec![Primitive::Polyline {
            points,
            closed: false,
            color,
        }]
    }

    fn solid_primitives(&self, e: &Solid, color: Rgb) -> Vec<Primitive> {
        // corners arrive in Z order: 0-1 on top, 2-3 below
        let vertices: Vec<Vector2> = e.corners.iter().map(|p| p.to_vector2()).collect();
        vec![Primitive::Mesh {
            vertices,
            triangles: vec![[0, 1, 2], [1, 3, 2]],
            color,
        }]
    }

    fn face3d_primitives(&self, e: &Face3d, color: Rgb) -> Vec<Primitive> {
        // corners are in perimeter order, unlike SOLID
        let vertices: Vec<Vector2> = e.corners.iter().map(|p| p.to_vector2()).collect();
        vec![Primitive::Mesh {
            vertices,
            triangles: vec![[0, 1, 2], [0, 2, 3]],
            color,
        }]
    }

    fn text_primitives(&self, e: &Text, color: Rgb) -> Vec<Primitive> {
        self.make_text_run(&e.value, e.position.to_vector2(), e.height, e.rotation, color)
    }

    fn mtext_primitives(&self, e: &MText, color: Rgb) -> Vec<Primitive> {
        self.make_text_run(&e.text, e.position.to_vector2(), e.height, e.rotation, color)
    }

    fn attrib_primitives(&self, e: &Attrib, color: Rgb) -> Vec<Primitive> {
        if e.is_invisible() {
            return Vec::new();
        }
        self.make_text_run(&e.value, e.position.to_vector2(), e.height, e.rotation, color)
    }

    fn make_text_run(
        &self,
        text: &str,
        position: Vector2,
        height: f64,
        rotation_degrees: f64,
        color: Rgb,
    ) -> Vec<Primitive> {
        if text.is_empty() || height <= 0.0 || self.config.font.is_none() {
            return Vec::new();
        }
        vec![Primitive::Text(TextRun {
            text: text.to_string(),
            position,
            height,
            rotation: rotation_degrees.to_radians(),
            color,
        })]
    }

    /// Hatch boundaries as outline polylines; pattern fill is out of
    /// scope, only the loop geometry is rendered.
    fn hatch_primitives(&self, e: &Hatch, color: Rgb) -> Vec<Primitive> {
        e.boundary_loops
            .iter()
            .filter_map(|bl| {
                let points = boundary_loop_points(bl);
                if points.len() < 2 {
                    None
                } else {
                    Some(Primitive::Polyline {
                        points,
                        closed: true,
                        color,
                    })
                }
            })
            .collect()
    }

    fn insert_primitives(&self, e: &Insert, state: &mut ExpandState) -> Result<Vec<Primitive>> {
        let children = match self.expand_block(&e.name, state)? {
            Some(children) => children,
            None => return Ok(Vec::new()),
        };
        let base = self
            .doc
            .block(&e.name)
            .map(|b| b.base_point.to_vector2())
            .unwrap_or(Vector2::ZERO);
        let place = Transform2::insertion(
            e.position.to_vector2(),
            e.rotation.to_radians(),
            e.x_scale,
            e.y_scale,
        );
        let cols = e.column_count.max(1);
        let rows = e.row_count.max(1);
        let mut out = Vec::with_capacity((cols * rows) as usize);
        for col in 0..cols {
            for row in 0..rows {
                // array offsets are in the block's own frame
                let cell = Transform2::translation(Vector2::new(
                    col as f64 * e.column_spacing,
                    row as f64 * e.row_spacing,
                )) * Transform2::translation(-base);
                out.push(Primitive::Group {
                    transform: place * cell,
                    children: children.clone(),
                });
            }
        }
        Ok(out)
    }

    /// Only rotated/aligned dimensions (kind 0) carry a block this
    /// pipeline can expand; other kinds are skipped.
    fn dimension_primitives(
        &self,
        e: &Dimension,
        state: &mut ExpandState,
    ) -> Result<Vec<Primitive>> {
        if e.kind() != 0 || e.block_name.is_empty() {
            return Ok(Vec::new());
        }
        let children = match self.expand_block(&e.block_name, state)? {
            Some(children) => children,
            None => return Ok(Vec::new()),
        };
        let base = self
            .doc
            .block(&e.block_name)
            .map(|b| b.base_point.to_vector2())
            .unwrap_or(Vector2::ZERO);
        Ok(vec![Primitive::Group {
            transform: Transform2::translation(-base),
            children,
        }])
    }

    /// Block-local primitives for a block, through the per-pass cache.
    ///
    /// `None` for an unknown block name (a dangling reference is
    /// tolerated, consistent with the rest of the parser).
    fn expand_block(
        &self,
        name: &str,
        state: &mut ExpandState,
    ) -> Result<Option<Vec<Primitive>>> {
        if let Some(cached) = self.cache.lock().ok().and_then(|c| c.get(name).cloned()) {
            return Ok(Some(cached));
        }
        let block = match self.doc.block(name) {
            Some(block) => block,
            None => return Ok(None),
        };
        if !state.visited.insert(name.to_string()) {
            return Err(DxfError::CyclicBlockReference(name.to_string()));
        }
        if state.depth >= MAX_BLOCK_DEPTH {
            return Err(DxfError::BlockNestingTooDeep(MAX_BLOCK_DEPTH));
        }
        state.depth += 1;
        let mut children = Vec::new();
        for entity in &block.entities {
            children.extend(self.interpret_entity(entity, state)?);
        }
        state.depth -= 1;
        state.visited.remove(name);
        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(name.to_string(), children.clone());
        }
        Ok(Some(children))
    }
}

/// A full circle as a 32-segment ring.
fn circle_ring(center: Vector2, radius: f64) -> Vec<Vector2> {
    (0..CIRCLE_SEGMENTS)
        .map(|i| {
            let a = std::f64::consts::TAU * i as f64 / CIRCLE_SEGMENTS as f64;
            center + Vector2::new(a.cos(), a.sin()) * radius
        })
        .collect()
}

/// Arc points from `start` to `end` (radians, counter-clockwise).
fn arc_points(center: Vector2, radius: f64, start: f64, end: f64, segments: usize) -> Vec<Vector2> {
    let mut sweep = end - start;
    if sweep <= 0.0 {
        sweep += std::f64::consts::TAU;
    }
    (0..=segments)
        .map(|i| {
            let a = start + sweep * i as f64 / segments as f64;
            center + Vector2::new(a.cos(), a.sin()) * radius
        })
        .collect()
}

/// Ellipse samples. The major-axis endpoint (relative to the center)
/// fixes both the x radius and the rotation; the ratio gives the y
/// radius. Parameters are radians along the unrotated ellipse.
fn ellipse_points(
    center: Vector2,
    major_axis_end: Vector2,
    axis_ratio: f64,
    start_param: f64,
    end_param: f64,
) -> Vec<Vector2> {
    let x_radius = major_axis_end.length();
    let y_radius = x_radius * axis_ratio;
    let rotation = major_axis_end.angle();
    let (sin_r, cos_r) = rotation.sin_cos();
    let mut sweep = end_param - start_param;
    if sweep <= 0.0 {
        sweep += std::f64::consts::TAU;
    }
    // exactly ELLIPSE_SAMPLES points, both endpoints included
    (0..ELLIPSE_SAMPLES)
        .map(|i| {
            let t = start_param + sweep * i as f64 / (ELLIPSE_SAMPLES - 1) as f64;
            let x = x_radius * t.cos();
            let y = y_radius * t.sin();
            center + Vector2::new(x * cos_r - y * sin_r, x * sin_r + y * cos_r)
        })
        .collect()
}

/// Expand a vertex/bulge list into straight points, tessellating each
/// bulged segment into its arc.
fn expand_bulged(vertices: &[(Vector2, f64)], closed: bool) -> Vec<Vector2> {
    let mut out = Vec::with_capacity(vertices.len());
    let count = vertices.len();
    for i in 0..count {
        let (p0, bulge) = vertices[i];
        out.push(p0);
        let next = if i + 1 < count {
            Some(vertices[i + 1].0)
        } else if closed {
            Some(vertices[0].0)
        } else {
            None
        };
        if let Some(p1) = next {
            if bulge != 0.0 {
                let arc = bulge_arc(p0, p1, bulge);
                // skip the final point; the next vertex supplies it
                out.extend_from_slice(&arc[..arc.len().saturating_sub(1)]);
            }
        }
    }
    out
}

/// Intermediate points of the arc a bulge encodes between two vertices,
/// endpoint included. `bulge = tan(θ/4)` for included angle θ, positive
/// counter-clockwise.
fn bulge_arc(p0: Vector2, p1: Vector2, bulge: f64) -> Vec<Vector2> {
    let theta = 4.0 * bulge.atan();
    let chord = p1 - p0;
    let d = chord.length();
    if d < 1e-12 || theta.abs() < 1e-12 {
        return vec![p1];
    }
    let radius = d / (2.0 * (theta / 2.0).sin().abs());
    let phi = chord.angle();
    let start_angle = if theta > 0.0 {
        phi - std::f64::consts::FRAC_PI_2 - theta / 2.0
    } else {
        phi + std::f64::consts::FRAC_PI_2 - theta / 2.0
    };
    let center = p0 - Vector2::new(start_angle.cos(), start_angle.sin()) * radius;
    let segments = ((theta.abs() / (std::f64::consts::PI / 18.0)).ceil() as usize).max(6);
    (1..=segments)
        .map(|i| {
            let a = start_angle + theta * i as f64 / segments as f64;
            center + Vector2::new(a.cos(), a.sin()) * radius
        })
        .collect()
}

/// Flatten one hatch boundary loop into a point ring.
fn boundary_loop_points(bl: &BoundaryLoop) -> Vec<Vector2> {
    if let Some(vertices) = &bl.polyline_vertices {
        let pairs: Vec<(Vector2, f64)> = vertices
            .iter()
            .map(|v| (Vector2::new(v.x, v.y), v.bulge))
            .collect();
        return expand_bulged(&pairs, true);
    }
    let mut out = Vec::new();
    for edge in &bl.edges {
        match edge {
            BoundaryEdge::Line { start, end } => {
                out.push(start.to_vector2());
                out.push(end.to_vector2());
            }
            BoundaryEdge::Arc {
                center,
                radius,
                start_angle,
                end_angle,
                ..
            } => {
                out.extend(arc_points(
                    center.to_vector2(),
                    *radius,
                    start_angle.to_radians(),
                    end_angle.to_radians(),
                    CIRCLE_SEGMENTS,
                ));
            }
            BoundaryEdge::Ellipse {
                center,
                major_axis_end,
                axis_ratio,
                start_angle,
                end_angle,
                ..
            } => {
                out.extend(ellipse_points(
                    center.to_vector2(),
                    major_axis_end.to_vector2(),
                    *axis_ratio,
                    start_angle.to_radians(),
                    end_angle.to_radians(),
                ));
            }
            BoundaryEdge::Spline {
                degree,
                knots,
                control_points,
                weights,
                ..
            } => {
                let ctrl: Vec<Vector2> = control_points.iter().map(|p| p.to_vector2()).collect();
                out.extend(bspline::sample_curve(&ctrl, weights, *degree, knots));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_circle_ring_on_radius() {
        let ring = circle_ring(Vector2::new(1.0, 1.0), 5.0);
        assert_eq!(ring.len(), CIRCLE_SEGMENTS);
        for p in &ring {
            assert!(((*p - Vector2::new(1.0, 1.0)).length() - 5.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_arc_points_sweep() {
        let pts = arc_points(Vector2::ZERO, 1.0, 0.0, PI / 2.0, 8);
        assert_eq!(pts.len(), 9);
        assert!((pts[0] - Vector2::new(1.0, 0.0)).length() < 1e-9);
        assert!((pts[8] - Vector2::new(0.0, 1.0)).length() < 1e-9);
    }

    #[test]
    fn test_arc_wraps_backwards_range() {
        // 350° → 10° is a 20° sweep through zero, not a 340° one
        let pts = arc_points(
            Vector2::ZERO,
            1.0,
            350.0_f64.to_radians(),
            10.0_f64.to_radians(),
            8,
        );
        let mid = pts[4];
        assert!((mid - Vector2::new(1.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_bulge_semicircle() {
        // bulge 1.0 is a counter-clockwise half circle; turning left from
        // a rightward chord puts the apex one radius below it
        let pts = bulge_arc(Vector2::new(0.0, 0.0), Vector2::new(2.0, 0.0), 1.0);
        assert!(pts.len() >= 6);
        let apex = pts
            .iter()
            .cloned()
            .fold(Vector2::ZERO, |acc, p| if p.y < acc.y { p } else { acc });
        assert!((apex - Vector2::new(1.0, -1.0)).length() < 1e-6);
        // last point is the second vertex
        assert!((pts[pts.len() - 1] - Vector2::new(2.0, 0.0)).length() < 1e-9);
    }

    #[test]
    fn test_bulge_negative_goes_clockwise() {
        let pts = bulge_arc(Vector2::new(0.0, 0.0), Vector2::new(2.0, 0.0), -1.0);
        let apex = pts
            .iter()
            .cloned()
            .fold(Vector2::ZERO, |acc, p| if p.y > acc.y { p } else { acc });
        assert!((apex - Vector2::new(1.0, 1.0)).length() < 1e-6);
    }

    #[test]
    fn test_bulge_segment_count_floor() {
        // a tiny bulge still gets at least 6 segments
        let pts = bulge_arc(Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0), 0.01);
        assert_eq!(pts.len(), 6);
    }

    #[test]
    fn test_expand_bulged_inserts_arc_points() {
        let vertices = vec![
            (Vector2::new(0.0, 0.0), 1.0),
            (Vector2::new(2.0, 0.0), 0.0),
        ];
        let pts = expand_bulged(&vertices, false);
        // 2 vertices plus at least 5 intermediate arc points
        assert!(pts.len() >= 7);
        assert_eq!(pts[0], Vector2::new(0.0, 0.0));
        assert_eq!(*pts.last().unwrap(), Vector2::new(2.0, 0.0));
    }

    #[test]
    fn test_ellipse_rotation_from_major_axis() {
        // major axis along +Y: the ellipse's own x axis points up
        let pts = ellipse_points(Vector2::ZERO, Vector2::new(0.0, 2.0), 0.5, 0.0, std::f64::consts::TAU);
        assert!((pts[0] - Vector2::new(0.0, 2.0)).length() < 1e-9);
        assert_eq!(pts.len(), ELLIPSE_SAMPLES);
        // a full sweep closes back on the start point
        assert!((pts[ELLIPSE_SAMPLES - 1] - pts[0]).length() < 1e-9);
    }

    #[test]
    fn test_contrast_color_derivation() {
        assert_eq!(InterpreterConfig::new(Rgb::BLACK).contrast_color, Rgb::WHITE);
        assert_eq!(InterpreterConfig::new(Rgb::WHITE).contrast_color, Rgb::BLACK);
        assert_eq!(
            InterpreterConfig::new(Rgb::new(30, 30, 30)).contrast_color,
            Rgb::BLACK
        );
    }
}
