//! Per-entity parsers
//!
//! Every parser follows the same shape: read groups until the next code 0
//! (which starts the following record and is pushed back), dispatch the
//! entity-specific codes, and fall through to the common-property parser
//! for the rest. Unrecognized codes are dropped, never fatal.
//!
//! Dispatch goes through a fixed table built once at startup; the set of
//! entity types is closed, so an unknown type name simply returns `None`
//! and the caller skips the record.

use ahash::AHashMap;
use once_cell::sync::Lazy;

use crate::entities::{
    Arc, AttDef, Attrib, BoundaryEdge, BoundaryLoop, Circle, Dimension, Ellipse, Entity, Face3d,
    Hatch, Insert, InvisibleEdgeFlags, Line, LoopTypeFlags, LoopVertex, LwPolyline,
    LwPolylineFlags, LwVertex, MText, ModelPoint, PatternDefLine, Polyline, PolylineFlags, Solid,
    Spline, SplineFlags, Text, Vertex,
};
use crate::error::Result;
use crate::parser::common::{apply_common, value_f64, value_i64, value_string};
use crate::parser::ParseCtx;
use crate::scanner::GroupScanner;
use crate::types::Point;

type EntityParser = fn(&mut GroupScanner, &mut ParseCtx) -> Result<Entity>;

static PARSERS: Lazy<AHashMap<&'static str, EntityParser>> = Lazy::new(|| {
    let mut m: AHashMap<&'static str, EntityParser> = AHashMap::new();
    m.insert("3DFACE", parse_face3d);
    m.insert("ARC", parse_arc);
    m.insert("ATTDEF", parse_attdef);
    m.insert("ATTRIB", parse_attrib);
    m.insert("CIRCLE", parse_circle);
    m.insert("DIMENSION", parse_dimension);
    m.insert("ELLIPSE", parse_ellipse);
    m.insert("HATCH", parse_hatch);
    m.insert("INSERT", parse_insert);
    m.insert("LINE", parse_line);
    m.insert("LWPOLYLINE", parse_lwpolyline);
    m.insert("MTEXT", parse_mtext);
    m.insert("POINT", parse_point);
    m.insert("POLYLINE", parse_polyline);
    m.insert("SOLID", parse_solid);
    m.insert("TRACE", parse_solid); // same record layout
    m.insert("SPLINE", parse_spline);
    m.insert("TEXT", parse_text);
    m
});

/// Parse one entity record; `None` for types outside the supported set.
pub(crate) fn parse_entity(
    type_name: &str,
    scanner: &mut GroupScanner,
    ctx: &mut ParseCtx,
) -> Result<Option<Entity>> {
    match PARSERS.get(type_name) {
        Some(parser) => parser(scanner, ctx).map(Some),
        None => Ok(None),
    }
}

/// Consume an unsupported record's body up to the next code 0.
pub(crate) fn skip_entity(scanner: &mut GroupScanner) -> Result<()> {
    loop {
        let group = scanner.next()?;
        if group.code == 0 {
            scanner.rewind(1);
            return Ok(());
        }
    }
}

fn parse_point(scanner: &mut GroupScanner, _ctx: &mut ParseCtx) -> Result<Entity> {
    let mut e = ModelPoint::new();
    loop {
        let group = scanner.next()?;
        if group.code == 0 {
            scanner.rewind(1);
            break;
        }
        match group.code {
            10 => e.location = scanner.read_point(10, value_f64(&group))?,
            _ => {
                apply_common(&mut e.common, &group, scanner)?;
            }
        }
    }
    Ok(Entity::Point(e))
}

fn parse_line(scanner: &mut GroupScanner, _ctx: &mut ParseCtx) -> Result<Entity> {
    let mut e = Line::new();
    loop {
        let group = scanner.next()?;
        if group.code == 0 {
            scanner.rewind(1);
            break;
        }
        match group.code {
            10 => e.start = scanner.read_point(10, value_f64(&group))?,
            11 => e.end = scanner.read_point(11, value_f64(&group))?,
            _ => {
                apply_common(&mut e.common, &group, scanner)?;
            }
        }
    }
    Ok(Entity::Line(e))
}

fn parse_circle(scanner: &mut GroupScanner, _ctx: &mut ParseCtx) -> Result<Entity> {
    let mut e = Circle::new();
    loop {
        let group = scanner.next()?;
        if group.code == 0 {
            scanner.rewind(1);
            break;
        }
        match group.code {
            10 => e.center = scanner.read_point(10, value_f64(&group))?,
            40 => e.radius = value_f64(&group),
            _ => {
                apply_common(&mut e.common, &group, scanner)?;
            }
        }
    }
    Ok(Entity::Circle(e))
}

fn parse_arc(scanner: &mut GroupScanner, _ctx: &mut ParseCtx) -> Result<Entity> {
    let mut e = Arc::new();
    loop {
        let group = scanner.next()?;
        if group.code == 0 {
            scanner.rewind(1);
            break;
        }
        match group.code {
            10 => e.center = scanner.read_point(10, value_f64(&group))?,
            40 => e.radius = value_f64(&group),
            50 => e.start_angle = value_f64(&group),
            51 => e.end_angle = value_f64(&group),
            _ => {
                apply_common(&mut e.common, &group, scanner)?;
            }
        }
    }
    Ok(Entity::Arc(e))
}

fn parse_ellipse(scanner: &mut GroupScanner, _ctx: &mut ParseCtx) -> Result<Entity> {
    let mut e = Ellipse::new();
    loop {
        let group = scanner.next()?;
        if group.code == 0 {
            scanner.rewind(1);
            break;
        }
        match group.code {
            10 => e.center = scanner.read_point(10, value_f64(&group))?,
            11 => e.major_axis_end = scanner.read_point(11, value_f64(&group))?,
            40 => e.axis_ratio = value_f64(&group),
            41 => e.start_param = value_f64(&group),
            42 => e.end_param = value_f64(&group),
            _ => {
                apply_common(&mut e.common, &group, scanner)?;
            }
        }
    }
    Ok(Entity::Ellipse(e))
}

fn parse_solid(scanner: &mut GroupScanner, _ctx: &mut ParseCtx) -> Result<Entity> {
    let mut e = Solid::new();
    let mut saw_fourth = false;
    loop {
        let group = scanner.next()?;
        if group.code == 0 {
            scanner.rewind(1);
            break;
        }
        match group.code {
            10 => e.corners[0] = scanner.read_point(10, value_f64(&group))?,
            11 => e.corners[1] = scanner.read_point(11, value_f64(&group))?,
            12 => e.corners[2] = scanner.read_point(12, value_f64(&group))?,
            13 => {
                e.corners[3] = scanner.read_point(13, value_f64(&group))?;
                saw_fourth = true;
            }
            _ => {
                apply_common(&mut e.common, &group, scanner)?;
            }
        }
    }
    if !saw_fourth {
        e.corners[3] = e.corners[2];
    }
    Ok(Entity::Solid(e))
}

fn parse_face3d(scanner: &mut GroupScanner, _ctx: &mut ParseCtx) -> Result<Entity> {
    let mut e = Face3d::new();
    loop {
        let group = scanner.next()?;
        if group.code == 0 {
            scanner.rewind(1);
            break;
        }
        match group.code {
            10 => e.corners[0] = scanner.read_point(10, value_f64(&group))?,
            11 => e.corners[1] = scanner.read_point(11, value_f64(&group))?,
            12 => e.corners[2] = scanner.read_point(12, value_f64(&group))?,
            13 => e.corners[3] = scanner.read_point(13, value_f64(&group))?,
            70 => e.invisible_edges = InvisibleEdgeFlags::from_bits_truncate(value_i64(&group) as i32),
            _ => {
                apply_common(&mut e.common, &group, scanner)?;
            }
        }
    }
    Ok(Entity::Face3d(e))
}

fn parse_text(scanner: &mut GroupScanner, _ctx: &mut ParseCtx) -> Result<Entity> {
    let mut e = Text::new();
    loop {
        let group = scanner.next()?;
        if group.code == 0 {
            scanner.rewind(1);
            break;
        }
        match group.code {
            1 => e.value = value_string(&group),
            7 => e.style = Some(value_string(&group)),
            10 => e.position = scanner.read_point(10, value_f64(&group))?,
            11 => e.alignment_point = Some(scanner.read_point(11, value_f64(&group))?),
            40 => e.height = value_f64(&group),
            50 => e.rotation = value_f64(&group),
            72 => e.horizontal_alignment = value_i64(&group) as i16,
            73 => e.vertical_alignment = value_i64(&group) as i16,
            _ => {
                apply_common(&mut e.common, &group, scanner)?;
            }
        }
    }
    Ok(Entity::Text(e))
}

fn parse_mtext(scanner: &mut GroupScanner, _ctx: &mut ParseCtx) -> Result<Entity> {
    let mut e = MText::new();
    loop {
        let group = scanner.next()?;
        if group.code == 0 {
            scanner.rewind(1);
            break;
        }
        match group.code {
            // code 3 chunks precede the final code 1 chunk; concatenate
            // in file order
            1 | 3 => e.text.push_str(&value_string(&group)),
            7 => e.style = Some(value_string(&group)),
            10 => e.position = scanner.read_point(10, value_f64(&group))?,
            40 => e.height = value_f64(&group),
            41 => e.width = value_f64(&group),
            50 => e.rotation = value_f64(&group),
            71 => e.attachment_point = value_i64(&group) as i16,
            _ => {
                apply_common(&mut e.common, &group, scanner)?;
            }
        }
    }
    Ok(Entity::MText(e))
}

fn parse_attdef(scanner: &mut GroupScanner, _ctx: &mut ParseCtx) -> Result<Entity> {
    let mut e = AttDef::new();
    loop {
        let group = scanner.next()?;
        if group.code == 0 {
            scanner.rewind(1);
            break;
        }
        match group.code {
            1 => e.default_value = value_string(&group),
            2 => e.tag = value_string(&group),
            3 => e.prompt = value_string(&group),
            10 => e.position = scanner.read_point(10, value_f64(&group))?,
            40 => e.height = value_f64(&group),
            50 => e.rotation = value_f64(&group),
            70 => e.flags = value_i64(&group) as i32,
            _ => {
                apply_common(&mut e.common, &group, scanner)?;
            }
        }
    }
    Ok(Entity::AttDef(e))
}

fn parse_attrib(scanner: &mut GroupScanner, _ctx: &mut ParseCtx) -> Result<Entity> {
    let mut e = Attrib::new();
    loop {
        let group = scanner.next()?;
        if group.code == 0 {
            // A stray 0/MTEXT inside an ATTRIB body (seen in files from
            // some writers) does not end the entity; it is consumed and
            // parsing continues. Any other record start does end it.
            if group.value.as_str() == Some("MTEXT") {
                continue;
            }
            scanner.rewind(1);
            break;
        }
        match group.code {
            1 => e.value = value_string(&group),
            2 => e.tag = value_string(&group),
            10 => e.position = scanner.read_point(10, value_f64(&group))?,
            40 => e.height = value_f64(&group),
            50 => e.rotation = value_f64(&group),
            70 => e.flags = value_i64(&group) as i32,
            _ => {
                apply_common(&mut e.common, &group, scanner)?;
            }
        }
    }
    Ok(Entity::Attrib(e))
}

fn parse_insert(scanner: &mut GroupScanner, _ctx: &mut ParseCtx) -> Result<Entity> {
    let mut e = Insert::new();
    loop {
        let group = scanner.next()?;
        if group.code == 0 {
            scanner.rewind(1);
            break;
        }
        match group.code {
            2 => e.name = value_string(&group),
            10 => e.position = scanner.read_point(10, value_f64(&group))?,
            41 => e.x_scale = value_f64(&group),
            42 => e.y_scale = value_f64(&group),
            44 => e.column_spacing = value_f64(&group),
            45 => e.row_spacing = value_f64(&group),
            50 => e.rotation = value_f64(&group),
            66 => {} // attribs-follow marker; ATTRIBs parse as siblings
            70 => e.column_count = value_i64(&group) as i32,
            71 => e.row_count = value_i64(&group) as i32,
            _ => {
                apply_common(&mut e.common, &group, scanner)?;
            }
        }
    }
    Ok(Entity::Insert(e))
}

fn parse_dimension(scanner: &mut GroupScanner, _ctx: &mut ParseCtx) -> Result<Entity> {
    let mut e = Dimension::new();
    loop {
        let group = scanner.next()?;
        if group.code == 0 {
            scanner.rewind(1);
            break;
        }
        match group.code {
            1 => e.text = Some(value_string(&group)),
            2 => e.block_name = value_string(&group),
            10 => e.definition_point = scanner.read_point(10, value_f64(&group))?,
            11 => e.text_midpoint = scanner.read_point(11, value_f64(&group))?,
            42 => e.actual_measurement = Some(value_f64(&group)),
            70 => e.dimension_type = value_i64(&group) as i32,
            _ => {
                apply_common(&mut e.common, &group, scanner)?;
            }
        }
    }
    Ok(Entity::Dimension(e))
}

fn parse_lwpolyline(scanner: &mut GroupScanner, _ctx: &mut ParseCtx) -> Result<Entity> {
    let mut e = LwPolyline::new();
    loop {
        let group = scanner.next()?;
        if group.code == 0 {
            scanner.rewind(1);
            break;
        }
        match group.code {
            // each code 10 starts a new vertex; 40/41/42 refine the last
            10 => {
                let p = scanner.read_point(10, value_f64(&group))?;
                e.vertices.push(LwVertex::new(p.x, p.y));
            }
            38 => e.elevation = value_f64(&group),
            40 => {
                if let Some(v) = e.vertices.last_mut() {
                    v.start_width = value_f64(&group);
                }
            }
            41 => {
                if let Some(v) = e.vertices.last_mut() {
                    v.end_width = value_f64(&group);
                }
            }
            42 => {
                if let Some(v) = e.vertices.last_mut() {
                    v.bulge = value_f64(&group);
                }
            }
            43 => e.constant_width = value_f64(&group),
            70 => e.flags = LwPolylineFlags::from_bits_truncate(value_i64(&group) as i32),
            90 => e.declared_vertex_count = Some(value_i64(&group)),
            _ => {
                apply_common(&mut e.common, &group, scanner)?;
            }
        }
    }
    Ok(Entity::LwPolyline(e))
}

/// POLYLINE header plus its VERTEX children up to SEQEND.
fn parse_polyline(scanner: &mut GroupScanner, _ctx: &mut ParseCtx) -> Result<Entity> {
    let mut e = Polyline::new();
    // header codes
    loop {
        let group = scanner.next()?;
        if group.code == 0 {
            scanner.rewind(1);
            break;
        }
        match group.code {
            40 => e.start_width = value_f64(&group),
            41 => e.end_width = value_f64(&group),
            66 => {} // vertices-follow marker, always read anyway
            70 => e.flags = PolylineFlags::from_bits_truncate(value_i64(&group) as i32),
            _ => {
                apply_common(&mut e.common, &group, scanner)?;
            }
        }
    }
    // children
    loop {
        let group = scanner.next()?;
        if group.is_start_of("VERTEX") {
            e.vertices.push(parse_vertex(scanner)?);
        } else if group.is_start_of("SEQEND") {
            skip_entity(scanner)?;
            break;
        } else {
            // missing SEQEND; the next record ends the polyline
            scanner.rewind(1);
            break;
        }
    }
    Ok(Entity::Polyline(e))
}

fn parse_vertex(scanner: &mut GroupScanner) -> Result<Vertex> {
    let mut v = Vertex::new(Point::ORIGIN);
    let mut common = crate::entities::EntityCommon::new();
    loop {
        let group = scanner.next()?;
        if group.code == 0 {
            scanner.rewind(1);
            break;
        }
        match group.code {
            10 => v.location = scanner.read_point(10, value_f64(&group))?,
            42 => v.bulge = value_f64(&group),
            70 => v.flags = value_i64(&group) as i32,
            _ => {
                apply_common(&mut common, &group, scanner)?;
            }
        }
    }
    Ok(v)
}

fn parse_spline(scanner: &mut GroupScanner, _ctx: &mut ParseCtx) -> Result<Entity> {
    let mut e = Spline::new();
    loop {
        let group = scanner.next()?;
        if group.code == 0 {
            scanner.rewind(1);
            break;
        }
        match group.code {
            10 => {
                let p = scanner.read_point(10, value_f64(&group))?;
                e.control_points.push(p);
            }
            11 => {
                let p = scanner.read_point(11, value_f64(&group))?;
                e.fit_points.push(p);
            }
            40 => e.knots.push(value_f64(&group)),
            41 => e.weights.push(value_f64(&group)),
            70 => e.flags = SplineFlags::from_bits_truncate(value_i64(&group) as i32),
            71 => e.degree = value_i64(&group).max(1) as usize,
            // declared knot/control/fit counts; the collected lists win
            72 | 73 | 74 => {}
            _ => {
                apply_common(&mut e.common, &group, scanner)?;
            }
        }
    }
    Ok(Entity::Spline(e))
}

fn parse_hatch(scanner: &mut GroupScanner, _ctx: &mut ParseCtx) -> Result<Entity> {
    let mut e = Hatch::new();
    loop {
        let group = scanner.next()?;
        if group.code == 0 {
            scanner.rewind(1);
            break;
        }
        match group.code {
            2 => e.pattern_name = value_string(&group),
            70 => e.is_solid = value_i64(&group) != 0,
            71 => e.is_associative = value_i64(&group) != 0,
            91 => {
                let count = value_i64(&group).max(0) as usize;
                for _ in 0..count {
                    e.boundary_loops.push(read_boundary_loop(scanner)?);
                }
            }
            78 => {
                let count = value_i64(&group).max(0) as usize;
                for _ in 0..count {
                    e.pattern_lines.push(read_pattern_line(scanner)?);
                }
            }
            98 => {
                let count = value_i64(&group).max(0) as usize;
                for _ in 0..count {
                    let g = scanner.next()?;
                    if g.code == 10 {
                        e.seed_points.push(scanner.read_point(10, value_f64(&g))?);
                    } else {
                        scanner.rewind(1);
                        break;
                    }
                }
            }
            _ => {
                apply_common(&mut e.common, &group, scanner)?;
            }
        }
    }
    Ok(Entity::Hatch(e))
}

/// One boundary loop: code 92 flags, then a polyline sub-record or an
/// edge list, then the optional source-object back-references.
fn read_boundary_loop(scanner: &mut GroupScanner) -> Result<BoundaryLoop> {
    let mut bl = BoundaryLoop::default();
    let group = scanner.next()?;
    if group.code != 92 {
        // malformed loop header; give the group back and return the
        // empty loop so the outer dispatch can resynchronize
        scanner.rewind(1);
        return Ok(bl);
    }
    bl.loop_type = LoopTypeFlags::from_bits_truncate(value_i64(&group) as i32);

    if bl.loop_type.contains(LoopTypeFlags::POLYLINE) {
        read_polyline_loop(scanner, &mut bl)?;
    } else {
        read_edge_loop(scanner, &mut bl)?;
    }

    // trailing 97 (source object count) + 330 references
    if let Ok(g) = scanner.peek() {
        if g.code == 97 {
            scanner.next()?;
            let refs = value_i64(&g).max(0) as usize;
            for _ in 0..refs {
                let r = scanner.next()?;
                if r.code != 330 {
                    scanner.rewind(1);
                    break;
                }
            }
        }
    }
    Ok(bl)
}

fn read_polyline_loop(scanner: &mut GroupScanner, bl: &mut BoundaryLoop) -> Result<()> {
    let mut has_bulge = false;
    let mut count = 0usize;
    // sub-record header: 72 (has bulge), 73 (closed), 93 (vertex count)
    loop {
        let group = scanner.next()?;
        match group.code {
            72 => has_bulge = value_i64(&group) != 0,
            73 => bl.polyline_closed = value_i64(&group) != 0,
            93 => {
                count = value_i64(&group).max(0) as usize;
                break;
            }
            _ => {
                scanner.rewind(1);
                break;
            }
        }
    }
    let mut vertices = Vec::with_capacity(count);
    for _ in 0..count {
        let group = scanner.next()?;
        if group.code != 10 {
            scanner.rewind(1);
            break;
        }
        let p = scanner.read_point(10, value_f64(&group))?;
        let mut v = LoopVertex {
            x: p.x,
            y: p.y,
            bulge: 0.0,
        };
        if has_bulge {
            let g = scanner.next()?;
            if g.code == 42 {
                v.bulge = value_f64(&g);
            } else {
                scanner.rewind(1);
            }
        }
        vertices.push(v);
    }
    bl.polyline_vertices = Some(vertices);
    Ok(())
}

fn read_edge_loop(scanner: &mut GroupScanner, bl: &mut BoundaryLoop) -> Result<()> {
    let group = scanner.next()?;
    if group.code != 93 {
        scanner.rewind(1);
        return Ok(());
    }
    let count = value_i64(&group).max(0) as usize;
    for _ in 0..count {
        let kind_group = scanner.next()?;
        if kind_group.code != 72 {
            scanner.rewind(1);
            break;
        }
        match value_i64(&kind_group) {
            1 => bl.edges.push(read_line_edge(scanner)?),
            2 => bl.edges.push(read_arc_edge(scanner)?),
            3 => bl.edges.push(read_ellipse_edge(scanner)?),
            4 => bl.edges.push(read_spline_edge(scanner)?),
            _ => break, // unknown edge type desynchronizes the loop; stop
        }
    }
    Ok(())
}

fn read_line_edge(scanner: &mut GroupScanner) -> Result<BoundaryEdge> {
    let mut start = Point::ORIGIN;
    let mut end = Point::ORIGIN;
    loop {
        let group = scanner.next()?;
        match group.code {
            10 => start = scanner.read_point(10, value_f64(&group))?,
            11 => {
                end = scanner.read_point(11, value_f64(&group))?;
                break;
            }
            _ => {
                scanner.rewind(1);
                break;
            }
        }
    }
    Ok(BoundaryEdge::Line { start, end })
}

fn read_arc_edge(scanner: &mut GroupScanner) -> Result<BoundaryEdge> {
    let mut center = Point::ORIGIN;
    let mut radius = 0.0;
    let mut start_angle = 0.0;
    let mut end_angle = 360.0;
    let mut ccw = true;
    loop {
        let group = scanner.next()?;
        match group.code {
            10 => center = scanner.read_point(10, value_f64(&group))?,
            40 => radius = value_f64(&group),
            50 => start_angle = value_f64(&group),
            51 => end_angle = value_f64(&group),
            73 => {
                ccw = value_i64(&group) != 0;
                break;
            }
            _ => {
                scanner.rewind(1);
                break;
            }
        }
    }
    Ok(BoundaryEdge::Arc {
        center,
        radius,
        start_angle,
        end_angle,
        counter_clockwise: ccw,
    })
}

fn read_ellipse_edge(scanner: &mut GroupScanner) -> Result<BoundaryEdge> {
    let mut center = Point::ORIGIN;
    let mut major = Point::ORIGIN;
    let mut ratio = 1.0;
    let mut start_angle = 0.0;
    let mut end_angle = 360.0;
    let mut ccw = true;
    loop {
        let group = scanner.next()?;
        match group.code {
            10 => center = scanner.read_point(10, value_f64(&group))?,
            11 => major = scanner.read_point(11, value_f64(&group))?,
            40 => ratio = value_f64(&group),
            50 => start_angle = value_f64(&group),
            51 => end_angle = value_f64(&group),
            73 => {
                ccw = value_i64(&group) != 0;
                break;
            }
            _ => {
                scanner.rewind(1);
                break;
            }
        }
    }
    Ok(BoundaryEdge::Ellipse {
        center,
        major_axis_end: major,
        axis_ratio: ratio,
        start_angle,
        end_angle,
        counter_clockwise: ccw,
    })
}

fn read_spline_edge(scanner: &mut GroupScanner) -> Result<BoundaryEdge> {
    let mut degree = 3usize;
    let mut rational = false;
    let mut periodic = false;
    let mut knot_count = 0usize;
    let mut control_count = 0usize;
    let mut knots = Vec::new();
    let mut control_points = Vec::new();
    let mut weights = Vec::new();
    loop {
        let group = scanner.next()?;
        match group.code {
            94 => degree = value_i64(&group).max(1) as usize,
            73 => rational = value_i64(&group) != 0,
            74 => periodic = value_i64(&group) != 0,
            95 => knot_count = value_i64(&group).max(0) as usize,
            96 => {
                control_count = value_i64(&group).max(0) as usize;
                break;
            }
            _ => {
                scanner.rewind(1);
                return Ok(BoundaryEdge::Spline {
                    degree,
                    rational,
                    periodic,
                    knots,
                    control_points,
                    weights,
                });
            }
        }
    }
    for _ in 0..knot_count {
        let g = scanner.next()?;
        if g.code != 40 {
            scanner.rewind(1);
            break;
        }
        knots.push(value_f64(&g));
    }
    for _ in 0..control_count {
        let g = scanner.next()?;
        if g.code != 10 {
            scanner.rewind(1);
            break;
        }
        control_points.push(scanner.read_point(10, value_f64(&g))?);
        if rational {
            let w = scanner.next()?;
            if w.code == 42 {
                weights.push(value_f64(&w));
            } else {
                scanner.rewind(1);
            }
        }
    }
    Ok(BoundaryEdge::Spline {
        degree,
        rational,
        periodic,
        knots,
        control_points,
        weights,
    })
}

fn read_pattern_line(scanner: &mut GroupScanner) -> Result<PatternDefLine> {
    let mut line = PatternDefLine::default();
    let mut dash_count = 0usize;
    loop {
        let group = scanner.next()?;
        match group.code {
            53 => line.angle = value_f64(&group),
            43 => line.base.x = value_f64(&group),
            44 => line.base.y = value_f64(&group),
            45 => line.offset.x = value_f64(&group),
            46 => line.offset.y = value_f64(&group),
            79 => {
                dash_count = value_i64(&group).max(0) as usize;
                break;
            }
            _ => {
                scanner.rewind(1);
                return Ok(line);
            }
        }
    }
    for _ in 0..dash_count {
        let g = scanner.next()?;
        if g.code != 49 {
            scanner.rewind(1);
            break;
        }
        line.dashes.push(value_f64(&g));
    }
    Ok(line)
}
