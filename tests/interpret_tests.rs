//! Interpretation tests: parse inline fixtures, then check the
//! primitives the interpreter produces.

use dxf_scene::{
    interpret, parse, DxfError, InterpreterConfig, Primitive, Rgb, Transform2, Vector2,
};

fn dxf(pairs: &[(&str, &str)]) -> String {
    let mut out = String::new();
    for (code, value) in pairs {
        out.push_str(code);
        out.push('\n');
        out.push_str(value);
        out.push('\n');
    }
    out
}

fn interpret_text(pairs: &[(&str, &str)]) -> Vec<Primitive> {
    let doc = parse(&dxf(pairs)).unwrap();
    interpret(&doc, &InterpreterConfig::default()).unwrap()
}

#[test]
fn circle_becomes_32_segment_ring() {
    let prims = interpret_text(&[
        ("0", "SECTION"),
        ("2", "ENTITIES"),
        ("0", "CIRCLE"),
        ("10", "1.0"),
        ("20", "2.0"),
        ("40", "5.0"),
        ("0", "ENDSEC"),
        ("0", "EOF"),
    ]);
    assert_eq!(prims.len(), 1);
    match &prims[0] {
        Primitive::Polyline {
            points, closed, ..
        } => {
            assert!(*closed);
            assert_eq!(points.len(), 32);
            let center = Vector2::new(1.0, 2.0);
            for p in points {
                assert!(((*p - center).length() - 5.0).abs() < 1e-9);
            }
        }
        other => panic!("expected polyline, got {:?}", other),
    }
}

#[test]
fn insert_places_block_with_rotation_and_translation() {
    let prims = interpret_text(&[
        ("0", "SECTION"),
        ("2", "BLOCKS"),
        ("0", "BLOCK"),
        ("2", "UNIT"),
        ("10", "0.0"),
        ("20", "0.0"),
        ("0", "LINE"),
        ("10", "0.0"),
        ("20", "0.0"),
        ("11", "1.0"),
        ("21", "0.0"),
        ("0", "ENDBLK"),
        ("0", "ENDSEC"),
        ("0", "SECTION"),
        ("2", "ENTITIES"),
        ("0", "INSERT"),
        ("2", "UNIT"),
        ("10", "10.0"),
        ("20", "10.0"),
        ("50", "90.0"),
        ("0", "ENDSEC"),
        ("0", "EOF"),
    ]);
    assert_eq!(prims.len(), 1);
    match &prims[0] {
        Primitive::Group {
            transform,
            children,
        } => {
            assert_eq!(children.len(), 1);
            // the block's (1,0) endpoint lands at (10,11) after a 90°
            // rotation and (10,10) translation
            let placed = transform.apply(Vector2::new(1.0, 0.0));
            assert!((placed - Vector2::new(10.0, 11.0)).length() < 1e-9);
        }
        other => panic!("expected group, got {:?}", other),
    }
}

#[test]
fn nested_inserts_nest_groups() {
    let prims = interpret_text(&[
        ("0", "SECTION"),
        ("2", "BLOCKS"),
        ("0", "BLOCK"),
        ("2", "INNER"),
        ("10", "0.0"),
        ("20", "0.0"),
        ("0", "LINE"),
        ("10", "0.0"),
        ("20", "0.0"),
        ("11", "1.0"),
        ("21", "0.0"),
        ("0", "ENDBLK"),
        ("0", "BLOCK"),
        ("2", "OUTER"),
        ("10", "0.0"),
        ("20", "0.0"),
        ("0", "INSERT"),
        ("2", "INNER"),
        ("10", "5.0"),
        ("20", "0.0"),
        ("0", "ENDBLK"),
        ("0", "ENDSEC"),
        ("0", "SECTION"),
        ("2", "ENTITIES"),
        ("0", "INSERT"),
        ("2", "OUTER"),
        ("10", "0.0"),
        ("20", "0.0"),
        ("0", "ENDSEC"),
        ("0", "EOF"),
    ]);
    assert_eq!(prims.len(), 1);
    assert_eq!(prims[0].leaf_count(), 1);
    match &prims[0] {
        Primitive::Group { children, .. } => {
            assert!(matches!(children[0], Primitive::Group { .. }));
        }
        other => panic!("expected group, got {:?}", other),
    }
}

#[test]
fn cyclic_block_reference_is_an_error() {
    let doc = parse(&dxf(&[
        ("0", "SECTION"),
        ("2", "BLOCKS"),
        ("0", "BLOCK"),
        ("2", "A"),
        ("10", "0.0"),
        ("20", "0.0"),
        ("0", "INSERT"),
        ("2", "B"),
        ("10", "0.0"),
        ("20", "0.0"),
        ("0", "ENDBLK"),
        ("0", "BLOCK"),
        ("2", "B"),
        ("10", "0.0"),
        ("20", "0.0"),
        ("0", "INSERT"),
        ("2", "A"),
        ("10", "0.0"),
        ("20", "0.0"),
        ("0", "ENDBLK"),
        ("0", "ENDSEC"),
        ("0", "SECTION"),
        ("2", "ENTITIES"),
        ("0", "INSERT"),
        ("2", "A"),
        ("10", "0.0"),
        ("20", "0.0"),
        ("0", "ENDSEC"),
        ("0", "EOF"),
    ]))
    .unwrap();
    let result = interpret(&doc, &InterpreterConfig::default());
    assert!(matches!(result, Err(DxfError::CyclicBlockReference(_))));
}

#[test]
fn lwpolyline_bulge_expands_to_arc_points() {
    let prims = interpret_text(&[
        ("0", "SECTION"),
        ("2", "ENTITIES"),
        ("0", "LWPOLYLINE"),
        ("90", "2"),
        ("10", "0.0"),
        ("20", "0.0"),
        ("42", "1.0"), // semicircle to the next vertex
        ("10", "2.0"),
        ("20", "0.0"),
        ("0", "ENDSEC"),
        ("0", "EOF"),
    ]);
    match &prims[0] {
        Primitive::Polyline { points, .. } => {
            // two vertices plus at least five interior arc points
            assert!(points.len() >= 7, "got {} points", points.len());
            // positive bulge sweeps counter-clockwise: apex below the chord
            let apex = points
                .iter()
                .cloned()
                .fold(Vector2::ZERO, |acc, p| if p.y < acc.y { p } else { acc });
            assert!((apex - Vector2::new(1.0, -1.0)).length() < 1e-6);
        }
        other => panic!("expected polyline, got {:?}", other),
    }
}

#[test]
fn hatch_yields_outline_without_fill() {
    let prims = interpret_text(&[
        ("0", "SECTION"),
        ("2", "ENTITIES"),
        ("0", "HATCH"),
        ("2", "SOLID"),
        ("70", "1"),
        ("91", "1"),
        ("92", "2"),
        ("72", "0"),
        ("73", "1"),
        ("93", "4"),
        ("10", "0.0"),
        ("20", "0.0"),
        ("10", "4.0"),
        ("20", "0.0"),
        ("10", "4.0"),
        ("20", "3.0"),
        ("10", "0.0"),
        ("20", "3.0"),
        ("0", "ENDSEC"),
        ("0", "EOF"),
    ]);
    assert_eq!(prims.len(), 1);
    match &prims[0] {
        Primitive::Polyline {
            points, closed, ..
        } => {
            assert!(*closed);
            assert_eq!(points.len(), 4);
        }
        other => panic!("expected outline polyline, got {:?}", other),
    }
    assert!(!prims.iter().any(|p| matches!(p, Primitive::Mesh { .. })));
}

#[test]
fn entities_on_off_layers_are_skipped() {
    let prims = interpret_text(&[
        ("0", "SECTION"),
        ("2", "TABLES"),
        ("0", "TABLE"),
        ("2", "LAYER"),
        ("70", "1"),
        ("0", "LAYER"),
        ("2", "HIDDEN"),
        ("62", "-7"), // off
        ("0", "ENDTAB"),
        ("0", "ENDSEC"),
        ("0", "SECTION"),
        ("2", "ENTITIES"),
        ("0", "LINE"),
        ("8", "HIDDEN"),
        ("10", "0.0"),
        ("20", "0.0"),
        ("11", "1.0"),
        ("21", "1.0"),
        ("0", "LINE"),
        ("8", "VISIBLE"),
        ("10", "0.0"),
        ("20", "0.0"),
        ("11", "2.0"),
        ("21", "2.0"),
        ("0", "ENDSEC"),
        ("0", "EOF"),
    ]);
    assert_eq!(prims.len(), 1);
}

#[test]
fn paper_space_entities_are_skipped() {
    let prims = interpret_text(&[
        ("0", "SECTION"),
        ("2", "ENTITIES"),
        ("0", "LINE"),
        ("67", "1"),
        ("10", "0.0"),
        ("20", "0.0"),
        ("11", "1.0"),
        ("21", "1.0"),
        ("0", "ENDSEC"),
        ("0", "EOF"),
    ]);
    assert!(prims.is_empty());
}

#[test]
fn color_resolution_entity_layer_contrast() {
    let pairs = [
        ("0", "SECTION"),
        ("2", "TABLES"),
        ("0", "TABLE"),
        ("2", "LAYER"),
        ("0", "LAYER"),
        ("2", "GREENISH"),
        ("62", "3"),
        ("0", "ENDTAB"),
        ("0", "ENDSEC"),
        ("0", "SECTION"),
        ("2", "ENTITIES"),
        // explicit red index wins
        ("0", "LINE"),
        ("8", "GREENISH"),
        ("62", "1"),
        ("10", "0.0"),
        ("20", "0.0"),
        ("11", "1.0"),
        ("21", "1.0"),
        // ByLayer falls back to the layer's green
        ("0", "LINE"),
        ("8", "GREENISH"),
        ("10", "0.0"),
        ("20", "0.0"),
        ("11", "2.0"),
        ("21", "2.0"),
        // no entity or layer color: contrast (white on black)
        ("0", "LINE"),
        ("8", "NOSUCH"),
        ("10", "0.0"),
        ("20", "0.0"),
        ("11", "3.0"),
        ("21", "3.0"),
        ("0", "ENDSEC"),
        ("0", "EOF"),
    ];
    let prims = interpret_text(&pairs);
    let colors: Vec<Rgb> = prims
        .iter()
        .map(|p| match p {
            Primitive::Polyline { color, .. } => *color,
            other => panic!("expected polyline, got {:?}", other),
        })
        .collect();
    assert_eq!(colors[0], Rgb::from_u32(0xFF0000));
    assert_eq!(colors[1], Rgb::from_u32(0x00FF00));
    assert_eq!(colors[2], Rgb::WHITE);
}

#[test]
fn background_colliding_color_is_substituted() {
    let doc = parse(&dxf(&[
        ("0", "SECTION"),
        ("2", "ENTITIES"),
        ("0", "LINE"),
        ("62", "7"), // white
        ("10", "0.0"),
        ("20", "0.0"),
        ("11", "1.0"),
        ("21", "1.0"),
        ("0", "ENDSEC"),
        ("0", "EOF"),
    ]))
    .unwrap();
    // white background: the white entity would vanish, contrast is black
    let config = InterpreterConfig::new(Rgb::WHITE);
    let prims = interpret(&doc, &config).unwrap();
    match &prims[0] {
        Primitive::Polyline { color, .. } => assert_eq!(*color, Rgb::BLACK),
        other => panic!("expected polyline, got {:?}", other),
    }
}

#[test]
fn text_requires_a_configured_font() {
    let pairs = [
        ("0", "SECTION"),
        ("2", "ENTITIES"),
        ("0", "TEXT"),
        ("1", "hello"),
        ("10", "1.0"),
        ("20", "1.0"),
        ("40", "2.5"),
        ("50", "30.0"),
        ("0", "ENDSEC"),
        ("0", "EOF"),
    ];
    let doc = parse(&dxf(&pairs)).unwrap();

    let without_font = interpret(&doc, &InterpreterConfig::default()).unwrap();
    assert!(without_font.is_empty());

    let config = InterpreterConfig::default().with_font("simplex");
    let with_font = interpret(&doc, &config).unwrap();
    assert_eq!(with_font.len(), 1);
    match &with_font[0] {
        Primitive::Text(run) => {
            assert_eq!(run.text, "hello");
            assert_eq!(run.height, 2.5);
            assert!((run.rotation - 30.0_f64.to_radians()).abs() < 1e-12);
        }
        other => panic!("expected text run, got {:?}", other),
    }
}

#[test]
fn spline_is_sampled_into_polyline() {
    let prims = interpret_text(&[
        ("0", "SECTION"),
        ("2", "ENTITIES"),
        ("0", "SPLINE"),
        ("70", "8"),
        ("71", "3"),
        ("40", "0.0"),
        ("40", "0.0"),
        ("40", "0.0"),
        ("40", "0.0"),
        ("40", "1.0"),
        ("40", "1.0"),
        ("40", "1.0"),
        ("40", "1.0"),
        ("10", "0.0"),
        ("20", "0.0"),
        ("10", "1.0"),
        ("20", "2.0"),
        ("10", "3.0"),
        ("20", "2.0"),
        ("10", "4.0"),
        ("20", "0.0"),
        ("0", "ENDSEC"),
        ("0", "EOF"),
    ]);
    match &prims[0] {
        Primitive::Polyline { points, .. } => {
            // one span at 25 steps: 26 samples, endpoints interpolated
            assert_eq!(points.len(), 26);
            assert!((points[0] - Vector2::new(0.0, 0.0)).length() < 1e-9);
            assert!((points[25] - Vector2::new(4.0, 0.0)).length() < 1e-9);
        }
        other => panic!("expected polyline, got {:?}", other),
    }
}

#[test]
fn solid_becomes_triangle_mesh() {
    let prims = interpret_text(&[
        ("0", "SECTION"),
        ("2", "ENTITIES"),
        ("0", "SOLID"),
        ("10", "0.0"),
        ("20", "0.0"),
        ("11", "2.0"),
        ("21", "0.0"),
        ("12", "0.0"),
        ("22", "2.0"),
        ("13", "2.0"),
        ("23", "2.0"),
        ("0", "ENDSEC"),
        ("0", "EOF"),
    ]);
    match &prims[0] {
        Primitive::Mesh {
            vertices,
            triangles,
            ..
        } => {
            assert_eq!(vertices.len(), 4);
            assert_eq!(triangles.len(), 2);
        }
        other => panic!("expected mesh, got {:?}", other),
    }
}

#[test]
fn transform_composition_matches_insertion() {
    // the documented composition order: translate ∘ rotate ∘ scale
    let t = Transform2::insertion(
        Vector2::new(10.0, 10.0),
        std::f64::consts::FRAC_PI_2,
        1.0,
        1.0,
    );
    let p = t.apply(Vector2::new(1.0, 0.0));
    assert!((p - Vector2::new(10.0, 11.0)).length() < 1e-9);
}
