use super::super::test_support::Fixture;
use super::super::{Key, MouseButton, Tool, ToolArgs, ToolResponse};
use super::geometry::FilletGeometry;
use super::state::RoundOffVertexTool;
use crate::core::{Coordi, Document, ObjectType, Polygon, SelectableRef, Vertex};
use approx::assert_relative_eq;

const POLY: u64 = 1;

fn square_ccw() -> Polygon {
    Polygon::from_positions(
        POLY,
        0,
        &[
            Coordi::new(0, 0),
            Coordi::new(100, 0),
            Coordi::new(100, 100),
            Coordi::new(0, 100),
        ],
    )
}

fn vertex_ref(i: usize) -> SelectableRef {
    SelectableRef::with_vertex(POLY, ObjectType::PolygonVertex, i)
}

fn fixture_with(poly: Polygon, selected: usize) -> Fixture {
    let mut doc = Document::new();
    doc.add_polygon(poly);
    let mut fx = Fixture::new(doc);
    fx.select(&[vertex_ref(selected)]);
    fx
}

fn poly(fx: &Fixture) -> &Polygon {
    fx.doc.document().polygon(POLY).expect("Polygon fehlt")
}

// ── Geometrie ───────────────────────────────────────────────────

#[test]
fn test_geometry_right_angle() {
    let g = FilletGeometry::at_vertex(
        Coordi::new(0, 0),
        Coordi::new(100, 0),
        Coordi::new(0, 100),
        0.99 * std::f64::consts::FRAC_PI_2,
    )
    .expect("rechter Winkel muss gültig sein");
    assert_relative_eq!(g.alpha, std::f64::consts::FRAC_PI_4, epsilon = 1e-12);
    assert_relative_eq!(g.r_max(), 100.0, epsilon = 1e-9);
    assert_relative_eq!(g.delta_max, 100.0);
}

#[test]
fn test_geometry_uses_shorter_edge() {
    let g = FilletGeometry::at_vertex(
        Coordi::new(0, 0),
        Coordi::new(40, 0),
        Coordi::new(0, 100),
        1.5,
    )
    .expect("gültige Ecke");
    assert_relative_eq!(g.delta_max, 40.0);
    let p = g.points(1000.0);
    assert_eq!(p.exit, Coordi::new(40, 0));
    assert_eq!(p.entry, Coordi::new(0, 40));
}

#[test]
fn test_geometry_rejects_collinear_and_zero_length() {
    let limit = 0.99 * std::f64::consts::FRAC_PI_2;
    // exakt kollinear → Halbierende ist der Nullvektor
    assert!(FilletGeometry::at_vertex(
        Coordi::new(0, 0),
        Coordi::new(100, 0),
        Coordi::new(-100, 0),
        limit
    )
    .is_none());
    // fast kollinear (α knapp unter 90°)
    assert!(FilletGeometry::at_vertex(
        Coordi::new(0, 0),
        Coordi::new(100, 0),
        Coordi::new(-100, 1),
        limit
    )
    .is_none());
    // Kante der Länge 0
    assert!(FilletGeometry::at_vertex(
        Coordi::new(0, 0),
        Coordi::new(0, 0),
        Coordi::new(0, 100),
        limit
    )
    .is_none());
}

#[test]
fn test_geometry_handles_huge_edges() {
    let far = 4_000_000_000_i64;
    let g = FilletGeometry::at_vertex(
        Coordi::new(0, 0),
        Coordi::new(far, 0),
        Coordi::new(0, far),
        1.5,
    )
    .expect("lange Kanten müssen gültig sein");
    assert_relative_eq!(g.delta_max, far as f64);
    assert_eq!(g.points(1000.0).exit, Coordi::new(1000, 0));
}

#[test]
fn test_radius_from_cursor_is_monotonic_and_clamped() {
    let g = FilletGeometry::at_vertex(
        Coordi::new(0, 0),
        Coordi::new(100, 0),
        Coordi::new(0, 100),
        1.5,
    )
    .expect("gültige Ecke");
    assert_relative_eq!(g.radius_from_cursor(Coordi::new(-50, -50)), 0.0);
    assert_relative_eq!(g.radius_from_cursor(Coordi::new(30, 30)), 30.0, epsilon = 1e-9);
    assert!(g.radius_from_cursor(Coordi::new(40, 40)) > g.radius_from_cursor(Coordi::new(30, 30)));
    assert_relative_eq!(g.radius_from_cursor(Coordi::new(900, 900)), g.r_max());
}

// ── Tool-Ablauf ─────────────────────────────────────────────────

#[test]
fn test_can_begin_needs_exactly_one_vertex() {
    let mut fx = fixture_with(square_ccw(), 0);
    let tool = RoundOffVertexTool::new();
    assert!(tool.can_begin(&fx.ctx()));

    fx.select(&[vertex_ref(0), vertex_ref(1)]);
    assert!(!tool.can_begin(&fx.ctx()));

    fx.select(&[SelectableRef::with_vertex(POLY, ObjectType::PolygonEdge, 0)]);
    assert!(!tool.can_begin(&fx.ctx()));
}

#[test]
fn test_enter_radius_20_on_square() {
    let mut fx = fixture_with(square_ccw(), 0);
    fx.dialogs = fx.dialogs.clone().with_datum(Some(20.0));
    let mut tool = RoundOffVertexTool::new();

    assert_eq!(fx.begin(&mut tool, Coordi::new(0, 0)), ToolResponse::Continue);
    assert_eq!(poly(&fx).len(), 5, "Genau ein Vertex muss eingefügt werden");
    assert!(poly(&fx).temporary);
    assert!(fx.doc.selection().is_empty());

    let resp = fx.send(&mut tool, ToolArgs::key(Key::Return, Coordi::ZERO));
    assert_eq!(resp, ToolResponse::Commit);
    assert_eq!(fx.dialogs.asked, vec!["Enter arc radius [0]".to_string()]);

    let p = poly(&fx);
    assert_eq!(p.len(), 5);
    assert!(!p.temporary);
    assert!(p.vertices[0].is_arc());
    assert!(!p.vertices[0].arc_reverse, "CCW-Polygon: Bogen nicht umgekehrt");
    assert_eq!(p.vertices[0].position, Coordi::new(0, 20));
    assert_eq!(p.vertices[0].arc_center, Coordi::new(20, 20));
    assert_eq!(p.vertices[1].position, Coordi::new(20, 0));
    assert_eq!(p.vertices[2].position, Coordi::new(100, 0));
    assert!(fx.doc.can_undo());
}

#[test]
fn test_radius_above_max_is_clamped() {
    let mut fx = fixture_with(square_ccw(), 0);
    fx.dialogs = fx.dialogs.clone().with_datum(Some(1000.0));
    let mut tool = RoundOffVertexTool::new();
    fx.begin(&mut tool, Coordi::ZERO);

    assert_eq!(
        fx.send(&mut tool, ToolArgs::key(Key::Return, Coordi::ZERO)),
        ToolResponse::Commit
    );
    assert_relative_eq!(tool.radius(), 100.0, epsilon = 1e-9);
    let p = poly(&fx);
    assert_eq!(p.vertices[0].position, Coordi::new(0, 100));
    assert_eq!(p.vertices[1].position, Coordi::new(100, 0));
}

#[test]
fn test_non_positive_radius_is_degenerate_but_safe() {
    let mut fx = fixture_with(square_ccw(), 0);
    let mut tool = RoundOffVertexTool::new();
    fx.begin(&mut tool, Coordi::new(-50, -50));

    let p = poly(&fx);
    assert_eq!(p.vertices[0].position, Coordi::ZERO);
    assert_eq!(p.vertices[0].arc_center, Coordi::ZERO);
    assert_eq!(p.vertices[1].position, Coordi::ZERO);

    // Dialog mit r ≤ 0 committet nicht
    fx.dialogs = fx.dialogs.clone().with_datum(Some(-5.0)).with_datum(None);
    let ret = ToolArgs::key(Key::Return, Coordi::ZERO);
    assert_eq!(fx.send(&mut tool, ret), ToolResponse::Continue);
    assert_eq!(fx.send(&mut tool, ret), ToolResponse::Continue);
    assert!(poly(&fx).temporary);
}

#[test]
fn test_pointer_moves_follow_bisector() {
    let mut fx = fixture_with(square_ccw(), 0);
    let mut tool = RoundOffVertexTool::new();
    fx.begin(&mut tool, Coordi::ZERO);

    fx.send(&mut tool, ToolArgs::moved(Coordi::new(30, 30)));
    let p = poly(&fx);
    assert_eq!(p.vertices[0].position, Coordi::new(0, 30));
    assert_eq!(p.vertices[0].arc_center, Coordi::new(30, 30));
    assert_eq!(p.vertices[1].position, Coordi::new(30, 0));
    assert!(fx.tool_bar.tip().contains("Current radius: 30.000"));

    let resp = fx.send(&mut tool, ToolArgs::click(MouseButton::Left, Coordi::new(30, 30)));
    assert_eq!(resp, ToolResponse::Commit);
    assert!(!poly(&fx).temporary);
}

#[test]
fn test_updates_then_cancel_restore_polygon() {
    let original = square_ccw();
    let mut fx = fixture_with(original.clone(), 0);
    let mut tool = RoundOffVertexTool::new();
    fx.begin(&mut tool, Coordi::ZERO);

    fx.send(&mut tool, ToolArgs::moved(Coordi::new(10, 10)));
    fx.send(&mut tool, ToolArgs::moved(Coordi::new(25, 40)));
    let resp = fx.send(&mut tool, ToolArgs::key(Key::Escape, Coordi::ZERO));

    assert_eq!(resp, ToolResponse::Revert);
    assert_eq!(poly(&fx), &original);
    assert_eq!(fx.doc.selection().len(), 1);
    assert!(
        fx.doc.selection().contains(&vertex_ref(0)),
        "Abbruch stellt die Selektion wieder her"
    );
    assert!(!fx.doc.can_undo());
}

#[test]
fn test_right_click_cancels() {
    let original = square_ccw();
    let mut fx = fixture_with(original.clone(), 2);
    let mut tool = RoundOffVertexTool::new();
    fx.begin(&mut tool, Coordi::new(90, 90));
    let resp = fx.send(&mut tool, ToolArgs::click(MouseButton::Right, Coordi::ZERO));
    assert_eq!(resp, ToolResponse::Revert);
    assert_eq!(poly(&fx), &original);
    assert!(fx.doc.selection().contains(&vertex_ref(2)));
}

#[test]
#[should_panic(expected = "update ohne vorheriges erfolgreiches begin")]
fn test_update_without_begin_panics() {
    let mut fx = fixture_with(square_ccw(), 0);
    let mut tool = RoundOffVertexTool::new();
    fx.send(&mut tool, ToolArgs::moved(Coordi::new(10, 10)));
}

#[test]
fn test_last_vertex_appends_exit() {
    let mut fx = fixture_with(square_ccw(), 3);
    fx.dialogs = fx.dialogs.clone().with_datum(Some(20.0));
    let mut tool = RoundOffVertexTool::new();
    fx.begin(&mut tool, Coordi::new(0, 100));
    fx.send(&mut tool, ToolArgs::key(Key::Return, Coordi::ZERO));

    let p = poly(&fx);
    assert_eq!(p.len(), 5);
    assert_eq!(p.vertices[0].position, Coordi::new(0, 0));
    assert!(p.vertices[3].is_arc());
    assert_eq!(p.vertices[3].position, Coordi::new(20, 100));
    assert_eq!(p.vertices[4].position, Coordi::new(0, 80));
}

#[test]
fn test_clockwise_polygon_sets_reverse() {
    let mut cw = square_ccw();
    cw.vertices.reverse();
    let mut fx = fixture_with(cw, 0);
    let mut tool = RoundOffVertexTool::new();
    fx.begin(&mut tool, Coordi::ZERO);
    assert!(poly(&fx).vertices[0].arc_reverse);
}

#[test]
fn test_flip_toggles_reverse_only() {
    let mut fx = fixture_with(square_ccw(), 0);
    let mut tool = RoundOffVertexTool::new();
    fx.begin(&mut tool, Coordi::new(30, 30));
    let before = poly(&fx).clone();

    let resp = fx.send(&mut tool, ToolArgs::key(Key::Char('e'), Coordi::ZERO));
    assert_eq!(resp, ToolResponse::Continue);
    let after = poly(&fx);
    assert!(after.vertices[0].arc_reverse);
    assert_eq!(after.positions(), before.positions());

    fx.send(&mut tool, ToolArgs::key(Key::Char('e'), Coordi::ZERO));
    assert!(!poly(&fx).vertices[0].arc_reverse);
}

#[test]
fn test_arc_vertex_or_predecessor_is_rejected() {
    for (arc_at, selected) in [(0, 0), (3, 0)] {
        let mut p = square_ccw();
        let pos = p.vertices[arc_at].position;
        p.vertices[arc_at] = Vertex::arc(pos, Coordi::new(50, 50), false);
        let original = p.clone();

        let mut fx = fixture_with(p, selected);
        let mut tool = RoundOffVertexTool::new();
        assert_eq!(fx.begin(&mut tool, Coordi::ZERO), ToolResponse::End);
        assert_eq!(fx.tool_bar.last_flash(), Some("can't round off arc"));
        assert_eq!(poly(&fx), &original);
        assert_eq!(fx.doc.selection().len(), 1, "Selektion bleibt bei Abbruch erhalten");
    }
}

#[test]
fn test_collinear_edges_are_rejected() {
    let p = Polygon::from_positions(
        POLY,
        0,
        &[
            Coordi::new(0, 0),
            Coordi::new(100, 0),
            Coordi::new(200, 0),
            Coordi::new(100, 100),
        ],
    );
    let original = p.clone();
    let mut fx = fixture_with(p, 1);
    let mut tool = RoundOffVertexTool::new();
    assert_eq!(fx.begin(&mut tool, Coordi::ZERO), ToolResponse::End);
    assert_eq!(fx.tool_bar.last_flash(), Some("can't round off collinear edges"));
    assert_eq!(poly(&fx), &original);
}
