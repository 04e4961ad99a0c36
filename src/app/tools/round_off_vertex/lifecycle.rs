//! Lifecycle-Methoden des RoundOffVertexTool (Tool-Implementierung).

use super::super::{Key, MouseButton, Tool, ToolArgs, ToolContext, ToolEvent, ToolId, ToolResponse};
use super::geometry::FilletGeometry;
use super::state::{FilletSession, RoundOffVertexTool};
use crate::core::{Coordi, ObjectType, Vertex, VertexType};

impl RoundOffVertexTool {
    /// Schreibt die Bogen-Geometrie für Radius `r` ins Polygon.
    fn apply_radius(&mut self, r: f64, ctx: &mut ToolContext) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.radius_current = session.geometry.clamp_radius(r);
        let points = session.geometry.points(session.radius_current);

        let Some(poly) = ctx.doc.document_mut().polygon_mut(session.polygon) else {
            log::warn!("Round-Off: Polygon {} verschwunden", session.polygon);
            return;
        };
        let entry = &mut poly.vertices[session.entry];
        entry.position = points.entry;
        entry.arc_center = points.center;
        poly.vertices[session.exit].position = points.exit;
    }

    /// Leitet den Radius aus der Zeigerposition ab und aktualisiert den Tip.
    fn update_cursor(&mut self, c: Coordi, ctx: &mut ToolContext) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let r = session.geometry.radius_from_cursor(c);
        ctx.tool_bar.set_tip(format!(
            "LMB: set radius  RMB: cancel  Return: enter radius  e: flip arc  Current radius: {:.3}",
            r
        ));
        self.apply_radius(r, ctx);
    }

    /// Entfernt die Temporär-Markierung vor dem Commit.
    fn finish(&mut self, ctx: &mut ToolContext) -> ToolResponse {
        if let Some(session) = self.session.as_ref() {
            if let Some(poly) = ctx.doc.document_mut().polygon_mut(session.polygon) {
                poly.temporary = false;
            }
            log::info!(
                "Ecke {} von Polygon {} mit Radius {:.3} abgerundet",
                session.entry,
                session.polygon,
                session.radius_current
            );
        }
        ToolResponse::Commit
    }

    fn flip_arc(&mut self, ctx: &mut ToolContext) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        if let Some(poly) = ctx.doc.document_mut().polygon_mut(session.polygon) {
            let entry = &mut poly.vertices[session.entry];
            entry.arc_reverse = !entry.arc_reverse;
        }
    }
}

impl Tool for RoundOffVertexTool {
    fn id(&self) -> ToolId {
        ToolId::RoundOffVertex
    }

    fn name(&self) -> &str {
        "Ecke abrunden"
    }

    fn can_begin(&self, ctx: &ToolContext) -> bool {
        ctx.doc.selection().count_type(ObjectType::PolygonVertex) == 1
    }

    fn begin(&mut self, args: &ToolArgs, ctx: &mut ToolContext) -> ToolResponse {
        if !self.can_begin(ctx) {
            return ToolResponse::End;
        }
        let Some(target) = ctx.doc.selection().find_one(ObjectType::PolygonVertex) else {
            return ToolResponse::End;
        };

        let alpha_limit = ctx.options.fillet_alpha_limit();
        let (geometry, reverse) = {
            let Some(poly) = ctx.doc.document().polygon(target.id) else {
                ctx.tool_bar.flash("polygon not found");
                return ToolResponse::End;
            };
            if poly.len() < 3 || target.vertex >= poly.len() {
                ctx.tool_bar.flash("can't round off degenerate polygon");
                return ToolResponse::End;
            }
            let i = target.vertex;
            let next = poly.wrap_index(i as isize + 1);
            let prev = poly.wrap_index(i as isize - 1);
            if poly.vertices[i].is_arc() || poly.vertices[prev].is_arc() {
                ctx.tool_bar.flash("can't round off arc");
                return ToolResponse::End;
            }
            let Some(geometry) = FilletGeometry::at_vertex(
                poly.vertices[i].position,
                poly.vertices[next].position,
                poly.vertices[prev].position,
                alpha_limit,
            ) else {
                ctx.tool_bar.flash("can't round off collinear edges");
                return ToolResponse::End;
            };
            (geometry, !poly.is_counter_clockwise())
        };

        ctx.doc.selection_mut().clear();

        let Some(poly) = ctx.doc.document_mut().polygon_mut(target.id) else {
            return ToolResponse::End;
        };
        let entry = target.vertex;
        // Austritt direkt hinter dem Eintritt; beim letzten Vertex ist das ein Anhängen
        let exit = entry + 1;
        poly.vertices.insert(exit, Vertex::new(Coordi::ZERO));
        let v = &mut poly.vertices[entry];
        v.kind = VertexType::Arc;
        v.arc_reverse = reverse;
        poly.temporary = true;

        log::info!(
            "Round-Off gestartet: Polygon {}, Ecke {}, α = {:.4}, r_max = {:.3}",
            target.id,
            entry,
            geometry.alpha,
            geometry.r_max()
        );
        self.session = Some(FilletSession {
            polygon: target.id,
            entry,
            exit,
            geometry,
            radius_current: 0.0,
        });
        self.update_cursor(args.coords, ctx);
        ToolResponse::Continue
    }

    fn update(&mut self, args: &ToolArgs, ctx: &mut ToolContext) -> ToolResponse {
        assert!(
            self.session.is_some(),
            "Round-Off: update ohne vorheriges erfolgreiches begin"
        );

        match args.event {
            ToolEvent::Move => {
                self.update_cursor(args.coords, ctx);
                ToolResponse::Continue
            }
            ToolEvent::Click(MouseButton::Left) => self.finish(ctx),
            ToolEvent::Click(MouseButton::Right) | ToolEvent::Key(Key::Escape) => {
                ToolResponse::Revert
            }
            ToolEvent::Key(Key::Char('e')) => {
                self.flip_arc(ctx);
                ToolResponse::Continue
            }
            ToolEvent::Key(Key::Return) => {
                match ctx.dialogs.ask_datum("Enter arc radius", self.radius()) {
                    Some(r) if r > 0.0 => {
                        self.apply_radius(r, ctx);
                        self.finish(ctx)
                    }
                    _ => ToolResponse::Continue,
                }
            }
            _ => ToolResponse::Continue,
        }
    }
}
