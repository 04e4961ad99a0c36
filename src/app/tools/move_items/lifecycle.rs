//! Tool-Implementierung des Move-Tools.

use super::super::{Key, MouseButton, Tool, ToolArgs, ToolContext, ToolEvent, ToolId, ToolResponse};
use super::{collect_targets, is_movable, MoveTool};
use crate::core::Coordi;

impl MoveTool {
    /// Setzt alle Ziele auf Original + Versatz.
    fn apply_delta(&mut self, pointer: Coordi, ctx: &mut ToolContext) {
        self.delta = pointer - self.start;
        let doc = ctx.doc.document_mut();
        for (target, original) in &self.originals {
            target.set_position(doc, *original + self.delta);
        }
        ctx.tool_bar.set_tip(format!(
            "LMB: place  RMB: cancel  Δ = ({}, {})",
            self.delta.x, self.delta.y
        ));
    }
}

impl Tool for MoveTool {
    fn id(&self) -> ToolId {
        ToolId::Move
    }

    fn name(&self) -> &str {
        "Verschieben"
    }

    fn can_begin(&self, ctx: &ToolContext) -> bool {
        ctx.doc.selection().iter().any(is_movable)
    }

    fn begin(&mut self, args: &ToolArgs, ctx: &mut ToolContext) -> ToolResponse {
        self.originals = collect_targets(ctx.doc.document(), ctx.doc.selection());
        if self.originals.is_empty() {
            ctx.tool_bar.flash("nothing to move");
            return ToolResponse::End;
        }
        self.start = args.coords;
        self.delta = Coordi::ZERO;
        ctx.tool_bar.set_tip("LMB: place  RMB: cancel  Δ = (0, 0)");
        log::info!("Move gestartet: {} Ziele", self.originals.len());
        ToolResponse::Continue
    }

    fn update(&mut self, args: &ToolArgs, ctx: &mut ToolContext) -> ToolResponse {
        match args.event {
            ToolEvent::Move => {
                self.apply_delta(args.coords, ctx);
                ToolResponse::Continue
            }
            ToolEvent::Click(MouseButton::Left) | ToolEvent::Key(Key::Return) => {
                log::info!(
                    "Move abgeschlossen: Δ = ({}, {})",
                    self.delta.x,
                    self.delta.y
                );
                ToolResponse::Commit
            }
            ToolEvent::Click(MouseButton::Right) | ToolEvent::Key(Key::Escape) => {
                ToolResponse::Revert
            }
            _ => ToolResponse::Continue,
        }
    }
}
