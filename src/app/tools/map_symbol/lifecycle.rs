//! Tool-Implementierung des Map-Symbol-Tools.

use super::super::{Tool, ToolArgs, ToolContext, ToolId, ToolResponse};
use super::{unplaced_gates, MapSymbolTool};
use crate::core::{ObjectType, SelectableRef};

impl Tool for MapSymbolTool {
    fn id(&self) -> ToolId {
        ToolId::MapSymbol
    }

    fn name(&self) -> &str {
        "Symbol zuordnen"
    }

    fn can_begin(&self, ctx: &ToolContext) -> bool {
        !ctx.doc.document().components.is_empty()
    }

    fn begin(&mut self, args: &ToolArgs, ctx: &mut ToolContext) -> ToolResponse {
        let gates = unplaced_gates(ctx.doc.document(), ctx.doc.selection());

        let path = match gates.len() {
            0 => {
                log::info!("Map-Symbol: alle Gates sind bereits platziert");
                return ToolResponse::End;
            }
            1 => match gates.keys().next() {
                Some(path) => *path,
                None => return ToolResponse::End,
            },
            _ => match ctx.dialogs.map_symbol(&gates) {
                Some(path) => path,
                None => return ToolResponse::End,
            },
        };

        let Some(unit) = ctx.doc.document().gate(path).map(|g| g.unit) else {
            ctx.tool_bar.flash("gate not found");
            return ToolResponse::End;
        };
        let Some(unit_name) = ctx.library.unit(unit).map(|u| u.name.clone()) else {
            log::warn!("Map-Symbol: Unit {} nicht in der Library", unit);
            ctx.tool_bar.flash("unit not found");
            return ToolResponse::End;
        };

        let candidates = ctx.library.symbols_for_unit(unit);
        let symbol = match candidates.as_slice() {
            [only] => only.id,
            _ => match ctx.dialogs.select_symbol(ctx.library, unit) {
                Some(id) => id,
                None => return ToolResponse::End,
            },
        };

        if ctx.doc.document().active_sheet().is_none() {
            ctx.tool_bar.flash("no active sheet");
            return ToolResponse::End;
        }
        let Some(id) = ctx
            .doc
            .document_mut()
            .insert_schematic_symbol(symbol, path, args.coords)
        else {
            return ToolResponse::End;
        };

        ctx.doc
            .selection_mut()
            .replace_with(SelectableRef::new(id, ObjectType::SchematicSymbol));
        self.placed = Some(id);

        log::info!(
            "Symbol {} ({}) für {} platziert bei ({}, {})",
            symbol,
            unit_name,
            gates.get(&path).map(String::as_str).unwrap_or("?"),
            args.coords.x,
            args.coords.y
        );
        ToolResponse::Next(ToolId::Move)
    }

    fn update(&mut self, _args: &ToolArgs, _ctx: &mut ToolContext) -> ToolResponse {
        ToolResponse::Continue
    }
}
