//! Tool-Trait: Schnittstelle für alle interaktiven Werkzeuge.

use super::{ToolArgs, ToolContext, ToolId, ToolResponse};

/// Schnittstelle für alle Tools (Round-Off, Map-Symbol, Move, …).
///
/// Tools sind zustandsbehaftet: der Sitzungszustand gehört allein der
/// Tool-Instanz und verschwindet mit ihr. Dokument und Selektion werden
/// nur über den übergebenen `ToolContext` gelesen und geschrieben.
pub trait Tool {
    /// Kennung, unter der das Tool registriert ist
    fn id(&self) -> ToolId;

    /// Anzeigename
    fn name(&self) -> &str;

    /// Reine Prüfung, ob das Tool im aktuellen Zustand starten kann.
    fn can_begin(&self, ctx: &ToolContext) -> bool;

    /// Startet das Tool. Wird genau einmal aufgerufen.
    fn begin(&mut self, args: &ToolArgs, ctx: &mut ToolContext) -> ToolResponse;

    /// Verarbeitet ein Eingabe-Event des laufenden Tools.
    fn update(&mut self, args: &ToolArgs, ctx: &mut ToolContext) -> ToolResponse;
}
