//! Trait-basiertes Tool-System für mehrstufige Editier-Operationen.
//!
//! Jedes Tool implementiert den `Tool`-Trait und wird in der `ToolRegistry`
//! unter seiner `ToolId` registriert. Der Controller kennt keine konkreten
//! Tools, er verarbeitet nur `ToolResponse`s.

/// Platzieren eines Symbols für ein noch nicht platziertes Gate.
pub mod map_symbol;
/// Verschieben der selektierten Objekte (Ziel jeder Platzier-Verkettung).
pub mod move_items;
/// Abrunden einer Polygon-Ecke mit einem tangentialen Kreisbogen.
pub mod round_off_vertex;
/// Tool-Trait: Schnittstelle für alle Tools.
mod tool;

#[cfg(test)]
pub(crate) mod test_support;

pub use tool::Tool;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::dialogs::Dialogs;
use super::document_context::DocumentContext;
use super::tool_bar::ToolBar;
use crate::core::{Coordi, SymbolLibrary};
use crate::shared::EditorOptions;

// ── Typen ────────────────────────────────────────────────────────

/// Kennung eines Tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolId {
    None,
    Move,
    MapSymbol,
    RoundOffVertex,
}

/// Maustaste eines Klick-Events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    /// Primär (links)
    Left,
    Middle,
    /// Sekundär (rechts)
    Right,
}

/// Taste eines Tastatur-Events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Escape,
    Return,
    Char(char),
}

/// Art des Eingabe-Events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolEvent {
    /// Erster Aufruf (`Tool::begin`)
    Begin,
    /// Zeigerbewegung
    Move,
    Click(MouseButton),
    Key(Key),
}

/// Eingabe eines Tool-Aufrufs: Event + Zeigerposition im Dokument-Raum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolArgs {
    pub event: ToolEvent,
    pub coords: Coordi,
}

impl ToolArgs {
    pub fn begin(coords: Coordi) -> Self {
        Self {
            event: ToolEvent::Begin,
            coords,
        }
    }

    pub fn moved(coords: Coordi) -> Self {
        Self {
            event: ToolEvent::Move,
            coords,
        }
    }

    pub fn click(button: MouseButton, coords: Coordi) -> Self {
        Self {
            event: ToolEvent::Click(button),
            coords,
        }
    }

    pub fn key(key: Key, coords: Coordi) -> Self {
        Self {
            event: ToolEvent::Key(key),
            coords,
        }
    }
}

/// Rückgabe von `begin`/`update`, steuert den Tool-Flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolResponse {
    /// Keine Entscheidung, Tool läuft weiter
    Continue,
    /// Tool beenden ohne Commit (keine Mutation erwartet)
    End,
    /// Mutationen übernehmen und Tool beenden
    Commit,
    /// Mutationen verwerfen und Tool beenden
    Revert,
    /// Commit, danach das angegebene Tool starten
    Next(ToolId),
}

impl ToolResponse {
    /// Gibt `true` zurück, wenn das Tool nach dieser Antwort beendet ist.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ToolResponse::Continue)
    }
}

/// Alles, was ein Tool während eines Aufrufs sehen und verändern darf.
pub struct ToolContext<'a> {
    pub doc: &'a mut DocumentContext,
    pub dialogs: &'a mut dyn Dialogs,
    pub tool_bar: &'a mut ToolBar,
    pub library: &'a dyn SymbolLibrary,
    pub options: &'a EditorOptions,
}

// ── ToolRegistry ─────────────────────────────────────────────────

/// Konstruktor eines Tools
pub type ToolConstructor = fn(ToolId) -> Box<dyn Tool>;

/// Bildet `ToolId` auf Konstruktoren ab.
pub struct ToolRegistry {
    constructors: HashMap<ToolId, ToolConstructor>,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistry {
    /// Erstellt eine Registry mit den Standard-Tools.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(ToolId::Move, move_items::MoveTool::boxed);
        registry.register(ToolId::MapSymbol, map_symbol::MapSymbolTool::boxed);
        registry.register(ToolId::RoundOffVertex, round_off_vertex::RoundOffVertexTool::boxed);
        registry
    }

    /// Registry ohne Tools
    pub fn empty() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Registriert (oder ersetzt) einen Konstruktor.
    pub fn register(&mut self, id: ToolId, constructor: ToolConstructor) {
        self.constructors.insert(id, constructor);
    }

    /// Erzeugt eine frische Tool-Instanz.
    pub fn create(&self, id: ToolId) -> Option<Box<dyn Tool>> {
        self.constructors.get(&id).map(|ctor| ctor(id))
    }

    /// Anzahl registrierter Tools
    pub fn tool_count(&self) -> usize {
        self.constructors.len()
    }
}
