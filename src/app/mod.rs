//! Application-Layer: Dokument-Kontext, Tools, Controller und State.

pub mod controller;
pub mod dialogs;
pub mod document_context;
pub mod history;
/// Application State
///
/// Hält Dokument, Canvas, Dialoge und Library für den Controller zusammen.
pub mod state;
pub mod tool_bar;
pub mod tools;

pub use controller::ToolController;
pub use dialogs::{Dialogs, ScriptedDialogs};
pub use document_context::DocumentContext;
pub use history::{EditHistory, Snapshot};
pub use state::{AppState, SelectionState};
pub use tool_bar::ToolBar;
pub use tools::{
    Key, MouseButton, Tool, ToolArgs, ToolContext, ToolEvent, ToolId, ToolRegistry, ToolResponse,
};
