//! EDA Canvas Editor Core.
//! Hit-Test-Index und Tool-System als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod canvas;
pub mod core;
pub mod shared;

pub use app::{
    AppState, Dialogs, DocumentContext, ScriptedDialogs, ToolArgs, ToolController, ToolId,
    ToolResponse,
};
pub use canvas::{Canvas, HitIndex, Selectable, SelectableFlag, Selectables};
pub use core::{Document, MemoryLibrary, ObjectType, Polygon, SelectableRef, ViewTransform};
pub use shared::EditorOptions;
