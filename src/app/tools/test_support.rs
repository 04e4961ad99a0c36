//! Gemeinsame Test-Fixture für Tool-Tests: Kontext ohne Controller.

use super::{Tool, ToolArgs, ToolContext, ToolResponse};
use crate::app::{DocumentContext, ScriptedDialogs, ToolBar};
use crate::core::{Coordi, Document, MemoryLibrary, SelectableRef};
use crate::shared::EditorOptions;

pub(crate) struct Fixture {
    pub doc: DocumentContext,
    pub dialogs: ScriptedDialogs,
    pub tool_bar: ToolBar,
    pub library: MemoryLibrary,
    pub options: EditorOptions,
}

impl Fixture {
    pub fn new(document: Document) -> Self {
        Self {
            doc: DocumentContext::new(document, 10),
            dialogs: ScriptedDialogs::new(),
            tool_bar: ToolBar::new(),
            library: MemoryLibrary::new(),
            options: EditorOptions::default(),
        }
    }

    pub fn select(&mut self, refs: &[SelectableRef]) {
        let ids = self.doc.selection_mut().ids_mut();
        ids.clear();
        ids.extend(refs.iter().copied());
    }

    pub fn ctx(&mut self) -> ToolContext<'_> {
        ToolContext {
            doc: &mut self.doc,
            dialogs: &mut self.dialogs,
            tool_bar: &mut self.tool_bar,
            library: &self.library,
            options: &self.options,
        }
    }

    /// Startet das Tool wie der Controller (Transaktion + `begin`).
    pub fn begin(&mut self, tool: &mut dyn Tool, at: Coordi) -> ToolResponse {
        self.doc.begin_transaction();
        let response = tool.begin(&ToolArgs::begin(at), &mut self.ctx());
        self.settle(response)
    }

    /// Leitet ein Event weiter und schließt die Transaktion bei Bedarf.
    pub fn send(&mut self, tool: &mut dyn Tool, args: ToolArgs) -> ToolResponse {
        let response = tool.update(&args, &mut self.ctx());
        self.settle(response)
    }

    fn settle(&mut self, response: ToolResponse) -> ToolResponse {
        match response {
            ToolResponse::Continue => {}
            ToolResponse::Commit | ToolResponse::Next(_) => {
                self.doc.commit();
            }
            ToolResponse::Revert => self.doc.revert(),
            ToolResponse::End => self.doc.end(),
        }
        response
    }
}
