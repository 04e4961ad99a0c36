use crate::app::tools::ToolContext;
use crate::app::{Dialogs, DocumentContext, ToolBar};
use crate::canvas::Canvas;
use crate::core::{Document, SymbolLibrary, ViewTransform};
use crate::shared::EditorOptions;

/// Hauptzustand des Editors
pub struct AppState {
    /// Dokument, Selektion und Undo-History
    pub doc: DocumentContext,
    /// Tip-Zeile und Flash-Meldungen
    pub tool_bar: ToolBar,
    /// Blockierende Eingabe-Dialoge der Oberfläche
    pub dialogs: Box<dyn Dialogs>,
    /// Symbol-Library (nur lesend)
    pub library: Box<dyn SymbolLibrary>,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Selectables + Pick-Index, pro Frame neu aufgebaut
    pub canvas: Canvas,
}

impl AppState {
    /// Erstellt einen State für `document` und baut den Canvas einmal auf.
    pub fn new(
        document: Document,
        library: Box<dyn SymbolLibrary>,
        dialogs: Box<dyn Dialogs>,
        options: EditorOptions,
    ) -> Self {
        let mut state = Self {
            doc: DocumentContext::new(document, options.history_depth),
            tool_bar: ToolBar::new(),
            dialogs,
            library,
            options,
            canvas: Canvas::new(ViewTransform::IDENTITY),
        };
        state.refresh_canvas();
        state
    }

    /// Leiht die Felder aus, die ein Tool während eines Aufrufs braucht.
    pub fn tool_context(&mut self) -> ToolContext<'_> {
        ToolContext {
            doc: &mut self.doc,
            dialogs: self.dialogs.as_mut(),
            tool_bar: &mut self.tool_bar,
            library: self.library.as_ref(),
            options: &self.options,
        }
    }

    /// Baut Selectables und Pick-Index aus dem aktuellen Dokument neu auf.
    pub fn refresh_canvas(&mut self) {
        self.canvas.rebuild(
            self.doc.document(),
            self.doc.selection().as_set(),
            self.library.as_ref(),
            &self.options,
        );
    }

    /// Selektiert das kleinste Objekt unter `p` (View-Raum).
    ///
    /// Mit `additive` wird die Selektion erweitert, sonst ersetzt.
    /// Gibt `true` zurück, wenn etwas getroffen wurde.
    pub fn pick_select(&mut self, p: glam::Vec2, additive: bool) -> bool {
        let hit = self
            .canvas
            .pick(p, self.options.pick_expand)
            .into_iter()
            .next();
        let selection = self.doc.selection_mut();
        match hit {
            Some(r) if additive => {
                selection.ids_mut().insert(r);
            }
            Some(r) => selection.replace_with(r),
            None if !additive => selection.clear(),
            None => {}
        }
        self.refresh_canvas();
        hit.is_some()
    }
}
