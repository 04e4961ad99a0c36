//! Dokument-Kontext: einziger Besitzer von Dokument, Selektion und Undo-History.
//!
//! Tools mutieren ausschließlich über `document_mut()` innerhalb einer
//! Transaktion, die der Controller mit `begin_transaction` öffnet und mit
//! `commit`, `revert` oder `end` schließt.

use std::sync::Arc;

use super::history::{EditHistory, Snapshot};
use super::SelectionState;
use crate::core::Document;

/// Dokument + Selektion + Commit/Revert-Semantik
#[derive(Debug)]
pub struct DocumentContext {
    document: Arc<Document>,
    selection: SelectionState,
    history: EditHistory,
    /// Stand bei Transaktionsbeginn
    transaction: Option<Snapshot>,
    /// Wurde das Dokument seit Transaktionsbeginn angefasst?
    dirty: bool,
}

impl DocumentContext {
    /// Erstellt einen Kontext mit gegebener Undo-Tiefe.
    pub fn new(document: Document, history_depth: usize) -> Self {
        Self {
            document: Arc::new(document),
            selection: SelectionState::new(),
            history: EditHistory::new_with_capacity(history_depth),
            transaction: None,
            dirty: false,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Schreibzugriff auf das Dokument (CoW: klont nur, wenn ein Snapshot es teilt).
    pub fn document_mut(&mut self) -> &mut Document {
        self.dirty = true;
        Arc::make_mut(&mut self.document)
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionState {
        &mut self.selection
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            document: Arc::clone(&self.document),
            selection: self.selection.clone(),
        }
    }

    /// Öffnet eine Transaktion (O(1)-Snapshot des aktuellen Stands).
    pub fn begin_transaction(&mut self) {
        if self.transaction.is_some() {
            log::warn!("begin_transaction: offene Transaktion wird verworfen");
        }
        self.transaction = Some(self.snapshot());
        self.dirty = false;
    }

    pub fn in_transaction(&self) -> bool {
        self.transaction.is_some()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Übernimmt alle Mutationen der Transaktion.
    ///
    /// Übrig gebliebene Temporär-Markierungen werden entfernt. Der Stand vor der
    /// Transaktion landet im Undo-Stack, sofern sich etwas geändert hat.
    /// Gibt `true` zurück, wenn ein Undo-Schritt angelegt wurde.
    pub fn commit(&mut self) -> bool {
        if self.document.has_temporary() {
            let count = self.document_mut().clear_temporary();
            log::warn!("commit: {} temporäre Polygone finalisiert", count);
        }
        let recorded = match self.transaction.take() {
            Some(before) if self.dirty => {
                self.history.record_snapshot(before);
                true
            }
            _ => false,
        };
        self.dirty = false;
        recorded
    }

    /// Verwirft alle Mutationen der Transaktion und stellt die Selektion
    /// vom Transaktionsbeginn wieder her.
    pub fn revert(&mut self) {
        if let Some(before) = self.transaction.take() {
            self.apply(before);
        }
        self.dirty = false;
    }

    /// Schließt die Transaktion ohne Commit.
    ///
    /// Hat das Tool trotzdem mutiert, wird zurückgesetzt.
    pub fn end(&mut self) {
        if self.dirty {
            log::warn!("end: Tool hat ungesicherte Änderungen hinterlassen, setze zurück");
            self.revert();
        } else {
            self.transaction = None;
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Macht den letzten Commit rückgängig. Während einer Transaktion gesperrt.
    pub fn undo(&mut self) -> bool {
        if self.in_transaction() {
            log::warn!("undo während laufender Transaktion ignoriert");
            return false;
        }
        let current = self.snapshot();
        match self.history.pop_undo_with_current(current) {
            Some(snap) => {
                self.apply(snap);
                true
            }
            None => false,
        }
    }

    /// Stellt den zuletzt rückgängig gemachten Commit wieder her.
    pub fn redo(&mut self) -> bool {
        if self.in_transaction() {
            log::warn!("redo während laufender Transaktion ignoriert");
            return false;
        }
        let current = self.snapshot();
        match self.history.pop_redo_with_current(current) {
            Some(snap) => {
                self.apply(snap);
                true
            }
            None => false,
        }
    }

    fn apply(&mut self, snap: Snapshot) {
        self.document = snap.document;
        self.selection = snap.selection;
    }
}
