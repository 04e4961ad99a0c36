use std::sync::Arc;

use indexmap::IndexSet;

use crate::core::{ObjectType, SelectableRef};

/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// Menge der aktuell selektierten Referenzen (Arc für O(1)-Clone in Snapshots)
    pub selected: Arc<IndexSet<SelectableRef>>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self {
            selected: Arc::new(IndexSet::new()),
        }
    }

    /// Gibt eine mutable Referenz auf das Set zurück (CoW: klont nur wenn nötig).
    ///
    /// Alle Mutationen der Selektion gehen über diese Methode, damit
    /// Snapshot-Klone O(1) bleiben.
    #[inline]
    pub fn ids_mut(&mut self) -> &mut IndexSet<SelectableRef> {
        Arc::make_mut(&mut self.selected)
    }

    /// Read-only Sicht auf das Set (z.B. für `Selectables::update_preview`).
    pub fn as_set(&self) -> &IndexSet<SelectableRef> {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn contains(&self, r: &SelectableRef) -> bool {
        self.selected.contains(r)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectableRef> {
        self.selected.iter()
    }

    /// Zählt die selektierten Referenzen eines Typs.
    pub fn count_type(&self, kind: ObjectType) -> usize {
        self.selected.iter().filter(|r| r.kind == kind).count()
    }

    /// Erste selektierte Referenz eines Typs.
    pub fn find_one(&self, kind: ObjectType) -> Option<SelectableRef> {
        self.selected.iter().find(|r| r.kind == kind).copied()
    }

    /// Die einzige selektierte Referenz, falls genau eine vom Typ `kind` selektiert ist.
    pub fn single_of(&self, kind: ObjectType) -> Option<SelectableRef> {
        match self.selected.first() {
            Some(r) if self.selected.len() == 1 && r.kind == kind => Some(*r),
            _ => None,
        }
    }

    /// Ersetzt die Selektion durch genau eine Referenz.
    pub fn replace_with(&mut self, r: SelectableRef) {
        let ids = self.ids_mut();
        ids.clear();
        ids.insert(r);
    }

    pub fn clear(&mut self) {
        if !self.selected.is_empty() {
            self.ids_mut().clear();
        }
    }
}

impl FromIterator<SelectableRef> for SelectionState {
    fn from_iter<I: IntoIterator<Item = SelectableRef>>(iter: I) -> Self {
        Self {
            selected: Arc::new(iter.into_iter().collect()),
        }
    }
}
