//! Das Dokument: Polygone, Entities, Components und Sheets.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::geometry::Coordi;
use super::polygon::Polygon;
use super::schematic::{Component, Entity, Gate, GatePath, SchematicSymbol, Sheet};

/// Vollständiges EDA-Dokument.
///
/// Alle Objekte teilen sich einen ID-Raum; `next_id` liefert die nächste freie ID.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Polygone, indexiert nach ID
    #[serde(default)]
    pub polygons: IndexMap<u64, Polygon>,
    /// Bauteil-Typen
    #[serde(default)]
    pub entities: IndexMap<u64, Entity>,
    /// Bauteile
    #[serde(default)]
    pub components: IndexMap<u64, Component>,
    /// Schaltplan-Sheets
    #[serde(default)]
    pub sheets: IndexMap<u64, Sheet>,
    /// Aktives Sheet (Ziel für neue Symbole)
    #[serde(default)]
    pub active_sheet: Option<u64>,
}

impl Document {
    /// Erstellt ein leeres Dokument
    pub fn new() -> Self {
        Self::default()
    }

    /// Berechnet die nächste freie ID über alle Objekt-Arten.
    pub fn next_id(&self) -> u64 {
        let symbols = self.sheets.values().flat_map(|s| s.symbols.keys());
        let gates = self.entities.values().flat_map(|e| e.gates.keys());
        self.polygons
            .keys()
            .chain(self.entities.keys())
            .chain(self.components.keys())
            .chain(self.sheets.keys())
            .chain(symbols)
            .chain(gates)
            .max()
            .copied()
            .unwrap_or(0)
            + 1
    }

    /// Fügt ein Polygon hinzu (ersetzt ein vorhandenes mit gleicher ID).
    pub fn add_polygon(&mut self, polygon: Polygon) {
        self.polygons.insert(polygon.id, polygon);
    }

    pub fn polygon(&self, id: u64) -> Option<&Polygon> {
        self.polygons.get(&id)
    }

    pub fn polygon_mut(&mut self, id: u64) -> Option<&mut Polygon> {
        self.polygons.get_mut(&id)
    }

    pub fn add_entity(&mut self, entity: Entity) {
        self.entities.insert(entity.id, entity);
    }

    pub fn entity(&self, id: u64) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn add_component(&mut self, component: Component) {
        self.components.insert(component.id, component);
    }

    pub fn component(&self, id: u64) -> Option<&Component> {
        self.components.get(&id)
    }

    /// Löst ein (Component, Gate)-Paar über die Entity der Component auf.
    pub fn gate(&self, path: GatePath) -> Option<&Gate> {
        let component = self.components.get(&path.component)?;
        self.entities.get(&component.entity)?.gates.get(&path.gate)
    }

    /// Fügt ein Sheet hinzu; das erste Sheet wird automatisch aktiv.
    pub fn add_sheet(&mut self, sheet: Sheet) {
        if self.active_sheet.is_none() {
            self.active_sheet = Some(sheet.id);
        }
        self.sheets.insert(sheet.id, sheet);
    }

    pub fn active_sheet(&self) -> Option<&Sheet> {
        self.sheets.get(&self.active_sheet?)
    }

    /// Gibt `true` zurück, wenn das Gate auf irgendeinem Sheet platziert ist.
    pub fn is_gate_placed(&self, path: GatePath) -> bool {
        self.sheets.values().any(|sheet| sheet.has_gate(path))
    }

    /// Platziert ein Symbol für `path` auf dem aktiven Sheet.
    ///
    /// Gibt die ID des neuen Schaltplan-Symbols zurück, oder `None` ohne aktives Sheet.
    pub fn insert_schematic_symbol(
        &mut self,
        symbol: u64,
        path: GatePath,
        shift: Coordi,
    ) -> Option<u64> {
        let id = self.next_id();
        let sheet = self.sheets.get_mut(&self.active_sheet?)?;
        sheet.symbols.insert(
            id,
            SchematicSymbol {
                id,
                symbol,
                component: path.component,
                gate: path.gate,
                shift,
            },
        );
        Some(id)
    }

    /// Sucht ein Schaltplan-Symbol auf allen Sheets.
    pub fn schematic_symbol(&self, id: u64) -> Option<&SchematicSymbol> {
        self.sheets.values().find_map(|sheet| sheet.symbols.get(&id))
    }

    pub fn schematic_symbol_mut(&mut self, id: u64) -> Option<&mut SchematicSymbol> {
        self.sheets
            .values_mut()
            .find_map(|sheet| sheet.symbols.get_mut(&id))
    }

    /// Gibt `true` zurück, wenn noch ein Polygon als temporär markiert ist.
    pub fn has_temporary(&self) -> bool {
        self.polygons.values().any(|p| p.temporary)
    }

    /// Entfernt die Temporär-Markierung von allen Polygonen.
    ///
    /// Gibt die Anzahl der betroffenen Polygone zurück.
    pub fn clear_temporary(&mut self) -> usize {
        let mut count = 0;
        for polygon in self.polygons.values_mut().filter(|p| p.temporary) {
            polygon.temporary = false;
            count += 1;
        }
        count
    }
}
