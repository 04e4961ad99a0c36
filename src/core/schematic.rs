//! Schaltplan-Modell: Units, Entities mit Gates, Components, Symbole und Sheets.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::geometry::Coordi;

/// Logische Funktionseinheit (z.B. ein Gatter eines 7400).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: u64,
    pub name: String,
}

/// Gate einer Entity: benannte Instanz einer Unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gate {
    pub id: u64,
    pub name: String,
    /// Suffix für den Referenz-Designator (z.B. "A" → "U1A")
    #[serde(default)]
    pub suffix: String,
    /// Unit-ID (wird über die Library aufgelöst)
    pub unit: u64,
}

/// Entity: Bauteil-Typ mit seinen Gates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: u64,
    pub name: String,
    /// Gates, sortiert nach ID
    pub gates: BTreeMap<u64, Gate>,
}

impl Entity {
    /// Entity ohne Gates
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            gates: BTreeMap::new(),
        }
    }

    /// Fügt ein Gate hinzu (Builder-Stil).
    pub fn with_gate(mut self, gate: Gate) -> Self {
        self.gates.insert(gate.id, gate);
        self
    }
}

/// Component: konkretes Bauteil im Dokument (z.B. "U1").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub id: u64,
    /// Referenz-Designator
    pub refdes: String,
    /// Entity-ID
    pub entity: u64,
}

/// Symbol-Variante einer Unit (grafische Darstellung).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub id: u64,
    /// Unit-ID, zu der dieses Symbol gehört
    pub unit: u64,
    pub name: String,
    /// Bounding-Box relativ zum Symbol-Ursprung (min, max)
    pub bbox: (Coordi, Coordi),
}

/// Schlüssel eines (Component, Gate)-Paars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GatePath {
    pub component: u64,
    pub gate: u64,
}

impl GatePath {
    pub fn new(component: u64, gate: u64) -> Self {
        Self { component, gate }
    }
}

/// Platziertes Symbol auf einem Sheet, gebunden an (Component, Gate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchematicSymbol {
    pub id: u64,
    /// Symbol-ID aus der Library
    pub symbol: u64,
    pub component: u64,
    pub gate: u64,
    /// Platzierung im Dokument
    pub shift: Coordi,
}

impl SchematicSymbol {
    /// Schlüssel des gebundenen Gates
    pub fn gate_path(&self) -> GatePath {
        GatePath::new(self.component, self.gate)
    }
}

/// Sheet: benannte Sammlung platzierter Symbole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub symbols: IndexMap<u64, SchematicSymbol>,
}

impl Sheet {
    /// Leeres Sheet
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            symbols: IndexMap::new(),
        }
    }

    /// Gibt `true` zurück, wenn auf diesem Sheet ein Symbol für das Gate liegt.
    pub fn has_gate(&self, path: GatePath) -> bool {
        self.symbols.values().any(|s| s.gate_path() == path)
    }
}
