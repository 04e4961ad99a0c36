//! Referenz-Schlüssel auf Dokument-Objekte (für Selektion und Selectables).
//!
//! Selectables halten nie Zeiger ins Dokument, sondern nur diese Schlüssel;
//! aufgelöst wird bei Bedarf per Lookup.

use serde::{Deserialize, Serialize};

/// Objekt-Typ einer Referenz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ObjectType {
    /// Ganzes Polygon
    Polygon,
    /// Kante `vertex → vertex + 1`
    PolygonEdge,
    /// Einzelner Polygon-Vertex
    PolygonVertex,
    /// Mittelpunkt eines Arc-Vertex
    PolygonArcCenter,
    /// Bauteil (Component)
    Component,
    /// Platziertes Symbol auf einem Sheet
    SchematicSymbol,
}

/// Layer-Bereich `[start, end]` (inklusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LayerRange {
    pub start: i32,
    pub end: i32,
}

impl LayerRange {
    /// Bereich über genau einen Layer
    pub fn single(layer: i32) -> Self {
        Self {
            start: layer,
            end: layer,
        }
    }

    /// Bereich über mehrere Layer (Grenzen werden sortiert)
    pub fn new(a: i32, b: i32) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }
}

impl Default for LayerRange {
    fn default() -> Self {
        Self::single(0)
    }
}

/// Schlüssel eines selektierbaren Objekts: ID + Typ + Vertex + Layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SelectableRef {
    /// Objekt-ID im Dokument
    pub id: u64,
    /// Objekt-Typ
    pub kind: ObjectType,
    /// Vertex-Index (0 für Objekte ohne Vertices)
    #[serde(default)]
    pub vertex: usize,
    /// Layer-Bereich
    #[serde(default)]
    pub layer: LayerRange,
}

impl SelectableRef {
    /// Referenz ohne Vertex auf dem Standard-Layer
    pub fn new(id: u64, kind: ObjectType) -> Self {
        Self {
            id,
            kind,
            vertex: 0,
            layer: LayerRange::default(),
        }
    }

    /// Referenz auf einen Vertex
    pub fn with_vertex(id: u64, kind: ObjectType, vertex: usize) -> Self {
        Self {
            vertex,
            ..Self::new(id, kind)
        }
    }

    /// Setzt den Layer-Bereich (Builder-Stil).
    pub fn on_layer(mut self, layer: LayerRange) -> Self {
        self.layer = layer;
        self
    }
}
