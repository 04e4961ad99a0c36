//! Polygon-Modell: geschlossener Ring aus Line-/Arc-Vertices.

use serde::{Deserialize, Serialize};

use super::geometry::{is_counter_clockwise, Coordi};

/// Typ eines Vertex: bestimmt die Kante zum nächsten Vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VertexType {
    /// Gerade Kante
    #[default]
    Line,
    /// Kreisbogen um `arc_center`
    Arc,
}

/// Eckpunkt eines Polygons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    /// Position im Dokument
    pub position: Coordi,
    /// Kanten-Typ zum nächsten Vertex
    #[serde(default)]
    pub kind: VertexType,
    /// Bogen-Mittelpunkt (nur bei `VertexType::Arc` relevant)
    #[serde(default)]
    pub arc_center: Coordi,
    /// Umgekehrte Bogenrichtung
    #[serde(default)]
    pub arc_reverse: bool,
}

impl Vertex {
    /// Line-Vertex an `position`
    pub fn new(position: Coordi) -> Self {
        Self {
            position,
            kind: VertexType::Line,
            arc_center: Coordi::ZERO,
            arc_reverse: false,
        }
    }

    /// Arc-Vertex mit Mittelpunkt und Richtung
    pub fn arc(position: Coordi, arc_center: Coordi, arc_reverse: bool) -> Self {
        Self {
            position,
            kind: VertexType::Arc,
            arc_center,
            arc_reverse,
        }
    }

    /// Gibt `true` zurück für Arc-Vertices.
    pub fn is_arc(&self) -> bool {
        self.kind == VertexType::Arc
    }
}

/// Geschlossenes Polygon. Indizes laufen modulo Vertex-Anzahl um.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    /// Eindeutige ID im Dokument
    pub id: u64,
    /// Vertices in Ring-Reihenfolge
    pub vertices: Vec<Vertex>,
    /// Layer
    #[serde(default)]
    pub layer: i32,
    /// Wird gerade interaktiv bearbeitet (evtl. selbstüberschneidend)
    #[serde(default)]
    pub temporary: bool,
}

impl Polygon {
    /// Leeres Polygon
    pub fn new(id: u64, layer: i32) -> Self {
        Self {
            id,
            vertices: Vec::new(),
            layer,
            temporary: false,
        }
    }

    /// Polygon aus Line-Vertices
    pub fn from_positions(id: u64, layer: i32, positions: &[Coordi]) -> Self {
        Self {
            vertices: positions.iter().copied().map(Vertex::new).collect(),
            ..Self::new(id, layer)
        }
    }

    /// Anzahl der Vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Gibt `true` zurück, wenn das Polygon keine Vertices hat.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Bildet einen beliebigen (auch negativen) Index auf den Ring ab.
    pub fn wrap_index(&self, i: isize) -> usize {
        let n = self.vertices.len().max(1) as isize;
        i.rem_euclid(n) as usize
    }

    /// Vertex-Positionen in Ring-Reihenfolge
    pub fn positions(&self) -> Vec<Coordi> {
        self.vertices.iter().map(|v| v.position).collect()
    }

    /// Umlaufsinn des Rings (nur Vertex-Positionen, Bögen ignoriert).
    pub fn is_counter_clockwise(&self) -> bool {
        is_counter_clockwise(&self.positions())
    }

    /// Kante `i → i+1` als Positions-Paar
    pub fn edge(&self, i: usize) -> Option<(Coordi, Coordi)> {
        if self.vertices.is_empty() {
            return None;
        }
        let a = self.vertices.get(i)?.position;
        let b = self.vertices[self.wrap_index(i as isize + 1)].position;
        Some((a, b))
    }
}
