//! Move-Tool: verschiebt alle selektierten Objekte um den Zeiger-Versatz.
//!
//! Ziel jeder Platzier-Verkettung (z.B. nach dem Map-Symbol-Tool).

mod lifecycle;

use indexmap::IndexMap;

use super::{Tool, ToolId};
use crate::app::SelectionState;
use crate::core::{Coordi, Document, ObjectType, SelectableRef};

/// Einzelne verschiebbare Koordinate im Dokument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveTarget {
    /// Platzierung eines Schaltplan-Symbols
    Symbol(u64),
    /// Position eines Polygon-Vertex
    Vertex { polygon: u64, index: usize },
    /// Bogen-Mittelpunkt eines Polygon-Vertex
    ArcCenter { polygon: u64, index: usize },
}

impl MoveTarget {
    /// Liest die aktuelle Position aus dem Dokument.
    pub fn position(&self, doc: &Document) -> Option<Coordi> {
        match *self {
            MoveTarget::Symbol(id) => doc.schematic_symbol(id).map(|s| s.shift),
            MoveTarget::Vertex { polygon, index } => doc
                .polygon(polygon)
                .and_then(|p| p.vertices.get(index))
                .map(|v| v.position),
            MoveTarget::ArcCenter { polygon, index } => doc
                .polygon(polygon)
                .and_then(|p| p.vertices.get(index))
                .map(|v| v.arc_center),
        }
    }

    /// Schreibt eine neue Position ins Dokument.
    pub fn set_position(&self, doc: &mut Document, pos: Coordi) {
        match *self {
            MoveTarget::Symbol(id) => {
                if let Some(s) = doc.schematic_symbol_mut(id) {
                    s.shift = pos;
                }
            }
            MoveTarget::Vertex { polygon, index } => {
                if let Some(v) = doc
                    .polygon_mut(polygon)
                    .and_then(|p| p.vertices.get_mut(index))
                {
                    v.position = pos;
                }
            }
            MoveTarget::ArcCenter { polygon, index } => {
                if let Some(v) = doc
                    .polygon_mut(polygon)
                    .and_then(|p| p.vertices.get_mut(index))
                {
                    v.arc_center = pos;
                }
            }
        }
    }
}

/// Gibt `true` zurück, wenn die Referenz vom Move-Tool bewegt werden kann.
pub fn is_movable(r: &SelectableRef) -> bool {
    matches!(
        r.kind,
        ObjectType::SchematicSymbol
            | ObjectType::PolygonVertex
            | ObjectType::Polygon
            | ObjectType::PolygonArcCenter
    )
}

/// Löst die Selektion in Einzel-Ziele mit ihrer aktuellen Position auf.
///
/// Ein ganzes Polygon liefert alle Vertices und die Mittelpunkte seiner Bögen;
/// doppelte Ziele werden zusammengefasst.
pub fn collect_targets(doc: &Document, selection: &SelectionState) -> IndexMap<MoveTarget, Coordi> {
    let mut targets = IndexMap::new();
    for r in selection.iter().filter(|r| is_movable(r)) {
        match r.kind {
            ObjectType::SchematicSymbol => {
                push_target(&mut targets, doc, MoveTarget::Symbol(r.id));
            }
            ObjectType::PolygonVertex => {
                let target = MoveTarget::Vertex {
                    polygon: r.id,
                    index: r.vertex,
                };
                push_target(&mut targets, doc, target);
            }
            ObjectType::PolygonArcCenter => {
                let target = MoveTarget::ArcCenter {
                    polygon: r.id,
                    index: r.vertex,
                };
                push_target(&mut targets, doc, target);
            }
            ObjectType::Polygon => {
                let Some(poly) = doc.polygon(r.id) else {
                    continue;
                };
                for (index, v) in poly.vertices.iter().enumerate() {
                    targets.insert(
                        MoveTarget::Vertex {
                            polygon: r.id,
                            index,
                        },
                        v.position,
                    );
                    if v.is_arc() {
                        targets.insert(
                            MoveTarget::ArcCenter {
                                polygon: r.id,
                                index,
                            },
                            v.arc_center,
                        );
                    }
                }
            }
            _ => {}
        }
    }
    targets
}

fn push_target(targets: &mut IndexMap<MoveTarget, Coordi>, doc: &Document, target: MoveTarget) {
    match target.position(doc) {
        Some(pos) => {
            targets.insert(target, pos);
        }
        None => log::debug!("Move: Ziel {:?} nicht im Dokument", target),
    }
}

/// Move-Tool
#[derive(Debug, Default)]
pub struct MoveTool {
    /// Ursprüngliche Positionen aller bewegten Ziele
    originals: IndexMap<MoveTarget, Coordi>,
    /// Zeigerposition beim Start
    start: Coordi,
    /// Aktueller Versatz
    delta: Coordi,
}

impl MoveTool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Konstruktor für die `ToolRegistry`.
    pub fn boxed(_id: ToolId) -> Box<dyn Tool> {
        Box::new(Self::new())
    }

    /// Aktueller Versatz zum Startpunkt
    pub fn delta(&self) -> Coordi {
        self.delta
    }

    /// Anzahl bewegter Einzel-Ziele
    pub fn target_count(&self) -> usize {
        self.originals.len()
    }
}
