//! Map-Symbol-Tool: platziert ein Schaltplan-Symbol für ein noch nicht
//! platziertes (Component, Gate)-Paar und übergibt an das Move-Tool.

mod lifecycle;

use std::collections::BTreeMap;

use super::{Tool, ToolId};
use crate::app::SelectionState;
use crate::core::{Document, GatePath, ObjectType};

/// Map-Symbol-Tool
#[derive(Debug, Default)]
pub struct MapSymbolTool {
    /// ID des zuletzt platzierten Schaltplan-Symbols
    placed: Option<u64>,
}

impl MapSymbolTool {
    pub fn new() -> Self {
        Self { placed: None }
    }

    /// Konstruktor für die `ToolRegistry`.
    pub fn boxed(_id: ToolId) -> Box<dyn Tool> {
        Box::new(Self::new())
    }

    /// ID des platzierten Symbols nach erfolgreichem `begin`.
    pub fn placed(&self) -> Option<u64> {
        self.placed
    }
}

/// Sammelt alle Gates ohne Symbol auf irgendeinem Sheet, mit Label `refdes + suffix`.
///
/// Ist genau eine Component selektiert, werden nur deren Gates geliefert.
pub fn unplaced_gates(doc: &Document, selection: &SelectionState) -> BTreeMap<GatePath, String> {
    let filter = selection.single_of(ObjectType::Component).map(|r| r.id);

    let mut gates = BTreeMap::new();
    for component in doc.components.values() {
        if filter.is_some_and(|id| id != component.id) {
            continue;
        }
        let Some(entity) = doc.entity(component.entity) else {
            log::warn!(
                "Component {} verweist auf unbekannte Entity {}",
                component.refdes,
                component.entity
            );
            continue;
        };
        for gate in entity.gates.values() {
            let path = GatePath::new(component.id, gate.id);
            if !doc.is_gate_placed(path) {
                gates.insert(path, format!("{}{}", component.refdes, gate.suffix));
            }
        }
    }
    gates
}
