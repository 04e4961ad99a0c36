//! Spatial-Index (KD-Tree) über den Box-Mittelpunkten der Selectables.
//!
//! Vorfilter per Umkreis-Abfrage, danach exakte `Selectable::inside`-Prüfung.

use std::collections::HashMap;

use kiddo::{KdTree, SquaredEuclidean};

use super::selectables::Selectables;
use crate::core::geometry::Coordf;

/// Drehung der Baum-Koordinaten. Achsparallele Raster teilen sonst massenhaft
/// denselben Achsenwert, was den Bucket-Split des KD-Trees sprengt.
const TREE_ROTATION: f64 = 0.5;

/// Read-only Pick-Index über einem `Selectables`-Stand.
#[derive(Debug, Clone)]
pub struct HitIndex {
    tree: KdTree<f64, 2>,
    /// Tree-Slot → Selectable-Indizes mit identischem Box-Mittelpunkt
    slots: Vec<Vec<usize>>,
    /// Größte halbe Box-Diagonale aller Einträge
    reach: f32,
    len: usize,
}

fn tree_point(p: Coordf) -> [f64; 2] {
    let (sin, cos) = TREE_ROTATION.sin_cos();
    let (x, y) = (p.x as f64, p.y as f64);
    [x * cos - y * sin, x * sin + y * cos]
}

impl HitIndex {
    /// Erstellt einen leeren Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            slots: Vec::new(),
            reach: 0.0,
            len: 0,
        }
    }

    /// Baut den Index aus dem aktuellen Selectables-Stand.
    pub fn from_selectables(selectables: &Selectables) -> Self {
        let mut slot_of: HashMap<[u32; 2], usize> = HashMap::new();
        let mut slots: Vec<Vec<usize>> = Vec::new();
        let mut entries: Vec<[f64; 2]> = Vec::new();
        let mut reach = 0.0_f32;

        for (idx, item) in selectables.items().iter().enumerate() {
            reach = reach.max(0.5 * item.width.hypot(item.height));
            let key = [item.box_center.x.to_bits(), item.box_center.y.to_bits()];
            let slot = *slot_of.entry(key).or_insert_with(|| {
                entries.push(tree_point(item.box_center));
                slots.push(Vec::new());
                slots.len() - 1
            });
            slots[slot].push(idx);
        }

        Self {
            tree: (&entries).into(),
            slots,
            reach,
            len: selectables.len(),
        }
    }

    /// Anzahl indexierter Selectables.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Gibt `true` zurück, wenn keine Selectables im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Alle Einträge, deren (um `expand` aufgeweitete) Box `p` enthält.
    ///
    /// Sortiert nach aufsteigender `area()`, bei Gleichstand nach Einfüge-Reihenfolge.
    pub fn pick(&self, selectables: &Selectables, p: Coordf, expand: f32) -> Vec<usize> {
        if self.is_empty() {
            return Vec::new();
        }

        let radius = (self.reach + expand.max(0.0) * std::f32::consts::FRAC_1_SQRT_2) as f64;
        let mut hits: Vec<usize> = self
            .tree
            .within::<SquaredEuclidean>(&tree_point(p), radius * radius)
            .into_iter()
            .filter_map(|entry| self.slots.get(entry.item as usize))
            .flatten()
            .copied()
            .filter(|&idx| {
                selectables
                    .items()
                    .get(idx)
                    .is_some_and(|item| item.inside(p, expand))
            })
            .collect();

        hits.sort_by(|&a, &b| {
            let area = |i: usize| selectables.items()[i].area();
            area(a).total_cmp(&area(b)).then(a.cmp(&b))
        });
        hits
    }

    /// Kleinster Treffer an `p`.
    pub fn pick_first(&self, selectables: &Selectables, p: Coordf, expand: f32) -> Option<usize> {
        self.pick(selectables, p, expand).into_iter().next()
    }
}

impl Default for HitIndex {
    fn default() -> Self {
        Self::empty()
    }
}
