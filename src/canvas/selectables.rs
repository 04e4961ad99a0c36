//! Selectables: Hit-Test-Index aus orientierten Boxen mit Gruppen und Preview-Markierung.
//!
//! Wird pro Frame komplett neu aufgebaut. Jeder Eintrag trägt nur einen
//! `SelectableRef`-Schlüssel, nie einen Verweis ins Dokument.

use std::collections::HashMap;

use indexmap::IndexSet;

use crate::core::geometry::{rotate, Coordf};
use crate::core::{SelectableRef, ViewTransform};
use crate::shared::options::SELECTABLE_CORNER_PADDING;

/// Flags eines Selectable (als `u8`-Bitmaske gespeichert).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SelectableFlag {
    /// Immer sichtbar, unabhängig vom Layer
    Always = 1,
    /// Wird hervorgehoben, weil ein Mitglied der Gruppe selektiert ist
    Preview = 2,
}

impl SelectableFlag {
    #[inline]
    fn mask(self) -> u8 {
        self as u8
    }
}

/// Orientierte Hit-Box eines Dokument-Objekts im View-Raum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selectable {
    /// Anfass-Punkt (z.B. Vertex-Position)
    pub center: Coordf,
    /// Mittelpunkt der Box
    pub box_center: Coordf,
    /// Breite (≥ 0)
    pub width: f32,
    /// Höhe (≥ 0)
    pub height: f32,
    /// Drehwinkel der Box in Radiant
    pub angle: f32,
    flags: u8,
}

impl Selectable {
    /// Erstellt eine Box; negative Ausdehnungen werden über den Betrag normiert.
    pub fn new(center: Coordf, box_center: Coordf, box_dim: Coordf, angle: f32, always: bool) -> Self {
        Self {
            center,
            box_center,
            width: box_dim.x.abs(),
            height: box_dim.y.abs(),
            angle,
            flags: if always {
                SelectableFlag::Always.mask()
            } else {
                0
            },
        }
    }

    /// Prüft ob `p` innerhalb der (um `expand` mindestens aufgeweiteten) Box liegt.
    pub fn inside(&self, p: Coordf, expand: f32) -> bool {
        let d = rotate(p - self.box_center, -self.angle);
        let w = self.width.max(expand) / 2.0;
        let h = self.height.max(expand) / 2.0;
        d.x >= -w && d.x <= w && d.y >= -h && d.y <= h
    }

    /// Sortiergröße für Picking: Länge bei Linien, Fläche bei Boxen, 0 bei Punkten.
    pub fn area(&self) -> f32 {
        if self.width == 0.0 {
            self.height
        } else if self.height == 0.0 {
            self.width
        } else {
            self.width * self.height
        }
    }

    pub fn is_point(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    pub fn is_line(&self) -> bool {
        (self.width == 0.0) != (self.height == 0.0)
    }

    pub fn is_box(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Eckpunkte der um `padding` vergrößerten, rotierten Box.
    pub fn corners_padded(&self, padding: f32) -> [Coordf; 4] {
        let w = self.width + padding;
        let h = self.height + padding;
        [
            Coordf::new(-w, -h) / 2.0,
            Coordf::new(-w, h) / 2.0,
            Coordf::new(w, h) / 2.0,
            Coordf::new(w, -h) / 2.0,
        ]
        .map(|c| rotate(c, self.angle) + self.box_center)
    }

    pub fn get_flag(&self, flag: SelectableFlag) -> bool {
        self.flags & flag.mask() != 0
    }

    pub fn set_flag(&mut self, flag: SelectableFlag, value: bool) {
        if value {
            self.flags |= flag.mask();
        } else {
            self.flags &= !flag.mask();
        }
    }
}

/// Hit-Test-Index: parallele Listen aus Boxen, Referenzen und Gruppen-IDs.
#[derive(Debug, Clone)]
pub struct Selectables {
    view: ViewTransform,
    /// Rand für `corners` (Darstellung der Hitbox)
    corner_padding: f32,
    items: Vec<Selectable>,
    refs: Vec<SelectableRef>,
    groups: Vec<Option<usize>>,
    /// Referenz → erster Index
    first_index: HashMap<SelectableRef, usize>,
    group_current: Option<usize>,
    group_max: usize,
}

impl Default for Selectables {
    fn default() -> Self {
        Self::new(ViewTransform::IDENTITY)
    }
}

impl Selectables {
    /// Leerer Index mit gegebener View-Transformation.
    pub fn new(view: ViewTransform) -> Self {
        Self {
            view,
            corner_padding: SELECTABLE_CORNER_PADDING,
            items: Vec::new(),
            refs: Vec::new(),
            groups: Vec::new(),
            first_index: HashMap::new(),
            group_current: None,
            group_max: 0,
        }
    }

    pub fn corner_padding(&self) -> f32 {
        self.corner_padding
    }

    /// Setzt den Rand, um den `corners` die Boxen vergrößert.
    pub fn set_corner_padding(&mut self, padding: f32) {
        self.corner_padding = padding.max(0.0);
    }

    /// Eckpunkte eines Eintrags inklusive Rand (für Darstellung der Hitbox).
    pub fn corners(&self, index: usize) -> Option<[Coordf; 4]> {
        self.items
            .get(index)
            .map(|item| item.corners_padded(self.corner_padding))
    }

    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    /// Setzt die View-Transformation für nachfolgende `append`-Aufrufe.
    pub fn set_view(&mut self, view: ViewTransform) {
        self.view = view;
    }

    /// Box zwischen zwei Ecken (Dokument-Raum), ausgerichtet an der View-Rotation.
    pub fn append(&mut self, r: SelectableRef, center: Coordf, a: Coordf, b: Coordf, always: bool) {
        let mut tr = self.view;
        if tr.mirror {
            tr.invert_angle();
        }
        tr.mirror = false;
        let box_center = self.view.transform((a + b) / 2.0);
        self.append_angled(r, center, box_center, b - a, tr.angle_rad(), always);
    }

    /// Punkt-Selectable (Box der Größe 0).
    pub fn append_point(&mut self, r: SelectableRef, center: Coordf, always: bool) {
        self.append(r, center, center, center, always);
    }

    /// Grundoperation: `center` im Dokument-Raum, Box bereits im View-Raum.
    pub fn append_angled(
        &mut self,
        r: SelectableRef,
        center: Coordf,
        box_center: Coordf,
        box_dim: Coordf,
        angle: f32,
        always: bool,
    ) {
        let center = self.view.transform(center);
        self.push(r, Selectable::new(center, box_center, box_dim, angle, always));
    }

    /// Linien-Selectable von `p0` nach `p1` mit Breite `width`.
    ///
    /// Beide Endpunkte werden zuerst in den View-Raum transformiert.
    pub fn append_line(&mut self, r: SelectableRef, p0: Coordf, p1: Coordf, width: f32, always: bool) {
        let p0 = self.view.transform(p0);
        let p1 = self.view.transform(p1);
        let delta = p1 - p0;
        let center = (p0 + p1) / 2.0;
        let dim = Coordf::new(width + delta.length(), width);
        let angle = delta.y.atan2(delta.x);
        self.push(r, Selectable::new(center, center, dim, angle, always));
    }

    fn push(&mut self, r: SelectableRef, item: Selectable) {
        self.first_index.entry(r).or_insert(self.items.len());
        self.items.push(item);
        self.refs.push(r);
        self.groups.push(self.group_current);
    }

    /// Öffnet eine Gruppe. Verschachtelte Gruppen sind ein Programmierfehler.
    pub fn group_begin(&mut self) {
        assert!(
            self.group_current.is_none(),
            "group_begin: Gruppe {:?} ist noch offen",
            self.group_current
        );
        self.group_current = Some(self.group_max);
    }

    /// Schließt die offene Gruppe.
    pub fn group_end(&mut self) {
        assert!(
            self.group_current.is_some(),
            "group_end ohne vorheriges group_begin"
        );
        self.group_current = None;
        self.group_max += 1;
    }

    /// Setzt `Preview` für alle Mitglieder von Gruppen mit selektiertem Eintrag.
    ///
    /// Ungruppierte Einträge werden nur markiert, wenn sie selbst selektiert sind.
    pub fn update_preview(&mut self, selection: &IndexSet<SelectableRef>) {
        let groups: IndexSet<usize> = selection
            .iter()
            .filter_map(|r| self.first_index.get(r))
            .filter_map(|&idx| self.groups[idx])
            .collect();

        for ((item, group), r) in self.items.iter_mut().zip(&self.groups).zip(&self.refs) {
            let preview = match group {
                Some(g) => groups.contains(g),
                None => selection.contains(r),
            };
            item.set_flag(SelectableFlag::Preview, preview);
        }
    }

    /// Leert den Index und setzt die Gruppen-Zählung zurück.
    pub fn clear(&mut self) {
        self.items.clear();
        self.refs.clear();
        self.groups.clear();
        self.first_index.clear();
        self.group_current = None;
        self.group_max = 0;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Selectable] {
        &self.items
    }

    pub fn refs(&self) -> &[SelectableRef] {
        &self.refs
    }

    /// Gruppen-ID eines Eintrags (`None` = ungruppiert oder Index ungültig).
    pub fn group_of(&self, index: usize) -> Option<usize> {
        self.groups.get(index).copied().flatten()
    }

    pub fn get(&self, index: usize) -> Option<(&Selectable, &SelectableRef)> {
        Some((self.items.get(index)?, self.refs.get(index)?))
    }

    /// Index des ersten Eintrags mit dieser Referenz.
    pub fn index_of(&self, r: &SelectableRef) -> Option<usize> {
        self.first_index.get(r).copied()
    }
}
