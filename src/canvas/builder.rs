//! Canvas: baut pro Frame die Selectables aus dem Dokument neu auf.

use indexmap::IndexSet;

use super::hit_index::HitIndex;
use super::selectables::Selectables;
use crate::core::geometry::to_coordf;
use crate::core::{
    Document, LayerRange, ObjectType, SelectableRef, SymbolLibrary, ViewTransform,
};
use crate::shared::EditorOptions;

/// Hit-Test-Zustand eines Frames: Selectables + Pick-Index.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    selectables: Selectables,
    hit_index: HitIndex,
}

impl Canvas {
    /// Leerer Canvas mit gegebener View-Transformation.
    pub fn new(view: ViewTransform) -> Self {
        Self {
            selectables: Selectables::new(view),
            hit_index: HitIndex::empty(),
        }
    }

    pub fn selectables(&self) -> &Selectables {
        &self.selectables
    }

    pub fn set_view(&mut self, view: ViewTransform) {
        self.selectables.set_view(view);
    }

    /// Baut Selectables und Pick-Index aus dem Dokument neu auf.
    ///
    /// Pro Polygon eine Gruppe (Kanten, Vertices, Bogen-Mittelpunkte);
    /// Symbole des aktiven Sheets ungruppiert als Box.
    pub fn rebuild(
        &mut self,
        doc: &Document,
        selection: &IndexSet<SelectableRef>,
        library: &dyn SymbolLibrary,
        options: &EditorOptions,
    ) {
        let sel = &mut self.selectables;
        sel.clear();
        sel.set_corner_padding(options.selectable_corner_padding);

        for polygon in doc.polygons.values() {
            let layer = LayerRange::single(polygon.layer);
            sel.group_begin();
            for (i, vertex) in polygon.vertices.iter().enumerate() {
                if let Some((a, b)) = polygon.edge(i) {
                    sel.append_line(
                        SelectableRef::with_vertex(polygon.id, ObjectType::PolygonEdge, i)
                            .on_layer(layer),
                        to_coordf(a),
                        to_coordf(b),
                        options.edge_selectable_width,
                        false,
                    );
                }
                sel.append_point(
                    SelectableRef::with_vertex(polygon.id, ObjectType::PolygonVertex, i)
                        .on_layer(layer),
                    to_coordf(vertex.position),
                    false,
                );
                if vertex.is_arc() {
                    sel.append_point(
                        SelectableRef::with_vertex(polygon.id, ObjectType::PolygonArcCenter, i)
                            .on_layer(layer),
                        to_coordf(vertex.arc_center),
                        false,
                    );
                }
            }
            sel.group_end();
        }

        if let Some(sheet) = doc.active_sheet() {
            for placed in sheet.symbols.values() {
                let r = SelectableRef::new(placed.id, ObjectType::SchematicSymbol);
                let center = to_coordf(placed.shift);
                match library.symbol(placed.symbol) {
                    Some(symbol) => sel.append(
                        r,
                        center,
                        to_coordf(symbol.bbox.0 + placed.shift),
                        to_coordf(symbol.bbox.1 + placed.shift),
                        false,
                    ),
                    None => {
                        log::debug!("Symbol {} nicht in der Library, nur Punkt", placed.symbol);
                        sel.append_point(r, center, false);
                    }
                }
            }
        }

        sel.update_preview(selection);
        self.hit_index = HitIndex::from_selectables(&self.selectables);
    }

    /// Referenzen unter `p` (View-Raum), kleinster Treffer zuerst.
    pub fn pick(&self, p: glam::Vec2, expand: f32) -> Vec<SelectableRef> {
        self.hit_index
            .pick(&self.selectables, p, expand)
            .into_iter()
            .filter_map(|idx| self.selectables.refs().get(idx).copied())
            .collect()
    }
}
