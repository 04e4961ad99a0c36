//! Core-Domänentypen: Geometrie, View, Polygone, Schaltplan-Objekte, Dokument, Library.

pub mod document;
pub mod geometry;
pub mod library;
pub mod object_ref;
pub mod polygon;
pub mod schematic;
pub mod view;

pub use document::Document;
pub use geometry::{Coordd, Coordf, Coordi};
pub use library::{MemoryLibrary, SymbolLibrary};
pub use object_ref::{LayerRange, ObjectType, SelectableRef};
pub use polygon::{Polygon, Vertex, VertexType};
pub use schematic::{Component, Entity, Gate, GatePath, SchematicSymbol, Sheet, Symbol, Unit};
pub use view::ViewTransform;
