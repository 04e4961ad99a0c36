//! Canvas-Layer: Selectables, Pick-Index und Neuaufbau aus dem Dokument.

pub mod builder;
pub mod hit_index;
pub mod selectables;

pub use builder::Canvas;
pub use hit_index::HitIndex;
pub use selectables::{Selectable, SelectableFlag, Selectables};
