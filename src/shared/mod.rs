//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die zwischen `app` und `canvas` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;

pub use options::EditorOptions;
pub use options::{FILLET_COLLINEAR_FACTOR, PICK_EXPAND, SELECTABLE_CORNER_PADDING};
