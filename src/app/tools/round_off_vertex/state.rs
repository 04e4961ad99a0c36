//! State-Definitionen und Konstruktor für das Round-Off-Tool.

use super::super::{Tool, ToolId};
use super::geometry::FilletGeometry;

/// Zustand einer laufenden Round-Off-Sitzung (existiert erst nach erfolgreichem `begin`).
#[derive(Debug, Clone)]
pub(crate) struct FilletSession {
    /// Polygon-ID
    pub polygon: u64,
    /// Index des Bogen-Eintritts (ehemalige Ecke)
    pub entry: usize,
    /// Index des eingefügten Bogen-Austritts
    pub exit: usize,
    /// Beim Start erfasste Geometrie
    pub geometry: FilletGeometry,
    /// Zuletzt angewendeter Radius
    pub radius_current: f64,
}

/// Round-Off-Tool: ersetzt eine Polygon-Ecke durch einen tangentialen Bogen.
#[derive(Debug, Default)]
pub struct RoundOffVertexTool {
    pub(crate) session: Option<FilletSession>,
}

impl RoundOffVertexTool {
    /// Erstellt ein neues Round-Off-Tool ohne Sitzung.
    pub fn new() -> Self {
        Self { session: None }
    }

    /// Konstruktor für die `ToolRegistry`.
    pub fn boxed(_id: ToolId) -> Box<dyn Tool> {
        Box::new(Self::new())
    }

    /// Aktueller Radius (0 ohne Sitzung).
    pub fn radius(&self) -> f64 {
        self.session.as_ref().map_or(0.0, |s| s.radius_current)
    }
}
