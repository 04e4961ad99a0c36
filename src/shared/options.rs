//! Zentrale Konfiguration für den EDA-Editor-Kern.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Selectables ─────────────────────────────────────────────────────

/// Visueller Rand (View-Einheiten), um den `Selectable::corners()` die Box vergrößert.
pub const SELECTABLE_CORNER_PADDING: f32 = 100.0;
/// Standard-Breite einer Kanten-Hitbox (0 = reine Linie, Treffer nur über `expand`).
pub const EDGE_SELECTABLE_WIDTH: f32 = 0.0;

// ── Picking ─────────────────────────────────────────────────────────

/// Mindest-Ausdehnung der Hitbox beim Picken (View-Einheiten).
pub const PICK_EXPAND: f32 = 10.0;

// ── Tools ───────────────────────────────────────────────────────────

/// Anteil von π/2, ab dem zwei Kanten als kollinear gelten (Round-Off).
pub const FILLET_COLLINEAR_FACTOR: f64 = 0.99;

// ── History ─────────────────────────────────────────────────────────

/// Maximale Anzahl Undo-Schritte.
pub const HISTORY_DEPTH: usize = 200;

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `eda_editor_core.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Selectables ─────────────────────────────────────────────
    /// Rand, um den `Selectables::corners` die Hitboxen vergrößert
    #[serde(default = "default_corner_padding")]
    pub selectable_corner_padding: f32,
    /// Breite der Kanten-Hitboxen
    #[serde(default)]
    pub edge_selectable_width: f32,

    // ── Picking ─────────────────────────────────────────────────
    /// Expand-Wert für `HitIndex::pick`
    pub pick_expand: f32,

    // ── Tools ────────────────────────────────────────────────────
    /// Kollinear-Grenze des Round-Off-Tools als Anteil von π/2 (0 < f ≤ 1)
    pub fillet_collinear_factor: f64,

    // ── History ─────────────────────────────────────────────────
    /// Maximale Undo-Tiefe
    pub history_depth: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            selectable_corner_padding: SELECTABLE_CORNER_PADDING,
            edge_selectable_width: EDGE_SELECTABLE_WIDTH,
            pick_expand: PICK_EXPAND,
            fillet_collinear_factor: FILLET_COLLINEAR_FACTOR,
            history_depth: HISTORY_DEPTH,
        }
    }
}

/// Serde-Default für `selectable_corner_padding` (Abwärtskompatibilität).
fn default_corner_padding() -> f32 {
    SELECTABLE_CORNER_PADDING
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("eda_editor_core"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("eda_editor_core.toml")
    }

    /// Obere Winkelgrenze (Radiant) für den Halbwinkel α des Round-Off-Tools.
    pub fn fillet_alpha_limit(&self) -> f64 {
        self.fillet_collinear_factor.clamp(f64::EPSILON, 1.0) * std::f64::consts::FRAC_PI_2
    }
}
