//! Tool-Bar: einzeiliger Hinweistext plus kurzlebige Flash-Meldungen.

/// Write-only Rückmeldekanal der Tools an den Benutzer.
#[derive(Debug, Default)]
pub struct ToolBar {
    tip: String,
    flashes: Vec<String>,
}

impl ToolBar {
    const MAX_FLASHES: usize = 100;

    /// Erstellt eine leere Tool-Bar.
    pub fn new() -> Self {
        Self {
            tip: String::new(),
            flashes: Vec::new(),
        }
    }

    /// Setzt den Hinweistext des aktiven Tools.
    pub fn set_tip(&mut self, tip: impl Into<String>) {
        self.tip = tip.into();
        log::debug!("Tip: {}", self.tip);
    }

    pub fn tip(&self) -> &str {
        &self.tip
    }

    pub fn clear_tip(&mut self) {
        self.tip.clear();
    }

    /// Zeigt eine kurze Meldung an.
    /// Begrenzt auf MAX_FLASHES, ältere Meldungen werden verworfen.
    pub fn flash(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::info!("{}", message);
        if self.flashes.len() >= Self::MAX_FLASHES {
            self.flashes.drain(..Self::MAX_FLASHES / 2);
        }
        self.flashes.push(message);
    }

    /// Liefert eine read-only Sicht auf alle Flash-Meldungen.
    pub fn flashes(&self) -> &[String] {
        &self.flashes
    }

    pub fn last_flash(&self) -> Option<&str> {
        self.flashes.last().map(String::as_str)
    }
}
