//! Externe Eingabe-Dialoge (Auswahl-Dialoge, Zahlen-Eingabe).
//!
//! Die Dialoge gehören der umgebenden Oberfläche; der Kern ruft sie synchron
//! auf und blockiert, bis sie eine Auswahl oder einen Abbruch liefern.
//! `None` steht immer für Abbruch.

use std::collections::{BTreeMap, VecDeque};

use serde::{Deserialize, Serialize};

use crate::core::{GatePath, SymbolLibrary};

/// Blockierende Dialog-Schnittstelle
pub trait Dialogs {
    /// Wählt ein (Component, Gate)-Paar aus `gates` (Schlüssel → Anzeige-Label).
    fn map_symbol(&mut self, gates: &BTreeMap<GatePath, String>) -> Option<GatePath>;

    /// Wählt eine Symbol-Variante für `unit` aus der Library.
    fn select_symbol(&mut self, library: &dyn SymbolLibrary, unit: u64) -> Option<u64>;

    /// Fragt einen Zahlenwert ab.
    fn ask_datum(&mut self, prompt: &str, default: f64) -> Option<f64>;
}

/// Vorab festgelegte Antworten, z.B. für Tests und Session-Replay.
///
/// Jede Warteschlange wird der Reihe nach abgearbeitet; eine leere
/// Warteschlange bedeutet Abbruch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScriptedDialogs {
    #[serde(default)]
    pub map_symbol: VecDeque<Option<GatePath>>,
    #[serde(default)]
    pub select_symbol: VecDeque<Option<u64>>,
    #[serde(default)]
    pub ask_datum: VecDeque<Option<f64>>,
    /// Protokoll aller gestellten Fragen
    #[serde(skip)]
    pub asked: Vec<String>,
}

impl ScriptedDialogs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt eine Antwort für `map_symbol` an (Builder-Stil).
    pub fn with_map_symbol(mut self, answer: Option<GatePath>) -> Self {
        self.map_symbol.push_back(answer);
        self
    }

    pub fn with_select_symbol(mut self, answer: Option<u64>) -> Self {
        self.select_symbol.push_back(answer);
        self
    }

    pub fn with_datum(mut self, answer: Option<f64>) -> Self {
        self.ask_datum.push_back(answer);
        self
    }
}

impl Dialogs for ScriptedDialogs {
    fn map_symbol(&mut self, gates: &BTreeMap<GatePath, String>) -> Option<GatePath> {
        let labels: Vec<&str> = gates.values().map(String::as_str).collect();
        self.asked.push(format!("map_symbol: {}", labels.join(", ")));

        let answer = self.map_symbol.pop_front().flatten()?;
        if gates.contains_key(&answer) {
            Some(answer)
        } else {
            log::warn!("Skript-Antwort {:?} ist kein Kandidat, werte als Abbruch", answer);
            None
        }
    }

    fn select_symbol(&mut self, library: &dyn SymbolLibrary, unit: u64) -> Option<u64> {
        let label = library
            .unit(unit)
            .map_or_else(|| unit.to_string(), |u| u.name.clone());
        self.asked.push(format!("select_symbol: unit {}", label));

        let answer = self.select_symbol.pop_front().flatten()?;
        match library.symbol(answer) {
            Some(symbol) if symbol.unit == unit => Some(answer),
            _ => {
                log::warn!("Skript-Antwort {} passt nicht zu Unit {}", answer, unit);
                None
            }
        }
    }

    fn ask_datum(&mut self, prompt: &str, default: f64) -> Option<f64> {
        self.asked.push(format!("{} [{}]", prompt, default));
        self.ask_datum.pop_front().flatten()
    }
}
