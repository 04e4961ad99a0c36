//! Symbol-Library als externer Kollaborateur (Trait + In-Memory-Implementierung).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::schematic::{Symbol, Unit};

/// Lesezugriff auf Units und deren Symbol-Varianten.
pub trait SymbolLibrary {
    /// Unit per ID
    fn unit(&self, id: u64) -> Option<&Unit>;
    /// Symbol per ID
    fn symbol(&self, id: u64) -> Option<&Symbol>;
    /// Alle Symbol-Varianten einer Unit, in Library-Reihenfolge
    fn symbols_for_unit(&self, unit: u64) -> Vec<&Symbol>;
}

/// Library im Speicher, z.B. aus einer Replay-Session geladen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryLibrary {
    #[serde(default)]
    pub units: IndexMap<u64, Unit>,
    #[serde(default)]
    pub symbols: IndexMap<u64, Symbol>,
}

impl MemoryLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_unit(&mut self, unit: Unit) {
        self.units.insert(unit.id, unit);
    }

    pub fn add_symbol(&mut self, symbol: Symbol) {
        self.symbols.insert(symbol.id, symbol);
    }
}

impl SymbolLibrary for MemoryLibrary {
    fn unit(&self, id: u64) -> Option<&Unit> {
        self.units.get(&id)
    }

    fn symbol(&self, id: u64) -> Option<&Symbol> {
        self.symbols.get(&id)
    }

    fn symbols_for_unit(&self, unit: u64) -> Vec<&Symbol> {
        self.symbols.values().filter(|s| s.unit == unit).collect()
    }
}
