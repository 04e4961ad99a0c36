//! Round-Off-Tool: rundet eine Polygon-Ecke mit einem tangentialen Kreisbogen ab.
//!
//! Die selektierte Ecke wird zum Bogen-Eintritt, dahinter wird ein neuer
//! Vertex als Bogen-Austritt eingefügt. Der Radius folgt dem Zeiger entlang
//! der Winkelhalbierenden oder wird per Dialog eingegeben.

pub mod geometry;
mod lifecycle;
mod state;

pub use geometry::{FilletGeometry, FilletPoints};
pub use state::RoundOffVertexTool;

#[cfg(test)]
mod tests;
