//! View-Transformation (Pan, Rotation, Spiegelung) für den Canvas.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{rotate, Coordf};

/// Platzierung des Dokuments im Hit-Test-Raum.
///
/// Reihenfolge der Anwendung: Spiegeln an der Y-Achse → Rotieren → Verschieben.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    /// Verschiebung nach Rotation
    pub shift: Vec2,
    /// Rotationswinkel in Radiant
    pub angle: f32,
    /// X-Achse vor der Rotation spiegeln
    pub mirror: bool,
}

impl ViewTransform {
    /// Identität: keine Verschiebung, keine Rotation, nicht gespiegelt.
    pub const IDENTITY: Self = Self {
        shift: Vec2::ZERO,
        angle: 0.0,
        mirror: false,
    };

    /// Erstellt eine neue Transformation
    pub fn new(shift: Vec2, angle: f32, mirror: bool) -> Self {
        Self {
            shift,
            angle,
            mirror,
        }
    }

    /// Verschiebt die Ansicht (Pan)
    pub fn pan(&mut self, delta: Vec2) {
        self.shift += delta;
    }

    /// Wendet die Transformation auf einen Punkt an.
    pub fn transform(&self, p: Coordf) -> Coordf {
        let mut p = p;
        if self.mirror {
            p.x = -p.x;
        }
        rotate(p, self.angle) + self.shift
    }

    /// Rotationswinkel, normiert auf `[0, 2π)`.
    pub fn angle_rad(&self) -> f32 {
        self.angle.rem_euclid(std::f32::consts::TAU)
    }

    /// Kehrt den Drehsinn um (für gespiegelte Ansichten).
    pub fn invert_angle(&mut self) {
        self.angle = (-self.angle).rem_euclid(std::f32::consts::TAU);
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
