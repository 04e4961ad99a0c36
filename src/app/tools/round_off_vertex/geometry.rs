//! Geometrie des Round-Off: Tangentenpunkte und Bogen-Mittelpunkt an einer Ecke.
//!
//! Alles ist eine reine Funktion des Radius und der beim Start erfassten Ecke.

use crate::core::geometry::{normalize, to_coordd, to_coordi, Coordd, Coordi};

/// Beim Start erfasste Eck-Geometrie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilletGeometry {
    /// Eckpunkt V
    pub p0: Coordd,
    /// Einheitsvektor Richtung nächster Vertex
    pub vn: Coordd,
    /// Einheitsvektor Richtung vorheriger Vertex
    pub vp: Coordd,
    /// Winkelhalbierende
    pub vh: Coordd,
    /// Halber Innenwinkel
    pub alpha: f64,
    /// Länge der kürzeren angrenzenden Kante
    pub delta_max: f64,
}

/// Ergebnis für einen Radius: Bogen-Eintritt, Mittelpunkt, Bogen-Austritt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilletPoints {
    pub entry: Coordi,
    pub center: Coordi,
    pub exit: Coordi,
}

impl FilletGeometry {
    /// Erfasst die Ecke `v` zwischen `prev` und `next`.
    ///
    /// `None`, wenn die Kanten (nahezu) kollinear sind, also `α` nicht endlich
    /// ist oder außerhalb von `(0, alpha_limit)` liegt.
    pub fn at_vertex(v: Coordi, next: Coordi, prev: Coordi, alpha_limit: f64) -> Option<Self> {
        let p0 = to_coordd(v);
        let vn = normalize(to_coordd(next) - p0);
        let vp = normalize(to_coordd(prev) - p0);
        let vh = normalize(vn + vp);
        let alpha = vh.dot(vp).acos();
        if !alpha.is_finite() || alpha <= 0.0 || alpha >= alpha_limit {
            return None;
        }

        let delta_max = (to_coordd(next) - p0)
            .length()
            .min((to_coordd(prev) - p0).length());

        Some(Self {
            p0,
            vn,
            vp,
            vh,
            alpha,
            delta_max,
        })
    }

    /// Größter Radius, bei dem die Tangentenpunkte noch auf den Kanten liegen.
    pub fn r_max(&self) -> f64 {
        self.alpha.tan() * self.delta_max
    }

    /// Begrenzt `r` auf `[0, r_max]`.
    pub fn clamp_radius(&self, r: f64) -> f64 {
        r.max(0.0).min(self.r_max())
    }

    /// Tangentenpunkte und Mittelpunkt für Radius `r` (wird begrenzt).
    pub fn points(&self, r: f64) -> FilletPoints {
        let r = self.clamp_radius(r);
        let delta = r / self.alpha.tan();
        let u = r / self.alpha.sin();
        FilletPoints {
            entry: to_coordi(self.p0 + self.vp * delta),
            center: to_coordi(self.p0 + self.vh * u),
            exit: to_coordi(self.p0 + self.vn * delta),
        }
    }

    /// Radius aus der Zeigerposition: Projektion auf die Winkelhalbierende.
    pub fn radius_from_cursor(&self, c: Coordi) -> f64 {
        let projected = (to_coordd(c) - self.p0).dot(self.vh).max(0.0);
        self.clamp_radius(projected * self.alpha.sin())
    }
}
