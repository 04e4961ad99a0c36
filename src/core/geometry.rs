//! Geometrie-Grundtypen: Koordinaten in drei Genauigkeiten, Rotation und Umlaufsinn.
//!
//! - `Coordi`: Dokument-Raum (ganzzahlig)
//! - `Coordd`: Arbeitsgenauigkeit für Trigonometrie
//! - `Coordf`: View-/Hit-Test-Raum

use glam::{DVec2, I64Vec2, Vec2};

/// Dokument-Koordinate (ganzzahlig).
pub type Coordi = I64Vec2;
/// Arbeits-Koordinate für trigonometrische Zwischenrechnungen.
pub type Coordd = DVec2;
/// View-Koordinate für Selectables und Hit-Tests.
pub type Coordf = Vec2;

/// Hebt eine Dokument-Koordinate in Arbeitsgenauigkeit.
#[inline]
pub fn to_coordd(c: Coordi) -> Coordd {
    c.as_dvec2()
}

/// Schreibt eine Arbeits-Koordinate ins Dokument zurück (rundet auf die nächste Ganzzahl).
///
/// Abschneiden würde Rundungsrauschen wie `19.999999999999996` zu einem
/// ganzen Einheitenfehler machen.
#[inline]
pub fn to_coordi(c: Coordd) -> Coordi {
    c.round().as_i64vec2()
}

/// Dokument-Koordinate → View-Raum (ohne Transformation).
#[inline]
pub fn to_coordf(c: Coordi) -> Coordf {
    c.as_vec2()
}

/// Normiert einen Vektor.
///
/// Der Nullvektor liefert NaN-Komponenten; Aufrufer erkennen das am
/// abgeleiteten Winkel, statt hier einen Sonderfall zu erfinden.
#[inline]
pub fn normalize(c: Coordd) -> Coordd {
    c / c.length()
}

/// Rotiert einen Punkt um den Ursprung (Radiant, gegen den Uhrzeigersinn).
#[inline]
pub fn rotate(p: Coordf, angle: f32) -> Coordf {
    Vec2::from_angle(angle).rotate(p)
}

/// Doppelte vorzeichenbehaftete Fläche eines geschlossenen Rings (Shoelace).
///
/// Positiv = gegen den Uhrzeigersinn (bei Y nach oben).
pub fn signed_area2(ring: &[Coordi]) -> i128 {
    if ring.len() < 3 {
        return 0;
    }
    ring.iter()
        .zip(ring.iter().cycle().skip(1))
        .map(|(a, b)| a.x as i128 * b.y as i128 - b.x as i128 * a.y as i128)
        .sum()
}

/// Umlaufsinn eines Rings: `true` = gegen den Uhrzeigersinn (Fläche ≥ 0).
pub fn is_counter_clockwise(ring: &[Coordi]) -> bool {
    signed_area2(ring) >= 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square_ccw() -> Vec<Coordi> {
        vec![
            Coordi::new(0, 0),
            Coordi::new(100, 0),
            Coordi::new(100, 100),
            Coordi::new(0, 100),
        ]
    }

    #[test]
    fn to_coordi_rounds_to_nearest() {
        assert_eq!(to_coordi(Coordd::new(2.9, -2.9)), Coordi::new(3, -3));
        assert_eq!(to_coordi(Coordd::new(19.999999999999996, 0.4)), Coordi::new(20, 0));
        assert_eq!(to_coordi(Coordd::new(-0.5, 0.5)), Coordi::new(-1, 1));
    }

    #[test]
    fn rotate_quarter_turn() {
        let p = rotate(Coordf::new(1.0, 0.0), std::f32::consts::FRAC_PI_2);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn winding_detects_both_orientations() {
        let ccw = square_ccw();
        assert_eq!(signed_area2(&ccw), 2 * 100 * 100);
        assert!(is_counter_clockwise(&ccw));

        let cw: Vec<Coordi> = ccw.into_iter().rev().collect();
        assert!(signed_area2(&cw) < 0);
        assert!(!is_counter_clockwise(&cw));
    }

    #[test]
    fn degenerate_ring_has_zero_area() {
        assert_eq!(signed_area2(&[Coordi::new(1, 1), Coordi::new(5, 5)]), 0);
    }

    #[test]
    fn normalize_zero_is_nan() {
        assert!(normalize(Coordd::ZERO).x.is_nan());
        assert_relative_eq!(normalize(Coordd::new(3.0, 4.0)).length(), 1.0);
    }
}
