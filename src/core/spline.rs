//! Cardinal-Spline-Aufbau: geschlossener Kurvenzug durch alle Kontrollpunkte.
//!
//! Jeder Kontrollpunkt erhält eine Tangente proportional zum Vektor zwischen
//! seinen beiden Nachbarn; benachbarte Punkte werden durch kubische
//! Bézier-Segmente verbunden. Der Kurs ist zyklisch: das letzte Segment führt
//! zurück zum ersten Punkt.

use super::segment::CurveSegment;
use anyhow::{bail, Result};
use glam::Vec2;

/// Mindestanzahl Kontrollpunkte für einen geschlossenen Kurs.
/// Mit 2 oder weniger Punkten sind die Nachbar-Tangenten entartet.
pub const MIN_CONTROL_POINTS: usize = 3;

/// Tangente am Kontrollpunkt `index` (zyklisch).
///
/// Die Cardinal-Skalierung `(1 − tension)/2` und die Umrechnung `/3` auf
/// Bézier-Kontrollpunkte bleiben getrennte Faktoren — die visuelle Bedeutung
/// von `tension` hängt an genau dieser Faktorisierung.
pub fn cardinal_tangent(points: &[Vec2], index: usize, tension: f32) -> Vec2 {
    let n = points.len();
    let prev = points[(index + n - 1) % n];
    let next = points[(index + 1) % n];
    let cardinal_scale = (1.0 - tension) / 2.0;
    cardinal_scale / 3.0 * (next - prev)
}

/// Baut die N Bézier-Segmente eines geschlossenen Cardinal-Splines.
///
/// Segment `i` verbindet `points[i]` mit `points[(i+1) % N]`; die inneren
/// Kontrollpunkte entstehen aus den Tangenten beider Endpunkte.
/// `tension = 0`: Catmull-Rom-artig weich, `tension = 1`: Tangenten
/// kollabieren zu Null (scharfe Ecken).
pub fn build_segments(points: &[Vec2], tension: f32) -> Result<Vec<CurveSegment>> {
    if points.len() < MIN_CONTROL_POINTS {
        bail!(
            "Geschlossener Kurs braucht mindestens {} Kontrollpunkte, erhalten: {}",
            MIN_CONTROL_POINTS,
            points.len()
        );
    }

    let n = points.len();
    let mut segments = Vec::with_capacity(n);

    for i in 0..n {
        let j = (i + 1) % n;
        let tangent_i = cardinal_tangent(points, i, tension);
        let tangent_j = cardinal_tangent(points, j, tension);
        segments.push(CurveSegment::new(
            points[i],
            points[i] + tangent_i,
            points[j] - tangent_j,
            points[j],
        ));
    }

    Ok(segments)
}
