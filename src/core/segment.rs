//! Ein kubisches Bézier-Segment zwischen zwei benachbarten Kontrollpunkten.

use super::bernstein::{bernstein_derivative, bernstein_point};
use glam::Vec2;

/// Kubisches Bézier-Segment mit vier Kontrollpunkten.
///
/// `p1` und `p4` liegen auf dem Kurs (Start- und End-Kontrollpunkt des
/// Segments), `p2` und `p3` steuern die Tangenten. Nach dem Aufbau
/// unveränderlich.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSegment {
    pub p1: Vec2,
    pub p2: Vec2,
    pub p3: Vec2,
    pub p4: Vec2,
}

impl CurveSegment {
    /// Erstellt ein neues Segment aus den vier Kontrollpunkten.
    pub fn new(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> Self {
        Self { p1, p2, p3, p4 }
    }

    /// Kontrollpunkte als Array für die Bernstein-Auswertung.
    fn control(&self) -> [Vec2; 4] {
        [self.p1, self.p2, self.p3, self.p4]
    }

    /// Position bei lokalem Parameter `t ∈ [0, 1]`.
    pub fn position(&self, t: f32) -> Vec2 {
        bernstein_point(&self.control(), t)
    }

    /// Erste Ableitung bei lokalem Parameter `t ∈ [0, 1]`.
    pub fn derivative(&self, t: f32) -> Vec2 {
        bernstein_derivative(&self.control(), t)
    }
}
