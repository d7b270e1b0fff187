//! Arc-Length-Lookup-Tabelle: kumulierte Weglänge → Position und Ableitung.
//!
//! Die Länge jedes Segments wird über eine Polylinien-Approximation bestimmt:
//! feste Anzahl Abtastpunkte pro Segment, Sehnenlängen aufsummiert. Das ist
//! keine exakte Bogenlänge; der Fehler (Sehne vs. Bogen) sinkt mit steigender
//! Abtastdichte.

use super::segment::CurveSegment;
use glam::Vec2;

/// Ein Eintrag der Lookup-Tabelle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcLengthEntry {
    /// Kumulierte Weglänge ab dem Kursanfang
    pub length: f32,
    /// Position auf der Kurve
    pub position: Vec2,
    /// Erste Ableitung an dieser Position
    pub derivative: Vec2,
}

/// Lookup-Tabelle über alle Segmente eines geschlossenen Kurses.
///
/// `entries` ist monoton nicht-fallend in `length`, beginnt bei 0 und endet
/// bei `total_length`. Die Tabelle wird bei jeder Änderung der Kontrollpunkte
/// oder der Tension komplett neu gebaut, nie inkrementell aktualisiert.
#[derive(Debug, Clone)]
pub struct ArcLengthTable {
    pub entries: Vec<ArcLengthEntry>,
    /// Approximierter Umfang des gesamten Kurses
    pub total_length: f32,
    /// Approximierte Länge je Segment (gleiche Reihenfolge wie die Segmente)
    pub segment_lengths: Vec<f32>,
}

impl ArcLengthTable {
    /// Mindest-Abtastdichte pro Segment; darunter ist die Sehnen-Approximation
    /// nicht mehr sinnvoll.
    pub const MIN_SAMPLES_PER_SEGMENT: usize = 2;

    /// Baut die Tabelle über alle Segmente.
    ///
    /// Der allererste Kontrollpunkt wird vor der Segment-Abtastung bei
    /// kumulierter Länge 0 eingetragen, damit die Tabelle immer am Kursanfang
    /// beginnt. Jeder weitere Segment-Startpunkt steht bereits als Endpunkt
    /// des Vorgänger-Segments in der Tabelle. Werte unter
    /// [`Self::MIN_SAMPLES_PER_SEGMENT`] werden angehoben.
    pub fn build(segments: &[CurveSegment], samples_per_segment: usize) -> Self {
        let samples = samples_per_segment.max(Self::MIN_SAMPLES_PER_SEGMENT);

        let mut entries = Vec::with_capacity(segments.len() * samples + 1);
        let mut segment_lengths = Vec::with_capacity(segments.len());

        if let Some(first) = segments.first() {
            entries.push(ArcLengthEntry {
                length: 0.0,
                position: first.position(0.0),
                derivative: first.derivative(0.0),
            });
        }

        let mut cumulative = 0.0f32;
        for segment in segments {
            let segment_start = cumulative;
            let mut prev = segment.position(0.0);

            for step in 1..=samples {
                let t = step as f32 / samples as f32;
                let position = segment.position(t);
                cumulative += prev.distance(position);
                entries.push(ArcLengthEntry {
                    length: cumulative,
                    position,
                    derivative: segment.derivative(t),
                });
                prev = position;
            }

            segment_lengths.push(cumulative - segment_start);
        }

        Self {
            entries,
            total_length: cumulative,
            segment_lengths,
        }
    }
}
