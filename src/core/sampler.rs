//! Abtastung des Kurses: naive oder Arc-Length-korrigierte Parametrisierung.
//!
//! Der logische Parameter `u` läuft über `[0, N)` (N = Anzahl Kontrollpunkte)
//! und wird vor jeder Abfrage zyklisch reduziert. Die naive Abtastung wertet
//! das Segment `floor(u)` direkt aus — die sichtbare Geschwindigkeit schwankt
//! dann mit der Segmentlänge. Die Arc-Length-Abtastung rechnet `u` in eine
//! Ziellänge um und interpoliert in der Lookup-Tabelle — konstante
//! Geschwindigkeit unabhängig von der Segmentlänge.

use super::arc_length::ArcLengthTable;
use super::segment::CurveSegment;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Parametrisierungs-Modus der Kursabtastung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ParamMode {
    /// Segment-Index = floor(u), lokaler Parameter = Nachkommaanteil
    Naive,
    /// Konstante Geschwindigkeit über die Arc-Length-Tabelle
    #[default]
    ArcLength,
}

/// Ergebnis einer Kursabfrage: Position und Richtung als explizites Paar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSample {
    pub position: Vec2,
    /// Erste Ableitung (Tangentenrichtung, unnormiert)
    pub derivative: Vec2,
}

impl PathSample {
    fn from_entry(entry: &super::arc_length::ArcLengthEntry) -> Self {
        Self {
            position: entry.position,
            derivative: entry.derivative,
        }
    }
}

/// Reduziert `u` zyklisch in `[0, n)`.
///
/// Werte außerhalb des Bereichs sind kein Fehler — der Fortschritt läuft über
/// das Kursende hinaus wieder am Anfang weiter.
pub fn wrap_param(u: f32, n: usize) -> f32 {
    let n = n as f32;
    let wrapped = u.rem_euclid(n);
    // rem_euclid kann durch Rundung exakt n liefern (z.B. u = -1e-8)
    if wrapped >= n {
        0.0
    } else {
        wrapped
    }
}

/// Naive Abtastung: direktes Auswerten des Segments `floor(u)`.
///
/// Voraussetzung: `segments` ist nicht leer.
pub fn sample_naive(segments: &[CurveSegment], u: f32) -> PathSample {
    let u = wrap_param(u, segments.len());
    let index = (u.floor() as usize).min(segments.len() - 1);
    let t = u - index as f32;
    let segment = &segments[index];
    PathSample {
        position: segment.position(t),
        derivative: segment.derivative(t),
    }
}

/// Arc-Length-Abtastung: `u` wird in eine Ziellänge umgerechnet und per
/// Binärsuche in der Tabelle gesucht (die Tabelle ist per Konstruktion
/// sortiert).
///
/// Exakte Treffer liefern den Tabelleneintrag selbst — ein Parameter genau
/// auf einer Tabellengrenze löst deterministisch zum Eintrag der Grenze auf.
/// Sonst wird linear zwischen den beiden umschließenden Einträgen
/// interpoliert. Null-Länge zwischen den Einträgen (übereinanderliegende
/// Kontrollpunkte) wird als Sprung behandelt: Interpolationsfaktor 0.
///
/// Voraussetzung: `table.entries` ist nicht leer.
pub fn sample_arc_length(table: &ArcLengthTable, point_count: usize, u: f32) -> PathSample {
    let u = wrap_param(u, point_count);
    let target = u / point_count as f32 * table.total_length;

    let entries = &table.entries;
    let idx = entries.partition_point(|entry| entry.length < target);

    if idx == 0 {
        return PathSample::from_entry(&entries[0]);
    }
    let Some(curr) = entries.get(idx) else {
        // Ziellänge über dem Tabellenende (nur durch Rundung möglich)
        return PathSample::from_entry(&entries[entries.len() - 1]);
    };

    if (curr.length - target).abs() <= f32::EPSILON {
        return PathSample::from_entry(curr);
    }

    let prev = &entries[idx - 1];
    let span = curr.length - prev.length;
    let t = if span > f32::EPSILON {
        (target - prev.length) / span
    } else {
        0.0
    };

    PathSample {
        position: prev.position.lerp(curr.position, t),
        derivative: prev.derivative.lerp(curr.derivative, t),
    }
}
