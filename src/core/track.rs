//! Der gebaute Rundkurs: Segmente plus Arc-Length-Tabelle als ein Build-Ergebnis.
//!
//! Es gibt keinen modulweiten Zustand: [`Track::build`] liefert frische
//! Strukturen, die der Aufrufer besitzt und pro Frame neu baut (oder bei
//! unveränderten Kontrollpunkten selbst weiterverwendet). Während eines
//! Builds dürfen die Kontrollpunkte nicht verändert werden — der Aufrufer
//! übergibt einen Schnappschuss.

use super::arc_length::ArcLengthTable;
use super::convoy::follower_params;
use super::sampler::{sample_arc_length, sample_naive, ParamMode, PathSample};
use super::segment::CurveSegment;
use super::spline::build_segments;
use crate::shared::EngineOptions;
use anyhow::Result;
use glam::Vec2;

/// Ein vollständig aufgebauter geschlossener Kurs.
#[derive(Debug, Clone)]
pub struct Track {
    segments: Vec<CurveSegment>,
    table: ArcLengthTable,
    point_count: usize,
}

impl Track {
    /// Baut Segmente und Lookup-Tabelle aus einem Kontrollpunkt-Schnappschuss.
    ///
    /// Fehler bei weniger als 3 Kontrollpunkten; es wird kein Teilergebnis
    /// zurückgegeben.
    pub fn build(points: &[Vec2], tension: f32, samples_per_segment: usize) -> Result<Self> {
        let segments = build_segments(points, tension)?;
        let table = ArcLengthTable::build(&segments, samples_per_segment);
        log::debug!(
            "Kurs gebaut: {} Segmente, Umfang {:.2}",
            segments.len(),
            table.total_length
        );
        Ok(Self {
            segments,
            table,
            point_count: points.len(),
        })
    }

    /// Baut den Kurs mit den Werten aus [`EngineOptions`].
    pub fn from_options(points: &[Vec2], options: &EngineOptions) -> Result<Self> {
        Self::build(points, options.tension, options.samples_per_segment)
    }

    /// Anzahl der Kontrollpunkte (= Anzahl der Segmente).
    pub fn point_count(&self) -> usize {
        self.point_count
    }

    /// Die Bézier-Segmente des Kurses (z.B. für das Zeichnen der Strecke).
    pub fn segments(&self) -> &[CurveSegment] {
        &self.segments
    }

    /// Die Arc-Length-Tabelle (z.B. für eigene Längen-Abfragen).
    pub fn table(&self) -> &ArcLengthTable {
        &self.table
    }

    /// Approximierter Umfang des Kurses.
    pub fn total_length(&self) -> f32 {
        self.table.total_length
    }

    /// Position und Richtung bei logischem Parameter `u` (zyklisch).
    pub fn sample(&self, u: f32, mode: ParamMode) -> PathSample {
        match mode {
            ParamMode::Naive => sample_naive(&self.segments, u),
            ParamMode::ArcLength => sample_arc_length(&self.table, self.point_count, u),
        }
    }

    /// Konvoi: Anführer bei `leader_u`, dahinter `follower_count` Verfolger
    /// im festen Abstand `spacing`. Der erste Eintrag ist der Anführer.
    pub fn convoy(
        &self,
        leader_u: f32,
        follower_count: usize,
        spacing: f32,
        mode: ParamMode,
    ) -> Vec<PathSample> {
        let mut samples = Vec::with_capacity(follower_count + 1);
        samples.push(self.sample(leader_u, mode));
        for u in follower_params(
            leader_u,
            follower_count,
            spacing,
            self.total_length(),
            self.point_count,
        ) {
            samples.push(self.sample(u, mode));
        }
        samples
    }

    /// Gleichmäßig verteilte Proben entlang des gesamten Kurses, eine alle
    /// `spacing` Weglängen-Einheiten (z.B. für Schwellen oder
    /// Streckenmarkierungen).
    pub fn samples_at_spacing(&self, spacing: f32, mode: ParamMode) -> Vec<PathSample> {
        let total = self.total_length();
        if spacing <= f32::EPSILON || total <= f32::EPSILON {
            return Vec::new();
        }

        let mut result = Vec::with_capacity((total / spacing).ceil() as usize);
        let mut travelled = 0.0f32;
        while travelled < total {
            let u = travelled / total * self.point_count as f32;
            result.push(self.sample(u, mode));
            travelled += spacing;
        }
        result
    }
}
