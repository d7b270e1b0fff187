//! Integrationstests für den kompletten Build-und-Abtast-Ablauf:
//! - Kursaufbau aus Kontrollpunkten (inkl. Fehlerfälle)
//! - Gleichförmigkeit der Arc-Length-Parametrisierung
//! - Konvoi-Platzierung auf einem echten Kurs
//! - Optionen-gesteuerter Ablauf

use approx::assert_relative_eq;
use glam::Vec2;
use rundkurs::{EngineOptions, ParamMode, Track};

/// Rechteck mit einem kurzen und einem langen Kantenpaar — die
/// Segmentlängen unterscheiden sich deutlich.
fn uneven_rectangle() -> Vec<Vec2> {
    vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(10.0, 0.0),
        Vec2::new(10.0, 100.0),
        Vec2::new(0.0, 100.0),
    ]
}

/// Varianz der Abstände aufeinanderfolgender Proben bei K gleichmäßig
/// verteilten Parameterwerten (inklusive Rückkehr zum Anfang).
fn step_distance_variance(track: &Track, mode: ParamMode, sample_count: usize) -> f32 {
    let n = track.point_count() as f32;
    let positions: Vec<Vec2> = (0..sample_count)
        .map(|i| {
            let u = i as f32 / sample_count as f32 * n;
            track.sample(u, mode).position
        })
        .collect();

    let distances: Vec<f32> = (0..sample_count)
        .map(|i| positions[i].distance(positions[(i + 1) % sample_count]))
        .collect();

    let mean = distances.iter().sum::<f32>() / distances.len() as f32;
    distances.iter().map(|d| (d - mean).powi(2)).sum::<f32>() / distances.len() as f32
}

// ─── Kursaufbau ──────────────────────────────────────────────────────────────

#[test]
fn test_build_und_abtastung_am_kursanfang() {
    let points = uneven_rectangle();
    let track = Track::build(&points, 0.0, 8).expect("Kurs erwartet");

    assert_eq!(track.segments().len(), points.len());

    let sample = track.sample(0.0, ParamMode::ArcLength);
    assert_relative_eq!(sample.position.x, points[0].x, epsilon = 1e-4);
    assert_relative_eq!(sample.position.y, points[0].y, epsilon = 1e-4);
}

#[test]
fn test_build_mit_zwei_punkten_liefert_kein_teilergebnis() {
    let points = vec![Vec2::ZERO, Vec2::new(50.0, 0.0)];
    let result = Track::build(&points, 0.0, 8);
    assert!(result.is_err());
}

#[test]
fn test_parameter_ausserhalb_wird_zyklisch_reduziert() {
    let points = uneven_rectangle();
    let track = Track::build(&points, 0.0, 8).expect("Kurs erwartet");

    // u = N entspricht u = 0, u = −1 entspricht u = N − 1
    for mode in [ParamMode::Naive, ParamMode::ArcLength] {
        let at_zero = track.sample(0.0, mode);
        let at_n = track.sample(points.len() as f32, mode);
        assert_eq!(at_zero, at_n);

        let at_minus_one = track.sample(-1.0, mode);
        let at_n_minus_one = track.sample(points.len() as f32 - 1.0, mode);
        assert_eq!(at_minus_one, at_n_minus_one);
    }
}

// ─── Gleichförmigkeit der Arc-Length-Parametrisierung ────────────────────────

#[test]
fn test_arc_length_abtastung_ist_deutlich_gleichmaessiger() {
    let track = Track::build(&uneven_rectangle(), 0.0, 16).expect("Kurs erwartet");

    let naive_variance = step_distance_variance(&track, ParamMode::Naive, 64);
    let arc_variance = step_distance_variance(&track, ParamMode::ArcLength, 64);

    assert!(
        arc_variance < naive_variance / 4.0,
        "Arc-Length-Varianz {} nicht deutlich unter naiver Varianz {}",
        arc_variance,
        naive_variance
    );
}

#[test]
fn test_abtastung_ist_bitidentisch_wiederholbar() {
    let track = Track::build(&uneven_rectangle(), 0.3, 8).expect("Kurs erwartet");

    for mode in [ParamMode::Naive, ParamMode::ArcLength] {
        let a = track.sample(2.71, mode);
        let b = track.sample(2.71, mode);
        assert_eq!(a, b, "Abtastung mit Modus {:?} nicht deterministisch", mode);
    }
}

// ─── Konvoi ──────────────────────────────────────────────────────────────────

#[test]
fn test_konvoi_haelt_physischen_abstand_auf_ungleichen_segmenten() {
    let track = Track::build(&uneven_rectangle(), 0.0, 32).expect("Kurs erwartet");
    let spacing = 25.0;
    let leader_u = 2.5;
    let n = track.point_count() as f32;
    let total = track.total_length();

    let params = rundkurs::follower_params(leader_u, 3, spacing, total, track.point_count());

    // In Weglängen-Koordinaten liegt jeder Verfolger exakt `spacing`
    // hinter seinem Vordermann (modulo Kursumfang)
    let mut previous_s = leader_u / n * total;
    for &u in &params {
        let s = u / n * total;
        let gap = (previous_s - s).rem_euclid(total);
        assert_relative_eq!(gap, spacing, epsilon = 1e-2);
        previous_s = s;
    }

    // Die Sehne zwischen den abgetasteten Positionen bleibt unter dem Bogen
    let convoy = track.convoy(leader_u, 3, spacing, ParamMode::ArcLength);
    assert_eq!(convoy.len(), 4);
    for pair in convoy.windows(2) {
        let distance = pair[0].position.distance(pair[1].position);
        assert!(
            distance <= spacing + 0.5,
            "Abstand {} über dem Sollabstand {}",
            distance,
            spacing
        );
    }
}

#[test]
fn test_konvoi_wickelt_um_den_kursanfang() {
    let track = Track::build(&uneven_rectangle(), 0.0, 16).expect("Kurs erwartet");

    // Anführer kurz nach dem Start: Verfolger stehen vor dem Kursende
    let convoy = track.convoy(0.1, 2, 20.0, ParamMode::ArcLength);
    assert_eq!(convoy.len(), 3);

    // Alle Proben liegen auf dem Kurs (endliche Werte)
    for sample in &convoy {
        assert!(sample.position.is_finite());
        assert!(sample.derivative.is_finite());
    }
}

// ─── Optionen-gesteuerter Ablauf ─────────────────────────────────────────────

#[test]
fn test_ablauf_mit_optionen() {
    let options = EngineOptions {
        tension: 0.5,
        samples_per_segment: 12,
        ..EngineOptions::default()
    };

    let points = uneven_rectangle();
    let track = Track::from_options(&points, &options).expect("Kurs erwartet");
    assert_eq!(track.table().entries.len(), 1 + points.len() * 12);

    let convoy = track.convoy(
        1.0,
        options.follower_count,
        options.follower_spacing,
        options.parameterization,
    );
    assert_eq!(convoy.len(), options.follower_count + 1);
}

#[test]
fn test_schwellen_proben_folgen_der_tangente() {
    let track = Track::build(&uneven_rectangle(), 0.0, 16).expect("Kurs erwartet");
    let samples = track.samples_at_spacing(15.0, ParamMode::ArcLength);

    assert_eq!(
        samples.len(),
        (track.total_length() / 15.0).ceil() as usize
    );
    for sample in &samples {
        // Jede Probe trägt eine brauchbare Richtung für die Ausrichtung
        assert!(sample.derivative.length() > 0.0);
    }
}
