//! Zentrale Konfiguration der Rundkurs-Engine.
//!
//! `EngineOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::ParamMode;
use serde::{Deserialize, Serialize};

// ── Spline ──────────────────────────────────────────────────────────

/// Standard-Tension des Cardinal-Splines (0 = Catmull-Rom-artig weich).
pub const DEFAULT_TENSION: f32 = 0.0;

// ── Arc-Length ──────────────────────────────────────────────────────

/// Standard-Abtastdichte pro Segment für die Längen-Approximation.
pub const DEFAULT_SAMPLES_PER_SEGMENT: usize = 8;

// ── Konvoi ──────────────────────────────────────────────────────────

/// Standard-Anzahl Verfolger hinter dem Anführer.
pub const DEFAULT_FOLLOWER_COUNT: usize = 2;
/// Standard-Abstand zwischen Konvoi-Mitgliedern (Weglängen-Einheiten).
pub const DEFAULT_FOLLOWER_SPACING: f32 = 60.0;

/// Alle zur Laufzeit änderbaren Engine-Optionen.
/// Wird als `rundkurs.toml` neben der Host-Anwendung gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineOptions {
    /// Tension des Cardinal-Splines, erwarteter Bereich [0, 1]
    pub tension: f32,
    /// Abtastdichte pro Segment für die Arc-Length-Tabelle
    #[serde(default = "default_samples_per_segment")]
    pub samples_per_segment: usize,
    /// Parametrisierungs-Modus der Abtastung
    #[serde(default)]
    pub parameterization: ParamMode,
    /// Anzahl Verfolger im Konvoi
    pub follower_count: usize,
    /// Fester Abstand zwischen Konvoi-Mitgliedern (Weglängen-Einheiten)
    #[serde(default = "default_follower_spacing")]
    pub follower_spacing: f32,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            tension: DEFAULT_TENSION,
            samples_per_segment: DEFAULT_SAMPLES_PER_SEGMENT,
            parameterization: ParamMode::default(),
            follower_count: DEFAULT_FOLLOWER_COUNT,
            follower_spacing: DEFAULT_FOLLOWER_SPACING,
        }
    }
}

/// Serde-Default für `samples_per_segment` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_samples_per_segment() -> usize {
    DEFAULT_SAMPLES_PER_SEGMENT
}

/// Serde-Default für `follower_spacing` (Abwärtskompatibilität).
fn default_follower_spacing() -> f32 {
    DEFAULT_FOLLOWER_SPACING
}

impl EngineOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }
}
