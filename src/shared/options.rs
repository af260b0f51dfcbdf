//! Zentrale Konfiguration der Oberflächen-Werkzeuge.
//!
//! `SurfaceOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Snapping ────────────────────────────────────────────────────────

/// Snap-Radius (virtuelle Einheiten): Punkte innerhalb rasten auf Receiver ein.
pub const SNAP_RADIUS: f32 = 0.02;
/// Rasterweite (virtuelle Einheiten) wenn Raster-Snap aktiv ist.
pub const GRID_SIZE: f32 = 0.05;

// ── Gesten-Rendering ────────────────────────────────────────────────

/// Anzahl Frames, in die eine Geste beim Rendern abgetastet wird.
pub const RENDER_FRAMES: usize = 256;
/// Zusätzlicher Rand (Pixel) um Repaint-Bereiche für Strichbreite/Handles.
pub const REPAINT_PADDING_PX: f32 = 4.0;
/// Kantenlänge der Kontrollpunkt-Handles in Pixeln.
pub const CTRL_POINT_SIZE_PX: f32 = 6.0;

// ── Timeline ────────────────────────────────────────────────────────

/// Trajektorien-Rate (Frames pro Sekunde).
pub const TIMELINE_RATE: f32 = 25.0;
/// Länge der Demo-Timeline in Sekunden.
pub const TIMELINE_SECONDS: f32 = 20.0;

// ── Farben ──────────────────────────────────────────────────────────

/// Farbe der Gesten-Shape (RGBA).
pub const SHAPE_COLOR: [f32; 4] = [1.0, 0.8, 0.0, 1.0];
/// Farbe der Kontrollpunkt-Handles (RGBA).
pub const CTRL_POINT_COLOR: [f32; 4] = [0.2, 0.7, 1.0, 1.0];
/// Füllfarbe der Geschwindigkeits-Hülle (RGBA, halbtransparent).
pub const VELOCITY_COLOR: [f32; 4] = [1.0, 0.3, 0.3, 0.35];

/// Alle zur Laufzeit änderbaren Werkzeug-Optionen.
/// Wird als `meloncillo_surface.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SurfaceOptions {
    // ── Snapping ────────────────────────────────────────────────
    /// Snap-Radius in virtuellen Einheiten
    pub snap_radius: f32,
    /// Raster-Snap aktiv
    #[serde(default)]
    pub snap_to_grid: bool,
    /// Rasterweite in virtuellen Einheiten
    #[serde(default = "default_grid_size")]
    pub grid_size: f32,

    // ── Gesten ──────────────────────────────────────────────────
    /// Frames pro gerenderter Geste
    pub render_frames: usize,
    /// Repaint-Rand in Pixeln
    pub repaint_padding_px: f32,
    /// Handle-Größe in Pixeln
    pub ctrl_point_size_px: f32,

    // ── Timeline ────────────────────────────────────────────────
    /// Frames pro Sekunde
    pub timeline_rate: f32,
    /// Länge der Timeline in Sekunden
    pub timeline_seconds: f32,

    // ── Farben ──────────────────────────────────────────────────
    pub shape_color: [f32; 4],
    pub ctrl_point_color: [f32; 4],
    pub velocity_color: [f32; 4],
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            snap_radius: SNAP_RADIUS,
            snap_to_grid: false,
            grid_size: GRID_SIZE,
            render_frames: RENDER_FRAMES,
            repaint_padding_px: REPAINT_PADDING_PX,
            ctrl_point_size_px: CTRL_POINT_SIZE_PX,
            timeline_rate: TIMELINE_RATE,
            timeline_seconds: TIMELINE_SECONDS,
            shape_color: SHAPE_COLOR,
            ctrl_point_color: CTRL_POINT_COLOR,
            velocity_color: VELOCITY_COLOR,
        }
    }
}

/// Serde-Default für `grid_size` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_grid_size() -> f32 {
    GRID_SIZE
}

impl SurfaceOptions {
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

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("meloncillo_surface"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("meloncillo_surface.toml")
    }

    /// Rasterweite, falls Raster-Snap aktiv ist.
    pub fn active_grid(&self) -> Option<f32> {
        self.snap_to_grid.then_some(self.grid_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("meloncillo_surface_does_not_exist.toml");
        let _ = std::fs::remove_file(&path);
        assert_eq!(SurfaceOptions::load_from_file(&path), SurfaceOptions::default());
    }

    #[test]
    fn test_save_and_load_keeps_values() {
        let path = std::env::temp_dir().join(format!(
            "meloncillo_surface_options_{}.toml",
            std::process::id()
        ));
        let opts = SurfaceOptions {
            snap_to_grid: true,
            render_frames: 64,
            ..SurfaceOptions::default()
        };
        opts.save_to_file(&path).expect("Speichern muss klappen");
        let loaded = SurfaceOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, opts);
        assert_eq!(loaded.active_grid(), Some(GRID_SIZE));
    }

    #[test]
    fn test_old_file_without_grid_fields_still_loads() {
        let content = toml::to_string_pretty(&SurfaceOptions::default())
            .expect("Serialisierung")
            .lines()
            .filter(|l| !l.starts_with("snap_to_grid") && !l.starts_with("grid_size"))
            .collect::<Vec<_>>()
            .join("\n");
        let opts: SurfaceOptions = toml::from_str(&content).expect("Alte Datei muss laden");
        assert!(!opts.snap_to_grid);
        assert_eq!(opts.grid_size, GRID_SIZE);
    }
}
