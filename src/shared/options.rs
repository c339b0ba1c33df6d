//! Zentrale Konfiguration der Layer-Komposition.
//!
//! `MapLayerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use super::LegendControls;
use crate::core::{DisplayMode, ElementType};
use serde::{Deserialize, Serialize};

// ── Tile-Quelle ─────────────────────────────────────────────────────

/// URL-Vorlage der Vektor-Tiles.
pub const TILE_URL: &str = "/tiles/{z}/{x}/{y}.mvt";
/// Höchste Zoomstufe, für die der Server Tiles liefert.
pub const TILE_MAX_ZOOM: f32 = 20.0;
/// URL-Vorlage der Glyphen für Beschriftungen.
pub const GLYPHS_URL: &str = "/font/{fontstack}/{range}.pbf";

// ── Zoom-Bereiche ───────────────────────────────────────────────────

/// Maximaler Zoom aller Feature-Layer.
pub const LAYER_MAX_ZOOM: f32 = 24.0;
/// Ab diesem Zoom erscheinen Punkt-Layer.
pub const DOT_MIN_ZOOM: f32 = 13.0;
/// Ab diesem Zoom erscheinen Icon-Layer.
pub const ICON_MIN_ZOOM: f32 = 15.0;
/// Ab diesem Zoom erscheinen Bahnhöfe.
pub const STATION_MIN_ZOOM: f32 = 5.0;

/// Zoom-Bereich eines Layers (`minzoom`/`maxzoom`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomRange {
    pub min: f32,
    pub max: f32,
}

impl ZoomRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// `true`, wenn `min <= max` gilt.
    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen der Layer-Komposition.
/// Wird als `railway_map_layers.toml` neben der Binary gespeichert.
///
/// Fehlende Felder werden mit Standardwerten belegt. Die Zoom-Tabellen
/// stehen am Ende, da TOML keine Werte nach Tabellen erlaubt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapLayerOptions {
    // ── Legende ─────────────────────────────────────────────────
    /// Anzeigemodus beim Start
    pub initial_display_mode: DisplayMode,
    /// Beim Start angehakte Elementarten
    pub initial_element_types: Vec<ElementType>,
    /// Bahnhofs-Icons beim Start anzeigen
    pub show_station_icons: bool,

    // ── Quellen ─────────────────────────────────────────────────
    /// URL-Vorlage der Vektor-Tiles
    pub tile_url: String,
    /// Höchste Tile-Zoomstufe
    pub tile_max_zoom: f32,
    /// URL-Vorlage der Glyphen
    pub glyphs_url: String,

    // ── Zoom ────────────────────────────────────────────────────
    /// Zoom-Bereich der Punkt-Layer
    pub dot_zoom: ZoomRange,
    /// Zoom-Bereich der Icon-Layer
    pub icon_zoom: ZoomRange,
    /// Zoom-Bereich des Bahnhofs-Layers
    pub station_zoom: ZoomRange,
}

impl Default for MapLayerOptions {
    fn default() -> Self {
        Self {
            initial_display_mode: DisplayMode::Element,
            initial_element_types: ElementType::ALL.to_vec(),
            show_station_icons: true,

            dot_zoom: ZoomRange::new(DOT_MIN_ZOOM, LAYER_MAX_ZOOM),
            icon_zoom: ZoomRange::new(ICON_MIN_ZOOM, LAYER_MAX_ZOOM),
            station_zoom: ZoomRange::new(STATION_MIN_ZOOM, LAYER_MAX_ZOOM),

            tile_url: TILE_URL.to_string(),
            tile_max_zoom: TILE_MAX_ZOOM,
            glyphs_url: GLYPHS_URL.to_string(),
        }
    }
}

impl MapLayerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    Self::with_valid_zoom(opts)
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

    /// Ersetzt umgekehrte Zoom-Bereiche (`min > max`) durch ihre Standardwerte.
    fn with_valid_zoom(mut opts: Self) -> Self {
        let defaults = Self::default();
        for (name, range, fallback) in [
            ("dot_zoom", &mut opts.dot_zoom, defaults.dot_zoom),
            ("icon_zoom", &mut opts.icon_zoom, defaults.icon_zoom),
            ("station_zoom", &mut opts.station_zoom, defaults.station_zoom),
        ] {
            if !range.is_valid() {
                log::warn!(
                    "Zoom-Bereich {} umgekehrt (min {} > max {}), verwende Standardwerte",
                    name,
                    range.min,
                    range.max
                );
                *range = fallback;
            }
        }
        opts
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
            .unwrap_or_else(|_| std::path::PathBuf::from("railway_map_layers"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("railway_map_layers.toml")
    }

    /// Legenden-Zustand beim Start.
    pub fn initial_legend_controls(&self) -> LegendControls {
        LegendControls {
            selected_display_mode: self.initial_display_mode,
            selected_element_types: self.initial_element_types.iter().copied().collect(),
            show_station_icons: self.show_station_icons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let opts: MapLayerOptions = toml::from_str(
            r#"
            initial_display_mode = "node"
            initial_element_types = ["hlt", "station"]
            "#,
        )
        .expect("Teil-Konfiguration sollte parsen");

        assert_eq!(opts.initial_display_mode, DisplayMode::Node);
        assert_eq!(
            opts.initial_element_types,
            vec![ElementType::Halt, ElementType::Station]
        );
        assert!(opts.show_station_icons);
        assert_eq!(opts.icon_zoom, ZoomRange::new(ICON_MIN_ZOOM, LAYER_MAX_ZOOM));
    }

    #[test]
    fn test_unknown_element_key_is_rejected() {
        let result = toml::from_str::<MapLayerOptions>(r#"initial_element_types = ["signal"]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_toml_roundtrip_keeps_values() {
        let mut opts = MapLayerOptions::default();
        opts.initial_display_mode = DisplayMode::Map;
        opts.dot_zoom = ZoomRange::new(12.0, 22.0);

        let content = toml::to_string_pretty(&opts).unwrap();
        let parsed: MapLayerOptions = toml::from_str(&content).unwrap();

        assert_eq!(parsed, opts);
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let opts = MapLayerOptions::load_from_file(&dir.path().join("fehlt.toml"));
        assert_eq!(opts, MapLayerOptions::default());
    }

    #[test]
    fn test_load_invalid_toml_returns_defaults() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let path = dir.path().join("kaputt.toml");
        std::fs::write(&path, "initial_display_mode = 42\n").unwrap();

        let opts = MapLayerOptions::load_from_file(&path);

        assert_eq!(opts, MapLayerOptions::default());
    }

    #[test]
    fn test_save_then_load_keeps_values() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let path = dir.path().join("railway_map_layers.toml");
        let opts = MapLayerOptions {
            initial_display_mode: DisplayMode::Node,
            initial_element_types: vec![ElementType::Halt, ElementType::Station],
            show_station_icons: false,
            station_zoom: ZoomRange::new(1.0, 2.0),
            ..MapLayerOptions::default()
        };

        opts.save_to_file(&path).expect("Speichern sollte gelingen");
        let loaded = MapLayerOptions::load_from_file(&path);

        assert_eq!(loaded, opts);
    }

    #[test]
    fn test_inverted_zoom_range_falls_back_to_default() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let path = dir.path().join("railway_map_layers.toml");
        std::fs::write(
            &path,
            "initial_display_mode = \"map\"\n\n[dot_zoom]\nmin = 20.0\nmax = 3.0\n",
        )
        .unwrap();

        let opts = MapLayerOptions::load_from_file(&path);

        assert!(!ZoomRange::new(20.0, 3.0).is_valid());
        assert_eq!(opts.dot_zoom, ZoomRange::new(DOT_MIN_ZOOM, LAYER_MAX_ZOOM));
        assert_eq!(opts.initial_display_mode, DisplayMode::Map);
    }

    #[test]
    fn test_initial_legend_controls() {
        let opts = MapLayerOptions {
            initial_display_mode: DisplayMode::Node,
            initial_element_types: vec![ElementType::Cross],
            show_station_icons: false,
            ..MapLayerOptions::default()
        };

        let controls = opts.initial_legend_controls();

        assert_eq!(controls.selected_display_mode, DisplayMode::Node);
        assert!(controls.is_type_selected(ElementType::Cross));
        assert!(!controls.is_type_selected(ElementType::Bumper));
        assert!(!controls.show_station_icons);
    }
}
