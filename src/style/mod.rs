//! Karten-Style: geordnete Layer-Spezifikationen für den Vektor-Renderer.
//!
//! Der Style wird einmal aus Legenden-Zustand und Optionen aufgebaut und
//! als JSON an den Renderer übergeben. Danach ändert sich nur noch die
//! Sichtbarkeit einzelner Layer (siehe `layers::visibility`).

mod builder;

pub use builder::{build_map_style, element_source_layer, BASE_LAYERS};

use crate::layers::Visibility;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Vektor-Tile-Quelle aller Infrastruktur-Layer.
pub const OSM_SOURCE: &str = "osm";
/// GeoJSON-Quelle hervorgehobener Bahnhofsfahrstraßen.
pub const STATION_ROUTES_SOURCE: &str = "station-routes";
/// GeoJSON-Quelle hervorgehobener Stellwerksfahrstraßen.
pub const INTERLOCKING_ROUTES_SOURCE: &str = "interlocking-routes";

/// Zeichenart eines Layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Background,
    Line,
    Circle,
    Symbol,
}

/// Datenquelle im Style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SourceSpec {
    Vector { tiles: Vec<String>, maxzoom: f32 },
    Geojson { data: Value },
}

/// Layout-Eigenschaften eines Layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerLayout {
    pub visibility: Visibility,
    #[serde(rename = "icon-image", default, skip_serializing_if = "Option::is_none")]
    pub icon_image: Option<String>,
    #[serde(rename = "text-field", default, skip_serializing_if = "Option::is_none")]
    pub text_field: Option<Value>,
    #[serde(rename = "text-font", default, skip_serializing_if = "Option::is_none")]
    pub text_font: Option<Vec<String>>,
    #[serde(rename = "text-anchor", default, skip_serializing_if = "Option::is_none")]
    pub text_anchor: Option<String>,
    #[serde(rename = "text-offset", default, skip_serializing_if = "Option::is_none")]
    pub text_offset: Option<[f32; 2]>,
    #[serde(rename = "icon-size", default, skip_serializing_if = "Option::is_none")]
    pub icon_size: Option<Value>,
}

impl LayerLayout {
    pub fn with_visibility(visibility: Visibility) -> Self {
        Self {
            visibility,
            icon_image: None,
            text_field: None,
            text_font: None,
            text_anchor: None,
            text_offset: None,
            icon_size: None,
        }
    }
}

/// Ein Layer des Styles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: LayerKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(rename = "source-layer", default, skip_serializing_if = "Option::is_none")]
    pub source_layer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minzoom: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxzoom: Option<f32>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub paint: Map<String, Value>,
    pub layout: LayerLayout,
}

/// Vollständiger Karten-Style (Version 8).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapStyle {
    pub version: u8,
    pub sources: IndexMap<String, SourceSpec>,
    pub glyphs: String,
    pub layers: Vec<LayerSpec>,
}

impl MapStyle {
    /// Sucht einen Layer über seine ID.
    pub fn layer(&self, id: &str) -> Option<&LayerSpec> {
        self.layers.iter().find(|spec| spec.id == id)
    }

    /// Alle Layer-IDs in Zeichenreihenfolge (unten zuerst).
    pub fn layer_ids(&self) -> impl Iterator<Item = &str> {
        self.layers.iter().map(|spec| spec.id.as_str())
    }

    /// Serialisiert den Style als formatiertes JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
