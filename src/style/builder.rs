//! Aufbau des Karten-Styles aus Legenden-Zustand und Optionen.

use super::{
    LayerKind, LayerLayout, LayerSpec, MapStyle, SourceSpec, INTERLOCKING_ROUTES_SOURCE,
    OSM_SOURCE, STATION_ROUTES_SOURCE,
};
use crate::core::{DisplayMode, ElementType, IconMode};
use crate::layers::{LayerId, LayerKey, Visibility, STATION_LAYER};
use crate::shared::{LegendControls, MapLayerOptions, ZoomRange};
use indexmap::IndexMap;
use serde_json::{json, Map, Value};

/// Fest eingebaute Layer unterhalb aller Infrastruktur-Layer.
pub const BASE_LAYERS: [&str; 5] = [
    "background",
    "station-route-layer",
    "station-route-element-layer",
    "interlocking-route-layer",
    "interlocking-route-element-layer",
];

/// Zoom-Bereich der Punkte auf hervorgehobenen Fahrstraßen.
const ROUTE_ELEMENT_ZOOM: ZoomRange = ZoomRange::new(16.0, 24.0);

/// Source-Layer der Vektor-Tiles für eine Elementart: `"<displayMode>-<elementType>"`.
pub fn element_source_layer(element_type: ElementType, display_mode: DisplayMode) -> String {
    format!("{display_mode}-{element_type}")
}

/// Beschriftung unter dem Icon: Schrift, Anker oben, eine Zeile Abstand.
fn symbol_layout(
    visibility: Visibility,
    icon_image: String,
    text_field: Value,
    font: &str,
    icon_size: (f64, f64),
) -> LayerLayout {
    LayerLayout {
        visibility,
        icon_image: Some(icon_image),
        text_field: Some(text_field),
        text_font: Some(vec![font.to_string()]),
        text_anchor: Some("top".to_string()),
        text_offset: Some([0.0, 1.0]),
        icon_size: Some(json!([
            "interpolate", ["linear"], ["zoom"], 10, icon_size.0, 20, icon_size.1
        ])),
    }
}

fn paint(entries: impl IntoIterator<Item = (&'static str, Value)>) -> Map<String, Value> {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

fn empty_feature_collection() -> SourceSpec {
    SourceSpec::Geojson {
        data: json!({ "type": "FeatureCollection", "features": [] }),
    }
}

fn base_layers() -> Vec<LayerSpec> {
    let route_line = |id: &str, source: &str| LayerSpec {
        id: id.to_string(),
        kind: LayerKind::Line,
        source: Some(source.to_string()),
        source_layer: None,
        minzoom: None,
        maxzoom: None,
        paint: paint([("line-color", json!("#ff0000")), ("line-width", json!(6))]),
        layout: LayerLayout::with_visibility(Visibility::Visible),
    };
    let route_elements = |id: &str, source: &str| LayerSpec {
        id: id.to_string(),
        kind: LayerKind::Circle,
        source: Some(source.to_string()),
        source_layer: None,
        minzoom: Some(ROUTE_ELEMENT_ZOOM.min),
        maxzoom: Some(ROUTE_ELEMENT_ZOOM.max),
        paint: paint([
            ("circle-color", json!("#ff0000")),
            (
                "circle-radius",
                json!(["interpolate", ["linear"], ["zoom"], 10, 1, 20, 19]),
            ),
        ]),
        layout: LayerLayout::with_visibility(Visibility::Visible),
    };

    vec![
        LayerSpec {
            id: BASE_LAYERS[0].to_string(),
            kind: LayerKind::Background,
            source: None,
            source_layer: None,
            minzoom: None,
            maxzoom: None,
            paint: paint([("background-color", json!("#ECE9E9"))]),
            layout: LayerLayout::with_visibility(Visibility::Visible),
        },
        route_line(BASE_LAYERS[1], STATION_ROUTES_SOURCE),
        route_elements(BASE_LAYERS[2], STATION_ROUTES_SOURCE),
        route_line(BASE_LAYERS[3], INTERLOCKING_ROUTES_SOURCE),
        route_elements(BASE_LAYERS[4], INTERLOCKING_ROUTES_SOURCE),
    ]
}

fn station_layer(controls: &LegendControls, options: &MapLayerOptions) -> LayerSpec {
    LayerSpec {
        id: STATION_LAYER.to_string(),
        kind: LayerKind::Symbol,
        source: Some(OSM_SOURCE.to_string()),
        source_layer: Some("station".to_string()),
        minzoom: Some(options.station_zoom.min),
        maxzoom: Some(options.station_zoom.max),
        paint: paint([
            ("icon-color", json!("#ffffff")),
            ("text-halo-width", json!(1)),
            ("text-halo-color", json!("#ffffff")),
        ]),
        layout: symbol_layout(
            controls.layer_visibility(&LayerId::Station),
            "icon-station".to_string(),
            json!(["get", "name"]),
            "Noto Sans Bold",
            (0.8, 1.0),
        ),
    }
}

fn line_layer(display_mode: DisplayMode, controls: &LegendControls) -> LayerSpec {
    let id = LayerId::Line(display_mode);
    let name = id.layer_name();
    LayerSpec {
        source_layer: Some(name.clone()),
        id: name,
        kind: LayerKind::Line,
        source: Some(OSM_SOURCE.to_string()),
        minzoom: None,
        maxzoom: None,
        paint: paint([("line-color", json!("#444")), ("line-width", json!(2.0))]),
        layout: LayerLayout::with_visibility(controls.layer_visibility(&id)),
    }
}

fn element_layer(
    key: LayerKey,
    controls: &LegendControls,
    options: &MapLayerOptions,
) -> LayerSpec {
    let id = LayerId::Element(key);
    let visibility = controls.layer_visibility(&id);
    let source_layer = Some(element_source_layer(key.element_type, key.display_mode));

    match key.icon_mode {
        IconMode::Dot => LayerSpec {
            id: id.layer_name(),
            kind: LayerKind::Circle,
            source: Some(OSM_SOURCE.to_string()),
            source_layer,
            minzoom: Some(options.dot_zoom.min),
            maxzoom: Some(options.dot_zoom.max),
            paint: paint([
                ("circle-radius", json!(3)),
                ("circle-color", json!("#000000")),
                ("circle-stroke-width", json!(1)),
                ("circle-stroke-color", json!("#FFFFFF")),
            ]),
            layout: LayerLayout::with_visibility(visibility),
        },
        IconMode::Icon => LayerSpec {
            id: id.layer_name(),
            kind: LayerKind::Symbol,
            source: Some(OSM_SOURCE.to_string()),
            source_layer,
            minzoom: Some(options.icon_zoom.min),
            maxzoom: Some(options.icon_zoom.max),
            paint: paint([
                ("icon-color", json!("#ffffff")),
                ("text-color", json!("#000000")),
            ]),
            layout: symbol_layout(
                visibility,
                format!("icon-{}", key.element_type),
                json!(["get", "id"]),
                "Noto Sans Regular",
                (0.2, 0.4),
            ),
        },
    }
}

/// Baut den vollständigen Style.
///
/// Reihenfolge: Basis-Layer, Bahnhof, dann pro Anzeigemodus der Linien-Layer
/// gefolgt von Punkt- und Icon-Layer jeder Elementart.
pub fn build_map_style(controls: &LegendControls, options: &MapLayerOptions) -> MapStyle {
    let mut sources = IndexMap::new();
    sources.insert(
        OSM_SOURCE.to_string(),
        SourceSpec::Vector {
            tiles: vec![options.tile_url.clone()],
            maxzoom: options.tile_max_zoom,
        },
    );
    sources.insert(STATION_ROUTES_SOURCE.to_string(), empty_feature_collection());
    sources.insert(
        INTERLOCKING_ROUTES_SOURCE.to_string(),
        empty_feature_collection(),
    );

    let mut layers = base_layers();
    layers.push(station_layer(controls, options));

    for display_mode in DisplayMode::ALL {
        layers.push(line_layer(display_mode, controls));

        for element_type in ElementType::ALL {
            for icon_mode in IconMode::ALL {
                let key = LayerKey::new(icon_mode, element_type, display_mode);
                layers.push(element_layer(key, controls, options));
            }
        }
    }

    log::debug!(
        "Karten-Style aufgebaut: {} Layer, Modus '{}'",
        layers.len(),
        controls.selected_display_mode
    );

    MapStyle {
        version: 8,
        sources,
        glyphs: options.glyphs_url.clone(),
        layers,
    }
}
