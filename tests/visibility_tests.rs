/// Integration-Tests für die Sichtbarkeitssteuerung gegen eine aufzeichnende Oberfläche
use railway_map_layers::layers::{
    hide_all_layers_except, hide_layers, layers_for_display_mode, show_layers,
};
use railway_map_layers::{
    decode_display_mode, DisplayMode, InMemorySurface, LayerSurface, Visibility, ALL_LAYERS,
};
use std::fmt;

fn loaded_surface() -> InMemorySurface {
    InMemorySurface::with_layers(ALL_LAYERS.iter().cloned(), Visibility::Visible)
}

/// Oberfläche, die bestimmte Layer verweigert und alle Aufrufe mitschreibt.
#[derive(Default)]
struct FlakySurface {
    refused: Vec<&'static str>,
    calls: Vec<String>,
}

#[derive(Debug)]
struct Refused;

impl fmt::Display for Refused {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("refused")
    }
}

impl std::error::Error for Refused {}

impl LayerSurface for FlakySurface {
    type Error = Refused;

    fn set_layout_visibility(&mut self, layer: &str, _value: Visibility) -> Result<(), Refused> {
        self.calls.push(layer.to_string());
        if self.refused.iter().any(|refused| *refused == layer) {
            Err(Refused)
        } else {
            Ok(())
        }
    }
}

#[test]
fn test_hide_all_layers_except_node_never_touches_node() {
    let mut surface = loaded_surface();

    hide_all_layers_except(&mut surface, DisplayMode::Node).expect("alle Layer sind geladen");

    let hidden: Vec<String> = surface.calls().iter().map(|c| c.layer.clone()).collect();
    let expected: Vec<String> = layers_for_display_mode(DisplayMode::Element)
        .chain(layers_for_display_mode(DisplayMode::Map))
        .collect();
    assert_eq!(hidden, expected);
    assert!(surface.calls().iter().all(|c| c.visibility == Visibility::None));
    for call in surface.calls() {
        assert_ne!(decode_display_mode(&call.layer), Ok(DisplayMode::Node));
    }
}

#[test]
fn test_hide_all_layers_except_does_not_show_kept_mode() {
    let mut surface = InMemorySurface::with_layers(ALL_LAYERS.iter().cloned(), Visibility::None);

    hide_all_layers_except(&mut surface, DisplayMode::Element).unwrap();

    assert_eq!(surface.visible_layers().count(), 0);
}

#[test]
fn test_empty_inputs_issue_no_calls() {
    let mut surface = loaded_surface();

    show_layers(&mut surface, [""; 0]).unwrap();
    hide_layers(&mut surface, Vec::<String>::new()).unwrap();

    assert!(surface.calls().is_empty());
}

#[test]
fn test_partial_failure_keeps_going_in_order() {
    let mut surface = FlakySurface {
        refused: vec!["icon-hlt-map-layer"],
        ..FlakySurface::default()
    };
    let layers = ["dot-hlt-map-layer", "icon-hlt-map-layer", "map-line-layer"];

    let err = hide_layers(&mut surface, layers).unwrap_err();

    assert_eq!(surface.calls, layers);
    assert_eq!(err.attempted, 3);
    assert_eq!(err.rejections.len(), 1);
    assert_eq!(err.rejections[0].layer, "icon-hlt-map-layer");
}

#[test]
fn test_surface_can_be_used_as_trait_object() {
    let mut surface = loaded_surface();
    let dynamic: &mut dyn LayerSurface<Error = railway_map_layers::SurfaceError> = &mut surface;

    show_layers(dynamic, ["station-layer"]).unwrap();

    assert_eq!(surface.calls().len(), 1);
}
