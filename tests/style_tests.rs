/// Integration-Tests für Style-Aufbau und Legenden-Aktionen
use railway_map_layers::{
    apply_legend, build_map_style, switch_display_mode, toggle_element_type, DisplayMode,
    ElementType, InMemorySurface, LegendControls, MapLayerOptions, Visibility, ALL_LAYERS,
};

#[test]
fn test_style_loaded_surface_accepts_every_known_layer() {
    let controls = LegendControls::default();
    let mut surface = InMemorySurface::from_style(&build_map_style(
        &controls,
        &MapLayerOptions::default(),
    ));

    apply_legend(&mut surface, &controls).expect("Style enthält alle bekannten Layer");

    assert_eq!(surface.calls().len(), ALL_LAYERS.len());
}

#[test]
fn test_legend_workflow_from_options() {
    let options: MapLayerOptions = toml::from_str(
        r#"
        initial_display_mode = "element"
        initial_element_types = ["ms", "as"]
        show_station_icons = false
        "#,
    )
    .unwrap();
    let mut controls = options.initial_legend_controls();
    let mut surface = InMemorySurface::from_style(&build_map_style(&controls, &options));

    switch_display_mode(&mut surface, &mut controls, DisplayMode::Map).unwrap();
    toggle_element_type(&mut surface, &mut controls, ElementType::Halt, true).unwrap();

    let visible: Vec<&str> = surface
        .visible_layers()
        .filter(|layer| layer.ends_with("-map-layer") || layer.ends_with("line-layer"))
        .collect();
    assert_eq!(
        visible,
        vec![
            "map-line-layer",
            "dot-as-map-layer",
            "icon-as-map-layer",
            "dot-ms-map-layer",
            "icon-ms-map-layer",
            "dot-hlt-map-layer",
            "icon-hlt-map-layer",
        ]
    );
    assert_eq!(surface.visibility("station-layer"), Some(Visibility::None));
    assert_eq!(surface.visibility("icon-ms-element-layer"), Some(Visibility::None));
}
