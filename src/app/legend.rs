//! Legenden-Aktionen gegen die Rendering-Oberfläche.
//!
//! Der Legenden-Zustand wird immer zuerst aktualisiert; Ablehnungen des
//! Renderers werden gesammelt zurückgegeben und ändern den Zustand nicht.

use crate::core::{DisplayMode, ElementType};
use crate::layers::visibility::VisibilityBatch;
use crate::layers::{
    all_layer_ids, layers_for_type, layers_for_types, line_layer, LayerSurface, Visibility,
    VisibilityError, STATION_LAYER,
};
use crate::shared::LegendControls;

/// Gleicht jeden bekannten Layer mit dem Legenden-Zustand ab (ein Aufruf pro Layer).
pub fn apply_legend<S>(
    surface: &mut S,
    controls: &LegendControls,
) -> Result<(), VisibilityError<S::Error>>
where
    S: LayerSurface + ?Sized,
{
    let mut batch = VisibilityBatch::new();
    for id in all_layer_ids() {
        batch.apply(surface, &id.layer_name(), controls.layer_visibility(&id));
    }
    log::debug!(
        "Legende vollständig angewendet ({} Aufrufe)",
        batch.attempted()
    );
    batch.finish()
}

/// Wechselt den Anzeigemodus.
///
/// Blendet die Layer aller anderen Modi aus (inklusive deren Linien) und
/// danach Linie und angehakte Elementarten des neuen Modus ein.
pub fn switch_display_mode<S>(
    surface: &mut S,
    controls: &mut LegendControls,
    display_mode: DisplayMode,
) -> Result<(), VisibilityError<S::Error>>
where
    S: LayerSurface + ?Sized,
{
    log::info!(
        "Anzeigemodus: '{}' → '{}'",
        controls.selected_display_mode,
        display_mode
    );
    controls.selected_display_mode = display_mode;

    let mut batch = VisibilityBatch::new();
    batch.hide_all_except(surface, display_mode);
    batch.extend(
        surface,
        display_mode.others().map(line_layer),
        Visibility::None,
    );

    batch.apply(surface, &line_layer(display_mode), Visibility::Visible);
    batch.extend(
        surface,
        layers_for_types(controls.selected_in_order(), display_mode),
        Visibility::Visible,
    );
    batch.finish()
}

/// Hakt eine Elementart an oder ab und setzt deren Layer im aktiven Modus.
pub fn toggle_element_type<S>(
    surface: &mut S,
    controls: &mut LegendControls,
    element_type: ElementType,
    checked: bool,
) -> Result<(), VisibilityError<S::Error>>
where
    S: LayerSurface + ?Sized,
{
    if checked {
        controls.selected_element_types.insert(element_type);
    } else {
        controls.selected_element_types.shift_remove(&element_type);
    }

    let mut batch = VisibilityBatch::new();
    batch.extend(
        surface,
        layers_for_type(element_type, controls.selected_display_mode),
        Visibility::from(checked),
    );
    batch.finish()
}

/// Blendet den Bahnhofs-Layer ein oder aus.
pub fn toggle_station_icons<S>(
    surface: &mut S,
    controls: &mut LegendControls,
    checked: bool,
) -> Result<(), S::Error>
where
    S: LayerSurface + ?Sized,
{
    controls.show_station_icons = checked;
    surface.set_layout_visibility(STATION_LAYER, Visibility::from(checked))
}
