//! Legenden-Zustand als Übergabevertrag zwischen App-Logik und Style-Aufbau.

use crate::core::{DisplayMode, ElementType};
use crate::layers::{LayerId, Visibility};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Was der Nutzer in der Legende ausgewählt hat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendControls {
    /// Aktiver Anzeigemodus
    pub selected_display_mode: DisplayMode,
    /// Angehakte Elementarten (Reihenfolge = Reihenfolge des Anhakens)
    pub selected_element_types: IndexSet<ElementType>,
    /// Bahnhofs-Icons mit Namen anzeigen
    pub show_station_icons: bool,
}

impl Default for LegendControls {
    fn default() -> Self {
        Self {
            selected_display_mode: DisplayMode::default(),
            selected_element_types: ElementType::ALL.into_iter().collect(),
            show_station_icons: true,
        }
    }
}

impl LegendControls {
    pub fn is_type_selected(&self, element_type: ElementType) -> bool {
        self.selected_element_types.contains(&element_type)
    }

    /// Angehakte Elementarten in Deklarationsreihenfolge.
    pub fn selected_in_order(&self) -> Vec<ElementType> {
        ElementType::ALL
            .into_iter()
            .filter(|element_type| self.is_type_selected(*element_type))
            .collect()
    }

    /// Soll-Sichtbarkeit eines Layers für diesen Legenden-Zustand.
    ///
    /// - Linien: sichtbar im aktiven Modus
    /// - Element-Layer: aktiver Modus und Elementart angehakt
    /// - Bahnhof: nach `show_station_icons`
    pub fn layer_visibility(&self, layer: &LayerId) -> Visibility {
        let in_mode = layer.display_mode() == Some(self.selected_display_mode);
        let visible = match layer {
            LayerId::Element(key) => in_mode && self.is_type_selected(key.element_type),
            LayerId::Station => self.show_station_icons,
            LayerId::Line(_) => in_mode,
        };
        Visibility::from(visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::IconMode;
    use crate::layers::LayerKey;

    #[test]
    fn test_element_layer_needs_mode_and_type() {
        let mut controls = LegendControls {
            selected_display_mode: DisplayMode::Node,
            selected_element_types: IndexSet::new(),
            show_station_icons: false,
        };
        controls.selected_element_types.insert(ElementType::Halt);

        let halt_node = LayerId::Element(LayerKey::new(
            IconMode::Icon,
            ElementType::Halt,
            DisplayMode::Node,
        ));
        let halt_map = LayerId::Element(LayerKey::new(
            IconMode::Icon,
            ElementType::Halt,
            DisplayMode::Map,
        ));
        let bumper_node = LayerId::Element(LayerKey::new(
            IconMode::Dot,
            ElementType::Bumper,
            DisplayMode::Node,
        ));

        assert_eq!(controls.layer_visibility(&halt_node), Visibility::Visible);
        assert_eq!(controls.layer_visibility(&halt_map), Visibility::None);
        assert_eq!(controls.layer_visibility(&bumper_node), Visibility::None);
        assert_eq!(controls.layer_visibility(&LayerId::Station), Visibility::None);
        assert_eq!(
            controls.layer_visibility(&LayerId::Line(DisplayMode::Node)),
            Visibility::Visible
        );
    }

    #[test]
    fn test_selected_in_order_ignores_click_order() {
        let controls = LegendControls {
            selected_element_types: [ElementType::Station, ElementType::Bumper]
                .into_iter()
                .collect(),
            ..LegendControls::default()
        };

        assert_eq!(
            controls.selected_in_order(),
            vec![ElementType::Bumper, ElementType::Station]
        );
    }
}
