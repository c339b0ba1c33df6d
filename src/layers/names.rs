//! Layer-Namen: Kodierung eines Kategorie-Tripels in einen eindeutigen String
//! und Rückweg über eine einmalig aufgebaute Tabelle.
//!
//! Format: `"<iconMode>-<elementType>-<displayMode>-layer"`.
//! Dekodiert wird nicht per String-Zerlegung, sondern über die Tabelle
//! aller bekannten Namen (`Name → LayerId`).

use super::enumerator::all_layer_ids;
use crate::core::{DisplayMode, ElementType, IconMode};
use indexmap::IndexMap;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

/// Name des einzelnen Bahnhofs-Layers (nicht kombinatorisch).
pub const STATION_LAYER: &str = "station-layer";

/// Ein Punkt im Kreuzprodukt `IconMode × ElementType × DisplayMode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerKey {
    pub icon_mode: IconMode,
    pub element_type: ElementType,
    pub display_mode: DisplayMode,
}

impl LayerKey {
    pub const fn new(
        icon_mode: IconMode,
        element_type: ElementType,
        display_mode: DisplayMode,
    ) -> Self {
        Self {
            icon_mode,
            element_type,
            display_mode,
        }
    }

    /// Kodiert das Tripel als Layer-Namen.
    pub fn layer_name(&self) -> String {
        encode(self.icon_mode, self.element_type, self.display_mode)
    }
}

/// Jeder Layer, den dieses Modul kennt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerId {
    /// Kombinatorischer Element-Layer (Punkt oder Icon)
    Element(LayerKey),
    /// Bahnhofs-Layer mit Namen und Icon
    Station,
    /// Gleislinien eines Anzeigemodus
    Line(DisplayMode),
}

impl LayerId {
    /// Layer-Name, wie er an den Renderer übergeben wird.
    pub fn layer_name(&self) -> String {
        match self {
            LayerId::Element(key) => key.layer_name(),
            LayerId::Station => STATION_LAYER.to_string(),
            LayerId::Line(display_mode) => line_layer(*display_mode),
        }
    }

    /// Anzeigemodus des Layers; der Bahnhofs-Layer gehört zu keinem.
    pub fn display_mode(&self) -> Option<DisplayMode> {
        match self {
            LayerId::Element(key) => Some(key.display_mode),
            LayerId::Station => None,
            LayerId::Line(display_mode) => Some(*display_mode),
        }
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.layer_name())
    }
}

/// Fehler beim Dekodieren eines Layer-Namens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayerNameError {
    /// Der Name wurde nie von diesem Modul erzeugt
    #[error("Unbekannter Layer-Name: '{0}'")]
    Unknown(String),
    /// Bekannter Name, aber kein Element-Layer (Bahnhof oder Linie)
    #[error("Layer '{0}' ist kein Element-Layer")]
    NotCombinatorial(String),
}

/// Kodiert ein Kategorie-Tripel als Layer-Namen.
pub fn encode(icon_mode: IconMode, element_type: ElementType, display_mode: DisplayMode) -> String {
    format!("{icon_mode}-{element_type}-{display_mode}-layer")
}

/// Name des Linien-Layers eines Anzeigemodus.
pub fn line_layer(display_mode: DisplayMode) -> String {
    format!("{display_mode}-line-layer")
}

/// Name → LayerId, in der Reihenfolge von `all_layers()`.
static LAYER_TABLE: LazyLock<IndexMap<String, LayerId>> = LazyLock::new(|| {
    all_layer_ids()
        .map(|id| (id.layer_name(), id))
        .collect()
});

/// Ordnet einen Layer-Namen seiner LayerId zu.
pub fn decode_layer(name: &str) -> Result<LayerId, LayerNameError> {
    LAYER_TABLE
        .get(name)
        .copied()
        .ok_or_else(|| LayerNameError::Unknown(name.to_string()))
}

/// Ordnet einen Element-Layer-Namen seinem Tripel zu.
pub fn decode(name: &str) -> Result<LayerKey, LayerNameError> {
    match decode_layer(name)? {
        LayerId::Element(key) => Ok(key),
        LayerId::Station | LayerId::Line(_) => {
            Err(LayerNameError::NotCombinatorial(name.to_string()))
        }
    }
}

/// Liefert nur den Anzeigemodus eines Element-Layer-Namens.
pub fn decode_display_mode(name: &str) -> Result<DisplayMode, LayerNameError> {
    decode(name).map(|key| key.display_mode)
}

/// `true`, wenn der Element-Layer zum Node-Modus gehört.
pub fn is_node_layer(name: &str) -> Result<bool, LayerNameError> {
    Ok(decode_display_mode(name)? == DisplayMode::Node)
}

/// `true`, wenn der Element-Layer zum Element-Modus gehört.
pub fn is_element_layer(name: &str) -> Result<bool, LayerNameError> {
    Ok(decode_display_mode(name)? == DisplayMode::Element)
}

/// Prüft, ob ein Name von diesem Modul erzeugt wurde.
pub fn is_known_layer(name: &str) -> bool {
    LAYER_TABLE.contains_key(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_station_icon_element() {
        let name = encode(IconMode::Icon, ElementType::Station, DisplayMode::Element);
        assert_eq!(name, "icon-station-element-layer");
        assert_eq!(decode_display_mode(&name), Ok(DisplayMode::Element));
    }

    #[test]
    fn test_layer_id_display_mode() {
        let key = LayerKey::new(IconMode::Icon, ElementType::Halt, DisplayMode::Node);
        assert_eq!(LayerId::Element(key).display_mode(), Some(DisplayMode::Node));
        assert_eq!(LayerId::Line(DisplayMode::Map).display_mode(), Some(DisplayMode::Map));
        assert_eq!(LayerId::Station.display_mode(), None);
    }

    #[test]
    fn test_key_with_underscore_decodes() {
        let name = encode(IconMode::Dot, ElementType::TrackEnd, DisplayMode::Map);
        assert_eq!(name, "dot-track_end-map-layer");
        assert_eq!(
            decode(&name),
            Ok(LayerKey::new(IconMode::Dot, ElementType::TrackEnd, DisplayMode::Map))
        );
    }

    #[test]
    fn test_line_layer_name() {
        assert_eq!(line_layer(DisplayMode::Node), "node-line-layer");
        assert_eq!(
            decode_layer("node-line-layer"),
            Ok(LayerId::Line(DisplayMode::Node))
        );
    }

    #[test]
    fn test_special_layers_are_not_combinatorial() {
        assert_eq!(
            decode_display_mode(STATION_LAYER),
            Err(LayerNameError::NotCombinatorial(STATION_LAYER.to_string()))
        );
        assert!(matches!(
            is_node_layer("node-line-layer"),
            Err(LayerNameError::NotCombinatorial(_))
        ));
    }

    #[test]
    fn test_foreign_names_fail_loudly() {
        for name in [
            "",
            "layer",
            "background",
            "circle-bumper-layer",
            "icon-station-element",
            "icon-unknown-node-layer",
            "ICON-station-element-layer",
        ] {
            assert_eq!(
                decode_display_mode(name),
                Err(LayerNameError::Unknown(name.to_string())),
                "'{name}' darf nicht dekodiert werden"
            );
            assert!(!is_known_layer(name));
        }
    }

    #[test]
    fn test_predicates() {
        let node = encode(IconMode::Dot, ElementType::Halt, DisplayMode::Node);
        let map = encode(IconMode::Icon, ElementType::Halt, DisplayMode::Map);

        assert_eq!(is_node_layer(&node), Ok(true));
        assert_eq!(is_element_layer(&node), Ok(false));
        assert_eq!(is_node_layer(&map), Ok(false));
        assert_eq!(is_element_layer(&map), Ok(false));
    }
}
