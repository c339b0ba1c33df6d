//! Abgeleitete Layer-Listen über dem Kreuzprodukt der Kategorie-Achsen.
//!
//! Die Schleifenreihenfolge unterscheidet sich je nach Funktion und ist
//! Teil des Vertrags: Konsumenten vergleichen und loggen Layer-Mengen in
//! dieser Reihenfolge, und Punkt-Layer müssen unter Icon-Layern liegen.
//!
//! Jede Funktion liefert bei jedem Aufruf einen frischen, endlichen Iterator.

use super::names::{encode, line_layer, LayerId, LayerKey, STATION_LAYER};
use crate::core::{DisplayMode, ElementType, IconMode};
use std::iter;
use std::sync::LazyLock;

/// Ein Layer pro Elementart (Deklarationsreihenfolge) bei festem Icon- und Anzeigemodus.
fn per_element_type(
    icon_mode: IconMode,
    display_mode: DisplayMode,
) -> impl Iterator<Item = String> + Clone {
    ElementType::ALL
        .into_iter()
        .map(move |element_type| encode(icon_mode, element_type, display_mode))
}

// ── Materialisierte Listen ─────────────────────────────────────────

/// Punkt-Layer aller Elementarten im Element-Modus.
pub static ELEMENT_DOT_LAYERS: LazyLock<Vec<String>> =
    LazyLock::new(|| per_element_type(IconMode::Dot, DisplayMode::Element).collect());

/// Icon-Layer aller Elementarten im Element-Modus.
pub static ELEMENT_ICON_LAYERS: LazyLock<Vec<String>> =
    LazyLock::new(|| per_element_type(IconMode::Icon, DisplayMode::Element).collect());

/// Erst alle Punkt-, dann alle Icon-Layer des Element-Modus.
pub static ELEMENT_LAYERS: LazyLock<Vec<String>> = LazyLock::new(|| {
    ELEMENT_DOT_LAYERS
        .iter()
        .chain(ELEMENT_ICON_LAYERS.iter())
        .cloned()
        .collect()
});

/// Punkt-Layer aller Elementarten im Node-Modus.
pub static NODE_DOT_LAYERS: LazyLock<Vec<String>> =
    LazyLock::new(|| per_element_type(IconMode::Dot, DisplayMode::Node).collect());

/// Icon-Layer aller Elementarten im Node-Modus.
pub static NODE_ICON_LAYERS: LazyLock<Vec<String>> =
    LazyLock::new(|| per_element_type(IconMode::Icon, DisplayMode::Node).collect());

/// Erst alle Punkt-, dann alle Icon-Layer des Node-Modus.
pub static NODE_LAYERS: LazyLock<Vec<String>> = LazyLock::new(|| {
    NODE_DOT_LAYERS
        .iter()
        .chain(NODE_ICON_LAYERS.iter())
        .cloned()
        .collect()
});

/// Materialisierte Form von [`icon_layers`].
pub static ICON_LAYERS: LazyLock<Vec<String>> = LazyLock::new(|| icon_layers().collect());

/// Materialisierte Form von [`all_layers`]: jeder Layer, den dieses Modul kennt.
pub static ALL_LAYERS: LazyLock<Vec<String>> = LazyLock::new(|| all_layers().collect());

// ── Generatoren ────────────────────────────────────────────────────

/// Alle Icon-Layer (ElementType außen, DisplayMode innen), danach der Bahnhofs-Layer.
pub fn icon_layers() -> impl Iterator<Item = String> + Clone {
    ElementType::ALL
        .into_iter()
        .flat_map(|element_type| {
            DisplayMode::ALL
                .into_iter()
                .map(move |display_mode| encode(IconMode::Icon, element_type, display_mode))
        })
        .chain(iter::once(STATION_LAYER.to_string()))
}

/// Ein Linien-Layer pro Anzeigemodus.
pub fn line_layers() -> impl Iterator<Item = String> + Clone {
    DisplayMode::ALL.into_iter().map(line_layer)
}

/// Punkt- und Icon-Layer einer Elementart (genau zwei Namen).
pub fn layers_for_type(
    element_type: ElementType,
    display_mode: DisplayMode,
) -> impl Iterator<Item = String> + Clone {
    IconMode::ALL
        .into_iter()
        .map(move |icon_mode| encode(icon_mode, element_type, display_mode))
}

/// Layer mehrerer Elementarten, IconMode außen: erst alle Punkte, dann alle Icons.
///
/// Die übergebene Sammlung wird pro IconMode erneut durchlaufen.
pub fn layers_for_types<I>(
    element_types: I,
    display_mode: DisplayMode,
) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = ElementType> + Clone,
{
    IconMode::ALL.into_iter().flat_map(move |icon_mode| {
        element_types
            .clone()
            .into_iter()
            .map(move |element_type| encode(icon_mode, element_type, display_mode))
    })
}

/// Alle Element-Layer eines Anzeigemodus (ElementType außen, IconMode innen).
///
/// Enthält weder Linien- noch Bahnhofs-Layer.
pub fn layers_for_display_mode(display_mode: DisplayMode) -> impl Iterator<Item = String> + Clone {
    ElementType::ALL
        .into_iter()
        .flat_map(move |element_type| layers_for_type(element_type, display_mode))
}

/// Typisierte Form von [`all_layers`].
pub fn all_layer_ids() -> impl Iterator<Item = LayerId> + Clone {
    IconMode::ALL
        .into_iter()
        .flat_map(|icon_mode| {
            ElementType::ALL.into_iter().flat_map(move |element_type| {
                DisplayMode::ALL.into_iter().map(move |display_mode| {
                    LayerId::Element(LayerKey::new(icon_mode, element_type, display_mode))
                })
            })
        })
        .chain(iter::once(LayerId::Station))
        .chain(DisplayMode::ALL.into_iter().map(LayerId::Line))
}

/// Kreuzprodukt (IconMode, ElementType, DisplayMode von außen nach innen),
/// dann der Bahnhofs-Layer, dann die Linien-Layer.
pub fn all_layers() -> impl Iterator<Item = String> + Clone {
    all_layer_ids().map(|id| id.layer_name())
}
