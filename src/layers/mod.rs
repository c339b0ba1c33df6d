//! Layer-Komposition der Infrastruktur-Karte.
//!
//! - `names`: Kodierung/Dekodierung von Layer-Namen
//! - `enumerator`: abgeleitete, geordnete Layer-Listen
//! - `surface`: Vertrag zur externen Rendering-Oberfläche
//! - `visibility`: Ein-/Ausblenden über diese Oberfläche

pub mod enumerator;
pub mod names;
pub mod surface;
pub mod visibility;

pub use enumerator::{
    all_layer_ids, all_layers, icon_layers, layers_for_display_mode, layers_for_type,
    layers_for_types, line_layers, ALL_LAYERS, ELEMENT_DOT_LAYERS, ELEMENT_ICON_LAYERS,
    ELEMENT_LAYERS, ICON_LAYERS, NODE_DOT_LAYERS, NODE_ICON_LAYERS, NODE_LAYERS,
};
pub use names::{
    decode, decode_display_mode, decode_layer, encode, is_element_layer, is_known_layer,
    is_node_layer, line_layer, LayerId, LayerKey, LayerNameError, STATION_LAYER,
};
pub use surface::{InMemorySurface, LayerSurface, SurfaceError, Visibility, VisibilityCall};
pub use visibility::{
    hide_all_layers, hide_all_layers_except, hide_layer, hide_layers, set_layer_visibility,
    set_layers_visibilities, show_layer, show_layers, LayerRejection, VisibilityError,
};
