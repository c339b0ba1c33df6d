//! Layer-Komposition und Sichtbarkeitssteuerung der Infrastruktur-Karte.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod layers;
pub mod shared;
pub mod style;

pub use app::{apply_legend, switch_display_mode, toggle_element_type, toggle_station_icons};
pub use crate::core::{DisplayMode, ElementType, IconMode, UnknownKey};
pub use layers::{
    decode, decode_display_mode, encode, is_element_layer, is_node_layer, InMemorySurface,
    LayerId, LayerKey, LayerNameError, LayerSurface, SurfaceError, Visibility, VisibilityError,
    ALL_LAYERS, STATION_LAYER,
};
pub use shared::{LegendControls, MapLayerOptions, ZoomRange};
pub use style::{build_map_style, LayerKind, LayerSpec, MapStyle};
