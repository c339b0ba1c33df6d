//! Anwendungslogik: übersetzt Legenden-Eingaben in Sichtbarkeits-Aufrufe.

pub mod legend;

pub use legend::{apply_legend, switch_display_mode, toggle_element_type, toggle_station_icons};
