//! Core-Domänentypen: die drei geschlossenen Kategorie-Achsen der Infrastruktur-Karte.
//!
//! Jede Achse ist eine explizit geordnete Liste (`ALL`). Die Reihenfolge
//! bestimmt die Reihenfolge aller abgeleiteten Layer-Listen.

pub mod display_mode;
pub mod element_type;
pub mod icon_mode;

pub use display_mode::DisplayMode;
pub use element_type::ElementType;
pub use icon_mode::IconMode;

use thiserror::Error;

/// Ein String konnte keinem Wert einer Kategorie-Achse zugeordnet werden.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unbekannter {kind}-Schlüssel: '{key}'")]
pub struct UnknownKey {
    /// Name der Achse (z.B. `"DisplayMode"`)
    pub kind: &'static str,
    /// Der abgelehnte Schlüssel
    pub key: String,
}

impl UnknownKey {
    pub(crate) fn new(kind: &'static str, key: &str) -> Self {
        Self {
            kind,
            key: key.to_string(),
        }
    }
}
