//! Vertrag zur externen Rendering-Oberfläche.
//!
//! Die Oberfläche gehört der umgebenden Anwendung; dieses Modul hält nie
//! eine Referenz darauf, sondern bekommt sie bei jedem Aufruf übergeben.

use crate::style::MapStyle;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Wert der Layout-Eigenschaft `visibility`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Visible,
    None,
}

impl Visibility {
    pub const fn from_visible(visible: bool) -> Self {
        if visible {
            Visibility::Visible
        } else {
            Visibility::None
        }
    }

    pub const fn is_visible(self) -> bool {
        matches!(self, Visibility::Visible)
    }

    /// Wert, wie ihn der Renderer erwartet (`"visible"` / `"none"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Visibility::Visible => "visible",
            Visibility::None => "none",
        }
    }
}

impl From<bool> for Visibility {
    fn from(visible: bool) -> Self {
        Self::from_visible(visible)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Externe Karten-Oberfläche mit einem einzigen Primitiv:
/// `setLayoutProperty(layer, 'visibility', value)`.
pub trait LayerSurface {
    /// Ablehnung durch den Renderer (z.B. Layer nicht geladen).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Setzt die Sichtbarkeit eines benannten Layers.
    fn set_layout_visibility(&mut self, layer: &str, value: Visibility) -> Result<(), Self::Error>;
}

/// Fehler der In-Memory-Oberfläche.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("Layer '{0}' ist nicht geladen")]
    UnknownLayer(String),
}

/// Ein einzelner Aufruf des Sichtbarkeits-Primitivs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityCall {
    pub layer: String,
    pub visibility: Visibility,
}

/// Referenz-Oberfläche ohne Grafik: hält den Sichtbarkeitszustand aller
/// geladenen Layer und protokolliert jeden Aufruf in Reihenfolge.
#[derive(Debug, Clone, Default)]
pub struct InMemorySurface {
    layers: IndexMap<String, Visibility>,
    calls: Vec<VisibilityCall>,
}

impl InMemorySurface {
    /// Erstellt eine leere Oberfläche ohne geladene Layer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lädt die übergebenen Layer mit einheitlicher Start-Sichtbarkeit.
    pub fn with_layers<I>(layers: I, visibility: Visibility) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            layers: layers
                .into_iter()
                .map(|layer| (layer.into(), visibility))
                .collect(),
            calls: Vec::new(),
        }
    }

    /// Lädt alle Layer eines Styles mit ihrer dort angegebenen Sichtbarkeit.
    pub fn from_style(style: &MapStyle) -> Self {
        let layers: IndexMap<String, Visibility> = style
            .layers
            .iter()
            .map(|spec| (spec.id.clone(), spec.layout.visibility))
            .collect();
        log::debug!("InMemorySurface: {} Layer aus Style geladen", layers.len());

        Self {
            layers,
            calls: Vec::new(),
        }
    }

    /// Fügt einen Layer hinzu oder überschreibt dessen Sichtbarkeit.
    pub fn add_layer(&mut self, layer: impl Into<String>, visibility: Visibility) {
        self.layers.insert(layer.into(), visibility);
    }

    /// Aktuelle Sichtbarkeit eines geladenen Layers.
    pub fn visibility(&self, layer: &str) -> Option<Visibility> {
        self.layers.get(layer).copied()
    }

    /// Alle sichtbaren Layer in Ladereihenfolge.
    pub fn visible_layers(&self) -> impl Iterator<Item = &str> {
        self.layers
            .iter()
            .filter(|(_, visibility)| visibility.is_visible())
            .map(|(layer, _)| layer.as_str())
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Alle bisherigen Aufrufe, auch abgelehnte.
    pub fn calls(&self) -> &[VisibilityCall] {
        &self.calls
    }

    /// Gibt das Aufruf-Protokoll zurück und leert es.
    pub fn take_calls(&mut self) -> Vec<VisibilityCall> {
        std::mem::take(&mut self.calls)
    }
}

impl LayerSurface for InMemorySurface {
    type Error = SurfaceError;

    fn set_layout_visibility(
        &mut self,
        layer: &str,
        value: Visibility,
    ) -> Result<(), SurfaceError> {
        self.calls.push(VisibilityCall {
            layer: layer.to_string(),
            visibility: value,
        });

        match self.layers.get_mut(layer) {
            Some(current) => {
                *current = value;
                Ok(())
            }
            None => Err(SurfaceError::UnknownLayer(layer.to_string())),
        }
    }
}
