//! Sichtbarkeitssteuerung: ein Primitiv-Aufruf pro betroffenem Layer.
//!
//! Alle Operationen sind synchron, zustandslos und idempotent. Sammel-
//! Operationen sind nicht transaktional: eine Ablehnung bricht die übrigen
//! Aufrufe nicht ab, sondern wird gesammelt und am Ende zurückgegeben.

use super::enumerator::layers_for_display_mode;
use super::surface::{LayerSurface, Visibility};
use crate::core::DisplayMode;
use thiserror::Error;

/// Ein vom Renderer abgelehnter Aufruf.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerRejection<E> {
    pub layer: String,
    pub error: E,
}

/// Mindestens ein Aufruf einer Sammel-Operation wurde abgelehnt.
#[derive(Debug, Error)]
#[error("{count} von {attempted} Sichtbarkeits-Aufrufen abgelehnt", count = .rejections.len())]
pub struct VisibilityError<E: std::error::Error + 'static> {
    /// Anzahl aller abgesetzten Aufrufe
    pub attempted: usize,
    /// Abgelehnte Aufrufe in Aufruf-Reihenfolge
    pub rejections: Vec<LayerRejection<E>>,
}

impl<E: std::error::Error + 'static> VisibilityError<E> {
    /// Namen der abgelehnten Layer.
    pub fn rejected_layers(&self) -> impl Iterator<Item = &str> {
        self.rejections.iter().map(|rejection| rejection.layer.as_str())
    }
}

/// Sammelt Ergebnisse über mehrere Aufrufe hinweg.
pub(crate) struct VisibilityBatch<E: std::error::Error + 'static> {
    attempted: usize,
    rejections: Vec<LayerRejection<E>>,
}

impl<E: std::error::Error + 'static> VisibilityBatch<E> {
    pub(crate) fn new() -> Self {
        Self {
            attempted: 0,
            rejections: Vec::new(),
        }
    }

    pub(crate) fn apply<S>(&mut self, surface: &mut S, layer: &str, value: Visibility)
    where
        S: LayerSurface<Error = E> + ?Sized,
    {
        self.attempted += 1;
        if let Err(error) = surface.set_layout_visibility(layer, value) {
            log::warn!("Renderer lehnt '{}' = {} ab: {}", layer, value, error);
            self.rejections.push(LayerRejection {
                layer: layer.to_string(),
                error,
            });
        }
    }

    pub(crate) fn extend<S, I>(&mut self, surface: &mut S, layers: I, value: Visibility)
    where
        S: LayerSurface<Error = E> + ?Sized,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for layer in layers {
            self.apply(surface, layer.as_ref(), value);
        }
    }

    /// Blendet die Element-Layer aller Modi außer `keep_display_mode` aus.
    pub(crate) fn hide_all_except<S>(&mut self, surface: &mut S, keep_display_mode: DisplayMode)
    where
        S: LayerSurface<Error = E> + ?Sized,
    {
        for display_mode in keep_display_mode.others() {
            self.extend(
                surface,
                layers_for_display_mode(display_mode),
                Visibility::None,
            );
        }
    }

    pub(crate) fn attempted(&self) -> usize {
        self.attempted
    }

    pub(crate) fn finish(self) -> Result<(), VisibilityError<E>> {
        if self.rejections.is_empty() {
            Ok(())
        } else {
            Err(VisibilityError {
                attempted: self.attempted,
                rejections: self.rejections,
            })
        }
    }
}

/// Setzt die Sichtbarkeit eines Layers. Fehler des Renderers werden unverändert weitergegeben.
pub fn set_layer_visibility<S>(surface: &mut S, layer: &str, visible: bool) -> Result<(), S::Error>
where
    S: LayerSurface + ?Sized,
{
    surface.set_layout_visibility(layer, Visibility::from(visible))
}

pub fn show_layer<S>(surface: &mut S, layer: &str) -> Result<(), S::Error>
where
    S: LayerSurface + ?Sized,
{
    set_layer_visibility(surface, layer, true)
}

pub fn hide_layer<S>(surface: &mut S, layer: &str) -> Result<(), S::Error>
where
    S: LayerSurface + ?Sized,
{
    set_layer_visibility(surface, layer, false)
}

/// Setzt die Sichtbarkeit aller Layer in Iterationsreihenfolge.
///
/// Jeder Layer wird versucht, auch wenn ein vorheriger abgelehnt wurde.
pub fn set_layers_visibilities<S, I>(
    surface: &mut S,
    layers: I,
    visible: bool,
) -> Result<(), VisibilityError<S::Error>>
where
    S: LayerSurface + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let value = Visibility::from(visible);
    let mut batch = VisibilityBatch::new();
    batch.extend(surface, layers, value);
    log::debug!("{} Layer auf '{}' gesetzt", batch.attempted(), value);
    batch.finish()
}

pub fn show_layers<S, I>(surface: &mut S, layers: I) -> Result<(), VisibilityError<S::Error>>
where
    S: LayerSurface + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    set_layers_visibilities(surface, layers, true)
}

pub fn hide_layers<S, I>(surface: &mut S, layers: I) -> Result<(), VisibilityError<S::Error>>
where
    S: LayerSurface + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    set_layers_visibilities(surface, layers, false)
}

/// Blendet alle Element-Layer eines Anzeigemodus aus (keine Linien-Layer).
pub fn hide_all_layers<S>(
    surface: &mut S,
    display_mode: DisplayMode,
) -> Result<(), VisibilityError<S::Error>>
where
    S: LayerSurface + ?Sized,
{
    hide_layers(surface, layers_for_display_mode(display_mode))
}

/// Blendet die Element-Layer aller anderen Anzeigemodi aus.
///
/// Der behaltene Modus wird dabei nicht eingeblendet.
pub fn hide_all_layers_except<S>(
    surface: &mut S,
    keep_display_mode: DisplayMode,
) -> Result<(), VisibilityError<S::Error>>
where
    S: LayerSurface + ?Sized,
{
    let mut batch = VisibilityBatch::new();
    batch.hide_all_except(surface, keep_display_mode);
    batch.finish()
}
