//! Geteilte Typen für modulübergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `style` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

mod legend_controls;
pub mod options;

pub use legend_controls::LegendControls;
pub use options::{MapLayerOptions, ZoomRange};
