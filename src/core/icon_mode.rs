//! Darstellungsart eines Features: schlichter Punkt oder typspezifisches Icon.

use super::UnknownKey;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Darstellungsart eines Infrastruktur-Elements auf der Karte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Kleiner schwarzer Punkt als Platzhalter
    Dot,
    /// Typspezifisches Icon
    Icon,
}

impl IconMode {
    /// Alle Werte in Aufzählungsreihenfolge (Punkte vor Icons).
    pub const ALL: [IconMode; 2] = [IconMode::Dot, IconMode::Icon];

    /// Stabiler Schlüssel, wie er in Layer-Namen verwendet wird.
    pub const fn key(self) -> &'static str {
        match self {
            IconMode::Dot => "dot",
            IconMode::Icon => "icon",
        }
    }
}

impl fmt::Display for IconMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for IconMode {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.key() == s)
            .ok_or_else(|| UnknownKey::new("IconMode", s))
    }
}
