//! Zoom- bzw. Aggregationsstufe, auf der Features gezeichnet werden.

use super::UnknownKey;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Anzeigemodus der Infrastruktur-Karte.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Topologische Knotenansicht
    Node,
    /// Elementansicht (Standard)
    #[default]
    Element,
    /// Geografische Kartenansicht
    Map,
}

impl DisplayMode {
    /// Alle Werte in Aufzählungsreihenfolge.
    pub const ALL: [DisplayMode; 3] = [DisplayMode::Node, DisplayMode::Element, DisplayMode::Map];

    /// Stabiler Schlüssel, wie er in Layer-Namen verwendet wird.
    pub const fn key(self) -> &'static str {
        match self {
            DisplayMode::Node => "node",
            DisplayMode::Element => "element",
            DisplayMode::Map => "map",
        }
    }

    /// Alle anderen Modi, in Aufzählungsreihenfolge.
    pub fn others(self) -> impl Iterator<Item = DisplayMode> + Clone {
        Self::ALL.into_iter().filter(move |mode| *mode != self)
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DisplayMode {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.key() == s)
            .ok_or_else(|| UnknownKey::new("DisplayMode", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_others_skips_self_and_keeps_order() {
        let others: Vec<_> = DisplayMode::Element.others().collect();
        assert_eq!(others, vec![DisplayMode::Node, DisplayMode::Map]);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = "micro".parse::<DisplayMode>().unwrap_err();
        assert_eq!(err.kind, "DisplayMode");
        assert_eq!(err.key, "micro");
    }
}
