//! Arten von Eisenbahn-Infrastrukturelementen, die als eigene Layer gezeichnet werden.

use super::UnknownKey;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Art eines Infrastruktur-Elements.
///
/// Der Schlüssel (`key()`) ist stabil: er taucht in Layer-Namen, in
/// Source-Layer-Namen der Vektor-Tiles und im Datenformat des Servers auf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ElementType {
    #[serde(rename = "bumper")]
    Bumper,
    #[serde(rename = "border")]
    Border,
    #[serde(rename = "track_end")]
    TrackEnd,
    #[serde(rename = "simple_switch")]
    Switch,
    #[serde(rename = "as")]
    ApproachSignal,
    #[serde(rename = "ms")]
    MainSignal,
    #[serde(rename = "ps")]
    ProtectionSignal,
    #[serde(rename = "eotd")]
    EndOfTrainDetector,
    #[serde(rename = "spl")]
    SpeedLimit,
    #[serde(rename = "tunnel")]
    Tunnel,
    #[serde(rename = "hlt")]
    Halt,
    #[serde(rename = "rtcp")]
    Rtcp,
    #[serde(rename = "km_jump")]
    KmJump,
    #[serde(rename = "line_switch")]
    LineSwitch,
    #[serde(rename = "slope")]
    Slope,
    #[serde(rename = "cross")]
    Cross,
    #[serde(rename = "ctc")]
    Ctc,
    #[serde(rename = "station")]
    Station,
}

impl ElementType {
    /// Alle Elementarten in Deklarationsreihenfolge.
    pub const ALL: [ElementType; 18] = [
        ElementType::Bumper,
        ElementType::Border,
        ElementType::TrackEnd,
        ElementType::Switch,
        ElementType::ApproachSignal,
        ElementType::MainSignal,
        ElementType::ProtectionSignal,
        ElementType::EndOfTrainDetector,
        ElementType::SpeedLimit,
        ElementType::Tunnel,
        ElementType::Halt,
        ElementType::Rtcp,
        ElementType::KmJump,
        ElementType::LineSwitch,
        ElementType::Slope,
        ElementType::Cross,
        ElementType::Ctc,
        ElementType::Station,
    ];

    /// Stabiler Schlüssel (Layer-Namen und Datenformat).
    pub const fn key(self) -> &'static str {
        match self {
            ElementType::Bumper => "bumper",
            ElementType::Border => "border",
            ElementType::TrackEnd => "track_end",
            ElementType::Switch => "simple_switch",
            ElementType::ApproachSignal => "as",
            ElementType::MainSignal => "ms",
            ElementType::ProtectionSignal => "ps",
            ElementType::EndOfTrainDetector => "eotd",
            ElementType::SpeedLimit => "spl",
            ElementType::Tunnel => "tunnel",
            ElementType::Halt => "hlt",
            ElementType::Rtcp => "rtcp",
            ElementType::KmJump => "km_jump",
            ElementType::LineSwitch => "line_switch",
            ElementType::Slope => "slope",
            ElementType::Cross => "cross",
            ElementType::Ctc => "ctc",
            ElementType::Station => "station",
        }
    }

    /// Beschriftung für die Legende.
    pub const fn label(self) -> &'static str {
        match self {
            ElementType::Bumper => "Bumper",
            ElementType::Border => "Border",
            ElementType::TrackEnd => "Track End",
            ElementType::Switch => "Switch",
            ElementType::ApproachSignal => "Approach Signal",
            ElementType::MainSignal => "Main Signal",
            ElementType::ProtectionSignal => "Protection Signal",
            ElementType::EndOfTrainDetector => "End of Train Detector",
            ElementType::SpeedLimit => "Speed Limit",
            ElementType::Tunnel => "Tunnel",
            ElementType::Halt => "Halt",
            ElementType::Rtcp => "RTCP",
            ElementType::KmJump => "KM Jump",
            ElementType::LineSwitch => "Line Switch",
            ElementType::Slope => "Slope",
            ElementType::Cross => "Cross",
            ElementType::Ctc => "CTC",
            ElementType::Station => "Station",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ElementType {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|element_type| element_type.key() == s)
            .ok_or_else(|| UnknownKey::new("ElementType", s))
    }
}
