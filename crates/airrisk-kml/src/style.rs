//! Per-level map styling. KML colors are `AABBGGRR`.

use airrisk_core::RiskLevel;

/// Balloon background shared by every level.
pub const BALLOON_BG_COLOR: &str = "ff1a1a2e";
pub const BALLOON_TEXT_COLOR: &str = "ffffffff";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelStyle {
    pub fill: &'static str,
    pub outline: &'static str,
    pub line_width: u8,
    /// CSS color of the risk heading inside the placemark balloon.
    pub heading_color: &'static str,
}

#[must_use]
pub fn level_style(level: RiskLevel) -> LevelStyle {
    match level {
        RiskLevel::DoNotFly => LevelStyle {
            fill: "990000ff",
            outline: "ff0000ff",
            line_width: 2,
            heading_color: "#ff0000",
        },
        RiskLevel::HighRisk => LevelStyle {
            fill: "990080ff",
            outline: "ff0080ff",
            line_width: 2,
            heading_color: "#ff8000",
        },
        RiskLevel::Caution => LevelStyle {
            fill: "9900ffff",
            outline: "ff00ffff",
            line_width: 2,
            heading_color: "#ffff00",
        },
        RiskLevel::Monitor => LevelStyle {
            fill: "00000000",
            outline: "ff00ff00",
            line_width: 1,
            heading_color: "#ffff00",
        },
    }
}

/// `Style` element id, referenced from placemarks as `#levelN`.
#[must_use]
pub fn style_id(level: RiskLevel) -> String {
    format!("level{}", level.number())
}
