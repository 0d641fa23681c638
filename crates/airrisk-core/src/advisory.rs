//! Advisory and notice records shared by the scraper, resolver, and KML writer.

use std::borrow::Cow;

use crate::tables;

/// Severity bucket published by the advisory feed. Lower numbers are more severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum RiskLevel {
    DoNotFly,
    HighRisk,
    /// Level assumed for records that carry a warning but no listing level.
    #[default]
    Caution,
    Monitor,
}

impl RiskLevel {
    /// All levels in ascending numeric order (most severe first).
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::DoNotFly,
        RiskLevel::HighRisk,
        RiskLevel::Caution,
        RiskLevel::Monitor,
    ];

    /// Maps the feed's numeric level to a variant; anything outside `1..=4` is `None`.
    #[must_use]
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(RiskLevel::DoNotFly),
            2 => Some(RiskLevel::HighRisk),
            3 => Some(RiskLevel::Caution),
            4 => Some(RiskLevel::Monitor),
            _ => None,
        }
    }

    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            RiskLevel::DoNotFly => 1,
            RiskLevel::HighRisk => 2,
            RiskLevel::Caution => 3,
            RiskLevel::Monitor => 4,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::DoNotFly => "Do Not Fly",
            RiskLevel::HighRisk => "High Risk",
            RiskLevel::Caution => "Caution",
            RiskLevel::Monitor => "Monitor",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Level {} - {}", self.number(), self.label())
    }
}

/// One country or region entry discovered in the advisory feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisoryRecord {
    /// Token embedded in the feed markup, e.g. `SaudiArabia` in `SaudiArabiaWarning`.
    pub key: String,
    /// Human-readable name from the feed listing, when one was present.
    pub listing_name: Option<String>,
    pub level: Option<RiskLevel>,
    pub warning: Option<String>,
    pub news: Option<String>,
}

impl AdvisoryRecord {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            listing_name: None,
            level: None,
            warning: None,
            news: None,
        }
    }

    /// Name shown to users: the listing name, else a curated spelling of the
    /// key (`SouthSudan` becomes `South Sudan`), else the key itself.
    #[must_use]
    pub fn display_name(&self) -> Cow<'_, str> {
        if let Some(name) = &self.listing_name {
            return Cow::Borrowed(name.as_str());
        }
        match tables::display_name_override(&self.key) {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Borrowed(self.key.as_str()),
        }
    }

    /// Records with neither a warning nor a level are feed noise.
    #[must_use]
    pub fn is_reportable(&self) -> bool {
        self.warning.is_some() || self.level.is_some()
    }

    #[must_use]
    pub fn effective_level(&self) -> RiskLevel {
        self.level.unwrap_or_default()
    }
}

/// One notice block scraped from a country detail page.
///
/// Dates are kept as published; the upstream format is not consistent enough
/// to parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeRecord {
    pub source: String,
    pub reference: String,
    pub issued_at: String,
    pub valid_until: String,
    pub summary: String,
    pub full_text: String,
}

impl NoticeRecord {
    /// A block is worth keeping when it names a source, a reference, or a summary.
    #[must_use]
    pub fn has_content(&self) -> bool {
        !self.source.is_empty() || !self.reference.is_empty() || !self.summary.is_empty()
    }
}
