//! Advisory extraction from the SafeAirspace home page.
//!
//! The page carries its data in three unrelated shapes:
//!
//! - script literals `FranceWarning = '...'`
//! - script literals `FranceNews = '...'`
//! - listing items with `data-feed-item-country="France"` and
//!   `data-feed-item-warn-level="2"` attributes
//!
//! Each shape is scanned independently and folded into one record per
//! advisory key. A literal whose quoting is broken simply fails to match; the
//! extractor never errors.

use std::collections::HashMap;
use std::sync::LazyLock;

use airrisk_core::{AdvisoryRecord, RiskLevel};
use regex::Regex;

use crate::html::unescape_literal;

static WARNING_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\w+)Warning\s*=\s*'((?:[^'\\]|\\.)*)'").expect("valid warning literal regex")
});
static NEWS_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\w+)News\s*=\s*'((?:[^'\\]|\\.)*)'").expect("valid news literal regex")
});
static LISTING_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"data-feed-item-country="([^"]+)"[^>]*data-feed-item-warn-level="([0-9])""#)
        .expect("valid listing item regex")
});

/// Advisory records keyed by feed token, in order of first discovery.
#[derive(Debug, Default, Clone)]
pub struct AdvisoryFeed {
    records: Vec<AdvisoryRecord>,
    positions: HashMap<String, usize>,
}

impl AdvisoryFeed {
    /// Extracts every advisory from the raw page HTML.
    #[must_use]
    pub fn parse(html: &str) -> Self {
        let mut feed = Self::default();

        for (key, content) in literal_matches(&WARNING_LITERAL, html) {
            feed.entry(key).warning = Some(content);
        }
        for (key, content) in literal_matches(&NEWS_LITERAL, html) {
            feed.entry(key).news = Some(content);
        }

        for caps in LISTING_ITEM.captures_iter(html) {
            let display_name = &caps[1];
            let level = caps[2].parse::<u8>().ok().and_then(RiskLevel::from_number);
            if level.is_none() {
                tracing::debug!(country = display_name, raw = &caps[2], "listing level out of range");
            }
            feed.apply_listing(display_name, level);
        }

        feed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&AdvisoryRecord> {
        self.positions.get(key).map(|&i| &self.records[i])
    }

    /// All records, including ones that carry neither warning nor level.
    #[must_use]
    pub fn records(&self) -> &[AdvisoryRecord] {
        &self.records
    }

    /// Records that carry a warning or a level, in discovery order.
    pub fn reportable(&self) -> impl Iterator<Item = &AdvisoryRecord> {
        self.records.iter().filter(|r| r.is_reportable())
    }

    #[must_use]
    pub fn into_reportable(self) -> Vec<AdvisoryRecord> {
        self.records
            .into_iter()
            .filter(AdvisoryRecord::is_reportable)
            .collect()
    }

    fn entry(&mut self, key: &str) -> &mut AdvisoryRecord {
        let index = match self.positions.get(key) {
            Some(&i) => i,
            None => self.push(AdvisoryRecord::new(key)),
        };
        &mut self.records[index]
    }

    fn push(&mut self, record: AdvisoryRecord) -> usize {
        let index = self.records.len();
        self.positions.insert(record.key.clone(), index);
        self.records.push(record);
        index
    }

    /// Attaches a listing entry to its record.
    ///
    /// Lookup order: exact key (display name with whitespace removed), then the
    /// first existing key equal under case- and whitespace-insensitive
    /// comparison, then a brand-new record.
    fn apply_listing(&mut self, display_name: &str, level: Option<RiskLevel>) {
        let key: String = display_name.split_whitespace().collect();

        let index = if let Some(&i) = self.positions.get(&key) {
            i
        } else {
            let wanted = normalize_key(&key);
            let candidates: Vec<usize> = self
                .records
                .iter()
                .enumerate()
                .filter(|(_, r)| normalize_key(&r.key) == wanted)
                .map(|(i, _)| i)
                .collect();

            match candidates.as_slice() {
                [] => self.push(AdvisoryRecord::new(key)),
                [only] => *only,
                [first, rest @ ..] => {
                    tracing::debug!(
                        country = display_name,
                        chosen = %self.records[*first].key,
                        ignored = rest.len(),
                        "listing name matches several advisory keys; using the first"
                    );
                    *first
                }
            }
        };

        let record = &mut self.records[index];
        record.level = level;
        record.listing_name = Some(display_name.to_string());
    }
}

/// Convenience wrapper around [`AdvisoryFeed::parse`].
#[must_use]
pub fn extract_advisories(html: &str) -> AdvisoryFeed {
    AdvisoryFeed::parse(html)
}

/// Yields `(key, unescaped content)` for every non-empty literal match.
fn literal_matches<'h>(
    pattern: &'static Regex,
    html: &'h str,
) -> impl Iterator<Item = (&'h str, String)> {
    pattern.captures_iter(html).filter_map(|caps| {
        let key = caps.get(1)?.as_str();
        let raw = caps.get(2)?.as_str();
        if raw.is_empty() {
            return None;
        }
        Some((key, unescape_literal(raw)))
    })
}

fn normalize_key(key: &str) -> String {
    key.split_whitespace().collect::<String>().to_lowercase()
}

#[cfg(test)]
#[path = "feed_test.rs"]
mod tests;
