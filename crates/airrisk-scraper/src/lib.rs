//! Fetching and parsing for the SafeAirspace advisory feed and its
//! per-country notice pages.

pub mod client;
pub mod error;
pub mod feed;
pub mod html;
pub mod notices;

pub use client::{HttpFetcher, PageFetcher};
pub use error::ScraperError;
pub use feed::{extract_advisories, AdvisoryFeed};
pub use notices::{parse_notice_page, NoticeFetcher, NoticeResults, NoticeTarget};
