//! Per-country notice enrichment.
//!
//! Detail pages are fetched in fixed-size batches: every request in a batch is
//! awaited before the next batch starts, which caps simultaneous connections
//! to the upstream host. A page that cannot be fetched contributes zero
//! notices and never fails the run.

mod parse;

use std::collections::HashMap;

use airrisk_core::{tables, AdvisoryRecord, NoticeRecord};
use futures::future::join_all;

use crate::client::PageFetcher;

pub use parse::parse_notice_page;

/// Notices per advisory key. Keys whose page yielded nothing are absent.
pub type NoticeResults = HashMap<String, Vec<NoticeRecord>>;

/// One advisory whose detail page should be scraped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeTarget {
    pub key: String,
    pub display_name: String,
}

impl From<&AdvisoryRecord> for NoticeTarget {
    fn from(record: &AdvisoryRecord) -> Self {
        Self {
            key: record.key.clone(),
            display_name: record.display_name().into_owned(),
        }
    }
}

/// Batch scheduler for detail-page fetches.
pub struct NoticeFetcher<'a, F> {
    fetcher: &'a F,
    base_url: String,
    batch_size: usize,
}

impl<'a, F: PageFetcher> NoticeFetcher<'a, F> {
    /// `base_url` is the site root (`https://safeairspace.net`); a trailing
    /// slash is tolerated. A `batch_size` of zero is treated as one.
    pub fn new(fetcher: &'a F, base_url: &str, batch_size: usize) -> Self {
        Self {
            fetcher,
            base_url: base_url.trim_end_matches('/').to_owned(),
            batch_size: batch_size.max(1),
        }
    }

    /// Detail page URL for a country display name.
    #[must_use]
    pub fn page_url(&self, display_name: &str) -> String {
        format!(
            "{}/{}/",
            self.base_url,
            tables::detail_page_slug(display_name)
        )
    }

    /// Fetches and parses one country's detail page.
    ///
    /// Any fetch failure is logged and reported as no notices.
    pub async fn fetch_country(&self, display_name: &str) -> Vec<NoticeRecord> {
        let url = self.page_url(display_name);
        match self.fetcher.fetch_text(&url).await {
            Ok(html) => parse_notice_page(&html),
            Err(e) => {
                tracing::warn!(
                    country = display_name,
                    url = %url,
                    error = %e,
                    "could not fetch notices"
                );
                Vec::new()
            }
        }
    }

    /// Fetches notices for every target, `batch_size` pages at a time.
    pub async fn fetch_all(&self, targets: &[NoticeTarget]) -> NoticeResults {
        let mut results = NoticeResults::new();
        let batch_count = targets.len().div_ceil(self.batch_size);

        for (batch_index, batch) in targets.chunks(self.batch_size).enumerate() {
            let fetched = join_all(batch.iter().map(|target| async move {
                let notices = self.fetch_country(&target.display_name).await;
                (target.key.as_str(), notices)
            }))
            .await;

            for (key, notices) in fetched {
                if !notices.is_empty() {
                    results.insert(key.to_owned(), notices);
                }
            }

            tracing::debug!(
                batch = batch_index + 1,
                batches = batch_count,
                size = batch.len(),
                "notice batch complete"
            );
        }

        results
    }
}
