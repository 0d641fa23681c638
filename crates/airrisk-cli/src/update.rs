//! The `update` command: feed -> boundaries -> notices -> resolution -> KML.
//!
//! Only the feed fetch, the boundary load, and the final write can fail the
//! run. A country whose notice page is unreachable is rendered without
//! notices, and a country without geometry is listed as unmapped.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};

use airrisk_core::{AppConfig, RiskLevel};
use airrisk_geo::{BoundaryIndex, ResolvedAdvisory, Resolver};
use airrisk_kml::{render_document, OutputFeature};
use airrisk_scraper::html::strip_html;
use airrisk_scraper::{
    AdvisoryFeed, HttpFetcher, NoticeFetcher, NoticeResults, NoticeTarget, PageFetcher,
};

#[derive(Debug, Clone)]
pub(crate) struct UpdateOptions {
    pub output: PathBuf,
    pub skip_notices: bool,
}

/// Tallies reported after a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UpdateSummary {
    pub output: PathBuf,
    pub mapped: usize,
    pub unmapped: Vec<String>,
    /// Placemarks per level, indexed by `level.number() - 1`.
    pub per_level: [usize; 4],
    pub total_notices: usize,
}

/// Runs the full pipeline against the live sources and prints the summary.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built, the feed or boundary
/// dataset cannot be fetched or parsed, or the document cannot be written.
pub(crate) async fn run_update(config: &AppConfig, options: &UpdateOptions) -> anyhow::Result<()> {
    let fetcher = HttpFetcher::new(config.request_timeout_secs, &config.user_agent)
        .context("failed to build HTTP client")?;

    let summary = run_pipeline(&fetcher, config, options, Utc::now()).await?;
    print_summary(&summary);
    Ok(())
}

pub(crate) async fn run_pipeline<F: PageFetcher>(
    fetcher: &F,
    config: &AppConfig,
    options: &UpdateOptions,
    generated_at: DateTime<Utc>,
) -> anyhow::Result<UpdateSummary> {
    let html = fetcher
        .fetch_text(&config.feed_url)
        .await
        .with_context(|| format!("failed to fetch advisory feed from {}", config.feed_url))?;
    tracing::info!(url = %config.feed_url, bytes = html.len(), "fetched advisory feed");

    let boundaries = fetcher
        .fetch_text(&config.boundaries_url)
        .await
        .with_context(|| {
            format!(
                "failed to fetch boundary dataset from {}",
                config.boundaries_url
            )
        })?;
    let index =
        BoundaryIndex::from_geojson_str(&boundaries).context("failed to load boundary dataset")?;
    tracing::info!(features = index.len(), "loaded country boundaries");

    let records = AdvisoryFeed::parse(&html).into_reportable();
    tracing::info!(advisories = records.len(), "extracted advisories");

    let notice_fetcher =
        NoticeFetcher::new(fetcher, &config.detail_base_url, config.notice_batch_size);
    let mut notices = if options.skip_notices {
        NoticeResults::new()
    } else {
        let targets: Vec<NoticeTarget> = records.iter().map(NoticeTarget::from).collect();
        notice_fetcher.fetch_all(&targets).await
    };
    let total_notices: usize = notices.values().map(Vec::len).sum();
    tracing::info!(
        notices = total_notices,
        countries = notices.len(),
        "fetched notices"
    );

    let outcome = Resolver::new(&index).resolve_all(records);
    let features: Vec<OutputFeature> = outcome
        .resolved
        .into_iter()
        .map(|resolved| {
            let country_notices = notices.remove(&resolved.record.key).unwrap_or_default();
            let detail_url = notice_fetcher.page_url(&resolved.record.display_name());
            output_feature(resolved, country_notices, detail_url)
        })
        .collect();

    let mut per_level = [0usize; 4];
    for feature in &features {
        per_level[usize::from(feature.effective_level().number() - 1)] += 1;
    }

    let document = render_document(&features, generated_at).context("failed to render KML")?;
    write_document(&options.output, &document).await?;
    tracing::info!(path = %options.output.display(), placemarks = features.len(), "wrote KML");

    Ok(UpdateSummary {
        output: options.output.clone(),
        mapped: features.len(),
        unmapped: outcome.unmapped,
        per_level,
        total_notices,
    })
}

fn output_feature(
    resolved: ResolvedAdvisory,
    notices: Vec<airrisk_core::NoticeRecord>,
    detail_url: String,
) -> OutputFeature {
    let ResolvedAdvisory { record, resolution } = resolved;
    OutputFeature {
        name: record.display_name().into_owned(),
        level: record.level,
        iso3: resolution.iso3,
        news: record.news.as_deref().map(strip_html),
        warning: record.warning.as_deref().map(strip_html),
        notices,
        detail_url,
        geometry: resolution.geometry,
    }
}

async fn write_document(path: &Path, document: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    tokio::fs::write(path, document)
        .await
        .with_context(|| format!("failed to write {}", path.display()))
}

fn print_summary(summary: &UpdateSummary) {
    println!("SafeAirspace KML written to {}", summary.output.display());
    println!("  Countries mapped: {}", summary.mapped);
    println!("  Total NOTAMs: {}", summary.total_notices);
    for level in RiskLevel::ALL {
        println!(
            "  Level {} ({}): {}",
            level.number(),
            level.label(),
            summary.per_level[usize::from(level.number() - 1)]
        );
    }
    if !summary.unmapped.is_empty() {
        println!("  Unmapped: {}", summary.unmapped.join(", "));
    }
}

#[cfg(test)]
#[path = "update_test.rs"]
mod tests;
