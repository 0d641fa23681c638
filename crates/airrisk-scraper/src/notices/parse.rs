//! Notice block parsing for country detail pages.

use std::sync::LazyLock;

use airrisk_core::NoticeRecord;
use regex::Regex;

use crate::html::strip_html;

static SOURCE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)<div class="page-country-source">(.*?)</div><!-- \.page-country-source -->"#,
    )
    .expect("valid source block regex")
});
static SOURCE_COUNTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<div class="page-country-source-country">Source:\s*([^<]+)</div>"#)
        .expect("valid source country regex")
});
static REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<div class="page-country-source-ref">Reference:\s*<a[^>]*>([^<]+)</a>"#)
        .expect("valid reference regex")
});
static VALIDITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Issued:\s*<strong>([^<]+)</strong>,\s*valid until:\s*<strong>([^<]+)</strong>")
        .expect("valid validity regex")
});
static PLAIN_ENGLISH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)<div class="page-country-source-plain"><span class="highlight">Plain English:</span>\s*(.*?)</div>"#,
    )
    .expect("valid plain english regex")
});
static CONTENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<div class="page-country-source-content">(.*?)</div>"#)
        .expect("valid content regex")
});

/// Extracts every notice block from a country detail page, in page order.
///
/// Each field is matched independently; a field missing from a block becomes
/// an empty string. Blocks without a source, reference, or summary are dropped.
#[must_use]
pub fn parse_notice_page(html: &str) -> Vec<NoticeRecord> {
    SOURCE_BLOCK
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|block| parse_block(block.as_str()))
        .filter(NoticeRecord::has_content)
        .collect()
}

fn parse_block(block: &str) -> NoticeRecord {
    let (issued_at, valid_until) = VALIDITY
        .captures(block)
        .map(|caps| (caps[1].trim().to_string(), caps[2].trim().to_string()))
        .unwrap_or_default();

    NoticeRecord {
        source: first_group(&SOURCE_COUNTRY, block).trim().to_string(),
        reference: first_group(&REFERENCE, block).trim().to_string(),
        issued_at,
        valid_until,
        summary: strip_html(first_group(&PLAIN_ENGLISH, block)),
        full_text: strip_html(first_group(&CONTENT, block)),
    }
}

fn first_group<'h>(pattern: &Regex, haystack: &'h str) -> &'h str {
    pattern
        .captures(haystack)
        .and_then(|caps| caps.get(1))
        .map_or("", |m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(inner: &str) -> String {
        format!(
            r#"<div class="page-country-source">{inner}</div><!-- .page-country-source -->"#
        )
    }

    const FULL_BLOCK: &str = r#"
<div class="page-country-source-country">Source: United States</div>
<div class="page-country-source-ref">Reference: <a href="/notam/kicz-a0012-25">KICZ A0012/25</a></div>
<div class="page-country-source-dates">Issued: <strong>12 Jan 2025</strong>, valid until: <strong>PERM</strong></div>
<div class="page-country-source-plain"><span class="highlight">Plain English:</span> US operators<br>must not fly below FL320.</div>
<div class="page-country-source-content">SECURITY..UNITED STATES &amp; TERRITORIES</div>
"#;

    #[test]
    fn parses_every_field_of_a_full_block() {
        let notices = parse_notice_page(&block(FULL_BLOCK));
        assert_eq!(notices.len(), 1);
        let notice = &notices[0];
        assert_eq!(notice.source, "United States");
        assert_eq!(notice.reference, "KICZ A0012/25");
        assert_eq!(notice.issued_at, "12 Jan 2025");
        assert_eq!(notice.valid_until, "PERM");
        assert_eq!(notice.summary, "US operators\nmust not fly below FL320.");
        assert_eq!(notice.full_text, "SECURITY..UNITED STATES & TERRITORIES");
    }

    #[test]
    fn missing_fields_become_empty_strings() {
        let html = block(r#"<div class="page-country-source-country">Source: France</div>"#);
        let notices = parse_notice_page(&html);
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].source, "France");
        assert!(notices[0].reference.is_empty());
        assert!(notices[0].issued_at.is_empty());
        assert!(notices[0].valid_until.is_empty());
        assert!(notices[0].summary.is_empty());
    }

    #[test]
    fn block_without_source_reference_or_summary_is_dropped() {
        let html = block(r#"<div class="page-country-source-content">Only raw text</div>"#);
        assert!(parse_notice_page(&html).is_empty());
    }

    #[test]
    fn blocks_keep_page_order() {
        let html = format!(
            "<main>{}{}</main>",
            block(r#"<div class="page-country-source-country">Source: Germany</div>"#),
            block(r#"<div class="page-country-source-country">Source: Canada</div>"#),
        );
        let sources: Vec<String> = parse_notice_page(&html)
            .into_iter()
            .map(|n| n.source)
            .collect();
        assert_eq!(sources, vec!["Germany", "Canada"]);
    }

    #[test]
    fn page_without_blocks_yields_nothing() {
        assert!(parse_notice_page("<html><body>No notices</body></html>").is_empty());
    }
}
