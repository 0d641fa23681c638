//! Integration tests for detail-page enrichment over real HTTP.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use airrisk_scraper::{HttpFetcher, NoticeFetcher, NoticeTarget};

const NOTICE_PAGE: &str = r#"<html><body>
<div class="page-country-source">
<div class="page-country-source-country">Source: Iran</div>
<div class="page-country-source-ref">Reference: <a href="/n/1">OIIX A1234/25</a></div>
<div class="page-country-source-dates">Issued: <strong>01 Mar 2025</strong>, valid until: <strong>31 May 2025</strong></div>
<div class="page-country-source-plain"><span class="highlight">Plain English:</span> Tehran FIR closed.</div>
</div><!-- .page-country-source -->
</body></html>"#;

fn target(key: &str, display_name: &str) -> NoticeTarget {
    NoticeTarget {
        key: key.to_string(),
        display_name: display_name.to_string(),
    }
}

#[tokio::test]
async fn fetch_all_requests_slugged_pages_and_skips_failures() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/iran/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(NOTICE_PAGE))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/saudi-arabia/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/south-sudan/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>nothing</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let http = HttpFetcher::new(5, "airrisk-test/0.1").expect("failed to build test HttpFetcher");
    let base = format!("{}/", server.uri());
    let fetcher = NoticeFetcher::new(&http, &base, 5);

    let results = fetcher
        .fetch_all(&[
            target("Iran", "Iran"),
            target("SaudiArabia", "Saudi Arabia"),
            target("SouthSudan", "South Sudan"),
        ])
        .await;

    assert_eq!(results.len(), 1, "only Iran should carry notices: {results:?}");
    let iran = &results["Iran"];
    assert_eq!(iran.len(), 1);
    assert_eq!(iran[0].reference, "OIIX A1234/25");
    assert_eq!(iran[0].issued_at, "01 Mar 2025");
    assert_eq!(iran[0].valid_until, "31 May 2025");
    assert_eq!(iran[0].summary, "Tehran FIR closed.");
}
