use std::path::PathBuf;

use chrono::TimeZone;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use airrisk_core::Environment;

use super::*;

const FEED: &str = r#"<html><script>
var FranceWarning = 'Test\nwarning';
var AtlantisWarning = 'Sunk';
</script>
<li data-feed-item-country="France" data-feed-item-warn-level="2">France</li>
</html>"#;

const BOUNDARIES: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "properties": {"ISO3166-1-Alpha-3": "FRA", "name": "France"},
      "geometry": {"type": "Polygon", "coordinates": [[[2.5, 46.25], [3.0, 47.0], [2.5, 46.25]]]}
    }
  ]
}"#;

const FRANCE_PAGE: &str = r#"<div class="page-country-source">
<div class="page-country-source-country">Source: France</div>
<div class="page-country-source-ref">Reference: <a href="/n">LFFF A0001/25</a></div>
</div><!-- .page-country-source -->"#;

fn test_config(server: &MockServer) -> AppConfig {
    AppConfig {
        env: Environment::Test,
        log_level: "debug".to_string(),
        feed_url: format!("{}/", server.uri()),
        detail_base_url: server.uri(),
        boundaries_url: format!("{}/countries.geojson", server.uri()),
        output_dir: PathBuf::from("unused"),
        manifest_path: PathBuf::from("unused.json"),
        manifest_base_url: "https://example.test/kmls".to_string(),
        request_timeout_secs: 5,
        user_agent: "airrisk-test/0.1".to_string(),
        notice_batch_size: 5,
    }
}

fn generated_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
}

fn test_fetcher() -> HttpFetcher {
    HttpFetcher::new(5, "airrisk-test/0.1").expect("failed to build test HttpFetcher")
}

async fn mount(server: &MockServer, at: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn france_scenario_renders_one_level_two_placemark() {
    let server = MockServer::start().await;
    mount(&server, "/", 200, FEED).await;
    mount(&server, "/countries.geojson", 200, BOUNDARIES).await;
    mount(&server, "/france/", 200, FRANCE_PAGE).await;
    mount(&server, "/atlantis/", 404, "").await;

    let dir = tempfile::tempdir().unwrap();
    let options = UpdateOptions {
        output: dir.path().join("nested").join("out.kml"),
        skip_notices: false,
    };

    let summary = run_pipeline(&test_fetcher(), &test_config(&server), &options, generated_at())
        .await
        .expect("pipeline should succeed");

    assert_eq!(summary.mapped, 1);
    assert_eq!(summary.per_level, [0, 1, 0, 0]);
    assert_eq!(summary.unmapped, vec!["Atlantis"]);
    assert_eq!(summary.total_notices, 1);

    let kml = std::fs::read_to_string(&options.output).unwrap();
    assert_eq!(kml.matches("<Placemark>").count(), 1);
    assert!(kml.contains("<name>Level 2 - High Risk (1)</name>"));
    assert!(kml.contains("<name>France</name>"));
    assert!(kml.contains("<p>Test\nwarning</p>"));
    assert!(kml.contains("<value>FRA</value>"));
    assert!(kml.contains("<coordinates>2.5,46.25,0 3,47,0 2.5,46.25,0</coordinates>"));
    assert!(kml.contains("<td>LFFF A0001/25</td>"));
    assert!(kml.contains(&format!("href=\"{}/france/\"", server.uri())));
    assert!(!kml.contains("Atlantis"));
}

#[tokio::test]
async fn skip_notices_makes_no_detail_requests() {
    let server = MockServer::start().await;
    mount(&server, "/", 200, FEED).await;
    mount(&server, "/countries.geojson", 200, BOUNDARIES).await;
    Mock::given(method("GET"))
        .and(path("/france/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FRANCE_PAGE))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let options = UpdateOptions {
        output: dir.path().join("out.kml"),
        skip_notices: true,
    };

    let summary = run_pipeline(&test_fetcher(), &test_config(&server), &options, generated_at())
        .await
        .unwrap();

    assert_eq!(summary.total_notices, 0);
    assert_eq!(summary.mapped, 1);
    let kml = std::fs::read_to_string(&options.output).unwrap();
    assert!(!kml.contains("Active NOTAMs"));
}

#[tokio::test]
async fn unreachable_feed_fails_the_run() {
    let server = MockServer::start().await;
    mount(&server, "/", 500, "").await;
    mount(&server, "/countries.geojson", 200, BOUNDARIES).await;

    let dir = tempfile::tempdir().unwrap();
    let options = UpdateOptions {
        output: dir.path().join("out.kml"),
        skip_notices: true,
    };

    let err = run_pipeline(&test_fetcher(), &test_config(&server), &options, generated_at())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("advisory feed"), "got: {err:#}");
    assert!(!options.output.exists());
}

#[tokio::test]
async fn malformed_boundaries_fail_the_run() {
    let server = MockServer::start().await;
    mount(&server, "/", 200, FEED).await;
    mount(&server, "/countries.geojson", 200, "{\"type\": \"FeatureCollection\", ").await;

    let dir = tempfile::tempdir().unwrap();
    let options = UpdateOptions {
        output: dir.path().join("out.kml"),
        skip_notices: true,
    };

    let err = run_pipeline(&test_fetcher(), &test_config(&server), &options, generated_at())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("boundary dataset"), "got: {err:#}");
    assert!(!options.output.exists());
}

#[tokio::test]
async fn empty_feed_writes_document_without_folders() {
    let server = MockServer::start().await;
    mount(&server, "/", 200, "<html>nothing today</html>").await;
    mount(&server, "/countries.geojson", 200, BOUNDARIES).await;

    let dir = tempfile::tempdir().unwrap();
    let options = UpdateOptions {
        output: dir.path().join("out.kml"),
        skip_notices: false,
    };

    let summary = run_pipeline(&test_fetcher(), &test_config(&server), &options, generated_at())
        .await
        .unwrap();

    assert_eq!(summary.mapped, 0);
    assert!(summary.unmapped.is_empty());
    let kml = std::fs::read_to_string(&options.output).unwrap();
    assert!(kml.contains("<Document>"));
    assert!(!kml.contains("<Folder>"));
}
