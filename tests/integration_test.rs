//! Integration tests for the page_words application.
//!
//! These tests exercise the full pipeline through `run_analysis()` against a
//! mock HTTP server. They make no real network requests.

mod helpers;

use httptest::{matchers::*, responders::*, Expectation, Server};
use tempfile::TempDir;

use page_words::{run_analysis, AnalysisError, Config};

fn test_config(url: String, db_path: std::path::PathBuf) -> Config {
    Config {
        url,
        db_path,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_full_analysis_persists_and_reports() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/")).respond_with(
            status_code(200).body(
                "<html><head><title>Test Book</title></head>\
                 <body>Good day good Day GOOD harpoon harpoon</body></html>",
            ),
        ),
    );

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("words.db");
    let url = format!("http://{}/", server.addr());

    let report = run_analysis(test_config(url.clone(), db_path.clone()))
        .await
        .expect("Analysis should succeed");

    assert_eq!(report.title, "Test Book");
    assert_eq!(report.url, url);
    let ranked: Vec<(&str, u64)> = report
        .entries
        .iter()
        .map(|e| (e.word.as_str(), e.count))
        .collect();
    assert_eq!(ranked, vec![("good", 3), ("day", 2), ("harpoon", 2)]);

    let pool = helpers::open_pool(&db_path).await;
    let rows = helpers::fetch_all_rows(&pool).await;
    assert_eq!(rows.len(), 3);
    for (title, source_url, _, _) in &rows {
        assert_eq!(title, "Test Book");
        assert_eq!(source_url, &url);
    }
    assert_eq!(rows[0].2, "good");
    assert_eq!(rows[0].3, 3);
}

#[tokio::test]
async fn test_top_n_limits_ranking_with_first_seen_tie_break() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/")).respond_with(
            status_code(200).body("<html><body>cat dog cat dog bird</body></html>"),
        ),
    );

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("words.db");
    let mut config = test_config(format!("http://{}/", server.addr()), db_path);
    config.top_n = 2;

    let report = run_analysis(config).await.expect("Analysis should succeed");

    let ranked: Vec<(&str, u64)> = report
        .entries
        .iter()
        .map(|e| (e.word.as_str(), e.count))
        .collect();
    // "cat" appears before "dog", so it wins the tie.
    assert_eq!(ranked, vec![("cat", 2), ("dog", 2)]);
}

#[tokio::test]
async fn test_page_without_title_yields_empty_title() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/")).respond_with(
            status_code(200).body("<html><body>whale whale harpoon</body></html>"),
        ),
    );

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("words.db");

    let report = run_analysis(test_config(format!("http://{}/", server.addr()), db_path))
        .await
        .expect("Analysis should succeed");

    assert_eq!(report.title, "");
    assert_eq!(report.entries.len(), 2);
}

#[tokio::test]
async fn test_undecodable_bytes_are_tolerated() {
    // Body with invalid UTF-8 sequences around valid words; the fetch layer
    // decodes lossily and the scan still succeeds.
    let mut body = b"<html><body>whale ".to_vec();
    body.extend_from_slice(&[0xff, 0xfe, 0x80]);
    body.extend_from_slice(b" whale harpoon</body></html>");

    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/"))
            .respond_with(status_code(200).body(body)),
    );

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("words.db");

    let report = run_analysis(test_config(format!("http://{}/", server.addr()), db_path))
        .await
        .expect("Analysis should tolerate undecodable bytes");

    assert!(report.entries.iter().any(|e| e.word == "whale" && e.count == 2));
}

#[tokio::test]
async fn test_http_error_persists_nothing() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/"))
            .respond_with(status_code(500).body("boom")),
    );

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("words.db");

    let result = run_analysis(test_config(
        format!("http://{}/", server.addr()),
        db_path.clone(),
    ))
    .await;

    assert!(matches!(result, Err(AnalysisError::Fetch(_))));

    let pool = helpers::open_pool(&db_path).await;
    assert_eq!(helpers::count_rows(&pool).await, 0);
}

#[tokio::test]
async fn test_invalid_url_is_a_fetch_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("words.db");

    let result = run_analysis(test_config("not a url at all!!!".to_string(), db_path)).await;
    assert!(matches!(result, Err(AnalysisError::Fetch(_))));
}

#[tokio::test]
async fn test_repeated_runs_append_rows() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/"))
            .times(2)
            .respond_with(
                status_code(200)
                    .body("<html><title>Again</title><body>whale whale</body></html>"),
            ),
    );

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("words.db");
    let url = format!("http://{}/", server.addr());

    run_analysis(test_config(url.clone(), db_path.clone()))
        .await
        .expect("First run should succeed");
    run_analysis(test_config(url, db_path.clone()))
        .await
        .expect("Second run should succeed");

    // Append-only, no uniqueness constraint: both runs' rows are present.
    let pool = helpers::open_pool(&db_path).await;
    assert_eq!(helpers::count_rows(&pool).await, 2);
}
