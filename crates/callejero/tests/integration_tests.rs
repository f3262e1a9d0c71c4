//! Integration tests for the suggestion lookup client
//!
//! These tests drive the full public API against canned localhost HTTP
//! listeners, one response per case, and verify the lookup contract:
//! short queries never hit the network, every failure mode collapses to
//! an empty list, and well-formed payloads map and truncate correctly.

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use callejero::{LookupConfig, Suggestion, SuggestionClient};
use serde_json::json;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
};

fn setup_test_env() {
    let _ = callejero::init_logging(tracing::Level::WARN);
}

struct CannedServer {
    base_url: String,
    hits: Arc<AtomicUsize>,
    last_path: Arc<Mutex<Option<String>>>,
}

/// Serve the same canned response to every connection, recording the
/// request path of the most recent one.
async fn spawn_server(status_line: &str, body: &str) -> CannedServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicUsize::new(0));
    let last_path = Arc::new(Mutex::new(None));

    let response = format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let task_hits = Arc::clone(&hits);
    let task_path = Arc::clone(&last_path);
    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            task_hits.fetch_add(1, Ordering::SeqCst);

            let mut buf = vec![0u8; 4096];
            let n = stream.read(&mut buf).await.unwrap_or(0);
            let head = String::from_utf8_lossy(&buf[..n]).into_owned();
            *task_path.lock().unwrap() = head
                .lines()
                .next()
                .and_then(|line| line.split_whitespace().nth(1))
                .map(str::to_string);

            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    });

    CannedServer {
        base_url: format!("http://{addr}/locations"),
        hits,
        last_path,
    }
}

fn features_body(labels: &[&str]) -> String {
    let features: Vec<_> = labels
        .iter()
        .map(|label| json!({ "properties": { "descripcion": label } }))
        .collect();
    json!({ "features": features }).to_string()
}

#[tokio::test]
async fn test_short_query_issues_no_request() {
    setup_test_env();

    let server = spawn_server("200 OK", &features_body(&["ALEM LEANDRO N 1000"])).await;
    let client = SuggestionClient::new(server.base_url.clone()).unwrap();

    assert!(client.suggest("").await.is_empty());
    assert!(client.suggest("AL").await.is_empty());

    assert_eq!(
        server.hits.load(Ordering::SeqCst),
        0,
        "Queries below the minimum length should not touch the network"
    );
}

#[tokio::test]
async fn test_non_success_status_yields_empty() {
    setup_test_env();

    let server = spawn_server(
        "500 Internal Server Error",
        &features_body(&["ALEM LEANDRO N 1000"]),
    )
    .await;
    let client = SuggestionClient::new(server.base_url.clone()).unwrap();

    let suggestions = client.suggest("ALEM").await;

    assert!(suggestions.is_empty());
    assert_eq!(server.hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_missing_features_field_yields_empty() {
    setup_test_env();

    let server = spawn_server("200 OK", "{}").await;
    let client = SuggestionClient::new(server.base_url.clone()).unwrap();

    assert!(client.suggest("ALEM").await.is_empty());
}

#[tokio::test]
async fn test_invalid_json_yields_empty() {
    setup_test_env();

    let server = spawn_server("200 OK", "<html>definitely not json</html>").await;
    let client = SuggestionClient::new(server.base_url.clone()).unwrap();

    assert!(client.suggest("ALEM").await.is_empty());
}

#[tokio::test]
async fn test_transport_failure_yields_empty() {
    setup_test_env();

    // Bind to get a free port, then drop the listener so connections fail.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = SuggestionClient::new(format!("http://{addr}/locations")).unwrap();

    assert!(client.suggest("ALEM").await.is_empty());
}

#[tokio::test]
async fn test_truncates_to_ten_in_upstream_order() {
    setup_test_env();

    let labels: Vec<String> = (0..12).map(|n| format!("CALLE {n}")).collect();
    let label_refs: Vec<&str> = labels.iter().map(String::as_str).collect();
    let server = spawn_server("200 OK", &features_body(&label_refs)).await;
    let client = SuggestionClient::new(server.base_url.clone()).unwrap();

    let suggestions = client.suggest("CALLE").await;

    assert_eq!(suggestions.len(), 10, "Should truncate to the default limit");
    assert_eq!(suggestions[0].label, "CALLE 0");
    assert_eq!(suggestions[9].label, "CALLE 9");
}

#[tokio::test]
async fn test_maps_feature_properties() {
    setup_test_env();

    let body = json!({
        "features": [
            { "properties": { "descripcion": "ALEM LEANDRO N 1000", "subtipo": "DIRECCION_EXACTA" } },
            { "properties": { "id": "42", "name": "Plaza Mayor" } },
        ]
    })
    .to_string();
    let server = spawn_server("200 OK", &body).await;
    let client = SuggestionClient::new(server.base_url.clone()).unwrap();

    let suggestions = client.suggest("ALEM").await;

    assert_eq!(
        suggestions,
        vec![
            Suggestion {
                id: "ALEM LEANDRO N 1000".to_string(),
                label: "ALEM LEANDRO N 1000".to_string(),
                kind: Some("DIRECCION_EXACTA".to_string()),
            },
            Suggestion {
                id: "42".to_string(),
                label: "Plaza Mayor".to_string(),
                kind: None,
            },
        ]
    );
}

#[tokio::test]
async fn test_query_is_percent_encoded_in_path() {
    setup_test_env();

    let server = spawn_server("200 OK", &features_body(&[])).await;
    let client = SuggestionClient::new(server.base_url.clone()).unwrap();

    let _ = client.suggest("ALEM LEANDRO").await;

    let path = server.last_path.lock().unwrap().clone();
    assert_eq!(path.as_deref(), Some("/locations/ALEM%20LEANDRO"));
}

#[tokio::test]
async fn test_ad_hoc_config_overrides_defaults() {
    setup_test_env();

    let labels: Vec<String> = (0..6).map(|n| format!("CALLE {n}")).collect();
    let label_refs: Vec<&str> = labels.iter().map(String::as_str).collect();
    let server = spawn_server("200 OK", &features_body(&label_refs)).await;
    let client = SuggestionClient::new(server.base_url.clone()).unwrap();

    let config = LookupConfig::builder().min_query_len(5).limit(3).build();

    // Four characters is enough by default, but not for this config.
    assert!(client.suggest_with_config("ALEM", &config).await.is_empty());
    assert_eq!(server.hits.load(Ordering::SeqCst), 0);

    let suggestions = client.suggest_with_config("CALLES", &config).await;
    assert_eq!(suggestions.len(), 3);
}
