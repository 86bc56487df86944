//! End-to-end request flows against a mock HTTP endpoint.
//!
//! Covers both request styles: the callback-bridge GET (script body
//! invoking the per-request callback) and the opaque POST beacon, plus
//! the display-sink rendering of each outcome.

use assert_json_diff::assert_json_eq;
use callbridge::actions::Actions;
use callbridge::bridge::BridgeClient;
use callbridge::error::BridgeError;
use callbridge::loader::HttpScriptLoader;
use callbridge::poster::Poster;
use callbridge::sink::{BufferTarget, OutputSink};
use chrono::{TimeZone, Utc};
use serde_json::json;
use std::collections::HashSet;
use std::sync::Arc;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Responds the way the real endpoint does: a script body that invokes
/// whatever callback name the query asked for.
struct JsonpEcho(serde_json::Value);

impl Respond for JsonpEcho {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let callback = request
            .url
            .query_pairs()
            .find(|(k, _)| k == "callback")
            .map(|(_, v)| v.to_string())
            .unwrap_or_default();
        ResponseTemplate::new(200).set_body_string(format!("{}({});", callback, self.0))
    }
}

fn actions_for(server_uri: &str, target: Arc<BufferTarget>) -> Actions {
    let endpoint = format!("{server_uri}/exec");
    Actions::new(
        BridgeClient::new(Arc::new(HttpScriptLoader::new(5_000))),
        Poster::new(endpoint.clone(), 5_000),
        OutputSink::new(target),
        endpoint,
    )
}

#[tokio::test]
async fn bridge_fetch_resolves_with_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/exec"))
        .and(query_param("source", "github"))
        .respond_with(JsonpEcho(json!({"ok": true})))
        .mount(&server)
        .await;

    let bridge = BridgeClient::new(Arc::new(HttpScriptLoader::new(5_000)));
    let url = format!("{}/exec?callback=cb&source=github", server.uri());
    let value = bridge.fetch(&url).await.unwrap();

    assert_json_eq!(value, json!({"ok": true}));
    assert_eq!(bridge.registry().pending().await, 0);
}

#[tokio::test]
async fn bridge_substitutes_a_fresh_token_per_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/exec"))
        .respond_with(JsonpEcho(json!({"n": 1})))
        .mount(&server)
        .await;

    let bridge = BridgeClient::new(Arc::new(HttpScriptLoader::new(5_000)));
    let url = format!("{}/exec?callback=cb&source=github", server.uri());

    let mut set = tokio::task::JoinSet::new();
    for _ in 0..6 {
        let bridge = bridge.clone();
        let url = url.clone();
        set.spawn(async move { bridge.fetch(&url).await });
    }
    while let Some(result) = set.join_next().await {
        assert_eq!(result.unwrap().unwrap(), json!({"n": 1}));
    }
    assert_eq!(bridge.registry().pending().await, 0);

    // Every request carried its own generated token, never the literal
    // placeholder.
    let tokens: Vec<String> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter_map(|req| {
            req.url
                .query_pairs()
                .find(|(k, _)| k == "callback")
                .map(|(_, v)| v.to_string())
        })
        .collect();
    assert_eq!(tokens.len(), 6);
    assert!(tokens.iter().all(|t| t.starts_with("cb_")));
    let distinct: HashSet<&String> = tokens.iter().collect();
    assert_eq!(distinct.len(), tokens.len());
}

#[tokio::test]
async fn trigger_get_renders_pretty_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/exec"))
        .respond_with(JsonpEcho(json!({"ok": true})))
        .mount(&server)
        .await;

    let target = BufferTarget::new();
    let actions = actions_for(&server.uri(), target.clone());

    actions.trigger_get().await;
    assert_eq!(target.text_content(), "{\n  \"ok\": true\n}");
}

#[tokio::test]
async fn trigger_get_renders_load_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/exec"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let target = BufferTarget::new();
    let actions = actions_for(&server.uri(), target.clone());

    actions.trigger_get().await;
    assert_eq!(target.text_content(), "Error: Script load failed");
}

#[tokio::test]
async fn fetch_fails_when_endpoint_is_unreachable() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let bridge = BridgeClient::new(Arc::new(HttpScriptLoader::new(2_000)));
    let err = bridge
        .fetch(&format!("{uri}/exec?callback=cb&source=github"))
        .await
        .unwrap_err();

    assert!(matches!(err, BridgeError::ScriptLoadFailed));
    assert_eq!(bridge.registry().pending().await, 0);
}

#[tokio::test]
async fn poster_sends_fixed_clock_beacon() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/exec"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "source": "github",
            "timestamp": "2024-02-18T17:30:05.000Z",
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let poster = Poster::new(format!("{}/exec", server.uri()), 5_000);
    let at = Utc.with_ymd_and_hms(2024, 2, 18, 17, 30, 5).unwrap();
    poster.send_at(at).await.unwrap();
}

#[tokio::test]
async fn trigger_post_renders_confirmation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/exec"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let target = BufferTarget::new();
    let actions = actions_for(&server.uri(), target.clone());

    actions.trigger_post().await;
    assert_eq!(target.text_content(), "POST request sent successfully");
}

#[tokio::test]
async fn trigger_post_is_opaque_to_application_status() {
    // The endpoint rejecting the write is invisible: only transport
    // failures are observable.
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/exec"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let target = BufferTarget::new();
    let actions = actions_for(&server.uri(), target.clone());

    actions.trigger_post().await;
    assert_eq!(target.text_content(), "POST request sent successfully");
}

#[tokio::test]
async fn trigger_post_renders_transport_failure() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let target = BufferTarget::new();
    let actions = actions_for(&uri, target.clone());

    actions.trigger_post().await;
    assert!(target.text_content().starts_with("Error: "));
}
