//! Decision request round-trip tests.
//!
//! These tests run the full path: serialize a built request, POST it to a
//! mock engine, and decode the decision payload.
//!
//! # Invariants
//! - A call resolves to exactly one outcome: decoded response or error.
//! - A response is either fully decoded or the call fails entirely.

mod common;

use common::*;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};

#[tokio::test]
async fn test_request_decodes_full_response() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("decisions/response.json");

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(json!({
            "placements": [{ "divName": "div1", "networkId": 9709, "siteId": 70464 }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let response = client.request(&test_request()).await.unwrap();

    assert_eq!(
        response.user.as_ref().unwrap().key,
        "ad39231daeb043f2a9610414f08394b5"
    );

    let decision = response.decision("div1").expect("div1 should be filled");
    assert_eq!(decision.ad_id, 111);
    assert_eq!(decision.creative_id, 222);
    assert_eq!(decision.flight_id, 333);
    assert_eq!(decision.campaign_id, 444);
    assert!(decision.click_url.as_deref().unwrap().contains("adzerk"));
    assert!(decision.impression_url.as_deref().unwrap().contains("adzerk"));

    assert_eq!(decision.contents.len(), 1);
    let content = &decision.contents[0];
    assert_eq!(content.content_type.as_deref(), Some("html"));
    assert_eq!(content.template.as_deref(), Some("image"));
    assert!(content.data().contains_key("imageUrl"));
    assert!(content.data().contains_key("title"));
    assert!(!content.body.as_deref().unwrap().is_empty());

    let custom = content.custom_data().unwrap();
    assert_eq!(custom.len(), 2);
    assert_eq!(custom.get("foo"), Some(&json!(42)));
    assert_eq!(custom.get("bar"), Some(&json!("some string")));

    assert_eq!(decision.events.len(), 3);
    assert_eq!(decision.events[0].event_id, 12);
    assert!(decision.events[0].event_url.contains("adzerk"));
}

#[tokio::test]
async fn test_request_serializes_keywords_and_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(json!({
            "user": { "key": "K" },
            "keywords": ["cats"]
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "user": null, "decisions": {} })),
        )
        .mount(&mock_server)
        .await;

    let request = Request::builder(vec![Placement::new("div1", 9709, 70464, vec![5])])
        .user(adzerk_client::User::with_key("K"))
        .keyword("cats")
        .build()
        .unwrap();

    let client = test_client(&mock_server);
    let response = client.request(&request).await.unwrap();
    assert!(response.decisions.is_empty());
}

#[tokio::test]
async fn test_request_with_unfilled_placement() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": { "key": "K" },
            "decisions": { "div1": null }
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let response = client.request(&test_request()).await.unwrap();

    assert!(response.decisions.contains_key("div1"));
    assert!(response.decision("div1").is_none());
}

#[tokio::test]
async fn test_request_surfaces_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("engine exploded"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.request(&test_request()).await.unwrap_err();

    match err {
        ClientError::Api {
            status, message, ..
        } => {
            assert_eq!(status, 500);
            assert_eq!(message, "engine exploded");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_request_surfaces_decode_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.request(&test_request()).await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
}

#[tokio::test]
async fn test_request_transport_failure_is_an_error() {
    // Nothing is listening on this port.
    let client = AdzerkClient::builder()
        .base_url("http://127.0.0.1:9".to_string())
        .build()
        .unwrap();

    let err = client.request(&test_request()).await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
}
