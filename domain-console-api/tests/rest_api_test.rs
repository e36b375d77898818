#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! `RestDomainApi` 集成测试（基于 httpmock 本地服务）

use std::sync::Arc;

use domain_console_api::{
    ApiError, CacheTag, Clock, DomainApi, DomainDraft, DomainPatch, RestDomainApi,
    VerificationStatus,
};
use httpmock::prelude::*;
use serde_json::json;

struct FixedClock(i64);

impl Clock for FixedClock {
    fn now_epoch_seconds(&self) -> i64 {
        self.0
    }
}

fn api(server: &MockServer) -> RestDomainApi {
    RestDomainApi::new(server.url("/domain"))
        .expect("client")
        .with_clock(Arc::new(FixedClock(1_738_000_000)))
}

fn record(id: &str, domain: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "domain": domain,
        "isActive": true,
        "status": status,
        "createdDate": 1_737_000_000
    })
}

// ============ 查询 ============

#[tokio::test]
async fn list_parses_collection() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/domain")
                .header("Content-Type", "application/json");
            then.status(200).json_body(json!([
                record("1", "https://google.com", "verified"),
                record("2", "https://example.com", "pending"),
            ]));
        })
        .await;

    let domains = api(&server).list_domains().await.expect("list");

    mock.assert_async().await;
    assert_eq!(domains.len(), 2);
    assert_eq!(domains[0].status, VerificationStatus::Verified);
    assert_eq!(domains[1].domain, "https://example.com");
}

#[tokio::test]
async fn get_one_returns_record() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/domain/42");
            then.status(200)
                .json_body(record("42", "https://example.com", "verified"));
        })
        .await;

    let domain = api(&server).get_domain("42").await.expect("get");
    assert_eq!(domain.id, "42");
    assert_eq!(domain.status, VerificationStatus::Verified);
}

#[tokio::test]
async fn get_one_missing_is_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/domain/404");
            then.status(404).body("\"Not found\"");
        })
        .await;

    let err = api(&server).get_domain("404").await.unwrap_err();
    assert_eq!(err, ApiError::NotFound { id: "404".into() });
}

#[tokio::test]
async fn server_error_carries_status_and_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/domain");
            then.status(500).body("internal");
        })
        .await;

    let err = api(&server).list_domains().await.unwrap_err();
    assert_eq!(
        err,
        ApiError::RequestFailed {
            status: 500,
            body: "internal".into()
        }
    );
}

#[tokio::test]
async fn malformed_json_is_parse_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/domain");
            then.status(200).body("<html>oops</html>");
        })
        .await;

    let err = api(&server).list_domains().await.unwrap_err();
    assert!(matches!(err, ApiError::Parse { .. }), "got {err:?}");
}

// ============ 变更 ============

#[tokio::test]
async fn create_stamps_pending_and_call_time() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/domain").json_body(json!({
                "domain": "https://example.com",
                "isActive": true,
                "status": "pending",
                "createdDate": 1_738_000_000
            }));
            then.status(201).json_body(json!({
                "id": "99",
                "domain": "https://example.com",
                "isActive": true,
                "status": "pending",
                "createdDate": 1_738_000_000
            }));
        })
        .await;

    // Caller-supplied status and time are ignored.
    let draft = DomainDraft {
        domain: "https://example.com".into(),
        is_active: true,
        status: VerificationStatus::Verified,
        created_date: Some(5),
    };
    let created = api(&server).add_domain(&draft).await.expect("create");

    mock.assert_async().await;
    assert_eq!(created.value.id, "99");
    assert_eq!(created.value.status, VerificationStatus::Pending);
    assert_eq!(created.invalidates, vec![CacheTag::Collection]);
}

#[tokio::test]
async fn verify_sends_only_status_and_invalidates_item() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/domain/42")
                .json_body(json!({ "status": "verified" }));
            then.status(200)
                .json_body(record("42", "https://example.com", "verified"));
        })
        .await;

    let updated = api(&server)
        .update_domain("42", &DomainPatch::verify())
        .await
        .expect("update");

    mock.assert_async().await;
    assert_eq!(updated.value.status, VerificationStatus::Verified);
    assert_eq!(updated.invalidates, vec![CacheTag::item("42")]);
}

#[tokio::test]
async fn delete_keeps_text_body_unparsed() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/domain/7");
            then.status(200).body("deleted, not json");
        })
        .await;

    let deleted = api(&server).delete_domain("7").await.expect("delete");

    mock.assert_async().await;
    assert_eq!(deleted.value, "deleted, not json");
    assert_eq!(deleted.invalidates, vec![CacheTag::Collection]);
}

#[tokio::test]
async fn delete_failure_is_request_failed() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/domain/7");
            then.status(500).body("nope");
        })
        .await;

    let err = api(&server).delete_domain("7").await.unwrap_err();
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn unreachable_backend_is_network_error() {
    // Reserve a free port, then release it so the connection is refused.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("local addr").port()
    };
    let client = RestDomainApi::new(format!("http://127.0.0.1:{port}/domain")).expect("client");
    let err = client.list_domains().await.unwrap_err();
    assert!(
        matches!(err, ApiError::Network { .. } | ApiError::Timeout { .. }),
        "got {err:?}"
    );
}
