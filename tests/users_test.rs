//! User directory integration tests
//!
//! Author lookups degrade to placeholder display data instead of failing.

mod common;

use common::{seeded_session, EMAIL_SUBJECT_TOKEN, INTERNAL_ID};
use redsocial_client::UserDirectory;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_lookup_returns_server_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/users/{}", INTERNAL_ID)))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": INTERNAL_ID,
            "email": "a@b.com",
            "name": "Ada"
        })))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let session = seeded_session(&dir, &server.uri(), EMAIL_SUBJECT_TOKEN);

    let directory = UserDirectory::new(session);
    let record = directory.user_by_id(INTERNAL_ID).await;
    assert_eq!(record.email, "a@b.com");
    assert_eq!(record.name, "Ada");
}

#[tokio::test]
async fn test_lookup_failure_degrades_to_placeholder() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/users/{}", INTERNAL_ID)))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let session = seeded_session(&dir, &server.uri(), EMAIL_SUBJECT_TOKEN);

    let directory = UserDirectory::new(session);
    let record = directory.user_by_id(INTERNAL_ID).await;
    assert_eq!(record.id, INTERNAL_ID);
    assert_eq!(record.email, "user@example.com");
    assert_eq!(record.name, "User");
}

#[tokio::test]
async fn test_unreachable_server_degrades_to_placeholder() {
    let dir = TempDir::new().unwrap();
    // Nothing is listening here
    let session = seeded_session(&dir, "http://127.0.0.1:9/api", EMAIL_SUBJECT_TOKEN);

    let directory = UserDirectory::new(session);
    let record = directory.user_by_id("some-id").await;
    assert_eq!(record.id, "some-id");
    assert_eq!(record.email, "user@example.com");
}
