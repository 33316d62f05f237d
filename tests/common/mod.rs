//! Shared fixtures for integration tests.
//!
//! Tokens below are unsigned JWTs - the client never verifies signatures,
//! only decodes the payload segment.

#![allow(dead_code)]

use std::sync::Arc;

use redsocial_client::{Config, SessionManager, TokenStore, UserSummary};
use tempfile::TempDir;

/// payload: {"sub":"a@b.com","exp":9999999999}
pub const EMAIL_SUBJECT_TOKEN: &str = "header.eyJzdWIiOiJhQGIuY29tIiwiZXhwIjo5OTk5OTk5OTk5fQ.sig";

/// payload: {"sub":"a@b.com","exp":1000000000}
pub const EXPIRED_TOKEN: &str = "header.eyJzdWIiOiJhQGIuY29tIiwiZXhwIjoxMDAwMDAwMDAwfQ.sig";

/// payload: {"sub":"a@b.com","exp":9999999999,"userId":"11111111-2222-3333-4444-555555555555"}
pub const INTERNAL_ID_TOKEN: &str =
    "header.eyJzdWIiOiJhQGIuY29tIiwiZXhwIjo5OTk5OTk5OTk5LCJ1c2VySWQiOiIxMTExMTExMS0yMjIyLTMzMzMtNDQ0NC01NTU1NTU1NTU1NTUifQ.sig";

/// payload: {"exp":9999999999} - no subject claim
pub const NO_SUBJECT_TOKEN: &str = "header.eyJleHAiOjk5OTk5OTk5OTl9.sig";

pub const INTERNAL_ID: &str = "11111111-2222-3333-4444-555555555555";

/// Session manager with an empty store, pointed at the given base URL.
pub fn empty_session(dir: &TempDir, base_url: &str) -> Arc<SessionManager> {
    let store = TokenStore::at(dir.path().join("session.json"));
    Arc::new(SessionManager::new(Config::with_base_url(base_url), store))
}

/// Session manager seeded with a stored token, as if `a@b.com` had logged
/// in earlier.
pub fn seeded_session(dir: &TempDir, base_url: &str, token: &str) -> Arc<SessionManager> {
    let store = TokenStore::at(dir.path().join("session.json"));
    store
        .save(
            token,
            &UserSummary {
                email: "a@b.com".to_string(),
                token: token.to_string(),
            },
        )
        .expect("seeding session store");
    Arc::new(SessionManager::new(Config::with_base_url(base_url), store))
}
