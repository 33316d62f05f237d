/**
 * Wire Types Module
 *
 * Request and response bodies exchanged with the remote API, plus the
 * session records cached locally.
 */

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Credentials sent to the login endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Credentials sent to the registration endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// Token envelope returned by a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
}

/// Last-known user summary, persisted next to the raw token. The token is
/// echoed here so the pair can be written and cleared as one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub email: String,
    pub token: String,
}

/// A user profile as the server reports it. The server owns this record;
/// the client only ever holds a working copy.
///
/// `user_id` is the stable internal identifier (a UUID, so it always
/// contains a hyphen), distinct from the account email.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub alias: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A single feed post
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Post {
    pub id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub content: String,
    pub media_url: Option<String>,
    pub likes_count: Option<i32>,
    pub comments_count: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body for creating a new post
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub content: String,
    pub media_url: Option<String>,
}

/// Pagination facts extracted from the server's page envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub page_number: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub total_elements: u64,
    pub first: bool,
    pub last: bool,
}

/// One page of the feed
#[derive(Debug, Clone, PartialEq)]
pub struct FeedPage {
    pub posts: Vec<Post>,
    pub info: PageInfo,
}
