//! User directory lookups.
//!
//! Best-effort author information for feed rendering. A lookup that fails
//! for any reason (non-success status, network, unparseable body) degrades
//! to a placeholder record instead of an error - missing display data must
//! never block the feed.

use std::sync::Arc;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ClientError;
use crate::session::SessionManager;

/// Minimal user record for display purposes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRecord {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl UserRecord {
    fn placeholder(user_id: &str) -> Self {
        Self {
            id: user_id.to_string(),
            email: "user@example.com".to_string(),
            name: "User".to_string(),
        }
    }
}

pub struct UserDirectory {
    session: Arc<SessionManager>,
    http: Client,
}

impl UserDirectory {
    pub fn new(session: Arc<SessionManager>) -> Self {
        Self {
            session,
            http: Client::new(),
        }
    }

    /// Look up a user by id, falling back to placeholder display data.
    pub async fn user_by_id(&self, user_id: &str) -> UserRecord {
        match self.try_fetch(user_id).await {
            Ok(record) => record,
            Err(err) => {
                warn!(user_id, "user lookup failed, using placeholder: {}", err);
                UserRecord::placeholder(user_id)
            }
        }
    }

    async fn try_fetch(&self, user_id: &str) -> Result<UserRecord, ClientError> {
        let url = self
            .session
            .config()
            .api_url(&format!("/users/{}", user_id));
        let response = self.session.authorize(self.http.get(&url)).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::gateway_failure(response).await);
        }
        Ok(response.json().await?)
    }
}
