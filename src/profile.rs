//! Profile gateway.
//!
//! Fetches and updates the current user's profile record. The internal id
//! is resolved on every call; the server's copy is always the source of
//! truth (updates return the canonical record, not a local echo).

use std::sync::Arc;

use reqwest::Client;
use tracing::debug;

use crate::error::ClientError;
use crate::identity::IdentityResolver;
use crate::session::SessionManager;
use crate::types::UserProfile;

pub struct ProfileGateway {
    session: Arc<SessionManager>,
    resolver: IdentityResolver,
    http: Client,
}

impl ProfileGateway {
    pub fn new(session: Arc<SessionManager>) -> Self {
        Self {
            resolver: IdentityResolver::new(Arc::clone(&session)),
            session,
            http: Client::new(),
        }
    }

    /// Fetch the current user's profile.
    pub async fn fetch(&self) -> Result<UserProfile, ClientError> {
        let user_id = self.resolver.resolve().await?;
        self.fetch_by_user(&user_id).await
    }

    /// Fetch a profile by its internal user id.
    pub async fn fetch_by_user(&self, user_id: &str) -> Result<UserProfile, ClientError> {
        let url = self
            .session
            .config()
            .api_url(&format!("/user-profiles/by-user/{}", user_id));
        debug!(user_id, "fetching profile");

        let response = self.session.authorize(self.http.get(&url)).send().await?;
        if !response.status().is_success() {
            // This endpoint sometimes answers rejections with a bare text
            // body; keep it as the message when no structured one exists.
            return Err(ClientError::gateway_failure_with_text(response).await);
        }
        Ok(response.json().await?)
    }

    /// Persist the full profile and return the server's canonical copy.
    pub async fn update(&self, profile: &UserProfile) -> Result<UserProfile, ClientError> {
        let user_id = self.resolver.resolve().await?;
        let url = self
            .session
            .config()
            .api_url(&format!("/user-profiles/by-user/{}", user_id));
        debug!(%user_id, "updating profile");

        let response = self
            .session
            .authorize(self.http.put(&url))
            .json(profile)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ClientError::gateway_failure(response).await);
        }
        Ok(response.json().await?)
    }
}
