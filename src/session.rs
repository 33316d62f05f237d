/**
 * Session Management Module
 *
 * Orchestrates login, registration, logout and expiry checks. Owns the
 * token store and the token codec; the gateways borrow the session for
 * bearer tokens and identity claims.
 */

use reqwest::Client;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::ClientError;
use crate::storage::TokenStore;
use crate::token::{self, Claims};
use crate::types::{AuthResponse, LoginRequest, RegisterRequest, UserSummary};

/// Observable session states. Expiry is not separately observable: an
/// expired token collapses into `Unauthenticated` as a side effect of
/// `bootstrap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Authenticated,
    Unauthenticated,
}

/// Session context object. Constructed once at application startup and
/// handed to every component that needs it - there is no process-wide
/// singleton.
pub struct SessionManager {
    config: Config,
    store: TokenStore,
    http: Client,
}

impl SessionManager {
    pub fn new(config: Config, store: TokenStore) -> Self {
        Self {
            config,
            store,
            http: Client::new(),
        }
    }

    /// Startup probe. A stored token that is missing, undecodable or past
    /// its expiry clears the store and reports `Unauthenticated`.
    pub fn bootstrap(&self) -> SessionState {
        if self.is_authenticated() && !self.is_token_expired() {
            SessionState::Authenticated
        } else {
            self.logout();
            SessionState::Unauthenticated
        }
    }

    /// Log in against the remote API. On success the token and the user
    /// summary are saved together; on rejection or network failure the
    /// store is left untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserSummary, ClientError> {
        let url = self.config.api_url("/auth/login");
        debug!(email, "logging in");

        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self.http.post(&url).json(&request).send().await?;
        if !response.status().is_success() {
            let err = ClientError::auth_failure(response).await;
            warn!("login rejected: {}", err);
            return Err(err);
        }

        let auth: AuthResponse = response.json().await?;
        let user = UserSummary {
            email: email.to_string(),
            token: auth.token.clone(),
        };
        self.store.save(&auth.token, &user)?;
        Ok(user)
    }

    /// Register a new account. A pure remote call: session state is not
    /// mutated even on success - the user still has to log in.
    pub async fn register(&self, email: &str, password: &str) -> Result<(), ClientError> {
        let url = self.config.api_url("/auth/register");
        debug!(email, "registering");

        let request = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self.http.post(&url).json(&request).send().await?;
        if !response.status().is_success() {
            let err = ClientError::auth_failure(response).await;
            warn!("registration rejected: {}", err);
            return Err(err);
        }
        Ok(())
    }

    /// Clear the stored session. Idempotent; clearing an already-empty
    /// store still counts as success.
    pub fn logout(&self) {
        self.store.clear();
    }

    /// True iff a token is stored. Deliberately does NOT consult expiry -
    /// callers combine this with `is_token_expired` themselves.
    pub fn is_authenticated(&self) -> bool {
        self.store.token().is_some()
    }

    /// Fail-closed expiry check: a missing token, undecodable claims or an
    /// absent `exp` all count as expired.
    pub fn is_token_expired(&self) -> bool {
        let Some(token) = self.store.token() else {
            return true;
        };
        let Some(claims) = token::decode_claims(&token) else {
            return true;
        };
        let Some(exp) = claims.exp else {
            return true;
        };
        exp < chrono::Utc::now().timestamp()
    }

    /// Identifier carried by the stored token: `userId`, then `id`, then
    /// `sub`. `None` when no token is stored or it cannot be decoded.
    pub fn current_user_id(&self) -> Option<String> {
        self.claims()?.preferred_user_id().map(str::to_string)
    }

    /// Cached user summary from the last successful login
    pub fn current_user(&self) -> Option<UserSummary> {
        self.store.user()
    }

    /// Raw bearer token, when present
    pub fn token(&self) -> Option<String> {
        self.store.token()
    }

    pub(crate) fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn claims(&self) -> Option<Claims> {
        self.store.token().as_deref().and_then(token::decode_claims)
    }

    /// Attach the bearer token to a request when one is available. When no
    /// token is stored the header is simply omitted; the server is the one
    /// that rejects unauthenticated calls.
    pub(crate) fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.store.token() {
            Some(token) => request.header("Authorization", format!("Bearer {}", token)),
            None => request,
        }
    }
}
