//! Identity resolution.
//!
//! Produces the stable internal user id for the current session. The token's
//! subject is not guaranteed to be that id - tokens from the backend carry
//! the account email as `sub` - so resolution is two-tier: use the token's
//! identifier when it already looks internal, otherwise look the id up by
//! email against the profile listing endpoint.

use std::sync::Arc;

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::ClientError;
use crate::session::SessionManager;
use crate::token;
use crate::types::UserProfile;

/// Internal ids are UUID-like and always contain this separator; an
/// identifier without it is taken to be an email.
///
/// TODO: confirm against the backend contract whether the subject claim can
/// ever carry an internal id directly - the heuristic is preserved from the
/// original behavior but its trigger condition is not documented anywhere.
const INTERNAL_ID_SEPARATOR: char = '-';

/// The listing endpoint answers with either a list of profiles or a single
/// record.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ProfileListing {
    Many(Vec<UserProfile>),
    One(UserProfile),
}

/// Resolves the session's internal user id.
pub struct IdentityResolver {
    session: Arc<SessionManager>,
    http: Client,
}

impl IdentityResolver {
    pub fn new(session: Arc<SessionManager>) -> Self {
        Self {
            session,
            http: Client::new(),
        }
    }

    /// Resolve the internal id for the current session.
    ///
    /// Fast path: the token already carries an identifier containing the
    /// internal-id separator. Fallback: extract the subject email from the
    /// token and scan the profile listing for a matching record.
    ///
    /// Deterministic for a fixed token and listing; repeated calls return
    /// the same id.
    pub async fn resolve(&self) -> Result<String, ClientError> {
        if let Some(id) = self.session.current_user_id() {
            if id.contains(INTERNAL_ID_SEPARATOR) {
                return Ok(id);
            }
        }

        let Some(bearer) = self.session.token() else {
            return Err(ClientError::resolution("no token available"));
        };
        let email = token::decode_claims(&bearer)
            .and_then(|claims| claims.sub)
            .ok_or_else(|| ClientError::resolution("token carries no subject claim"))?;

        debug!(%email, "resolving internal user id via profile listing");
        let url = self.session.config().api_url("/user-profiles");
        let response = self
            .http
            .get(&url)
            .header("Authorization", format!("Bearer {}", bearer))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ClientError::gateway_failure(response).await);
        }

        let listing: ProfileListing = response.json().await?;
        let user_id = match listing {
            ProfileListing::Many(profiles) => profiles
                .into_iter()
                .find(|profile| profile.email.as_deref() == Some(email.as_str()))
                .and_then(|profile| profile.user_id),
            ProfileListing::One(profile) => (profile.email.as_deref() == Some(email.as_str()))
                .then_some(profile.user_id)
                .flatten(),
        };

        user_id.map(|id| id.to_string()).ok_or_else(|| {
            ClientError::resolution(format!("no profile matches {}", email))
        })
    }
}
