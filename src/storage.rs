//! Session storage.
//!
//! A dumb persistent key/value pair: the raw bearer token plus the cached
//! user summary, kept together in one JSON file so they are written and
//! cleared as a unit. No expiry logic lives here.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ClientError;
use crate::types::UserSummary;

const STORE_DIR: &str = "redsocial";
const STORE_FILE: &str = "session.json";

/// On-disk layout. Key names match what the session has always been
/// stored under.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredSession {
    #[serde(rename = "authToken", skip_serializing_if = "Option::is_none")]
    auth_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<UserSummary>,
}

/// Persistent store for the current session.
///
/// Reads go back to the file every time; a single in-process writer is
/// assumed, so no locking is needed.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Open the store at its default per-user location
    pub fn open_default() -> Result<Self, ClientError> {
        let dir = dirs::data_dir()
            .ok_or_else(|| ClientError::storage("no user data directory available"))?;
        Ok(Self::at(dir.join(STORE_DIR).join(STORE_FILE)))
    }

    /// Open the store at an explicit path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Write token and user summary together. A single file write, so
    /// other in-process readers never observe one without the other.
    pub fn save(&self, token: &str, user: &UserSummary) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ClientError::storage(format!("creating {:?}: {}", parent, e)))?;
        }
        let record = StoredSession {
            auth_token: Some(token.to_string()),
            user: Some(user.clone()),
        };
        let json = serde_json::to_string(&record)
            .map_err(|e| ClientError::storage(format!("encoding session: {}", e)))?;
        fs::write(&self.path, json)
            .map_err(|e| ClientError::storage(format!("writing {:?}: {}", self.path, e)))
    }

    /// Remove both values. Idempotent and infallible outwardly; an
    /// already-empty store is fine.
    pub fn clear(&self) {
        if let Err(err) = fs::remove_file(&self.path) {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("failed to clear session store: {}", err);
            }
        }
    }

    /// Last saved token, or `None`
    pub fn token(&self) -> Option<String> {
        self.read().auth_token
    }

    /// Last saved user summary, or `None`
    pub fn user(&self) -> Option<UserSummary> {
        self.read().user
    }

    fn read(&self) -> StoredSession {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default()
    }
}
