//! Red Social API Client
//!
//! Client library for the Red Social REST API: session management, identity
//! resolution, profile access and the post feed. This crate is the layer a
//! view sits on top of - it performs the HTTP calls and state updates and
//! returns typed data and typed errors; rendering is the caller's business.
//!
//! # Overview
//!
//! - **`session`** - login, registration, logout, expiry checks and the
//!   startup probe. Owns the token store and the token codec.
//! - **`storage`** - persistent key/value pair holding the bearer token and
//!   the cached user summary.
//! - **`token`** - unverified JWT payload decoding (claims are convenience
//!   data, never trust-asserting).
//! - **`identity`** - two-tier resolution of the stable internal user id,
//!   with an email-lookup fallback when the token's subject is not itself
//!   a usable id.
//! - **`profile`** - fetch and update of the user's profile record.
//! - **`posts`** - paged feed reads and post creation.
//! - **`users`** - best-effort author lookups for display.
//! - **`validation`** - pure form checks for login/registration inputs.
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use redsocial_client::{Config, ProfileGateway, SessionManager, SessionState, TokenStore};
//!
//! # async fn example() -> Result<(), redsocial_client::ClientError> {
//! let store = TokenStore::open_default()?;
//! let session = Arc::new(SessionManager::new(Config::new(), store));
//!
//! // Startup: an expired or missing token collapses to Unauthenticated
//! if session.bootstrap() == SessionState::Unauthenticated {
//!     session.login("a@b.com", "secret123").await?;
//! }
//!
//! let profiles = ProfileGateway::new(Arc::clone(&session));
//! let profile = profiles.fetch().await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Every remote call returns `Result<T, ClientError>`; each failure renders
//! as a single human-readable message and nothing is retried automatically.
//! See the `error` module for the taxonomy.
//!
//! # Concurrency
//!
//! Operations are async and issue at most one outstanding request each.
//! There is no cancellation and no client-enforced timeout; re-entrancy
//! guarding (e.g. disabling a submit button while a call runs) is the
//! caller's responsibility. Storage I/O is synchronous and assumes a single
//! in-process writer.

pub mod config;
pub mod error;
pub mod identity;
pub mod posts;
pub mod profile;
pub mod session;
pub mod storage;
pub mod token;
pub mod types;
pub mod users;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use error::ClientError;
pub use identity::IdentityResolver;
pub use posts::PostsGateway;
pub use profile::ProfileGateway;
pub use session::{SessionManager, SessionState};
pub use storage::TokenStore;
pub use token::{decode_claims, Claims};
pub use types::{
    AuthResponse, CreatePostRequest, FeedPage, LoginRequest, PageInfo, Post, RegisterRequest,
    UserProfile, UserSummary,
};
pub use users::{UserDirectory, UserRecord};
