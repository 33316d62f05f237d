//! Feed gateway.
//!
//! Paged reads of the post feed and creation of new posts. The server
//! answers feed reads with a Spring-style page envelope; absent envelope
//! fields fall back to the defaults the client has always assumed.

use std::sync::Arc;

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::ClientError;
use crate::session::SessionManager;
use crate::types::{CreatePostRequest, FeedPage, PageInfo, Post};

/// Raw page envelope from the feed endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageEnvelope {
    #[serde(default)]
    content: Vec<Post>,
    #[serde(default)]
    pageable: PageableSection,
    #[serde(default)]
    total_pages: u32,
    #[serde(default)]
    total_elements: u64,
    #[serde(default = "default_true")]
    first: bool,
    #[serde(default = "default_true")]
    last: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageableSection {
    #[serde(default)]
    page_number: u32,
    #[serde(default = "default_page_size")]
    page_size: u32,
}

impl Default for PageableSection {
    fn default() -> Self {
        Self {
            page_number: 0,
            page_size: default_page_size(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_page_size() -> u32 {
    10
}

impl From<PageEnvelope> for FeedPage {
    fn from(envelope: PageEnvelope) -> Self {
        Self {
            posts: envelope.content,
            info: PageInfo {
                page_number: envelope.pageable.page_number,
                page_size: envelope.pageable.page_size,
                total_pages: envelope.total_pages,
                total_elements: envelope.total_elements,
                first: envelope.first,
                last: envelope.last,
            },
        }
    }
}

pub struct PostsGateway {
    session: Arc<SessionManager>,
    http: Client,
}

impl PostsGateway {
    pub fn new(session: Arc<SessionManager>) -> Self {
        Self {
            session,
            http: Client::new(),
        }
    }

    /// Fetch one page of the feed.
    pub async fn feed(&self, page: u32, size: u32) -> Result<FeedPage, ClientError> {
        let url = self
            .session
            .config()
            .api_url(&format!("/posts?page={}&size={}", page, size));
        debug!(page, size, "fetching feed");

        let response = self.session.authorize(self.http.get(&url)).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::gateway_failure(response).await);
        }
        let envelope: PageEnvelope = response.json().await?;
        Ok(envelope.into())
    }

    /// Create a new post and return the server's record of it.
    pub async fn create(
        &self,
        content: &str,
        media_url: Option<&str>,
    ) -> Result<Post, ClientError> {
        let url = self.session.config().api_url("/posts");
        debug!("creating post");

        let request = CreatePostRequest {
            content: content.to_string(),
            media_url: media_url.map(str::to_string),
        };

        let response = self
            .session
            .authorize(self.http.post(&url))
            .json(&request)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ClientError::gateway_failure(response).await);
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_with_all_fields() {
        let json = r#"{
            "content": [{"content": "hello"}],
            "pageable": {"pageNumber": 2, "pageSize": 5},
            "totalPages": 7,
            "totalElements": 33,
            "first": false,
            "last": false
        }"#;
        let page: FeedPage = serde_json::from_str::<PageEnvelope>(json).unwrap().into();
        assert_eq!(page.posts.len(), 1);
        assert_eq!(page.posts[0].content, "hello");
        assert_eq!(page.info.page_number, 2);
        assert_eq!(page.info.page_size, 5);
        assert_eq!(page.info.total_pages, 7);
        assert_eq!(page.info.total_elements, 33);
        assert!(!page.info.first);
        assert!(!page.info.last);
    }

    #[test]
    fn test_envelope_defaults_when_fields_absent() {
        let page: FeedPage = serde_json::from_str::<PageEnvelope>("{}").unwrap().into();
        assert!(page.posts.is_empty());
        assert_eq!(page.info.page_number, 0);
        assert_eq!(page.info.page_size, 10);
        assert_eq!(page.info.total_pages, 0);
        assert_eq!(page.info.total_elements, 0);
        assert!(page.info.first);
        assert!(page.info.last);
    }
}
