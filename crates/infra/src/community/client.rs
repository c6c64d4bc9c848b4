use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::auth::TokenProvider;
use crate::community::wire::{CommentDto, IdentityDto, PostDto};
use trabahanap_core::domain::author::AuthorIdentity;
use trabahanap_core::domain::comments::Comment;
use trabahanap_core::domain::feed::Post;

/// Keeps the distinction the backend signaled: a timeout, a non-2xx status,
/// a transport failure, and a malformed payload are different failures.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request timed out")]
    Timeout,
    #[error("unexpected status: {0}")]
    Status(StatusCode),
    #[error("http error: {0}")]
    Http(reqwest::Error),
    #[error("invalid payload: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if let Some(status) = err.status() {
            ApiError::Status(status)
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Http(err)
        }
    }
}

/// Read surface of the community backend consumed by the feed aggregator and
/// the thread loader. Implemented by [`CommunityClient`] and by test fakes.
#[async_trait]
pub trait CommunityApi: Send + Sync {
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError>;

    /// One batched identity lookup per feed load, never per author.
    async fn lookup_authors(
        &self,
        ids: &[String],
    ) -> Result<HashMap<String, AuthorIdentity>, ApiError>;

    async fn comments_for_post(&self, post_id: &str) -> Result<Vec<Comment>, ApiError>;
}

#[derive(Clone)]
pub struct CommunityClient {
    http: reqwest::Client,
    base_url: String,
    posts_timeout: Duration,
    comments_timeout: Duration,
    token: Arc<dyn TokenProvider>,
}

impl CommunityClient {
    pub fn new(
        http: reqwest::Client,
        base_url: &str,
        posts_timeout: Duration,
        comments_timeout: Duration,
        token: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            posts_timeout,
            comments_timeout,
            token,
        }
    }

    fn get(&self, url: String, timeout: Duration) -> reqwest::RequestBuilder {
        let mut request = self.http.get(url).timeout(timeout);
        if let Some(token) = self.token.bearer_token() {
            request = request.bearer_auth(token);
        }
        request
    }
}

#[async_trait]
impl CommunityApi for CommunityClient {
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        let url = format!("{}/community/posts", self.base_url);
        let response = self
            .get(url, self.posts_timeout)
            .send()
            .await?
            .error_for_status()?;
        let posts: Vec<PostDto> = response.json().await?;
        Ok(posts.into_iter().map(PostDto::into_post).collect())
    }

    async fn lookup_authors(
        &self,
        ids: &[String],
    ) -> Result<HashMap<String, AuthorIdentity>, ApiError> {
        let url = format!("{}/community/getUsername", self.base_url);
        let encoded =
            serde_json::to_string(ids).map_err(|err| ApiError::Decode(err.to_string()))?;
        let response = self
            .get(url, self.posts_timeout)
            .query(&[("ids", encoded)])
            .send()
            .await?
            .error_for_status()?;
        let identities: HashMap<String, IdentityDto> = response.json().await?;
        Ok(identities
            .into_iter()
            .map(|(id, dto)| (id, dto.into_identity()))
            .collect())
    }

    async fn comments_for_post(&self, post_id: &str) -> Result<Vec<Comment>, ApiError> {
        let url = format!("{}/community/posts/{post_id}/getComments", self.base_url);
        let response = self
            .get(url, self.comments_timeout)
            .send()
            .await?
            .error_for_status()?;
        let comments: Vec<CommentDto> = response.json().await?;
        Ok(comments.into_iter().map(CommentDto::into_comment).collect())
    }
}
