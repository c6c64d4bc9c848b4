use std::sync::Arc;

use reqwest::Client;
use thiserror::Error;

use crate::config::AppConfig;
use trabahanap_core::error::CoreError;
use trabahanap_core::types::media::MediaHost;
use trabahanap_infra::auth::StaticToken;
use trabahanap_infra::community::CommunityClient;

#[derive(Debug, Error)]
pub enum WiringError {
    #[error("http client error: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("media host error: {0}")]
    MediaHost(#[from] CoreError),
}

pub fn build_client(config: &AppConfig) -> Result<(CommunityClient, MediaHost), WiringError> {
    let media = MediaHost::new(&config.media_base_url)?;
    // Per-request timeouts are applied by the client, endpoint by endpoint.
    let http = Client::builder().build()?;
    let token = Arc::new(StaticToken::new(config.auth_token.clone()));
    let client = CommunityClient::new(
        http,
        &config.api_base_url,
        config.posts_timeout,
        config.comments_timeout,
        token,
    );
    Ok((client, media))
}
