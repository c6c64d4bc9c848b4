mod cli;
mod config;
mod fanout;
mod feed;
mod thread;
mod wiring;

use clap::Parser;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::config::ConfigError;
use crate::feed::FeedError;
use crate::wiring::WiringError;
use trabahanap_infra::community::ApiError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("wiring error: {0}")]
    Wiring(#[from] WiringError),
    #[error("feed error: {0}")]
    Feed(#[from] FeedError),
    #[error("api error: {0}")]
    Api(#[from] ApiError),
    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    let config = config::AppConfig::from_env()?;
    let (client, media) = wiring::build_client(&config)?;

    match cli.command {
        Command::Feed => {
            let feed = feed::load_feed(&client, &media).await?;
            info!(posts = feed.len(), "feed loaded");
            println!("{}", serde_json::to_string_pretty(&feed)?);
        }
        Command::Thread { post_id } => {
            let thread = thread::load_thread(&client, &media, &post_id).await?;
            info!(%post_id, roots = thread.len(), "thread loaded");
            println!("{}", serde_json::to_string_pretty(&thread)?);
        }
    }

    Ok(())
}
