use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid media host: {0}")]
    InvalidMediaHost(String),
}
