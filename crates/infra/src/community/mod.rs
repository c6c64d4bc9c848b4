mod client;
mod wire;

pub use client::{ApiError, CommunityApi, CommunityClient};
