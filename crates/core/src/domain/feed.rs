use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::domain::author::{AuthorIdentity, UNKNOWN_USER};
use crate::types::media::MediaHost;

/// The author reference carried on a feed post; exactly one of the two kinds
/// is set on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostAuthor {
    Client(String),
    JobSeeker(String),
}

impl PostAuthor {
    pub fn id(&self) -> &str {
        match self {
            PostAuthor::Client(id) | PostAuthor::JobSeeker(id) => id,
        }
    }
}

/// Feed post as received from the backend. `comment_count` is the backend
/// snapshot; the aggregator overwrites it with a live per-post count.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: String,
    pub author: Option<PostAuthor>,
    pub content: String,
    pub image: Option<String>,
    pub like_count: i64,
    pub comment_count: u64,
}

/// Denormalized, display-ready feed post.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPost {
    pub id: String,
    pub author_id: Option<String>,
    pub username: String,
    pub profile_image: Option<String>,
    pub content: String,
    pub image: Option<String>,
    pub like_count: i64,
    pub comment_count: u64,
}

/// Distinct author ids across the feed, in first-seen order. Posts without
/// an author reference contribute nothing.
pub fn distinct_author_ids(posts: &[Post]) -> Vec<String> {
    let mut seen = HashSet::new();
    posts
        .iter()
        .filter_map(|post| post.author.as_ref())
        .map(PostAuthor::id)
        .filter(|id| seen.insert(*id))
        .map(str::to_string)
        .collect()
}

/// Merges posts with the batched identity map and the index-aligned live
/// comment counts. Order is preserved from the posts sequence; a missing
/// identity record resolves to `"Unknown User"` with no image.
pub fn merge_feed(
    posts: Vec<Post>,
    identities: &HashMap<String, AuthorIdentity>,
    counts: &[u64],
    media: &MediaHost,
) -> Vec<FeedPost> {
    posts
        .into_iter()
        .enumerate()
        .map(|(idx, post)| {
            let author_id = post.author.as_ref().map(|author| author.id().to_string());
            let identity = author_id.as_deref().and_then(|id| identities.get(id));
            let (username, profile_image) = match identity {
                Some(identity) => (
                    identity.display_name(),
                    media.resolve(identity.profile_image.as_deref()),
                ),
                None => (UNKNOWN_USER.to_string(), None),
            };
            FeedPost {
                id: post.id,
                author_id,
                username,
                profile_image,
                content: post.content,
                image: media.resolve(post.image.as_deref()),
                like_count: post.like_count,
                comment_count: counts.get(idx).copied().unwrap_or(0),
            }
        })
        .collect()
}
