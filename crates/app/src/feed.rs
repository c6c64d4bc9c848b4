use thiserror::Error;
use tracing::{info, warn};

use crate::fanout::settle_all;
use trabahanap_core::domain::feed::{FeedPost, distinct_author_ids, merge_feed};
use trabahanap_core::types::media::MediaHost;
use trabahanap_infra::community::{ApiError, CommunityApi};

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("community api error: {0}")]
    Api(#[from] ApiError),
}

/// Builds the denormalized community feed: the posts fetch, one batched
/// author-identity lookup, and a live comment count per post. Posts and
/// identity failures propagate to the caller; an individual comment-count
/// failure degrades that post to a zero count without touching its siblings.
pub async fn load_feed<A: CommunityApi>(
    api: &A,
    media: &MediaHost,
) -> Result<Vec<FeedPost>, FeedError> {
    let posts = api.list_posts().await?;
    if posts.is_empty() {
        return Ok(Vec::new());
    }
    info!(posts = posts.len(), "posts fetched");

    let author_ids = distinct_author_ids(&posts);
    let identities = api.lookup_authors(&author_ids).await?;

    // Every count fetch goes out before any is awaited; one slow or failing
    // post must not stall or sink the rest.
    let count_tasks = posts.iter().map(|post| async move {
        let comments = api.comments_for_post(&post.id).await?;
        Ok::<u64, ApiError>(comments.len() as u64)
    });
    let counts = settle_all(count_tasks, |idx, err| {
        warn!(post_id = %posts[idx].id, error = %err, "comment count fetch failed; using 0");
        0
    })
    .await;

    Ok(merge_feed(posts, &identities, &counts, media))
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};

    use super::{FeedError, load_feed};
    use trabahanap_core::domain::author::{AuthorIdentity, AuthorProfile, AuthorRef};
    use trabahanap_core::domain::comments::Comment;
    use trabahanap_core::domain::feed::{Post, PostAuthor};
    use trabahanap_core::types::media::MediaHost;
    use trabahanap_infra::community::{ApiError, CommunityApi};

    #[derive(Default)]
    struct FakeApi {
        posts: Vec<Post>,
        fail_posts: bool,
        fail_identities: bool,
        identities: HashMap<String, AuthorIdentity>,
        comments: HashMap<String, Vec<Comment>>,
        timeout_posts: HashSet<String>,
        identity_calls: AtomicUsize,
        comment_calls: AtomicUsize,
    }

    #[async_trait]
    impl CommunityApi for FakeApi {
        async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
            if self.fail_posts {
                return Err(ApiError::Timeout);
            }
            Ok(self.posts.clone())
        }

        async fn lookup_authors(
            &self,
            ids: &[String],
        ) -> Result<HashMap<String, AuthorIdentity>, ApiError> {
            self.identity_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_identities {
                return Err(ApiError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR));
            }
            Ok(ids
                .iter()
                .filter_map(|id| {
                    self.identities
                        .get(id)
                        .map(|identity| (id.clone(), identity.clone()))
                })
                .collect())
        }

        async fn comments_for_post(&self, post_id: &str) -> Result<Vec<Comment>, ApiError> {
            self.comment_calls.fetch_add(1, Ordering::SeqCst);
            if self.timeout_posts.contains(post_id) {
                return Err(ApiError::Timeout);
            }
            Ok(self.comments.get(post_id).cloned().unwrap_or_default())
        }
    }

    fn media() -> MediaHost {
        MediaHost::new("https://media.example.com").unwrap()
    }

    fn post(id: &str, author_id: &str) -> Post {
        Post {
            id: id.to_string(),
            author: Some(PostAuthor::JobSeeker(author_id.to_string())),
            content: format!("content {id}"),
            image: None,
            like_count: 0,
            comment_count: 99,
        }
    }

    fn comment(id: &str) -> Comment {
        Comment {
            id: id.to_string(),
            parent_comment_id: None,
            body: "hi".to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 1, 5, 12, 0, 0).unwrap(),
            author: AuthorRef::Client(AuthorProfile::default()),
            like_count: 0,
            is_upvoted: false,
        }
    }

    #[tokio::test]
    async fn one_count_timeout_degrades_to_zero_without_failing() {
        let mut api = FakeApi {
            posts: vec![post("p1", "a"), post("p2", "a"), post("p3", "b")],
            ..FakeApi::default()
        };
        api.comments.insert("p1".to_string(), vec![comment("c1"), comment("c2")]);
        api.comments.insert("p3".to_string(), vec![comment("c3")]);
        api.timeout_posts.insert("p2".to_string());

        let feed = load_feed(&api, &media()).await.unwrap();
        assert_eq!(feed.len(), 3);
        assert_eq!(feed[0].comment_count, 2);
        assert_eq!(feed[1].comment_count, 0);
        assert_eq!(feed[2].comment_count, 1);
    }

    #[tokio::test]
    async fn empty_posts_short_circuits_without_further_fetches() {
        let api = FakeApi::default();
        let feed = load_feed(&api, &media()).await.unwrap();
        assert!(feed.is_empty());
        assert_eq!(api.identity_calls.load(Ordering::SeqCst), 0);
        assert_eq!(api.comment_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn posts_failure_propagates() {
        let api = FakeApi {
            fail_posts: true,
            ..FakeApi::default()
        };
        let err = load_feed(&api, &media()).await.unwrap_err();
        assert!(matches!(err, FeedError::Api(ApiError::Timeout)));
        assert_eq!(api.identity_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn identity_lookup_failure_propagates() {
        let api = FakeApi {
            posts: vec![post("p1", "a"), post("p2", "b")],
            fail_identities: true,
            ..FakeApi::default()
        };
        let err = load_feed(&api, &media()).await.unwrap_err();
        assert!(matches!(err, FeedError::Api(ApiError::Status(_))));
        // Identity resolution is never degraded, so no count fetch goes out.
        assert_eq!(api.comment_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn identities_resolve_display_fields_with_unknown_fallback() {
        let mut api = FakeApi {
            posts: vec![post("p1", "a"), post("p2", "missing")],
            ..FakeApi::default()
        };
        api.identities.insert(
            "a".to_string(),
            AuthorIdentity {
                first_name: Some("Jane".to_string()),
                middle_name: Some("Ann".to_string()),
                last_name: Some("Cruz".to_string()),
                profile_image: Some("/uploads/jane.png".to_string()),
            },
        );

        let feed = load_feed(&api, &media()).await.unwrap();
        assert_eq!(feed[0].username, "Jane A. Cruz");
        assert_eq!(
            feed[0].profile_image.as_deref(),
            Some("https://media.example.com/uploads/jane.png")
        );
        assert_eq!(feed[1].username, "Unknown User");
        assert_eq!(feed[1].profile_image, None);
        // One batched lookup for the whole feed.
        assert_eq!(api.identity_calls.load(Ordering::SeqCst), 1);
    }
}
