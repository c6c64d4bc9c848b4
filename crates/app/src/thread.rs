use trabahanap_core::domain::comments::{CommentNode, build_comment_tree};
use trabahanap_core::types::media::MediaHost;
use trabahanap_infra::community::{ApiError, CommunityApi};

/// Loads one post's full comment list and rebuilds the threaded reply forest.
/// Unlike the feed's per-post count fetch, failure here surfaces to the
/// caller rather than degrading.
pub async fn load_thread<A: CommunityApi>(
    api: &A,
    media: &MediaHost,
    post_id: &str,
) -> Result<Vec<CommentNode>, ApiError> {
    let comments = api.comments_for_post(post_id).await?;
    Ok(build_comment_tree(&comments, media))
}
