use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::author::AuthorRef;
use crate::types::media::MediaHost;

/// Flat comment record as received from the backend, before tree linking.
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: String,
    pub parent_comment_id: Option<String>,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub author: AuthorRef,
    pub like_count: i64,
    pub is_upvoted: bool,
}

/// Denormalized, display-ready comment with its reply subtree attached.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentNode {
    pub id: String,
    pub user_id: Option<String>,
    pub username: String,
    pub avatar: Option<String>,
    pub text: String,
    pub time: String,
    pub created_at: DateTime<Utc>,
    pub like_count: i64,
    pub is_upvoted: bool,
    pub replies: Vec<CommentNode>,
}

/// Rebuilds the threaded reply forest from the flat comment list of one post.
///
/// Two passes over the input: an index pass so a child can find its parent
/// regardless of input order, then a link pass that attaches each comment to
/// its parent's reply list in input order (input order is reply order; no
/// timestamp sorting). Top-level comments become roots. A comment whose
/// parent id does not resolve within the batch is neither linked nor promoted
/// to root, so it is absent from the visible forest.
pub fn build_comment_tree(comments: &[Comment], media: &MediaHost) -> Vec<CommentNode> {
    let mut index = HashMap::with_capacity(comments.len());
    for (idx, comment) in comments.iter().enumerate() {
        index.insert(comment.id.as_str(), idx);
    }

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); comments.len()];
    let mut roots = Vec::new();
    for (idx, comment) in comments.iter().enumerate() {
        match comment.parent_comment_id.as_deref() {
            None => roots.push(idx),
            Some(parent_id) => {
                if let Some(parent_idx) = index.get(parent_id) {
                    children[*parent_idx].push(idx);
                }
                // Unresolvable parent (e.g. deleted upstream): dropped.
            }
        }
    }

    roots
        .into_iter()
        .map(|idx| denormalize(idx, comments, &children, media))
        .collect()
}

fn denormalize(
    idx: usize,
    comments: &[Comment],
    children: &[Vec<usize>],
    media: &MediaHost,
) -> CommentNode {
    let comment = &comments[idx];
    let profile = comment.author.profile();
    let replies = children[idx]
        .iter()
        .map(|&child_idx| denormalize(child_idx, comments, children, media))
        .collect();
    CommentNode {
        id: comment.id.clone(),
        user_id: profile.id.clone(),
        username: profile.display_name(),
        avatar: media.resolve(profile.profile_image.as_deref()),
        text: comment.body.clone(),
        time: format_posted_at(comment.created_at),
        created_at: comment.created_at,
        like_count: comment.like_count,
        is_upvoted: comment.is_upvoted,
        replies,
    }
}

/// Long-form localized date, e.g. `"January 5, 2025"`.
pub fn format_posted_at(at: DateTime<Utc>) -> String {
    at.format("%B %-d, %Y").to_string()
}
