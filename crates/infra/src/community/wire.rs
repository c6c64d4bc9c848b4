use chrono::{DateTime, Utc};
use serde::Deserialize;

use trabahanap_core::domain::author::{AuthorIdentity, AuthorProfile, AuthorRef};
use trabahanap_core::domain::comments::Comment;
use trabahanap_core::domain::feed::{Post, PostAuthor};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: String,
    pub client_id: Option<String>,
    pub job_seeker_id: Option<String>,
    pub post_content: String,
    pub post_image: Option<String>,
    #[serde(default)]
    pub like_count: i64,
    #[serde(default)]
    pub comment_count: u64,
}

impl PostDto {
    pub fn into_post(self) -> Post {
        let author = match (self.client_id, self.job_seeker_id) {
            (Some(id), _) => Some(PostAuthor::Client(id)),
            (None, Some(id)) => Some(PostAuthor::JobSeeker(id)),
            (None, None) => None,
        };
        Post {
            id: self.id,
            author,
            content: self.post_content,
            image: self.post_image,
            like_count: self.like_count,
            comment_count: self.comment_count,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image: Option<String>,
}

impl AuthorDto {
    fn into_profile(self) -> AuthorProfile {
        AuthorProfile {
            id: self.id,
            first_name: self.first_name,
            middle_name: self.middle_name,
            last_name: self.last_name,
            profile_image: self.profile_image,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: String,
    pub parent_comment_id: Option<String>,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub client: Option<AuthorDto>,
    pub job_seeker: Option<AuthorDto>,
    #[serde(default)]
    pub like_count: i64,
    #[serde(default)]
    pub is_upvoted: bool,
}

impl CommentDto {
    pub fn into_comment(self) -> Comment {
        // Client author wins when a record somehow carries both shapes.
        let author = match (self.client, self.job_seeker) {
            (Some(client), _) => AuthorRef::Client(client.into_profile()),
            (None, Some(job_seeker)) => AuthorRef::JobSeeker(job_seeker.into_profile()),
            (None, None) => AuthorRef::Client(AuthorProfile::default()),
        };
        Comment {
            id: self.id,
            parent_comment_id: self.parent_comment_id,
            body: self.comment,
            created_at: self.created_at,
            author,
            like_count: self.like_count,
            is_upvoted: self.is_upvoted,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityDto {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image: Option<String>,
}

impl IdentityDto {
    pub fn into_identity(self) -> AuthorIdentity {
        AuthorIdentity {
            first_name: self.first_name,
            middle_name: self.middle_name,
            last_name: self.last_name,
            profile_image: self.profile_image,
        }
    }
}
