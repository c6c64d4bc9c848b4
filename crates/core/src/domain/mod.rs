pub mod author;
pub mod comments;
pub mod feed;
