pub mod auth;
pub mod community;
