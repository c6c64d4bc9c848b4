use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load the community feed with live comment counts.
    Feed,
    /// Load the full threaded comment tree for one post.
    Thread { post_id: String },
}
