use thiserror::Error;

/// Errors raised by bramble.
///
/// The domain variants carry the exact message a GraphQL client sees;
/// the remaining variants belong to the CLI/server plumbing.
#[derive(Error, Debug)]
pub enum BrambleError {
    #[error("Email already in use")]
    EmailTaken,

    #[error("User not found")]
    UserNotFound,

    #[error("Post not found")]
    PostNotFound,

    #[error("This post hasn't been published yet")]
    PostNotPublished,

    #[error("Comment not found")]
    CommentNotFound,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BrambleError>;
