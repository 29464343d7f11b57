#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Login or registration with an empty email or password.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// A reply targeted a comment id that does not resolve to a
    /// top-level comment in the current thread.
    #[error("Invalid parent comment: {0}")]
    InvalidParent(String),

    #[error("Comment not found: {0}")]
    CommentNotFound(String),

    #[error("Invalid slug: {0}")]
    InvalidSlug(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parent_names_the_offending_id() {
        let err = AppError::InvalidParent("comment-42".to_string());
        assert_eq!(err.to_string(), "Invalid parent comment: comment-42");
    }

    #[test]
    fn invalid_credentials_message_is_user_facing() {
        assert_eq!(
            AppError::InvalidCredentials.to_string(),
            "Invalid credentials"
        );
    }
}
