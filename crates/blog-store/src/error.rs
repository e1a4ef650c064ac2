use blog_types::PostId;

/// Errors from post store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No post with the given id exists.
    #[error("blog post not found: {0}")]
    NotFound(PostId),

    /// A thread panicked while holding the store lock.
    #[error("store lock poisoned")]
    LockPoisoned,
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
