use blog_types::{BlogPost, PostDraft, PostId, PostUpdate};

use crate::error::StoreResult;

/// Collection of blog posts.
///
/// Implementations must satisfy these invariants:
/// - `create` assigns a fresh unique id and the current time as publish date.
/// - `get` returns every post in insertion order.
/// - `update` rewrites only title, content, and author.
/// - Operations on unknown ids leave the store unchanged.
pub trait PostStore: Send + Sync {
    /// Store a new post built from `draft` and return it.
    fn create(&self, draft: PostDraft) -> StoreResult<BlogPost>;

    /// All posts, oldest first.
    fn get(&self) -> StoreResult<Vec<BlogPost>>;

    /// Look up a single post.
    fn find(&self, id: &PostId) -> StoreResult<Option<BlogPost>>;

    /// Overwrite the editable fields of the post matching `update.id`.
    ///
    /// Returns `StoreError::NotFound` if no post matches.
    fn update(&self, update: PostUpdate) -> StoreResult<BlogPost>;

    /// Remove a post. Returns `true` if the post existed.
    fn delete(&self, id: &PostId) -> StoreResult<bool>;
}
