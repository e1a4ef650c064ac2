use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use blog_types::{BlogPost, PostDraft, PostId, PostUpdate};

use crate::error::{StoreError, StoreResult};
use crate::traits::PostStore;

/// In-memory, `Vec`-based post store.
///
/// Posts are kept in insertion order behind a `RwLock`. Lookups are linear,
/// which is fine for the handful of posts this store is meant to hold.
pub struct InMemoryPostStore {
    posts: RwLock<Vec<BlogPost>>,
}

impl InMemoryPostStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }

    /// Number of posts currently stored.
    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.read()?.len())
    }

    /// Returns `true` if the store holds no posts.
    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.read()?.is_empty())
    }

    /// Remove every post.
    pub fn clear(&self) -> StoreResult<()> {
        self.write()?.clear();
        Ok(())
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Vec<BlogPost>>> {
        self.posts.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Vec<BlogPost>>> {
        self.posts.write().map_err(|_| StoreError::LockPoisoned)
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PostStore for InMemoryPostStore {
    fn create(&self, draft: PostDraft) -> StoreResult<BlogPost> {
        let post = BlogPost::from_draft(draft);
        self.write()?.push(post.clone());
        tracing::debug!(id = %post.id.short_id(), "stored blog post");
        Ok(post)
    }

    fn get(&self) -> StoreResult<Vec<BlogPost>> {
        Ok(self.read()?.clone())
    }

    fn find(&self, id: &PostId) -> StoreResult<Option<BlogPost>> {
        Ok(self.read()?.iter().find(|post| &post.id == id).cloned())
    }

    fn update(&self, update: PostUpdate) -> StoreResult<BlogPost> {
        let mut posts = self.write()?;
        let post = posts
            .iter_mut()
            .find(|post| post.id == update.id)
            .ok_or_else(|| StoreError::NotFound(update.id.clone()))?;
        post.apply(update);
        Ok(post.clone())
    }

    fn delete(&self, id: &PostId) -> StoreResult<bool> {
        let mut posts = self.write()?;
        match posts.iter().position(|post| &post.id == id) {
            Some(idx) => {
                posts.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl std::fmt::Debug for InMemoryPostStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.read().map(|posts| posts.len()).ok();
        f.debug_struct("InMemoryPostStore")
            .field("post_count", &count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> PostDraft {
        PostDraft::new(title, format!("{title} body"), "someone")
    }

    // -----------------------------------------------------------------------
    // Core CRUD
    // -----------------------------------------------------------------------

    #[test]
    fn create_returns_stored_post() {
        let store = InMemoryPostStore::new();
        let post = store.create(draft("first")).unwrap();
        assert_eq!(post.title, "first");
        assert_eq!(post.content, "first body");
        assert_eq!(post.author, "someone");

        let found = store.find(&post.id).unwrap().expect("should exist");
        assert_eq!(found, post);
    }

    #[test]
    fn create_assigns_unique_ids() {
        let store = InMemoryPostStore::new();
        let a = store.create(draft("a")).unwrap();
        let b = store.create(draft("a")).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn get_preserves_insertion_order() {
        let store = InMemoryPostStore::new();
        for title in ["one", "two", "three"] {
            store.create(draft(title)).unwrap();
        }
        let titles: Vec<String> = store.get().unwrap().into_iter().map(|p| p.title).collect();
        assert_eq!(titles, ["one", "two", "three"]);
    }

    #[test]
    fn update_overwrites_editable_fields() {
        let store = InMemoryPostStore::new();
        let post = store.create(draft("old")).unwrap();

        let updated = store
            .update(PostUpdate::new(post.id.clone(), "new", "new body", "editor"))
            .unwrap();

        assert_eq!(updated.id, post.id);
        assert_eq!(updated.publish_date, post.publish_date);
        assert_eq!(updated.title, "new");
        assert_eq!(updated.content, "new body");
        assert_eq!(updated.author, "editor");
        assert_eq!(store.find(&post.id).unwrap(), Some(updated));
    }

    #[test]
    fn update_keeps_position() {
        let store = InMemoryPostStore::new();
        let first = store.create(draft("one")).unwrap();
        store.create(draft("two")).unwrap();

        store
            .update(PostUpdate::new(first.id.clone(), "uno", "c", "a"))
            .unwrap();

        let posts = store.get().unwrap();
        assert_eq!(posts[0].id, first.id);
        assert_eq!(posts[0].title, "uno");
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let store = InMemoryPostStore::new();
        store.create(draft("kept")).unwrap();

        let err = store
            .update(PostUpdate::new("missing", "t", "c", "a"))
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(ref id) if id.as_str() == "missing"));
        assert_eq!(store.get().unwrap()[0].title, "kept");
    }

    #[test]
    fn delete_removes_post() {
        let store = InMemoryPostStore::new();
        let a = store.create(draft("a")).unwrap();
        let b = store.create(draft("b")).unwrap();

        assert!(store.delete(&a.id).unwrap());
        assert!(store.find(&a.id).unwrap().is_none());
        assert_eq!(store.get().unwrap(), vec![b]);
    }

    #[test]
    fn delete_unknown_id_is_noop() {
        let store = InMemoryPostStore::new();
        store.create(draft("a")).unwrap();
        assert!(!store.delete(&PostId::from("nope")).unwrap());
        assert_eq!(store.len().unwrap(), 1);
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    #[test]
    fn empty_and_clear() {
        let store = InMemoryPostStore::default();
        assert!(store.is_empty().unwrap());
        store.create(draft("a")).unwrap();
        assert!(!store.is_empty().unwrap());
        store.clear().unwrap();
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn usable_as_trait_object() {
        let store: Box<dyn PostStore> = Box::new(InMemoryPostStore::new());
        let post = store.create(draft("dyn")).unwrap();
        assert_eq!(store.get().unwrap(), vec![post]);
    }

    #[test]
    fn debug_shows_count() {
        let store = InMemoryPostStore::new();
        store.create(draft("a")).unwrap();
        let dbg = format!("{store:?}");
        assert!(dbg.contains("InMemoryPostStore"));
        assert!(dbg.contains("post_count"));
    }
}
