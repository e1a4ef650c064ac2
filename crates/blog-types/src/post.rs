use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::PostId;

/// A stored blog post.
///
/// `id` and `publish_date` are assigned once by the store when the post is
/// created and never change afterwards. Only `title`, `content`, and
/// `author` are editable (see [`BlogPost::apply`]).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author: String,
    /// Creation time, serialized as an RFC 3339 UTC string.
    pub publish_date: DateTime<Utc>,
}

impl BlogPost {
    /// Build a new post from a draft, stamping a fresh id and the current time.
    pub fn from_draft(draft: PostDraft) -> Self {
        Self::from_draft_at(draft, Utc::now())
    }

    /// Like [`BlogPost::from_draft`] with an explicit publish date.
    pub fn from_draft_at(draft: PostDraft, publish_date: DateTime<Utc>) -> Self {
        Self {
            id: PostId::generate(),
            title: draft.title,
            content: draft.content,
            author: draft.author,
            publish_date,
        }
    }

    /// Overwrite the editable fields with those of `update`.
    ///
    /// The id and publish date are left untouched even if `update.id`
    /// differs; matching ids is the caller's job.
    pub fn apply(&mut self, update: PostUpdate) {
        self.title = update.title;
        self.content = update.content;
        self.author = update.author;
    }
}

/// Fields supplied when creating a post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl PostDraft {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author: author.into(),
        }
    }
}

/// Replacement values for an existing post, matched by `id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author: String,
}

impl PostUpdate {
    pub fn new(
        id: impl Into<PostId>,
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            author: author.into(),
        }
    }
}
