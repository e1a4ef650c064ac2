//! Data model for the blog posts API.
//!
//! Every other crate in the workspace depends on `blog-types`.
//!
//! # Key Types
//!
//! - [`BlogPost`] -- A stored post as it appears on the wire
//! - [`PostId`] -- Post identifier (UUID v7 text when generated by the store)
//! - [`PostDraft`] -- Fields supplied when creating a post
//! - [`PostUpdate`] -- Fields supplied when editing an existing post

pub mod id;
pub mod post;

pub use id::PostId;
pub use post::{BlogPost, PostDraft, PostUpdate};
