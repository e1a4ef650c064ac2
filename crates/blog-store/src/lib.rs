//! Post storage for the blog posts API.
//!
//! # Storage Backends
//!
//! All backends implement the [`PostStore`] trait:
//!
//! - [`InMemoryPostStore`] -- `Vec`-based store that lives as long as the process
//!
//! # Design Rules
//!
//! 1. Listing returns posts in insertion order.
//! 2. `id` and `publish_date` are assigned on create and never rewritten.
//! 3. Updating or deleting an unknown id never modifies the store.
//! 4. A poisoned lock is reported as an error, not a panic.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryPostStore;
pub use traits::PostStore;
