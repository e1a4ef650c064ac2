//! HTTP server for the blog posts API.
//!
//! Exposes a post store over JSON REST routes under `/blog-posts`, with
//! field-presence validation on request bodies and plain-text errors.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod validation;

pub use config::{LogFormat, ServerConfig, DEFAULT_PORT, PORT_ENV};
pub use error::{ServerError, ServerResult};
pub use handler::AppState;
pub use router::{build_router, BLOG_POSTS_PATH};
pub use server::{seed_sample_post, BlogServer};
pub use validation::{require_fields, ValidationError, CREATE_FIELDS, UPDATE_FIELDS};
