use std::sync::Arc;

use axum::routing::{get, put};
use axum::Router;
use tower_http::trace::TraceLayer;

use blog_store::PostStore;

use crate::handler::{self, AppState};

/// Path prefix all post routes are mounted under.
pub const BLOG_POSTS_PATH: &str = "/blog-posts";

/// Build the axum router over the given store.
pub fn build_router(store: Arc<dyn PostStore>) -> Router {
    let collection = get(handler::list_posts).post(handler::create_post);
    let item = put(handler::update_post).delete(handler::delete_post);

    Router::new()
        .route(BLOG_POSTS_PATH, collection.clone())
        .route(&format!("{BLOG_POSTS_PATH}/"), collection)
        .route(&format!("{BLOG_POSTS_PATH}/:id"), item)
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(store))
}
