use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::Value;

use blog_store::{PostStore, StoreError};
use blog_types::{BlogPost, PostDraft, PostId, PostUpdate};

use crate::error::ServerResult;
use crate::validation::{
    require_fields, require_matching_id, string_field, CREATE_FIELDS, UPDATE_FIELDS,
};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PostStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }
}

/// `GET /blog-posts`: every post, oldest first.
pub async fn list_posts(State(state): State<AppState>) -> ServerResult<Json<Vec<BlogPost>>> {
    Ok(Json(state.store.get()?))
}

/// `POST /blog-posts`: create a post from `{title, author, content}`.
pub async fn create_post(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ServerResult<(StatusCode, Json<BlogPost>)> {
    require_fields(&body, CREATE_FIELDS)?;
    let draft = PostDraft {
        title: string_field(&body, "title")?,
        content: string_field(&body, "content")?,
        author: string_field(&body, "author")?,
    };
    let post = state.store.create(draft)?;
    tracing::info!(id = %post.id, "created blog post");
    Ok((StatusCode::CREATED, Json(post)))
}

/// `PUT /blog-posts/:id`: replace title, author, and content.
///
/// Always answers 204 once the body is valid, including for unknown ids.
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> ServerResult<StatusCode> {
    require_fields(&body, UPDATE_FIELDS)?;
    require_matching_id(&id, &body)?;
    let update = PostUpdate {
        id: PostId::from(id),
        title: string_field(&body, "title")?,
        content: string_field(&body, "content")?,
        author: string_field(&body, "author")?,
    };

    tracing::info!("Updating blog post `{}`", update.id);
    match state.store.update(update) {
        Ok(post) => tracing::debug!(?post, "updated blog post"),
        Err(StoreError::NotFound(id)) => tracing::warn!("no blog post `{id}` to update"),
        Err(e) => return Err(e.into()),
    }
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /blog-posts/:id`: remove a post if it exists.
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ServerResult<StatusCode> {
    let id = PostId::from(id);
    if state.store.delete(&id)? {
        tracing::info!("Deleted blog post `{id}`");
    } else {
        tracing::debug!("no blog post `{id}` to delete");
    }
    Ok(StatusCode::NO_CONTENT)
}
