//! Post CRUD handlers.
//!
//! Each handler makes exactly one call to the posts table and answers with
//! one envelope. Storage failures are passed through untranslated by
//! [`ApiError`].

use axum::{
    body::Bytes,
    extract::{Path, State},
};

use posts_core::envelope::Envelope;
use posts_core::post::{
    sort_newest_first, ErrorMessage, PostPayload, StatusMessage, POST_DELETED, POST_NOT_FOUND,
};
use posts_core::storage::ScanLimit;

use crate::{
    config::GetPostMode,
    handlers::{ApiError, EnvelopeResponse},
    state::AppState,
};

type HandlerResult = Result<EnvelopeResponse, ApiError>;

/// Parses a request body as a post payload. No field is validated.
///
/// Any JSON is accepted; only text that is not JSON at all is rejected.
fn parse_payload(body: &Bytes) -> Result<PostPayload, ApiError> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    Ok(PostPayload::from(value))
}

fn not_found() -> EnvelopeResponse {
    Envelope::new(404, &ErrorMessage::new(POST_NOT_FOUND)).into()
}

// ============================================================================
// Create Post
// ============================================================================

/// Create a new post (POST /post).
pub async fn create_post(State(state): State<AppState>, body: Bytes) -> HandlerResult {
    let payload = parse_payload(&body)?;
    tracing::debug!(payload = ?payload, "Received create post request");

    let post = payload.into_post();
    state.post_repo.put_post(&post).await?;

    tracing::info!(post_id = %post.id, "Created new post");

    Ok(Envelope::new(201, &post).into())
}

// ============================================================================
// List Posts
// ============================================================================

/// List every post, newest first (GET /post).
pub async fn list_posts(State(state): State<AppState>) -> HandlerResult {
    let mut posts = state.post_repo.scan_posts(None).await?;
    sort_newest_first(&mut posts);

    tracing::debug!(count = posts.len(), "Listed posts");

    Ok(Envelope::new(200, &posts).into())
}

/// List up to `number` posts (GET /posts/{number}).
///
/// The table applies the limit before sorting, so this is some `number`
/// posts ordered newest first among themselves, not the newest `number`.
pub async fn list_posts_limited(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> HandlerResult {
    let limit: ScanLimit = number.parse()?;

    let mut posts = state.post_repo.scan_posts(Some(limit)).await?;
    sort_newest_first(&mut posts);

    tracing::debug!(limit = %limit, count = posts.len(), "Listed limited posts");

    Ok(Envelope::new(200, &posts).into())
}

// ============================================================================
// Get Post
// ============================================================================

/// Get a post by ID (GET /post/{id}).
pub async fn get_post(State(state): State<AppState>, Path(id): Path<String>) -> HandlerResult {
    tracing::debug!(post_id = %id, mode = %state.get_post_mode, "Received get post request");

    match state.get_post_mode {
        GetPostMode::Lookup => match state.post_repo.get_post(&id).await? {
            Some(post) => Ok(Envelope::new(200, &post).into()),
            None => Ok(not_found()),
        },
        GetPostMode::Scan => {
            let mut posts = state.post_repo.scan_posts(None).await?;
            if posts.is_empty() {
                return Ok(not_found());
            }
            sort_newest_first(&mut posts);
            Ok(Envelope::new(200, &posts).into())
        }
    }
}

// ============================================================================
// Update Post
// ============================================================================

/// Update the title and body of an existing post (PUT /post/{id}).
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> HandlerResult {
    let payload = parse_payload(&body)?;
    tracing::debug!(post_id = %id, payload = ?payload, "Received update post request");

    let post = state.post_repo.update_post(&id, &payload).await?;

    tracing::info!(post_id = %id, "Updated post");

    Ok(Envelope::new(200, &post).into())
}

// ============================================================================
// Delete Post
// ============================================================================

/// Delete a post by ID (DELETE /post/{id}). Unknown ids succeed too.
pub async fn delete_post(State(state): State<AppState>, Path(id): Path<String>) -> HandlerResult {
    tracing::debug!(post_id = %id, "Received delete post request");

    state.post_repo.delete_post(&id).await?;

    tracing::info!(post_id = %id, "Deleted post");

    Ok(Envelope::new(200, &StatusMessage::new(POST_DELETED)).into())
}
