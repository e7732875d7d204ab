use std::sync::Arc;

use axum::{
    Extension,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::app::RequestDeadline;
use crate::repositories::RecipeRepository;

pub const CACHE_CONTROL: &str = "public, max-age=60";
pub const LOAD_ERROR: &str = "Could not load recipes";
pub const ENCODE_ERROR: &str = "Failed to encode recipes";

/// `GET /api/recipes`: every recipe as a bare JSON array, newest first.
///
/// The body is encoded into a buffer before anything is sent, so an encoding
/// failure can still be answered with a 500. A query that outlives the
/// deadline is dropped, which cancels it, and answered like any other failure.
pub async fn index(
    Extension(repo): Extension<Arc<dyn RecipeRepository>>,
    Extension(RequestDeadline(deadline)): Extension<RequestDeadline>,
) -> Response {
    let recipes = match tokio::time::timeout(deadline, repo.list_recipes()).await {
        Ok(Ok(recipes)) => recipes,
        Ok(Err(e)) => {
            tracing::error!("failed to load recipes: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, LOAD_ERROR).into_response();
        }
        Err(_) => {
            tracing::error!("loading recipes exceeded the {:?} deadline", deadline);
            return (StatusCode::INTERNAL_SERVER_ERROR, LOAD_ERROR).into_response();
        }
    };

    match serde_json::to_vec(&recipes) {
        Ok(body) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "application/json"),
                (header::CACHE_CONTROL, CACHE_CONTROL),
            ],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("failed to encode recipes: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, ENCODE_ERROR).into_response()
        }
    }
}
