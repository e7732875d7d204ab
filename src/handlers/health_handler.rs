use std::sync::Arc;

use axum::{Extension, Json, http::StatusCode};
use serde_json::json;

use crate::repositories::RecipeRepository;
use crate::utils::response::{ApiResponse, EnvelopeResult};

pub async fn health(Extension(repo): Extension<Arc<dyn RecipeRepository>>) -> EnvelopeResult {
    match repo.ping().await {
        Ok(()) => {
            let response = ApiResponse::ok("OK", json!({ "db": "ok" }));
            Ok((StatusCode::OK, Json(response)))
        }
        Err(e) => {
            // driver detail stays in the log
            tracing::error!("health check failed: {}", e);
            let response = ApiResponse::failed("Unhealthy", json!({ "db": "error" }));
            Err((StatusCode::INTERNAL_SERVER_ERROR, Json(response)))
        }
    }
}

pub async fn root() -> &'static str {
    "Recipe Blog API is up!"
}
