use std::sync::Arc;
use std::time::Duration;

use axum::http::Method;
use axum::http::header::HeaderValue;
use axum::{Extension, Router};
use sqlx::PgPool;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::repositories::{PgRecipeRepository, RecipeRepository};
use crate::routes::recipe_routes::recipe_routes;
use crate::routes::status_routes::status_routes;

const CORS_METHODS: [Method; 3] = [Method::GET, Method::HEAD, Method::OPTIONS];

/// Upper bound on database work done for a single request.
#[derive(Clone, Copy, Debug)]
pub struct RequestDeadline(pub Duration);

pub fn build_router() -> Router {
    let mut app = Router::new()
        .merge(status_routes())
        .merge(recipe_routes());

    if let Some(cors) = cors_layer_from_env() {
        app = app.layer(cors);
    }

    app.layer(TraceLayer::new_for_http())
}

/// CORS is off unless `ENABLE_CORS` is truthy or `CORS_ALLOWED_ORIGINS` is set.
/// `CORS_ALLOWED_ORIGINS` is either `*` or a comma separated list of origins.
fn cors_layer_from_env() -> Option<CorsLayer> {
    let cors_allowed = std::env::var("CORS_ALLOWED_ORIGINS").ok();
    let enable_cors = std::env::var("ENABLE_CORS")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);

    if !enable_cors && cors_allowed.is_none() {
        return None;
    }

    let layer = CorsLayer::new()
        .allow_methods(CORS_METHODS)
        .allow_headers(Any);

    let layer = match cors_allowed {
        Some(list) if list.trim() != "*" => {
            let origins = list
                .split(',')
                .filter_map(|s| HeaderValue::from_str(s.trim()).ok())
                .collect::<Vec<HeaderValue>>();
            layer.allow_origin(AllowOrigin::list(origins))
        }
        _ => layer.allow_origin(Any),
    };

    Some(layer)
}

/// Router backed by any repository implementation.
pub fn create_app_with_repository(
    repo: Arc<dyn RecipeRepository>,
    request_timeout: Duration,
) -> Router {
    build_router()
        .layer(Extension(RequestDeadline(request_timeout)))
        .layer(Extension(repo))
}

pub fn create_app(pool: PgPool, request_timeout: Duration) -> Router {
    let repo: Arc<dyn RecipeRepository> = Arc::new(PgRecipeRepository::new(pool));
    create_app_with_repository(repo, request_timeout)
}
