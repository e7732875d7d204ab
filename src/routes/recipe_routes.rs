use axum::{Router, routing::get};

use crate::handlers::recipe_handler::index;

pub fn recipe_routes() -> Router {
    Router::new().route("/api/recipes", get(index))
}
