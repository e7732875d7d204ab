pub mod recipe_routes;
pub mod status_routes;
