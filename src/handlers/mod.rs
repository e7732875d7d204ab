pub mod health_handler;
pub mod recipe_handler;
