pub mod config;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod utils;

pub mod app;

pub use app::{create_app, create_app_with_repository};
