#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use chrono::{DateTime, Utc};
use recipe_blog_api::models::Recipe;
use recipe_blog_api::repositories::RecipeRepository;

pub fn recipe(id: &str, title: &str, created_at: &str) -> Recipe {
    Recipe {
        id: id.to_string(),
        user_id: "u1".to_string(),
        title: title.to_string(),
        description: format!("{} description", title),
        image_url: format!("https://img.example.com/{}.png", id),
        created_at: created_at.parse::<DateTime<Utc>>().expect("valid timestamp"),
    }
}

/// Behaves like the `recipes` table: hands back rows newest first.
#[derive(Default)]
pub struct InMemoryRepository {
    recipes: Vec<Recipe>,
    pub calls: AtomicUsize,
}

impl InMemoryRepository {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl RecipeRepository for InMemoryRepository {
    async fn list_recipes(&self) -> Result<Vec<Recipe>, sqlx::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut recipes = self.recipes.clone();
        recipes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(recipes)
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}

/// Every call fails the way an exhausted pool does.
pub struct FailingRepository;

#[async_trait]
impl RecipeRepository for FailingRepository {
    async fn list_recipes(&self) -> Result<Vec<Recipe>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }
}

/// Takes `delay` to answer and records whether it ever got to finish.
pub struct SlowRepository {
    pub delay: Duration,
    pub finished: Arc<AtomicBool>,
}

#[async_trait]
impl RecipeRepository for SlowRepository {
    async fn list_recipes(&self) -> Result<Vec<Recipe>, sqlx::Error> {
        tokio::time::sleep(self.delay).await;
        self.finished.store(true, Ordering::SeqCst);
        Ok(Vec::new())
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_string(resp: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}
