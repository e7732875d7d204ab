use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::Recipe;

/// Read access to the `recipes` table.
///
/// Handlers only see this trait, so the pool stays an explicit constructor
/// argument and tests can swap in an in-memory implementation.
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// All recipes, newest `created_at` first.
    async fn list_recipes(&self) -> Result<Vec<Recipe>, sqlx::Error>;

    async fn ping(&self) -> Result<(), sqlx::Error>;
}

#[derive(Clone, Debug)]
pub struct PgRecipeRepository {
    pool: PgPool,
}

impl PgRecipeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecipeRepository for PgRecipeRepository {
    async fn list_recipes(&self) -> Result<Vec<Recipe>, sqlx::Error> {
        // ids may be uuid or text columns, the record always carries strings;
        // a plain timestamp column is read in the session zone, UTC under sqlx
        sqlx::query_as::<_, Recipe>(
            r#"
            SELECT id::text AS id,
                   user_id::text AS user_id,
                   title,
                   description,
                   image_url,
                   created_at::timestamptz AS created_at
            FROM recipes
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::config::database::ping(&self.pool).await
    }
}
