use std::str::FromStr;
use std::time::Duration;

use sqlx::Connection;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use thiserror::Error;

/// Upper bound for opening a connection to the database.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Unable to parse DB URL: {0}")]
    InvalidUrl(#[source] sqlx::Error),
    #[error("Unable to connect to database: {0}")]
    Connect(#[source] sqlx::Error),
    #[error("Unable to ping the database: {0}")]
    Ping(#[source] sqlx::Error),
}

/// Establish a connection pool for `database_url` and verify it answers a ping.
///
/// Nothing here retries: the caller is expected to treat an error as fatal and
/// exit before accepting traffic.
pub async fn establish_connection(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, DatabaseError> {
    let options = PgConnectOptions::from_str(database_url).map_err(DatabaseError::InvalidUrl)?;

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(CONNECT_TIMEOUT)
        .connect_with(options)
        .await
        .map_err(DatabaseError::Connect)?;

    ping(&pool).await.map_err(DatabaseError::Ping)?;

    tracing::info!("Database connection established");
    Ok(pool)
}

/// Round-trip to the database on a freshly checked out connection.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut conn = pool.acquire().await?;
    conn.ping().await
}
