use tracing_subscriber::EnvFilter;

use recipe_blog_api::config::{self, AppConfig};
use recipe_blog_api::create_app;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize tracing for structured logs, RUST_LOG overrides the default level
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Load environment variables from .env file (if present)
    config::load_dotenv();

    // Everything below fails fast: no listener is bound until the pool answers a ping
    let app_config = AppConfig::from_env().inspect_err(|e| tracing::error!("{}", e))?;
    let db_pool = config::database::establish_connection(
        &app_config.database_url,
        app_config.max_connections,
    )
    .await
    .inspect_err(|e| tracing::error!("{}", e))?;

    let app = create_app(db_pool, app_config.request_timeout);

    let listener = tokio::net::TcpListener::bind(app_config.addr).await?;
    tracing::info!("Server started at http://{}", listener.local_addr()?);

    let server = axum::serve(listener, app.into_make_service());

    let shutdown_signal = async {
        tokio::signal::ctrl_c().await.ok();
        tracing::info!("Shutdown signal received");
    };

    tokio::select! {
        res = server => {
            res.map_err(|e| {
                Box::<dyn std::error::Error + Send + Sync>::from(format!("Server failed: {}", e))
            })?;
        }
        _ = shutdown_signal => {
            tracing::info!("Shutdown requested; exiting");
        }
    };

    Ok(())
}
