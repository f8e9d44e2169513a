// src/main.rs

use std::sync::Arc;
use std::time::Duration;

use dotenvy::dotenv;
use prep_rank::config::Config;
use prep_rank::db::{MemoryRepository, PgRepository, Repository};
use prep_rank::error::AppError;
use prep_rank::routes;
use prep_rank::state::AppState;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const CONNECT_RETRIES: u32 = 5;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file (if present)
    dotenv().ok();

    let config = Config::from_env()?;

    let file_appender = tracing_appender::rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    let repo: Arc<dyn Repository> = match &config.database_url {
        Some(url) => {
            let pool = connect_with_retry(url).await?;

            tracing::info!("Running migrations...");
            sqlx::migrate!("./migrations").run(&pool).await.map_err(AppError::from)?;
            tracing::info!("Migrations applied successfully.");

            Arc::new(PgRepository::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, keeping data in memory");
            Arc::new(MemoryRepository::new())
        }
    };

    let state = AppState {
        repo,
        config: config.clone(),
    };

    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn connect_with_retry(database_url: &str) -> Result<PgPool, AppError> {
    let mut retry_count = 0;
    loop {
        match PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(database_url)
            .await
        {
            Ok(pool) => {
                tracing::info!("Database connected...");
                return Ok(pool);
            }
            Err(e) => {
                retry_count += 1;
                if retry_count > CONNECT_RETRIES {
                    return Err(AppError::InternalServerError(format!(
                        "Failed to connect to database after {} retries: {}",
                        CONNECT_RETRIES, e
                    )));
                }
                tracing::warn!(
                    "Database not ready, retrying in 2s... (Attempt {})",
                    retry_count
                );
                tokio::time::sleep(Duration::from_secs(2)).await;
            }
        }
    }
}
