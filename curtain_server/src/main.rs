//! Curtain inventory server: reads settings from the environment (and `.env`),
//! ensures the database and curtains table exist, and serves the API.
//!
//! Run from repo root: `cargo run -p curtain-server`

use curtain_store::{app, ensure_curtain_table, ensure_database_exists, AppState, PgCurtainStore, Settings};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("curtain_store=info,curtain_server=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    ensure_database_exists(&settings.database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(&settings.database_url)
        .await?;

    ensure_curtain_table(&pool, &settings.schema).await?;
    let store = PgCurtainStore::new(pool, settings.schema.clone());
    let state = AppState::new(Arc::new(store));

    let router = app(state, settings.body_limit);
    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
