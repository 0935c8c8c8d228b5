//! Persistence seam for curtains plus PostgreSQL bootstrap helpers.

mod memory;
mod postgres;

pub use memory::MemoryCurtainStore;
pub use postgres::PgCurtainStore;

use crate::error::{AppError, ConfigError};
use crate::model::{Curtain, CurtainId};
use crate::sql::{create_table, quoted};
use async_trait::async_trait;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

/// Keyed storage for curtains. Each call commits on its own.
///
/// `replace` and `remove` report `AppError::ConcurrencyConflict` when no row
/// was affected; callers decide whether that means the record is gone.
#[async_trait]
pub trait CurtainStore: Send + Sync {
    /// All records ordered by id.
    async fn list(&self) -> Result<Vec<Curtain>, AppError>;

    async fn get(&self, id: CurtainId) -> Result<Option<Curtain>, AppError>;

    async fn exists(&self, id: CurtainId) -> Result<bool, AppError>;

    /// Insert one record. A duplicate id is `AppError::Conflict`.
    async fn insert(&self, curtain: &Curtain) -> Result<Curtain, AppError>;

    /// Replace every field of the row whose id matches `curtain.id`.
    async fn replace(&self, curtain: &Curtain) -> Result<(), AppError>;

    async fn remove(&self, id: CurtainId) -> Result<(), AppError>;

    /// Readiness probe.
    async fn ping(&self) -> Result<(), AppError>;
}

/// Create `schema` and the curtains table if they do not exist yet.
pub async fn ensure_curtain_table(pool: &PgPool, schema: &str) -> Result<(), AppError> {
    sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", quoted(schema)))
        .execute(pool)
        .await?;
    let ddl = create_table(schema);
    tracing::debug!(sql = %ddl, "query");
    sqlx::query(&ddl).execute(pool).await?;
    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url).map_err(|e| ConfigError::Invalid {
        var: "DATABASE_URL",
        reason: e.to_string(),
    })?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quoted(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), ConfigError> {
    let path_start = url.rfind('/').ok_or_else(|| ConfigError::Invalid {
        var: "DATABASE_URL",
        reason: "no path".into(),
    })? + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = format!("{}postgres", base);
    Ok((admin_url, db_name.to_string()))
}
