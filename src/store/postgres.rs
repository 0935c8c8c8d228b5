//! PostgreSQL-backed curtain store.

use super::CurtainStore;
use crate::error::AppError;
use crate::model::{Curtain, CurtainId};
use crate::sql;
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone, Debug)]
pub struct PgCurtainStore {
    pool: PgPool,
    schema: String,
}

impl PgCurtainStore {
    pub fn new(pool: PgPool, schema: impl Into<String>) -> Self {
        PgCurtainStore {
            pool,
            schema: schema.into(),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn map_insert_error(e: sqlx::Error, id: CurtainId) -> AppError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            AppError::Conflict(format!("curtain {} already exists", id))
        }
        _ => AppError::Db(e),
    }
}

#[async_trait]
impl CurtainStore for PgCurtainStore {
    async fn list(&self) -> Result<Vec<Curtain>, AppError> {
        let q = sql::select_all(&self.schema);
        tracing::debug!(sql = %q, "query");
        let rows = sqlx::query_as::<_, Curtain>(&q).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn get(&self, id: CurtainId) -> Result<Option<Curtain>, AppError> {
        let q = sql::select_by_id(&self.schema);
        tracing::debug!(sql = %q, id, "query");
        let row = sqlx::query_as::<_, Curtain>(&q)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn exists(&self, id: CurtainId) -> Result<bool, AppError> {
        let q = sql::exists_by_id(&self.schema);
        tracing::debug!(sql = %q, id, "query");
        let found: (bool,) = sqlx::query_as(&q).bind(id).fetch_one(&self.pool).await?;
        Ok(found.0)
    }

    async fn insert(&self, curtain: &Curtain) -> Result<Curtain, AppError> {
        let q = sql::insert(&self.schema);
        tracing::debug!(sql = %q, id = curtain.id, "query");
        sqlx::query_as::<_, Curtain>(&q)
            .bind(curtain.id)
            .bind(&curtain.name)
            .bind(&curtain.description)
            .bind(curtain.price)
            .bind(curtain.stock_quantity)
            .bind(&curtain.material)
            .bind(&curtain.color)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_insert_error(e, curtain.id))
    }

    async fn replace(&self, curtain: &Curtain) -> Result<(), AppError> {
        let q = sql::update(&self.schema);
        tracing::debug!(sql = %q, id = curtain.id, "query");
        let result = sqlx::query(&q)
            .bind(curtain.id)
            .bind(&curtain.name)
            .bind(&curtain.description)
            .bind(curtain.price)
            .bind(curtain.stock_quantity)
            .bind(&curtain.material)
            .bind(&curtain.color)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::ConcurrencyConflict(format!(
                "update of curtain {} affected no rows",
                curtain.id
            )));
        }
        Ok(())
    }

    async fn remove(&self, id: CurtainId) -> Result<(), AppError> {
        let q = sql::delete(&self.schema);
        tracing::debug!(sql = %q, id, "query");
        let result = sqlx::query(&q).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(AppError::ConcurrencyConflict(format!(
                "delete of curtain {} affected no rows",
                id
            )));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
