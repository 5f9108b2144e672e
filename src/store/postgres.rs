//! PostgreSQL store: one table per entity kind, one statement per operation.

use crate::config::ReadProjection;
use crate::entity::Entity;
use crate::error::AppError;
use crate::sql;
use sqlx::{PgPool, Row};

#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
    projection: ReadProjection,
}

impl PgStore {
    pub fn new(pool: PgPool, projection: ReadProjection) -> Self {
        PgStore { pool, projection }
    }

    /// The id comes from the table's sequence.
    pub async fn create<T: Entity>(&self, mut entity: T) -> Result<T, AppError> {
        let sql = sql::insert::<T>();
        tracing::debug!(sql = %sql, "query");
        let row = entity.bind_columns(sqlx::query(&sql)).fetch_one(&self.pool).await?;
        let id: i64 = row.try_get("id")?;
        entity.set_id(id);
        Ok(entity)
    }

    pub async fn list<T: Entity>(&self) -> Result<Vec<T>, AppError> {
        let sql = sql::select_all::<T>(self.projection);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, T>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    pub async fn update<T: Entity>(&self, id: i64, mut entity: T) -> Result<T, AppError> {
        entity.set_id(id);
        let sql = sql::update::<T>();
        tracing::debug!(sql = %sql, id, "query");
        let result = entity.bind_columns(sqlx::query(&sql)).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound { kind: T::KIND, id });
        }
        Ok(entity)
    }

    pub async fn delete<T: Entity>(&self, id: i64) -> Result<(), AppError> {
        let sql = sql::delete::<T>();
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound { kind: T::KIND, id });
        }
        Ok(())
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
