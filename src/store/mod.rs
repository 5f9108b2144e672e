//! Entity store: create, list, update and delete, generic over the entity type.

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use crate::config::{AppConfig, StoreBackend};
use crate::entity::Entity;
use crate::error::AppError;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub enum Store {
    Memory(Arc<MemoryStore>),
    Postgres(PgStore),
}

impl Store {
    pub fn memory(id_start: i64) -> Self {
        Store::Memory(Arc::new(MemoryStore::new(id_start)))
    }

    /// Build the backend named by the config. For postgres this opens the pool.
    pub async fn connect(config: &AppConfig) -> Result<Self, AppError> {
        match &config.backend {
            StoreBackend::Memory => Ok(Store::memory(config.id_start)),
            StoreBackend::Postgres { database_url } => {
                let pool = PgPoolOptions::new()
                    .max_connections(config.max_connections)
                    .connect(database_url)
                    .await?;
                Ok(Store::Postgres(PgStore::new(pool, config.read_projection)))
            }
        }
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            Store::Memory(_) => "memory",
            Store::Postgres(_) => "postgres",
        }
    }

    pub async fn create<T: Entity>(&self, entity: T) -> Result<T, AppError> {
        let created = match self {
            Store::Memory(m) => m.create(entity)?,
            Store::Postgres(pg) => pg.create(entity).await?,
        };
        tracing::info!(kind = %T::KIND, id = created.id(), "created");
        Ok(created)
    }

    pub async fn list<T: Entity>(&self) -> Result<Vec<T>, AppError> {
        match self {
            Store::Memory(m) => m.list(),
            Store::Postgres(pg) => pg.list().await,
        }
    }

    pub async fn update<T: Entity>(&self, id: i64, entity: T) -> Result<T, AppError> {
        let updated = match self {
            Store::Memory(m) => m.update(id, entity),
            Store::Postgres(pg) => pg.update(id, entity).await,
        };
        if let Err(AppError::NotFound { .. }) = &updated {
            tracing::info!(kind = %T::KIND, id, "update target not found");
        }
        updated
    }

    pub async fn delete<T: Entity>(&self, id: i64) -> Result<(), AppError> {
        match self {
            Store::Memory(m) => m.delete::<T>(id)?,
            Store::Postgres(pg) => pg.delete::<T>(id).await?,
        }
        tracing::info!(kind = %T::KIND, id, "deleted");
        Ok(())
    }

    /// Readiness probe. Memory is always ready.
    pub async fn ping(&self) -> Result<(), AppError> {
        match self {
            Store::Memory(_) => Ok(()),
            Store::Postgres(pg) => pg.ping().await,
        }
    }
}
