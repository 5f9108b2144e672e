//! Entity CRUD handlers, written once and instantiated per entity type.

use crate::entity::Entity;
use crate::error::AppError;
use crate::extractors::{BodyBytes, IdEnvelope, IdParam, JsonBody};
use crate::response;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

pub async fn list<T: Entity>(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state.store.list::<T>().await?;
    tracing::debug!(kind = %T::KIND, count = rows.len(), "list");
    Ok(response::list(rows))
}

/// Any id in the body is ignored; the store assigns one.
pub async fn create<T: Entity>(
    State(state): State<AppState>,
    JsonBody(entity): JsonBody<T>,
) -> Result<impl IntoResponse, AppError> {
    state.store.create(entity).await?;
    Ok(response::created(format!("{} created successfully", T::KIND)))
}

/// Target id is `?id=` when present, otherwise the body's `id`.
pub async fn update<T: Entity>(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    JsonBody(entity): JsonBody<T>,
) -> Result<impl IntoResponse, AppError> {
    let id = id.unwrap_or_else(|| entity.id());
    state.store.update(id, entity).await?;
    Ok(response::ok(format!("{} updated successfully", T::KIND)))
}

/// Target id is `?id=` when present, otherwise `{"id": n}` from the body.
pub async fn delete<T: Entity>(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    BodyBytes(body): BodyBytes,
) -> Result<impl IntoResponse, AppError> {
    let id = match id {
        Some(id) => id,
        None => JsonBody::<IdEnvelope>::from_bytes(&body)?.0.id,
    };
    state.store.delete::<T>(id).await?;
    Ok(response::ok(format!("{} deleted successfully", T::KIND)))
}
