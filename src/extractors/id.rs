//! Entity id from the `?id=` query parameter or a `{"id": n}` body.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

/// Body of a delete request.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct IdEnvelope {
    pub id: i64,
}

pub fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.trim().parse().map_err(|_| AppError::invalid_id())
}

/// Parsed `?id=`, `None` when the parameter is absent. A query string that
/// does not decode (such as a repeated `id`) is an invalid id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IdParam(pub Option<i64>);

#[async_trait]
impl<S> FromRequestParts<S> for IdParam
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<IdQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::debug!(error = %e, "rejecting id query");
                AppError::invalid_id()
            })?;
        query.id.as_deref().map(parse_id).transpose().map(IdParam)
    }
}
