//! Request bodies that reject with the service's JSON errors.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// Like `axum::Json`, but does not require a JSON content type and maps
/// every decode failure to [`AppError::invalid_json`]. Oversized bodies are
/// [`AppError::PayloadTooLarge`].
#[derive(Clone, Debug)]
pub struct JsonBody<T>(pub T);

impl<T: DeserializeOwned> JsonBody<T> {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AppError> {
        serde_json::from_slice(bytes).map(JsonBody).map_err(|e| {
            tracing::debug!(error = %e, "rejecting request body");
            AppError::invalid_json()
        })
    }
}

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let BodyBytes(bytes) = BodyBytes::from_request(req, state).await?;
        Self::from_bytes(&bytes)
    }
}

/// Raw body, for handlers that decode only when they need to.
#[derive(Clone, Debug)]
pub struct BodyBytes(pub Bytes);

#[async_trait]
impl<S> FromRequest<S> for BodyBytes
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Bytes::from_request(req, state)
            .await
            .map(BodyBytes)
            .map_err(AppError::from_body_rejection)
    }
}
