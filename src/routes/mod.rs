//! Router assembly. Every route is served both at the root and under `/api`.

mod common;
mod entity;

pub use common::common_routes;
pub use entity::entity_routes;

use crate::error::AppError;
use crate::state::AppState;
use axum::{
    http::{header, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    Router,
};
use tower_http::limit::RequestBodyLimitLayer;

pub const API_PREFIX: &str = "/api";

/// Largest accepted request body.
pub const BODY_LIMIT: usize = 64 * 1024;

pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(common_routes(state.clone()))
        .merge(entity_routes(state));
    Router::new()
        .merge(api.clone())
        .nest(API_PREFIX, api)
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT))
        .layer(middleware::map_response(json_payload_too_large))
}

/// The body limit layer answers a declared oversized `Content-Length` itself,
/// in plain text. Give it the same `{"error"}` shape as every other failure.
async fn json_payload_too_large(response: Response) -> Response {
    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"));
    if response.status() == StatusCode::PAYLOAD_TOO_LARGE && !is_json {
        return AppError::PayloadTooLarge.into_response();
    }
    response
}
