//! Response helpers.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct MessageBody {
    pub message: String,
}

pub fn message(status: StatusCode, text: impl Into<String>) -> (StatusCode, Json<MessageBody>) {
    (status, Json(MessageBody { message: text.into() }))
}

pub fn created(text: impl Into<String>) -> (StatusCode, Json<MessageBody>) {
    message(StatusCode::CREATED, text)
}

pub fn ok(text: impl Into<String>) -> (StatusCode, Json<MessageBody>) {
    message(StatusCode::OK, text)
}

/// Plain JSON array, no envelope.
pub fn list<T: Serialize>(data: Vec<T>) -> (StatusCode, Json<Vec<T>>) {
    (StatusCode::OK, Json(data))
}
