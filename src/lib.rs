//! Campus API: CRUD backend for teachers, courses and students.

pub mod config;
pub mod entity;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod seed;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{AppConfig, ReadProjection, StoreBackend};
pub use entity::{Course, Entity, EntityKind, Student, Teacher};
pub use error::{AppError, ConfigError};
pub use routes::{app, common_routes, entity_routes};
pub use seed::seed_demo_data;
pub use state::AppState;
pub use store::{MemoryStore, PgStore, Store};
