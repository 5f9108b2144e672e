//! SQL statement builder for the PostgreSQL store.

mod builder;
pub use builder::*;
