//! Entity records and the capability every stored record implements.

mod kind;
mod records;

pub use kind::EntityKind;
pub use records::{Course, Student, Teacher};

use crate::store::memory::Tables;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::Postgres;
use std::fmt::Debug;

/// Parameterized PostgreSQL statement before execution.
pub type PgQuery<'q> = sqlx::query::Query<'q, Postgres, PgArguments>;

/// A record with a store-assigned integer identity.
///
/// Implemented once per entity; the store's operations are generic over it,
/// so each handler and backend is written once for all three kinds.
pub trait Entity:
    Clone + Debug + Serialize + DeserializeOwned + Send + Sync + Unpin + 'static + for<'r> sqlx::FromRow<'r, PgRow>
{
    const KIND: EntityKind;
    const TABLE: &'static str;
    /// Data columns in bind order. Excludes `id`.
    const COLUMNS: &'static [&'static str];
    /// The single data column kept by the summary projection.
    const LABEL_COLUMN: &'static str;

    fn id(&self) -> i64;

    fn set_id(&mut self, id: i64);

    /// Bind every data column, in `COLUMNS` order.
    fn bind_columns<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q>;

    /// This kind's collection inside the in-memory tables.
    fn rows_mut(tables: &mut Tables) -> &mut Vec<Self>;
}
