//! Builds parameterized INSERT, SELECT, UPDATE, DELETE for an entity table.

use crate::config::ReadProjection;
use crate::entity::Entity;

/// Quote identifier for PostgreSQL (safe: names come from entity definitions).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// `INSERT INTO t (c1, c2) VALUES ($1, $2) RETURNING id`
pub fn insert<T: Entity>() -> String {
    let cols: Vec<String> = T::COLUMNS.iter().map(|c| quoted(c)).collect();
    let placeholders: Vec<String> = (1..=T::COLUMNS.len()).map(|i| format!("${}", i)).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING \"id\"",
        quoted(T::TABLE),
        cols.join(", "),
        placeholders.join(", ")
    )
}

/// SELECT every row ordered by id. Summary keeps only id and the label column.
pub fn select_all<T: Entity>(projection: ReadProjection) -> String {
    let mut cols = vec![quoted("id")];
    match projection {
        ReadProjection::Full => cols.extend(T::COLUMNS.iter().map(|c| quoted(c))),
        ReadProjection::Summary => cols.push(quoted(T::LABEL_COLUMN)),
    }
    format!("SELECT {} FROM {} ORDER BY \"id\"", cols.join(", "), quoted(T::TABLE))
}

/// Data columns bind as $1..$n, the id as $n+1.
pub fn update<T: Entity>() -> String {
    let sets: Vec<String> = T::COLUMNS
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{} = ${}", quoted(c), i + 1))
        .collect();
    format!(
        "UPDATE {} SET {} WHERE \"id\" = ${}",
        quoted(T::TABLE),
        sets.join(", "),
        T::COLUMNS.len() + 1
    )
}

pub fn delete<T: Entity>() -> String {
    format!("DELETE FROM {} WHERE \"id\" = $1", quoted(T::TABLE))
}
