//! In-memory store: one collection per entity kind behind a single mutex.

use crate::entity::{Course, Entity, EntityKind, Student, Teacher};
use crate::error::AppError;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Collections and identifier counters, always accessed under the store lock.
#[derive(Debug, Default)]
pub struct Tables {
    pub(crate) teachers: Vec<Teacher>,
    pub(crate) courses: Vec<Course>,
    pub(crate) students: Vec<Student>,
    next_id: HashMap<EntityKind, i64>,
}

#[derive(Debug)]
pub struct MemoryStore {
    id_start: i64,
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new(id_start: i64) -> Self {
        MemoryStore {
            id_start,
            tables: Mutex::new(Tables::default()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, AppError> {
        self.tables
            .lock()
            .map_err(|_| AppError::Internal("store lock poisoned".into()))
    }

    /// Ids are never reused: the counter only moves forward, deletes leave it alone.
    /// An exhausted counter fails the create and leaves the store untouched.
    pub fn create<T: Entity>(&self, mut entity: T) -> Result<T, AppError> {
        let mut tables = self.lock()?;
        let id = tables.next_id.get(&T::KIND).copied().unwrap_or(self.id_start);
        let next = id
            .checked_add(1)
            .ok_or_else(|| AppError::Internal(format!("{} id space exhausted", T::KIND)))?;
        tables.next_id.insert(T::KIND, next);
        entity.set_id(id);
        T::rows_mut(&mut tables).push(entity.clone());
        Ok(entity)
    }

    /// Snapshot in insertion order.
    pub fn list<T: Entity>(&self) -> Result<Vec<T>, AppError> {
        let mut tables = self.lock()?;
        Ok(T::rows_mut(&mut tables).clone())
    }

    pub fn update<T: Entity>(&self, id: i64, mut entity: T) -> Result<T, AppError> {
        let mut tables = self.lock()?;
        let rows = T::rows_mut(&mut tables);
        let slot = rows
            .iter_mut()
            .find(|row| row.id() == id)
            .ok_or(AppError::NotFound { kind: T::KIND, id })?;
        entity.set_id(id);
        *slot = entity.clone();
        Ok(entity)
    }

    pub fn delete<T: Entity>(&self, id: i64) -> Result<(), AppError> {
        let mut tables = self.lock()?;
        let rows = T::rows_mut(&mut tables);
        let pos = rows
            .iter()
            .position(|row| row.id() == id)
            .ok_or(AppError::NotFound { kind: T::KIND, id })?;
        rows.remove(pos);
        Ok(())
    }
}
