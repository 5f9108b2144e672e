//! Teacher, Course and Student records.

use super::{Entity, EntityKind, PgQuery};
use crate::store::memory::Tables;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(default)]
pub struct Teacher {
    pub id: i64,
    #[sqlx(default)]
    pub name: String,
    #[sqlx(default)]
    pub email: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(default)]
pub struct Course {
    pub id: i64,
    #[sqlx(default)]
    pub title: String,
    /// Not checked against existing teachers.
    #[serde(alias = "teacherId")]
    #[sqlx(default)]
    pub teacher_id: i64,
    #[sqlx(default)]
    pub price: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(default)]
pub struct Student {
    pub id: i64,
    #[sqlx(default)]
    pub name: String,
    #[sqlx(default)]
    pub email: String,
}

impl Entity for Teacher {
    const KIND: EntityKind = EntityKind::Teacher;
    const TABLE: &'static str = "teachers";
    const COLUMNS: &'static [&'static str] = &["name", "email"];
    const LABEL_COLUMN: &'static str = "name";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn bind_columns<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query.bind(self.name.as_str()).bind(self.email.as_str())
    }

    fn rows_mut(tables: &mut Tables) -> &mut Vec<Self> {
        &mut tables.teachers
    }
}

impl Entity for Course {
    const KIND: EntityKind = EntityKind::Course;
    const TABLE: &'static str = "courses";
    const COLUMNS: &'static [&'static str] = &["title", "teacher_id", "price"];
    const LABEL_COLUMN: &'static str = "title";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn bind_columns<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.title.as_str())
            .bind(self.teacher_id)
            .bind(self.price)
    }

    fn rows_mut(tables: &mut Tables) -> &mut Vec<Self> {
        &mut tables.courses
    }
}

impl Entity for Student {
    const KIND: EntityKind = EntityKind::Student;
    const TABLE: &'static str = "students";
    const COLUMNS: &'static [&'static str] = &["name", "email"];
    const LABEL_COLUMN: &'static str = "name";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn bind_columns<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query.bind(self.name.as_str()).bind(self.email.as_str())
    }

    fn rows_mut(tables: &mut Tables) -> &mut Vec<Self> {
        &mut tables.students
    }
}
