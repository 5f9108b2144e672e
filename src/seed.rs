//! Demo records loaded at startup.

use crate::entity::{Course, Student, Teacher};
use crate::error::AppError;
use crate::store::Store;

/// Two teachers, two courses (one per teacher), two students.
pub async fn seed_demo_data(store: &Store) -> Result<(), AppError> {
    let mut teacher_ids = Vec::with_capacity(2);
    for (name, email) in [
        ("Alex Kov", "alex.doe@gmail.com"),
        ("Ulia Ykubovskay", "ulia.smith@gmail.com"),
    ] {
        let teacher = store
            .create(Teacher {
                id: 0,
                name: name.into(),
                email: email.into(),
            })
            .await?;
        teacher_ids.push(teacher.id);
    }

    for ((title, price), teacher_id) in [("Introduction to Programming", 100.0), ("Web Development", 150.0)]
        .into_iter()
        .zip(teacher_ids)
    {
        store
            .create(Course {
                id: 0,
                title: title.into(),
                teacher_id,
                price,
            })
            .await?;
    }

    for (name, email) in [("Misha Fedotov", "misha@gmail.com"), ("Slava Popov", "slava@gmail.com")] {
        store
            .create(Student {
                id: 0,
                name: name.into(),
                email: email.into(),
            })
            .await?;
    }

    Ok(())
}
