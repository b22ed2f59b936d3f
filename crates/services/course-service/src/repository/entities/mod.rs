//! SeaORM entities backing the postgres course store.

pub mod course;
pub mod course_student;
