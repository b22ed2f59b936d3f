//! Repository layer for data access.

mod course_repository;
pub mod entities;
mod memory;
mod postgres;
mod seed;

pub use course_repository::CourseRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use course_repository::MockCourseRepository;
pub use memory::InMemoryCourseStore;
pub use postgres::PostgresCourseStore;
pub use seed::{demo_courses, DEMO_COURSE_UUID};
