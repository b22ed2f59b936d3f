//! Service layer - business rules.

mod course_service;

pub use course_service::{CourseManager, CourseService};
