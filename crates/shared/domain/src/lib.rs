//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! All types here are shared between the course service and the gateway.

pub mod constants;
pub mod course;
pub mod error;
pub mod user;

pub use constants::*;
pub use course::{Course, CourseMeta};
pub use error::{CourseConstraint, DomainError, DomainResult};
pub use user::{Student, Tutor, User};
