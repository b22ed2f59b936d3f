//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (HTTP, database).

use std::fmt;

use thiserror::Error;

use crate::constants::{MAX_COURSES_PER_STUDENT, MAX_COURSES_PER_TUTOR, MAX_STUDENTS_PER_COURSE};

/// One of the three enrollment caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseConstraint {
    /// A tutor facilitates too many courses
    TutorMaxCourses,
    /// A student is registered to too many courses
    StudentMaxCourses,
    /// A course holds too many students
    CourseMaxStudents,
}

impl CourseConstraint {
    /// The cap this constraint enforces.
    pub fn limit(&self) -> usize {
        match self {
            CourseConstraint::TutorMaxCourses => MAX_COURSES_PER_TUTOR,
            CourseConstraint::StudentMaxCourses => MAX_COURSES_PER_STUDENT,
            CourseConstraint::CourseMaxStudents => MAX_STUDENTS_PER_COURSE,
        }
    }
}

impl fmt::Display for CourseConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseConstraint::TutorMaxCourses => {
                write!(f, "a tutor can facilitate maximum {} courses", self.limit())
            }
            CourseConstraint::StudentMaxCourses => {
                write!(f, "a student can register to maximum {} courses", self.limit())
            }
            CourseConstraint::CourseMaxStudents => {
                write!(f, "maximum {} students can register a course", self.limit())
            }
        }
    }
}

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A required reference is absent
    #[error("{0} cannot be nil")]
    NilInput(String),

    /// An enrollment cap would be exceeded
    #[error("validation failed: {0}")]
    Constraint(CourseConstraint),
}

impl DomainError {
    /// Create a nil input error for the named item
    pub fn nil_input(item: impl Into<String>) -> Self {
        DomainError::NilInput(item.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraint_messages_are_human_readable() {
        assert_eq!(
            CourseConstraint::TutorMaxCourses.to_string(),
            "a tutor can facilitate maximum 2 courses"
        );
        assert_eq!(
            CourseConstraint::StudentMaxCourses.to_string(),
            "a student can register to maximum 4 courses"
        );
        assert_eq!(
            CourseConstraint::CourseMaxStudents.to_string(),
            "maximum 20 students can register a course"
        );
    }

    #[test]
    fn constraint_error_is_prefixed() {
        let err = DomainError::Constraint(CourseConstraint::TutorMaxCourses);
        assert_eq!(
            err.to_string(),
            "validation failed: a tutor can facilitate maximum 2 courses"
        );
    }

    #[test]
    fn nil_input_names_the_item() {
        assert_eq!(DomainError::nil_input("tutor").to_string(), "tutor cannot be nil");
    }
}
