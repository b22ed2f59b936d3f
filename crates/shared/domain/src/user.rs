//! People who interact with a course.
//!
//! `Tutor` and `Student` both embed a `User` for their identity and add
//! role-specific fields. The embedded user is flattened on the wire, so a
//! tutor serializes as `{uuid, name, lastname, faculty, lecturerOf}`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Base identity shared by tutors and students.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Unique identifier
    pub uuid: Uuid,
    /// First name
    pub name: String,
    /// Last name
    pub lastname: String,
}

impl User {
    pub fn new(uuid: Uuid, name: impl Into<String>, lastname: impl Into<String>) -> Self {
        Self {
            uuid,
            name: name.into(),
            lastname: lastname.into(),
        }
    }
}

/// A user who facilitates courses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Tutor {
    #[serde(flatten)]
    pub user: User,
    /// Faculty the tutor belongs to
    pub faculty: String,
    /// Subject taught
    #[serde(rename = "lecturerOf")]
    pub lecturer_of: String,
}

impl Tutor {
    pub fn new(user: User, faculty: impl Into<String>, lecturer_of: impl Into<String>) -> Self {
        Self {
            user,
            faculty: faculty.into(),
            lecturer_of: lecturer_of.into(),
        }
    }

    pub fn uuid(&self) -> Uuid {
        self.user.uuid
    }
}

/// A user who registers to courses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Student {
    #[serde(flatten)]
    pub user: User,
    /// Faculty the student belongs to
    pub faculty: String,
}

impl Student {
    pub fn new(user: User, faculty: impl Into<String>) -> Self {
        Self {
            user,
            faculty: faculty.into(),
        }
    }

    pub fn uuid(&self) -> Uuid {
        self.user.uuid
    }
}
