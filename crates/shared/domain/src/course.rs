//! Course domain entity and related types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::MAX_STUDENTS_PER_COURSE;
use crate::error::{DomainError, DomainResult};
use crate::user::{Student, Tutor};

/// Course identity as supplied by a caller creating a course.
///
/// The UUID is optional and generated server-side when absent. The tutor is
/// optional here only so that its absence can be reported as an error;
/// a persisted `Course` always has one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CourseMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub tutor: Option<Tutor>,
}

impl CourseMeta {
    pub fn new(name: impl Into<String>, tutor: Tutor) -> Self {
        Self {
            uuid: None,
            name: name.into(),
            tutor: Some(tutor),
        }
    }

    /// Turn the meta into an empty course with the given UUID.
    ///
    /// Fails with a nil input error when no tutor was supplied.
    pub fn into_course(self, uuid: Uuid) -> DomainResult<Course> {
        let tutor = self.tutor.ok_or_else(|| DomainError::nil_input("tutor"))?;
        Ok(Course {
            uuid,
            name: self.name,
            tutor,
            students: BTreeMap::new(),
        })
    }
}

/// Course domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Course {
    pub uuid: Uuid,
    pub name: String,
    pub tutor: Tutor,
    /// Registered students keyed by their UUID
    #[serde(default)]
    pub students: BTreeMap<Uuid, Student>,
}

impl Course {
    /// Check if the given student is registered
    pub fn has_student(&self, student_uuid: &Uuid) -> bool {
        self.students.contains_key(student_uuid)
    }

    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// Check if the course reached its student cap
    pub fn is_full(&self) -> bool {
        self.students.len() >= MAX_STUDENTS_PER_COURSE
    }

    /// Check if the course is facilitated by the given tutor
    pub fn is_facilitated_by(&self, tutor_uuid: &Uuid) -> bool {
        self.tutor.uuid() == *tutor_uuid
    }

    /// Insert or overwrite the student entry. Caps are checked by the caller.
    pub fn enroll(&mut self, student: Student) {
        self.students.insert(student.uuid(), student);
    }

    /// Remove the student entry, returning whether one was present.
    pub fn withdraw(&mut self, student_uuid: &Uuid) -> bool {
        self.students.remove(student_uuid).is_some()
    }
}
