//! Demo data for the in-memory store.

use std::collections::BTreeMap;

use uuid::{uuid, Uuid};

use domain::{Course, Student, Tutor, User};

/// UUID of the seeded demo course
pub const DEMO_COURSE_UUID: Uuid = uuid!("2d2e10a1-94e2-4dff-a244-8733bee8b7a9");

const DEMO_TUTOR_UUID: Uuid = uuid!("6f1c2a77-0b5e-4c52-9d55-3c1f6f7a1b01");
const DEMO_STUDENT_UUID: Uuid = uuid!("a8e4d0b2-7f3c-4e8a-b1d6-52c9e0f4a302");

/// A single course with one registered student.
pub fn demo_courses() -> Vec<Course> {
    let student = Student::new(
        User::new(DEMO_STUDENT_UUID, "Mock", "Student"),
        "Mock Faculty",
    );

    vec![Course {
        uuid: DEMO_COURSE_UUID,
        name: "Mock Course".to_string(),
        tutor: Tutor::new(
            User::new(DEMO_TUTOR_UUID, "Mock", "Tutor"),
            "Mock Faculty",
            "Mock Lecturer of",
        ),
        students: BTreeMap::from([(student.uuid(), student)]),
    }]
}
