//! Domain-level constants.
//!
//! These constants define the enrollment rules enforced by the course manager.

// =============================================================================
// Enrollment Caps
// =============================================================================

/// Maximum number of courses a single tutor may facilitate
pub const MAX_COURSES_PER_TUTOR: usize = 2;

/// Maximum number of courses a single student may register to
pub const MAX_COURSES_PER_STUDENT: usize = 4;

/// Maximum number of students a single course may hold
pub const MAX_STUDENTS_PER_COURSE: usize = 20;
