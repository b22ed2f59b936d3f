//! Course repository contract.

use async_trait::async_trait;
use uuid::Uuid;

use common::AppResult;
use domain::Course;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Course repository trait for dependency injection.
///
/// Implementations give no transactional guarantee across calls; the course
/// service serializes its read-then-write sequences itself.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Find a course by its UUID; `None` when absent
    async fn by_id(&self, course_uuid: Uuid) -> AppResult<Option<Course>>;

    /// All courses facilitated by the tutor
    async fn by_tutor(&self, tutor_uuid: Uuid) -> AppResult<Vec<Course>>;

    /// All courses the student is registered to
    async fn by_student(&self, student_uuid: Uuid) -> AppResult<Vec<Course>>;

    /// All courses
    async fn list(&self) -> AppResult<Vec<Course>>;

    /// Persist a new course
    async fn create(&self, course: Course) -> AppResult<()>;

    /// Replace the stored course with the same UUID
    async fn update(&self, course: Course) -> AppResult<()>;

    /// Remove a course; removing an unknown UUID succeeds
    async fn delete(&self, course_uuid: Uuid) -> AppResult<()>;

    /// Check storage connectivity
    async fn ping(&self) -> AppResult<()>;
}
