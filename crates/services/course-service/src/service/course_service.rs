//! Course service - Enforces the enrollment rules on top of a repository.
//!
//! Three caps are checked here and nowhere else:
//! - a tutor can facilitate at most `MAX_COURSES_PER_TUTOR` courses,
//! - a student can register to at most `MAX_COURSES_PER_STUDENT` courses,
//! - a course can hold at most `MAX_STUDENTS_PER_COURSE` students.
//!
//! Every check reads the repository and then writes to it, so all mutating
//! operations hold the manager's writer lock for their whole duration.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use common::{AppError, AppResult, ResultExt};
use domain::{
    Course, CourseConstraint, CourseMeta, Student, MAX_COURSES_PER_STUDENT, MAX_COURSES_PER_TUTOR,
};

use crate::repository::CourseRepository;

const RETRIEVE_COURSES: &str = "unable to retrieve courses";
const RETRIEVE_COURSE: &str = "unable to retrieve the course";
const CREATE_COURSE: &str = "unable to create the course";
const UPDATE_COURSE: &str = "unable to update the course";
const DELETE_COURSE: &str = "unable to delete the course";

/// Course service trait for dependency injection.
#[async_trait]
pub trait CourseService: Send + Sync {
    /// Create an empty course for the tutor in `meta`
    async fn create(&self, meta: CourseMeta) -> AppResult<Course>;

    /// Register a student to a course (idempotent)
    async fn register_student(&self, course_uuid: Uuid, student: Student) -> AppResult<()>;

    /// Remove a student from a course (idempotent)
    async fn unregister_student(&self, course_uuid: Uuid, student_uuid: Uuid) -> AppResult<()>;

    /// Delete a course (idempotent)
    async fn delete(&self, course_uuid: Uuid) -> AppResult<()>;

    /// List all courses
    async fn list(&self) -> AppResult<Vec<Course>>;

    /// Get a course by UUID
    async fn get(&self, course_uuid: Uuid) -> AppResult<Course>;

    /// Check the underlying storage
    async fn ping(&self) -> AppResult<()>;
}

/// Concrete implementation of CourseService using a repository.
pub struct CourseManager {
    repo: Arc<dyn CourseRepository>,
    writer: Mutex<()>,
}

impl CourseManager {
    /// Create new course service instance with repository
    pub fn new(repo: Arc<dyn CourseRepository>) -> Self {
        Self {
            repo,
            writer: Mutex::new(()),
        }
    }

    async fn fetch(&self, course_uuid: Uuid) -> AppResult<Course> {
        self.repo
            .by_id(course_uuid)
            .await
            .stage(RETRIEVE_COURSE)?
            .ok_or(AppError::CourseNotFound(course_uuid))
    }

    /// Pick the UUID for a new course, rejecting one that is already taken.
    async fn course_uuid_for(&self, meta: &CourseMeta) -> AppResult<Uuid> {
        match meta.uuid.filter(|uuid| !uuid.is_nil()) {
            Some(uuid) => {
                if self.repo.by_id(uuid).await.stage(RETRIEVE_COURSE)?.is_some() {
                    return Err(AppError::conflict(format!("Course with UUID = {}", uuid)));
                }
                Ok(uuid)
            }
            None => Ok(Uuid::new_v4()),
        }
    }
}

#[async_trait]
impl CourseService for CourseManager {
    async fn create(&self, meta: CourseMeta) -> AppResult<Course> {
        let tutor_uuid = match &meta.tutor {
            Some(tutor) => tutor.uuid(),
            None => return Err(AppError::nil_input("tutor")),
        };

        let _writer = self.writer.lock().await;

        let facilitated = self.repo.by_tutor(tutor_uuid).await.stage(RETRIEVE_COURSES)?;
        if facilitated.len() >= MAX_COURSES_PER_TUTOR {
            warn!(tutor = %tutor_uuid, courses = facilitated.len(), "Tutor course cap reached");
            return Err(AppError::Constraint(CourseConstraint::TutorMaxCourses));
        }

        let course_uuid = self.course_uuid_for(&meta).await?;
        let course = meta.into_course(course_uuid)?;
        self.repo.create(course).await.stage(CREATE_COURSE)?;

        // Hand back what was persisted, not what was requested
        let created = self
            .repo
            .by_id(course_uuid)
            .await
            .and_then(|found| found.ok_or(AppError::CourseNotFound(course_uuid)))
            .stage(RETRIEVE_COURSE)?;

        info!(course = %course_uuid, tutor = %tutor_uuid, "Course created");
        Ok(created)
    }

    async fn register_student(&self, course_uuid: Uuid, student: Student) -> AppResult<()> {
        let _writer = self.writer.lock().await;

        let mut course = self.fetch(course_uuid).await?;
        let student_uuid = student.uuid();

        // Already registered: counts do not change, only refresh the entry
        if !course.has_student(&student_uuid) {
            if course.is_full() {
                warn!(course = %course_uuid, "Course student cap reached");
                return Err(AppError::Constraint(CourseConstraint::CourseMaxStudents));
            }

            let registered = self
                .repo
                .by_student(student_uuid)
                .await
                .stage(RETRIEVE_COURSES)?;
            if registered.len() >= MAX_COURSES_PER_STUDENT {
                warn!(student = %student_uuid, courses = registered.len(), "Student course cap reached");
                return Err(AppError::Constraint(CourseConstraint::StudentMaxCourses));
            }
        }

        course.enroll(student);
        self.repo.update(course).await.stage(UPDATE_COURSE)?;

        info!(course = %course_uuid, student = %student_uuid, "Student registered");
        Ok(())
    }

    async fn unregister_student(&self, course_uuid: Uuid, student_uuid: Uuid) -> AppResult<()> {
        let _writer = self.writer.lock().await;

        let mut course = self.fetch(course_uuid).await?;
        if course.withdraw(&student_uuid) {
            info!(course = %course_uuid, student = %student_uuid, "Student unregistered");
        }
        self.repo.update(course).await.stage(UPDATE_COURSE)
    }

    async fn delete(&self, course_uuid: Uuid) -> AppResult<()> {
        let _writer = self.writer.lock().await;

        self.repo.delete(course_uuid).await.stage(DELETE_COURSE)?;
        info!(course = %course_uuid, "Course deleted");
        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<Course>> {
        self.repo.list().await.stage(RETRIEVE_COURSES)
    }

    async fn get(&self, course_uuid: Uuid) -> AppResult<Course> {
        self.fetch(course_uuid).await
    }

    async fn ping(&self) -> AppResult<()> {
        self.repo.ping().await
    }
}
