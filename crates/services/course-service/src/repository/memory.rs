//! In-memory course store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use common::AppResult;
use domain::Course;

use super::CourseRepository;

/// Map-backed repository owned by a single store instance.
#[derive(Default)]
pub struct InMemoryCourseStore {
    courses: RwLock<HashMap<Uuid, Course>>,
}

impl InMemoryCourseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given courses.
    pub fn with_courses(courses: impl IntoIterator<Item = Course>) -> Self {
        let courses = courses
            .into_iter()
            .map(|course| (course.uuid, course))
            .collect();
        Self {
            courses: RwLock::new(courses),
        }
    }

    /// Number of stored courses
    pub async fn len(&self) -> usize {
        self.courses.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.courses.read().await.is_empty()
    }

    async fn filter<F>(&self, predicate: F) -> Vec<Course>
    where
        F: Fn(&Course) -> bool,
    {
        self.courses
            .read()
            .await
            .values()
            .filter(|course| predicate(course))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseStore {
    async fn by_id(&self, course_uuid: Uuid) -> AppResult<Option<Course>> {
        Ok(self.courses.read().await.get(&course_uuid).cloned())
    }

    async fn by_tutor(&self, tutor_uuid: Uuid) -> AppResult<Vec<Course>> {
        Ok(self
            .filter(|course| course.is_facilitated_by(&tutor_uuid))
            .await)
    }

    async fn by_student(&self, student_uuid: Uuid) -> AppResult<Vec<Course>> {
        Ok(self.filter(|course| course.has_student(&student_uuid)).await)
    }

    async fn list(&self) -> AppResult<Vec<Course>> {
        Ok(self.filter(|_| true).await)
    }

    async fn create(&self, course: Course) -> AppResult<()> {
        self.courses.write().await.insert(course.uuid, course);
        Ok(())
    }

    async fn update(&self, course: Course) -> AppResult<()> {
        self.courses.write().await.insert(course.uuid, course);
        Ok(())
    }

    async fn delete(&self, course_uuid: Uuid) -> AppResult<()> {
        self.courses.write().await.remove(&course_uuid);
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
