//! Application state for dependency injection.

use std::sync::Arc;

use course_service_lib::service::CourseService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub course_service: Arc<dyn CourseService>,
}

impl AppState {
    /// Create new app state.
    pub fn new(course_service: Arc<dyn CourseService>) -> Self {
        Self { course_service }
    }
}
