//! Course handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{delete, get, post, put},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use common::AppResult;
use domain::{Course, CourseMeta, Student, Tutor, User};

use crate::extractors::{PathParam, ValidatedJson};
use crate::state::AppState;

/// Tutor payload
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TutorRequest {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub uuid: Uuid,
    #[validate(length(min = 1, message = "name can not be empty"))]
    #[schema(example = "John")]
    pub name: String,
    #[validate(length(min = 1, message = "lastname can not be empty"))]
    #[schema(example = "Stone")]
    pub lastname: String,
    #[validate(length(min = 1, message = "faculty can not be empty"))]
    #[schema(example = "Computer Science")]
    pub faculty: String,
    /// Subject taught
    #[serde(rename = "lecturerOf")]
    #[validate(length(min = 1, message = "lecturerOf can not be empty"))]
    #[schema(example = "Golang")]
    pub lecturer_of: String,
}

impl From<TutorRequest> for Tutor {
    fn from(req: TutorRequest) -> Self {
        Tutor::new(User::new(req.uuid, req.name, req.lastname), req.faculty, req.lecturer_of)
    }
}

/// Student payload
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct StudentRequest {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa7")]
    pub uuid: Uuid,
    #[validate(length(min = 1, message = "name can not be empty"))]
    #[schema(example = "Alice")]
    pub name: String,
    #[validate(length(min = 1, message = "lastname can not be empty"))]
    #[schema(example = "Smith")]
    pub lastname: String,
    #[validate(length(min = 1, message = "faculty can not be empty"))]
    #[schema(example = "Computer Science")]
    pub faculty: String,
}

impl From<StudentRequest> for Student {
    fn from(req: StudentRequest) -> Self {
        Student::new(User::new(req.uuid, req.name, req.lastname), req.faculty)
    }
}

/// Course payload; the UUID is generated when omitted
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CourseRequest {
    #[serde(default)]
    pub uuid: Option<Uuid>,
    #[validate(length(min = 1, message = "name can not be empty"))]
    #[schema(example = "Microservices with Rust")]
    pub name: String,
    /// Required; a missing tutor is rejected by the course service
    #[serde(default)]
    #[validate(nested)]
    pub tutor: Option<TutorRequest>,
}

impl From<CourseRequest> for CourseMeta {
    fn from(req: CourseRequest) -> Self {
        CourseMeta {
            uuid: req.uuid,
            name: req.name,
            tutor: req.tutor.map(Tutor::from),
        }
    }
}

/// Create course request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCourseRequest {
    #[validate(nested)]
    pub course: CourseRequest,
}

/// Register student request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterStudentRequest {
    #[validate(nested)]
    pub student: StudentRequest,
}

/// Unregister student request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UnregisterStudentRequest {
    #[serde(rename = "studentUUID")]
    pub student_uuid: Uuid,
}

/// Create course routes
pub fn course_routes() -> Router<AppState> {
    Router::new()
        .route("/listCourses", get(list_courses))
        .route("/getCourse/:courseUUID", get(get_course))
        .route("/deleteCourse/:courseUUID", delete(delete_course))
        .route("/registerStudent/:courseUUID", put(register_student))
        .route("/unregisterStudent/:courseUUID", put(unregister_student))
        .route("/createCourse", post(create_course))
}

/// List all courses
#[utoipa::path(
    get,
    path = "/v1/listCourses",
    tag = "Courses",
    responses(
        (status = 200, description = "All courses", body = Vec<Course>)
    )
)]
pub async fn list_courses(State(state): State<AppState>) -> AppResult<Json<Vec<Course>>> {
    let courses = state.course_service.list().await?;
    Ok(Json(courses))
}

/// Get course by UUID
#[utoipa::path(
    get,
    path = "/v1/getCourse/{courseUUID}",
    tag = "Courses",
    params(
        ("courseUUID" = Uuid, Path, description = "Course UUID")
    ),
    responses(
        (status = 200, description = "The course", body = Course),
        (status = 404, description = "Course not found")
    )
)]
pub async fn get_course(
    State(state): State<AppState>,
    PathParam(course_uuid): PathParam<Uuid>,
) -> AppResult<Json<Course>> {
    let course = state.course_service.get(course_uuid).await?;
    Ok(Json(course))
}

/// Delete course (idempotent)
#[utoipa::path(
    delete,
    path = "/v1/deleteCourse/{courseUUID}",
    tag = "Courses",
    params(
        ("courseUUID" = Uuid, Path, description = "Course UUID")
    ),
    responses(
        (status = 204, description = "Course deleted or never existed")
    )
)]
pub async fn delete_course(
    State(state): State<AppState>,
    PathParam(course_uuid): PathParam<Uuid>,
) -> AppResult<StatusCode> {
    state.course_service.delete(course_uuid).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Register a student to a course
#[utoipa::path(
    put,
    path = "/v1/registerStudent/{courseUUID}",
    tag = "Courses",
    params(
        ("courseUUID" = Uuid, Path, description = "Course UUID")
    ),
    request_body = RegisterStudentRequest,
    responses(
        (status = 204, description = "Student registered"),
        (status = 400, description = "Validation error or enrollment cap exceeded"),
        (status = 404, description = "Course not found")
    )
)]
pub async fn register_student(
    State(state): State<AppState>,
    PathParam(course_uuid): PathParam<Uuid>,
    ValidatedJson(payload): ValidatedJson<RegisterStudentRequest>,
) -> AppResult<StatusCode> {
    state
        .course_service
        .register_student(course_uuid, payload.student.into())
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Unregister a student from a course
#[utoipa::path(
    put,
    path = "/v1/unregisterStudent/{courseUUID}",
    tag = "Courses",
    params(
        ("courseUUID" = Uuid, Path, description = "Course UUID")
    ),
    request_body = UnregisterStudentRequest,
    responses(
        (status = 204, description = "Student unregistered or was never registered"),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Course not found")
    )
)]
pub async fn unregister_student(
    State(state): State<AppState>,
    PathParam(course_uuid): PathParam<Uuid>,
    ValidatedJson(payload): ValidatedJson<UnregisterStudentRequest>,
) -> AppResult<StatusCode> {
    state
        .course_service
        .unregister_student(course_uuid, payload.student_uuid)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Create a course
#[utoipa::path(
    post,
    path = "/v1/createCourse",
    tag = "Courses",
    request_body = CreateCourseRequest,
    responses(
        (status = 201, description = "Course created", body = Course),
        (status = 400, description = "Validation error, missing tutor or tutor cap exceeded"),
        (status = 409, description = "Course UUID already taken")
    )
)]
pub async fn create_course(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCourseRequest>,
) -> AppResult<(StatusCode, Json<Course>)> {
    let course = state.course_service.create(payload.course.into()).await?;
    Ok((StatusCode::CREATED, Json(course)))
}
