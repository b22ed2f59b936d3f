//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::course_handler::{
    CourseRequest, CreateCourseRequest, RegisterStudentRequest, StudentRequest, TutorRequest,
    UnregisterStudentRequest,
};
use domain::{Course, Student, Tutor};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::course_handler::list_courses,
        crate::handlers::course_handler::get_course,
        crate::handlers::course_handler::delete_course,
        crate::handlers::course_handler::register_student,
        crate::handlers::course_handler::unregister_student,
        crate::handlers::course_handler::create_course,
    ),
    components(
        schemas(
            Course,
            Tutor,
            Student,
            TutorRequest,
            StudentRequest,
            CourseRequest,
            CreateCourseRequest,
            RegisterStudentRequest,
            UnregisterStudentRequest,
        )
    ),
    tags(
        (name = "Courses", description = "Course, tutor and enrollment management"),
    )
)]
pub struct ApiDoc;
