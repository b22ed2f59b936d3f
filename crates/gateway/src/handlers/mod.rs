//! HTTP handlers.

pub mod course_handler;
pub mod health_handler;

pub use course_handler::course_routes;
pub use health_handler::health_routes;
