//! Gateway configuration.

use common::{AppError, ServiceConfig};
use course_service_lib::config::CourseServiceConfig;

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// HTTP bind address and log level
    pub server: ServiceConfig,
    /// Course service settings (store selection, database)
    pub courses: CourseServiceConfig,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            server: ServiceConfig::from_env("course-manager", "GATEWAY"),
            courses: CourseServiceConfig::from_env()?,
        })
    }
}
