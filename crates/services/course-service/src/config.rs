//! Course service configuration.

use std::env;
use std::fmt;
use std::str::FromStr;

use common::{env_or, AppError, DatabaseConfig};

/// Storage backend behind the course repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreKind {
    /// Process-local map, lost on restart
    #[default]
    Memory,
    /// PostgreSQL through SeaORM
    Postgres,
}

impl FromStr for StoreKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "mock" => Ok(StoreKind::Memory),
            "postgres" | "postgresql" => Ok(StoreKind::Postgres),
            other => Err(AppError::validation(format!(
                "unknown course store '{}', expected 'memory' or 'postgres'",
                other
            ))),
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKind::Memory => write!(f, "memory"),
            StoreKind::Postgres => write!(f, "postgres"),
        }
    }
}

/// Course service configuration.
#[derive(Debug, Clone)]
pub struct CourseServiceConfig {
    /// Selected repository backend
    pub store: StoreKind,
    /// Load the demo course into the in-memory store
    pub seed_demo_data: bool,
    /// Database settings (postgres store only)
    pub database: DatabaseConfig,
}

impl CourseServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Fails when `COURSE_STORE` names an unknown backend.
    pub fn from_env() -> Result<Self, AppError> {
        let store = match env::var("COURSE_STORE") {
            Ok(value) => value.parse()?,
            Err(_) => StoreKind::default(),
        };

        Ok(Self {
            store,
            seed_demo_data: env_or("COURSE_STORE_SEED", false),
            database: DatabaseConfig::from_env("COURSE_SERVICE_DATABASE_URL"),
        })
    }

    /// In-memory configuration, handy for tests and local runs.
    pub fn in_memory() -> Self {
        Self {
            store: StoreKind::Memory,
            seed_demo_data: false,
            database: DatabaseConfig::default(),
        }
    }
}

impl Default for CourseServiceConfig {
    fn default() -> Self {
        Self::in_memory()
    }
}
