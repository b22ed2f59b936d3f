//! Course Service Library
//!
//! This crate provides the course management rules and their storage.
//! The gateway embeds it and exposes it over HTTP.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::info;

use crate::config::{CourseServiceConfig, StoreKind};
use crate::infra::Database;
use crate::repository::{demo_courses, CourseRepository, InMemoryCourseStore, PostgresCourseStore};
use crate::service::{CourseManager, CourseService};

/// Build the course service with the repository selected by `config`.
pub async fn build_course_service(
    config: &CourseServiceConfig,
) -> Result<Arc<dyn CourseService>, Box<dyn std::error::Error>> {
    let repo: Arc<dyn CourseRepository> = match config.store {
        StoreKind::Memory => {
            let store = if config.seed_demo_data {
                InMemoryCourseStore::with_courses(demo_courses())
            } else {
                InMemoryCourseStore::new()
            };
            Arc::new(store)
        }
        StoreKind::Postgres => {
            let db = Database::connect(&config.database).await?;
            Arc::new(PostgresCourseStore::new(db.get_connection()))
        }
    };
    info!(store = %config.store, "Course repository ready");

    Ok(Arc::new(CourseManager::new(repo)))
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: &CourseServiceConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    if config.store != StoreKind::Postgres {
        return Err(format!(
            "migrations need the postgres store, COURSE_STORE is '{}'",
            config.store
        )
        .into());
    }

    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for migration in status {
                let marker = if migration.applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, migration.name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
