//! Postgres plumbing for the course store.

mod db;
pub mod migrations;

pub use db::{Database, MigrationState};
pub use migrations::Migrator;
