//! Common utilities shared across the course manager crates.
//!
//! This crate provides:
//! - Unified error handling for repositories, services and HTTP
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult, ResultExt};
