//! Error types for the JobHaus crate
//!
//! This module contains all error types that can be returned by JobHaus
//! operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobHausError {
    #[error("Database connection error: {0}")]
    DatabaseConnection(#[from] sqlx::Error),

    #[error(transparent)]
    Store(#[from] job_store::StoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
