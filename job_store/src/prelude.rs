//! Convenience re-exports for common job-store usage

// Error types
pub use crate::errors::StoreError;

// Entity models
pub use crate::models::{Company, CompanyWithJobs, Job, NewCompany, NewJob};

// Query building
pub use crate::query_builder::{
    build_set_clause, build_where_clause, FilterRequest, SqlFragment, UpdatePayload,
};

// Repositories and their filter types
pub use crate::repositories::{CompanyFilter, CompanyRepository, JobFilter, JobRepository};

// Repository contract
pub use crate::traits::Repository;

// Common external dependencies that are frequently used
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use sqlx::{FromRow, PgPool, Row};
