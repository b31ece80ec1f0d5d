//! Core JobHaus functionality
//!
//! This module contains the main JobHaus struct and its implementation,
//! providing the database connection pool and the entity repositories.

use sqlx::PgPool;
use std::time::Duration;

use crate::errors::JobHausError;
use config::DatabaseConfig;
use job_store::{CompanyRepository, JobRepository};

/// Main coordinator that owns the database pool and hands out the entity
/// repositories.
pub struct JobHaus {
    pool: PgPool,
    companies: CompanyRepository,
    jobs: JobRepository,
}

impl JobHaus {
    /// Create new JobHaus with database connection
    pub async fn new(config: DatabaseConfig) -> Result<Self, JobHausError> {
        let connection_string = config.connection_string();

        let mut pool_options = sqlx::postgres::PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds));

        // Set max lifetime if specified
        if config.max_lifetime_seconds > 0 {
            pool_options =
                pool_options.max_lifetime(Duration::from_secs(config.max_lifetime_seconds));
        }

        let pool = pool_options.connect(&connection_string).await?;

        Ok(Self::from_pool(pool))
    }

    /// Wrap an existing pool (tests, embedding applications).
    pub fn from_pool(pool: PgPool) -> Self {
        let companies = CompanyRepository::new(pool.clone());
        let jobs = JobRepository::new(pool.clone());

        Self {
            pool,
            companies,
            jobs,
        }
    }

    /// Get database pool reference
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Company data access.
    pub fn companies(&self) -> &CompanyRepository {
        &self.companies
    }

    /// Job data access.
    pub fn jobs(&self) -> &JobRepository {
        &self.jobs
    }

    /// Check database connection health
    pub async fn health_check(&self) -> Result<(), JobHausError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}
