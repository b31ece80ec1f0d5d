//! Database schema setup
//!
//! This module provides idempotent creation of the companies and jobs
//! tables managed by JobHaus.

use crate::core::JobHaus;
use crate::errors::JobHausError;

const CREATE_COMPANIES_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS companies (
    handle        TEXT PRIMARY KEY CHECK (handle = lower(handle)),
    name          TEXT UNIQUE NOT NULL,
    description   TEXT,
    num_employees INTEGER CHECK (num_employees >= 0),
    logo_url      TEXT
)
"#;

const CREATE_JOBS_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS jobs (
    id             SERIAL PRIMARY KEY,
    title          TEXT NOT NULL,
    salary         INTEGER CHECK (salary >= 0),
    equity         DOUBLE PRECISION CHECK (equity <= 1.0),
    company_handle TEXT NOT NULL REFERENCES companies (handle) ON DELETE CASCADE
)
"#;

const CREATE_INDEXES_SQL: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_jobs_company_handle ON jobs (company_handle)",
];

impl JobHaus {
    /// Create tables and indexes if they do not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), JobHausError> {
        for sql in [CREATE_COMPANIES_SQL, CREATE_JOBS_SQL] {
            tracing::debug!(sql = %sql.trim(), "ensuring table");
            sqlx::query(sql).execute(self.pool()).await?;
        }

        for &sql in CREATE_INDEXES_SQL {
            tracing::debug!(sql = %sql, "ensuring index");
            sqlx::query(sql).execute(self.pool()).await?;
        }

        tracing::info!("schema ready");
        Ok(())
    }

    /// Drop and recreate the schema. Destructive; test environments only.
    pub async fn reset_schema(&self) -> Result<(), JobHausError> {
        tracing::warn!("dropping jobs and companies tables");
        sqlx::query("DROP TABLE IF EXISTS jobs")
            .execute(self.pool())
            .await?;
        sqlx::query("DROP TABLE IF EXISTS companies")
            .execute(self.pool())
            .await?;

        self.ensure_schema().await
    }
}
