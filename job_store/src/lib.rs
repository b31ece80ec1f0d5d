//! Job Store - data access layer for JobHaus
//!
//! This crate provides the entity repositories (companies, jobs) and the
//! dynamic query-construction core they share: a partial-update SET builder
//! and a rule-driven WHERE builder, both producing parameterized SQL
//! fragments with positional placeholders.

pub mod errors;
pub mod models;
pub mod prelude;
pub mod query_builder;
pub mod repositories;
pub mod traits;

pub use errors::StoreError;
pub use models::{Company, CompanyWithJobs, Job, NewCompany, NewJob};
pub use query_builder::{
    build_set_clause, build_where_clause, Comparison, FilterRequest, FilterRule, FilterRuleSet,
    RangePair, SqlFragment, UpdatePayload,
};
pub use repositories::{CompanyFilter, CompanyRepository, JobFilter, JobRepository};
pub use traits::Repository;

use sqlx::PgPool;

pub type DbPool = PgPool;
