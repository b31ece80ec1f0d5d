//! Job repository.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use sqlx::PgPool;

use crate::errors::StoreError;
use crate::models::{Job, NewJob};
use crate::query_builder::binding::bind_json_value;
use crate::query_builder::filter::{Comparison, FilterRequest, FilterRule, FilterRuleSet};
use crate::query_builder::sql_generation::build_where_clause;
use crate::query_builder::update::{build_set_clause, UpdatePayload};
use crate::traits::Repository;

/// Recognized filter keys for job listings.
pub const JOB_FILTER_RULES: FilterRuleSet = FilterRuleSet {
    rules: &[
        FilterRule {
            key: "title",
            column: "title",
            comparison: Comparison::Contains,
        },
        FilterRule {
            key: "minSalary",
            column: "salary",
            comparison: Comparison::Gte,
        },
        FilterRule {
            key: "hasEquity",
            column: "equity",
            comparison: Comparison::NotNullFlag,
        },
    ],
    range_pairs: &[],
};

/// External field name -> column name for partial updates.
const JOB_TRANSLATIONS: &[(&str, &str)] = &[("companyHandle", "company_handle")];

const JOB_COLUMNS: &str = "id, title, salary, equity, company_handle";

/// Optional filters for listing jobs.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobFilter {
    pub title: Option<String>,
    pub min_salary: Option<i32>,
    pub has_equity: Option<bool>,
}

impl From<&JobFilter> for FilterRequest {
    fn from(filter: &JobFilter) -> Self {
        let mut request = FilterRequest::new();
        if let Some(title) = &filter.title {
            request = request.with("title", Value::from(title.as_str()));
        }
        if let Some(min) = filter.min_salary {
            request = request.with("minSalary", Value::from(min));
        }
        if let Some(has_equity) = filter.has_equity {
            request = request.with("hasEquity", Value::from(has_equity));
        }
        request
    }
}

/// Data access for the `jobs` table.
#[derive(Debug, Clone)]
pub struct JobRepository {
    pool: PgPool,
}

impl JobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new job.
    ///
    /// Fails with `Validation` when the referenced company handle does not
    /// exist. The existence check and the insert are separate statements;
    /// a company removed in between still surfaces as `Validation` through
    /// the foreign key constraint.
    pub async fn create(&self, data: NewJob) -> Result<Job, StoreError> {
        let company =
            sqlx::query_scalar::<_, String>("SELECT handle FROM companies WHERE handle = $1")
                .bind(&data.company_handle)
                .fetch_optional(&self.pool)
                .await
                .map_err(StoreError::from_database)?;

        if company.is_none() {
            return Err(StoreError::Validation(format!(
                "companyHandle {} does not exist",
                data.company_handle
            )));
        }

        let sql = format!(
            "INSERT INTO jobs (title, salary, equity, company_handle) \
             VALUES ($1, $2, $3, $4) RETURNING {JOB_COLUMNS}"
        );
        tracing::debug!(title = %data.title, company = %data.company_handle, "creating job");

        sqlx::query_as::<_, Job>(&sql)
            .bind(&data.title)
            .bind(data.salary)
            .bind(data.equity)
            .bind(&data.company_handle)
            .fetch_one(&self.pool)
            .await
            .map_err(StoreError::from_database)
    }

    /// List jobs ordered by title, optionally filtered.
    pub async fn find_all(&self, filter: Option<&JobFilter>) -> Result<Vec<Job>, StoreError> {
        let request = filter.map(FilterRequest::from).unwrap_or_default();
        self.find_filtered(&request).await
    }

    /// List jobs matching a raw filter request. Unrecognized keys fail
    /// before the store is touched.
    pub async fn find_filtered(&self, request: &FilterRequest) -> Result<Vec<Job>, StoreError> {
        let fragment = build_where_clause(request, &JOB_FILTER_RULES)?;

        let mut sql = format!("SELECT {JOB_COLUMNS} FROM jobs");
        if !fragment.is_empty() {
            sql.push(' ');
            sql.push_str(&fragment.where_clause());
        }
        sql.push_str(" ORDER BY title");
        tracing::debug!(sql = %sql, params = fragment.len(), "listing jobs");

        let mut query = sqlx::query_as::<_, Job>(&sql);
        for value in fragment.values() {
            query = bind_json_value!(query, value.clone());
        }

        query
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::from_database)
    }

    /// Fetch one job.
    pub async fn get(&self, id: i32) -> Result<Job, StoreError> {
        let sql = format!("SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1");

        sqlx::query_as::<_, Job>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::from_database)?
            .ok_or_else(|| StoreError::NotFound(format!("no job: {id}")))
    }

    /// Partially update a job; only the supplied fields change.
    pub async fn update(&self, id: i32, payload: &UpdatePayload) -> Result<Job, StoreError> {
        let fragment = build_set_clause(payload, JOB_TRANSLATIONS)?;
        let id_placeholder = fragment.len() + 1;

        let sql = format!(
            "UPDATE jobs SET {} WHERE id = ${} RETURNING {JOB_COLUMNS}",
            fragment.text(),
            id_placeholder,
        );
        tracing::debug!(sql = %sql, "updating job");

        let mut query = sqlx::query_as::<_, Job>(&sql);
        for value in fragment.values() {
            query = bind_json_value!(query, value.clone());
        }
        query = query.bind(id);

        query
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::from_database)?
            .ok_or_else(|| StoreError::NotFound(format!("no job: {id}")))
    }

    /// Delete a job.
    pub async fn remove(&self, id: i32) -> Result<(), StoreError> {
        let deleted = sqlx::query_scalar::<_, i32>("DELETE FROM jobs WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::from_database)?;

        match deleted {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(format!("no job: {id}"))),
        }
    }
}

#[async_trait]
impl Repository for JobRepository {
    type Entity = Job;
    type Create = NewJob;
    type Filter = JobFilter;
    type Id = i32;

    async fn create(&self, data: NewJob) -> Result<Job, StoreError> {
        JobRepository::create(self, data).await
    }

    async fn find_all(&self, filter: Option<&JobFilter>) -> Result<Vec<Job>, StoreError> {
        JobRepository::find_all(self, filter).await
    }

    async fn update(&self, id: &i32, payload: &UpdatePayload) -> Result<Job, StoreError> {
        JobRepository::update(self, *id, payload).await
    }

    async fn remove(&self, id: &i32) -> Result<(), StoreError> {
        JobRepository::remove(self, *id).await
    }
}
