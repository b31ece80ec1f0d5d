//! Company repository.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use sqlx::PgPool;

use crate::errors::StoreError;
use crate::models::{Company, CompanyWithJobs, Job, NewCompany};
use crate::query_builder::binding::bind_json_value;
use crate::query_builder::filter::{
    Comparison, FilterRequest, FilterRule, FilterRuleSet, RangePair,
};
use crate::query_builder::sql_generation::build_where_clause;
use crate::query_builder::update::{build_set_clause, UpdatePayload};
use crate::traits::Repository;

/// Recognized filter keys for company listings.
pub const COMPANY_FILTER_RULES: FilterRuleSet = FilterRuleSet {
    rules: &[
        FilterRule {
            key: "nameLike",
            column: "name",
            comparison: Comparison::Contains,
        },
        FilterRule {
            key: "minEmployees",
            column: "num_employees",
            comparison: Comparison::Gte,
        },
        FilterRule {
            key: "maxEmployees",
            column: "num_employees",
            comparison: Comparison::Lte,
        },
    ],
    range_pairs: &[RangePair {
        min_key: "minEmployees",
        max_key: "maxEmployees",
    }],
};

/// External field name -> column name for partial updates.
const COMPANY_TRANSLATIONS: &[(&str, &str)] = &[
    ("numEmployees", "num_employees"),
    ("logoUrl", "logo_url"),
];

const COMPANY_COLUMNS: &str = "handle, name, description, num_employees, logo_url";

/// Optional filters for listing companies. A closed set of fields, so a
/// typed caller cannot produce an unrecognized key; the raw
/// [`FilterRequest`] path is validated against the rule set at runtime
/// instead.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompanyFilter {
    pub name_like: Option<String>,
    pub min_employees: Option<i32>,
    pub max_employees: Option<i32>,
}

impl From<&CompanyFilter> for FilterRequest {
    fn from(filter: &CompanyFilter) -> Self {
        let mut request = FilterRequest::new();
        if let Some(name) = &filter.name_like {
            request = request.with("nameLike", Value::from(name.as_str()));
        }
        if let Some(min) = filter.min_employees {
            request = request.with("minEmployees", Value::from(min));
        }
        if let Some(max) = filter.max_employees {
            request = request.with("maxEmployees", Value::from(max));
        }
        request
    }
}

/// Data access for the `companies` table.
#[derive(Debug, Clone)]
pub struct CompanyRepository {
    pool: PgPool,
}

impl CompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new company.
    ///
    /// Fails with `Conflict` when the handle is already taken. The
    /// existence check and the insert are separate statements; a duplicate
    /// racing in between still surfaces as `Conflict` through the unique
    /// constraint.
    pub async fn create(&self, data: NewCompany) -> Result<Company, StoreError> {
        let duplicate =
            sqlx::query_scalar::<_, String>("SELECT handle FROM companies WHERE handle = $1")
                .bind(&data.handle)
                .fetch_optional(&self.pool)
                .await
                .map_err(StoreError::from_database)?;

        if duplicate.is_some() {
            return Err(StoreError::Conflict(format!(
                "duplicate company: {}",
                data.handle
            )));
        }

        let sql = format!(
            "INSERT INTO companies (handle, name, description, num_employees, logo_url) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {COMPANY_COLUMNS}"
        );
        tracing::debug!(handle = %data.handle, "creating company");

        sqlx::query_as::<_, Company>(&sql)
            .bind(&data.handle)
            .bind(&data.name)
            .bind(&data.description)
            .bind(data.num_employees)
            .bind(&data.logo_url)
            .fetch_one(&self.pool)
            .await
            .map_err(StoreError::from_database)
    }

    /// List companies ordered by name, optionally filtered.
    pub async fn find_all(
        &self,
        filter: Option<&CompanyFilter>,
    ) -> Result<Vec<Company>, StoreError> {
        let request = filter.map(FilterRequest::from).unwrap_or_default();
        self.find_filtered(&request).await
    }

    /// List companies matching a raw filter request (e.g. straight from a
    /// query string). Unrecognized keys fail before the store is touched.
    pub async fn find_filtered(
        &self,
        request: &FilterRequest,
    ) -> Result<Vec<Company>, StoreError> {
        let fragment = build_where_clause(request, &COMPANY_FILTER_RULES)?;

        let mut sql = format!("SELECT {COMPANY_COLUMNS} FROM companies");
        if !fragment.is_empty() {
            sql.push(' ');
            sql.push_str(&fragment.where_clause());
        }
        sql.push_str(" ORDER BY name");
        tracing::debug!(sql = %sql, params = fragment.len(), "listing companies");

        let mut query = sqlx::query_as::<_, Company>(&sql);
        for value in fragment.values() {
            query = bind_json_value!(query, value.clone());
        }

        query
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::from_database)
    }

    /// Fetch one company and its job postings.
    pub async fn get(&self, handle: &str) -> Result<CompanyWithJobs, StoreError> {
        let sql = format!("SELECT {COMPANY_COLUMNS} FROM companies WHERE handle = $1");
        let company = sqlx::query_as::<_, Company>(&sql)
            .bind(handle)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::from_database)?
            .ok_or_else(|| StoreError::NotFound(format!("no company: {handle}")))?;

        let jobs = sqlx::query_as::<_, Job>(
            "SELECT id, title, salary, equity, company_handle FROM jobs \
             WHERE company_handle = $1 ORDER BY id",
        )
        .bind(handle)
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::from_database)?;

        Ok(CompanyWithJobs { company, jobs })
    }

    /// Partially update a company; only the supplied fields change.
    pub async fn update(
        &self,
        handle: &str,
        payload: &UpdatePayload,
    ) -> Result<Company, StoreError> {
        let fragment = build_set_clause(payload, COMPANY_TRANSLATIONS)?;
        let handle_placeholder = fragment.len() + 1;

        let sql = format!(
            "UPDATE companies SET {} WHERE handle = ${} RETURNING {COMPANY_COLUMNS}",
            fragment.text(),
            handle_placeholder,
        );
        tracing::debug!(sql = %sql, "updating company");

        let mut query = sqlx::query_as::<_, Company>(&sql);
        for value in fragment.values() {
            query = bind_json_value!(query, value.clone());
        }
        query = query.bind(handle);

        query
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::from_database)?
            .ok_or_else(|| StoreError::NotFound(format!("no company: {handle}")))
    }

    /// Delete a company.
    pub async fn remove(&self, handle: &str) -> Result<(), StoreError> {
        let deleted =
            sqlx::query_scalar::<_, String>("DELETE FROM companies WHERE handle = $1 RETURNING handle")
                .bind(handle)
                .fetch_optional(&self.pool)
                .await
                .map_err(StoreError::from_database)?;

        match deleted {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(format!("no company: {handle}"))),
        }
    }
}

#[async_trait]
impl Repository for CompanyRepository {
    type Entity = Company;
    type Create = NewCompany;
    type Filter = CompanyFilter;
    type Id = str;

    async fn create(&self, data: NewCompany) -> Result<Company, StoreError> {
        CompanyRepository::create(self, data).await
    }

    async fn find_all(
        &self,
        filter: Option<&CompanyFilter>,
    ) -> Result<Vec<Company>, StoreError> {
        CompanyRepository::find_all(self, filter).await
    }

    async fn update(&self, id: &str, payload: &UpdatePayload) -> Result<Company, StoreError> {
        CompanyRepository::update(self, id, payload).await
    }

    async fn remove(&self, id: &str) -> Result<(), StoreError> {
        CompanyRepository::remove(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_lowers_in_declaration_order() {
        let filter = CompanyFilter {
            name_like: Some("net".to_string()),
            min_employees: Some(10),
            max_employees: Some(500),
        };

        let request = FilterRequest::from(&filter);
        let keys: Vec<&str> = request.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["nameLike", "minEmployees", "maxEmployees"]);
    }

    #[test]
    fn test_filter_skips_absent_fields() {
        let filter = CompanyFilter {
            max_employees: Some(50),
            ..CompanyFilter::default()
        };

        let request = FilterRequest::from(&filter);
        assert_eq!(request.len(), 1);
        assert!(request.get("maxEmployees").is_some());
    }

    #[test]
    fn test_company_where_clause_shape() {
        let filter = CompanyFilter {
            name_like: Some("c".to_string()),
            min_employees: Some(1),
            max_employees: Some(2),
        };

        let fragment =
            build_where_clause(&FilterRequest::from(&filter), &COMPANY_FILTER_RULES).unwrap();
        assert_eq!(
            fragment.text(),
            "name ILIKE '%' || $1 || '%' AND num_employees >= $2 AND num_employees <= $3"
        );
        assert_eq!(fragment.len(), 3);
    }

    #[test]
    fn test_min_above_max_rejected() {
        let filter = CompanyFilter {
            min_employees: Some(3),
            max_employees: Some(2),
            ..CompanyFilter::default()
        };

        let result = build_where_clause(&FilterRequest::from(&filter), &COMPANY_FILTER_RULES);
        assert!(matches!(result, Err(StoreError::Validation(_))));
    }
}
