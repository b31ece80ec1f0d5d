//! WHERE clause generation from validated filter requests.

use serde_json::Value;

use crate::errors::StoreError;
use crate::query_builder::filter::{Comparison, FilterRequest, FilterRuleSet};
use crate::query_builder::fragment::SqlFragment;

/// Build the WHERE fragment for a filter request.
///
/// Validation happens before any SQL is emitted:
///
/// 1. every key in the request must be recognized by the rule set; all
///    offending keys are collected and reported in one error,
/// 2. for each declared range pair present in full with numeric values,
///    min must not exceed max.
///
/// Entries are then walked in insertion order. Value-bearing rules push
/// their value and take the 1-based count of values pushed so far as their
/// placeholder; flag rules emit a static predicate (no placeholder) only
/// when their value is exactly `true`. Predicates are joined with ` AND `.
///
/// A request that emits no predicates returns an empty fragment; callers
/// must omit the `WHERE` keyword entirely in that case.
pub fn build_where_clause(
    request: &FilterRequest,
    rules: &FilterRuleSet,
) -> Result<SqlFragment, StoreError> {
    let unrecognized: Vec<&str> = request
        .iter()
        .filter(|(key, _)| rules.rule(key).is_none())
        .map(|(key, _)| key)
        .collect();

    if !unrecognized.is_empty() {
        return Err(StoreError::Validation(format!(
            "unrecognized filter key(s): {}",
            unrecognized.join(", ")
        )));
    }

    for pair in rules.range_pairs {
        let min = request.get(pair.min_key).and_then(Value::as_f64);
        let max = request.get(pair.max_key).and_then(Value::as_f64);

        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(StoreError::Validation(format!(
                    "{} cannot be greater than {}",
                    pair.min_key, pair.max_key
                )));
            }
        }
    }

    let mut predicates = Vec::with_capacity(request.len());
    let mut values: Vec<Value> = Vec::new();

    for (key, value) in request.iter() {
        let Some(rule) = rules.rule(key) else { continue };

        match rule.comparison {
            Comparison::Contains => {
                values.push(value.clone());
                predicates.push(format!(
                    "{} ILIKE '%' || ${} || '%'",
                    rule.column,
                    values.len()
                ));
            }
            Comparison::Gte => {
                values.push(value.clone());
                predicates.push(format!("{} >= ${}", rule.column, values.len()));
            }
            Comparison::Lte => {
                values.push(value.clone());
                predicates.push(format!("{} <= ${}", rule.column, values.len()));
            }
            Comparison::NotNullFlag => {
                if value == &Value::Bool(true) {
                    predicates.push(format!("{} IS NOT NULL", rule.column));
                }
            }
        }
    }

    if predicates.is_empty() {
        return Ok(SqlFragment::empty());
    }

    Ok(SqlFragment::new(predicates.join(" AND "), values))
}
