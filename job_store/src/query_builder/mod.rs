//! Dynamic SQL construction
//!
//! This module builds parameterized SQL fragments for partial updates and
//! ad-hoc filter requests. Both builders are pure functions over their
//! inputs; executing the resulting fragments is the repositories' job.

pub mod binding;
pub mod filter;
pub mod fragment;
pub mod sql_generation;
pub mod update;

#[cfg(test)]
mod tests;

pub use filter::{Comparison, FilterRequest, FilterRule, FilterRuleSet, RangePair};
pub use fragment::SqlFragment;
pub use sql_generation::build_where_clause;
pub use update::{build_set_clause, UpdatePayload};
