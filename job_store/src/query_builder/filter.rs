//! Declarative filter rules and filter requests.
//!
//! Each entity declares its recognized filter keys as a static
//! [`FilterRuleSet`] (key, column, comparison semantics, value arity),
//! so new entities reuse the same WHERE builder instead of growing their
//! own branching code.

use serde_json::Value;

/// Comparison semantics for a recognized filter key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// Case-insensitive substring match: `column ILIKE '%' || $n || '%'`.
    Contains,
    /// Inclusive lower bound: `column >= $n`.
    Gte,
    /// Inclusive upper bound: `column <= $n`.
    Lte,
    /// Boolean flag with no bound value. Emits `column IS NOT NULL` only
    /// when the flag value is exactly `true`; `false` emits nothing.
    NotNullFlag,
}

impl Comparison {
    /// Whether this comparison binds a value.
    pub fn binds_value(&self) -> bool {
        !matches!(self, Comparison::NotNullFlag)
    }
}

/// One recognized filter key and the predicate it maps to.
#[derive(Debug, Clone)]
pub struct FilterRule {
    pub key: &'static str,
    pub column: &'static str,
    pub comparison: Comparison,
}

/// Paired lower/upper bound keys on the same column, validated together:
/// when both are present, min must not exceed max.
#[derive(Debug, Clone)]
pub struct RangePair {
    pub min_key: &'static str,
    pub max_key: &'static str,
}

/// Static per-entity table of recognized filter keys.
#[derive(Debug, Clone)]
pub struct FilterRuleSet {
    pub rules: &'static [FilterRule],
    pub range_pairs: &'static [RangePair],
}

impl FilterRuleSet {
    /// Look up the rule for a filter key.
    pub fn rule(&self, key: &str) -> Option<&FilterRule> {
        self.rules.iter().find(|rule| rule.key == key)
    }
}

/// Ordered set of filter key/value pairs awaiting validation against a
/// rule set.
///
/// Built either from a typed per-entity filter struct or from a raw
/// key/value map handed over by a route layer; runtime validation against
/// the rule set happens in the WHERE builder either way.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterRequest {
    entries: Vec<(String, Value)>,
}

impl FilterRequest {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a filter entry. Adding an existing key replaces its value in
    /// place.
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        let key = key.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    /// Check if there are any entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == key)
            .map(|(_, value)| value)
    }
}

impl FromIterator<(String, Value)> for FilterRequest {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |request, (key, value)| request.with(key, value))
    }
}
