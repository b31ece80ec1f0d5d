//! Partial-update SET clause construction.

use serde_json::Value;

use crate::errors::StoreError;
use crate::query_builder::fragment::SqlFragment;

/// Ordered collection of field updates for a partial UPDATE.
///
/// Insertion order is preserved and becomes the placeholder order of the
/// generated SET clause. Setting a field twice replaces the earlier value
/// in place. A `Value::Null` entry means "set the column to NULL", which is
/// distinct from not setting the field at all.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdatePayload {
    entries: Vec<(String, Value)>,
}

impl UpdatePayload {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Set a field to a value.
    pub fn set(mut self, field: impl Into<String>, value: Value) -> Self {
        let field = field.into();
        match self.entries.iter_mut().find(|(key, _)| *key == field) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((field, value)),
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
}

impl FromIterator<(String, Value)> for UpdatePayload {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |payload, (field, value)| {
                payload.set(field, value)
            })
    }
}

/// Build the SET fragment for a partial update.
///
/// Each field at 1-based position `i` resolves its column through
/// `translations` (falling back to the field name itself when no entry
/// matches) and emits `"column"=$i`; clauses are joined with `, `. The
/// identifier is double-quoted so translated names cannot collide with SQL
/// keywords. The caller prepends the `SET` keyword.
///
/// Fails with a validation error when the payload is empty. Whether every
/// field resolves to a real column is the caller's responsibility.
pub fn build_set_clause(
    payload: &UpdatePayload,
    translations: &[(&str, &str)],
) -> Result<SqlFragment, StoreError> {
    if payload.is_empty() {
        return Err(StoreError::Validation(
            "no data supplied for update".to_string(),
        ));
    }

    let mut assignments = Vec::with_capacity(payload.len());
    let mut values = Vec::with_capacity(payload.len());

    for (idx, (field, value)) in payload.iter().enumerate() {
        let column = translations
            .iter()
            .find(|(external, _)| *external == field)
            .map(|(_, column)| *column)
            .unwrap_or(field);

        assignments.push(format!("\"{}\"=${}", column, idx + 1));
        values.push(value.clone());
    }

    Ok(SqlFragment::new(assignments.join(", "), values))
}
