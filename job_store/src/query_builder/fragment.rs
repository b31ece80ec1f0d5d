//! Parameterized SQL fragment shared by the clause builders.

use serde_json::Value;

/// A piece of SQL text paired with its ordered bind values.
///
/// Placeholders are 1-based (`$1`, `$2`, ...), contiguous, and match the
/// value sequence exactly. An empty fragment (no text, no values) means
/// "nothing to emit" and callers must leave the surrounding keyword
/// (`WHERE`, `SET`) out entirely.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SqlFragment {
    text: String,
    values: Vec<Value>,
}

impl SqlFragment {
    pub fn new(text: String, values: Vec<Value>) -> Self {
        Self { text, values }
    }

    /// Fragment with no text and no values.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The SQL text, without any leading keyword.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The bind values, in placeholder order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// True when no predicates or assignments were emitted.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of bind values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// The fragment prefixed with `WHERE `, or an empty string for an
    /// empty fragment.
    pub fn where_clause(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.text)
        }
    }
}
