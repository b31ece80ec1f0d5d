//! Binding of fragment values onto sqlx queries.
//!
//! Filter and update values travel as `serde_json::Value` until execution;
//! this macro dispatches each onto the concrete Postgres bind type.
//! Integers within i32 range bind as INT4 to match the schema's INTEGER
//! columns.

macro_rules! bind_json_value {
    ($query:expr, $value:expr) => {
        match $value {
            serde_json::Value::String(s) => $query.bind(s),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    if i >= i32::MIN as i64 && i <= i32::MAX as i64 {
                        $query.bind(i as i32)
                    } else {
                        $query.bind(i)
                    }
                } else if let Some(f) = n.as_f64() {
                    $query.bind(f)
                } else {
                    $query.bind(n.to_string())
                }
            }
            serde_json::Value::Bool(b) => $query.bind(b),
            serde_json::Value::Null => $query.bind(Option::<String>::None),
            other => $query.bind(other.to_string()),
        }
    };
}

pub(crate) use bind_json_value;
