use crate::utils::error::{ValidationError, Violation};
use serde_json::{Map, Value};
use std::str::FromStr;

pub trait Validate {
    fn validate(&self) -> std::result::Result<(), ValidationError>;
}

/// Joins a scope and a field into a dotted path. An empty scope yields the bare field.
pub fn field_path(scope: &str, field: &str) -> String {
    if scope.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", scope, field)
    }
}

/// Accumulates violations across many checks so one pass reports everything.
///
/// Each check returns `Some(value)` when the field is acceptable and records a
/// violation otherwise, so callers can run every check before combining the
/// results with `?`.
#[derive(Debug, Default)]
pub struct Violations {
    entries: Vec<Violation>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, field: String, constraint: impl Into<String>, value: &Value) {
        self.entries.push(Violation {
            field,
            constraint: constraint.into(),
            value: value.clone(),
        });
    }

    pub fn object<'a>(&mut self, scope: &str, raw: &'a Value) -> Option<&'a Map<String, Value>> {
        match raw.as_object() {
            Some(fields) => Some(fields),
            None => {
                let field = if scope.is_empty() { "$" } else { scope };
                self.push(field.to_string(), "must be an object", raw);
                None
            }
        }
    }

    pub fn text(&mut self, scope: &str, fields: &Map<String, Value>, field: &str) -> Option<String> {
        let value = fields.get(field).unwrap_or(&Value::Null);
        match value.as_str() {
            Some(text) => Some(text.to_string()),
            None => {
                self.push(field_path(scope, field), "must be a string", value);
                None
            }
        }
    }

    pub fn non_empty_text(
        &mut self,
        scope: &str,
        fields: &Map<String, Value>,
        field: &str,
    ) -> Option<String> {
        let value = fields.get(field).unwrap_or(&Value::Null);
        match value.as_str() {
            Some(text) if !text.trim().is_empty() => Some(text.to_string()),
            _ => {
                self.push(field_path(scope, field), "must be a non-empty string", value);
                None
            }
        }
    }

    pub fn positive_number(
        &mut self,
        scope: &str,
        fields: &Map<String, Value>,
        field: &str,
    ) -> Option<f64> {
        let value = fields.get(field).unwrap_or(&Value::Null);
        match value.as_f64() {
            Some(number) if number.is_finite() && number > 0.0 => Some(number),
            _ => {
                self.push(field_path(scope, field), "must be a positive number", value);
                None
            }
        }
    }

    /// Accepts JSON integers and integral floats (`23.0`) inside `min..=max`.
    pub fn integer_in_range(
        &mut self,
        scope: &str,
        fields: &Map<String, Value>,
        field: &str,
        min: i64,
        max: i64,
    ) -> Option<i64> {
        let value = fields.get(field).unwrap_or(&Value::Null);
        let integer = value.as_i64().or_else(|| {
            value
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        });
        match integer {
            Some(n) if (min..=max).contains(&n) => Some(n),
            _ => {
                self.push(
                    field_path(scope, field),
                    format!("must be an integer between {} and {}", min, max),
                    value,
                );
                None
            }
        }
    }

    /// Parses a string field into one of a closed set of symbols.
    pub fn one_of<T: FromStr>(
        &mut self,
        scope: &str,
        fields: &Map<String, Value>,
        field: &str,
        symbols: &[&str],
    ) -> Option<T> {
        let value = fields.get(field).unwrap_or(&Value::Null);
        match value.as_str().and_then(|s| s.parse::<T>().ok()) {
            Some(parsed) => Some(parsed),
            None => {
                self.push(
                    field_path(scope, field),
                    format!("must be one of {}", symbols.join(", ")),
                    value,
                );
                None
            }
        }
    }

    /// Records `made > attempted` as a violation on the made counter.
    pub fn made_within_attempts(&mut self, scope: &str, made_field: &str, made: u32, attempted: u32) {
        if made > attempted {
            self.push(
                field_path(scope, made_field),
                format!("must not exceed attempts ({})", attempted),
                &Value::from(made),
            );
        }
    }

    pub fn into_error(self) -> ValidationError {
        ValidationError::new(self.entries)
    }

    /// Returns `value` when nothing was recorded, the collected error otherwise.
    pub fn finish<T>(self, value: Option<T>) -> std::result::Result<T, ValidationError> {
        match value {
            Some(value) if self.entries.is_empty() => Ok(value),
            _ => Err(self.into_error()),
        }
    }
}
