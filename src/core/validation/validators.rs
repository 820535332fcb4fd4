//! Reusable field validators
//!
//! Each validator receives the instance path (`instance`, `instance.date`, ...)
//! and the value found there, and returns the violation message on failure.
//! Validators only judge the kinds of values they apply to: `pattern` ignores
//! non-strings and `required` ignores non-objects, leaving those cases to the
//! type validator.

use regex::Regex;
use serde_json::Value;
use std::fmt;

/// JSON value kinds a schema node can require
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonType {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
}

impl JsonType {
    /// Check whether `value` is of this kind
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            JsonType::Object => value.is_object(),
            JsonType::Array => value.is_array(),
            JsonType::String => value.is_string(),
            JsonType::Number => value.is_number(),
            JsonType::Boolean => value.is_boolean(),
            JsonType::Null => value.is_null(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JsonType::Object => "object",
            JsonType::Array => "array",
            JsonType::String => "string",
            JsonType::Number => "number",
            JsonType::Boolean => "boolean",
            JsonType::Null => "null",
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validator: value must be of the given JSON type
pub fn of_type(kind: JsonType) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |path: &str, value: &Value| {
        if kind.matches(value) {
            Ok(())
        } else {
            Err(format!("{} is not of a type(s) {}", path, kind))
        }
    }
}

/// Validator: string must match the regular expression
///
/// The pattern is quoted as a JSON string literal in the message.
pub fn pattern(regex: Regex) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |path: &str, value: &Value| match value.as_str() {
        Some(s) if !regex.is_match(s) => Err(format!(
            "{} does not match pattern {}",
            path,
            quote(regex.as_str())
        )),
        _ => Ok(()),
    }
}

/// Validator: object must contain the property
///
/// A property holding `null` is present.
pub fn required(
    property: impl Into<String>,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    let property = property.into();
    move |path: &str, value: &Value| match value.as_object() {
        Some(object) if !object.contains_key(&property) => Err(format!(
            "{} requires property {}",
            path,
            quote(&property)
        )),
        _ => Ok(()),
    }
}

fn quote(s: &str) -> String {
    Value::String(s.to_string()).to_string()
}
