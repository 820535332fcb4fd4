//! Composable schema nodes built from field validators
//!
//! A [`Schema`] evaluates its rules independently and accumulates every
//! violation instead of stopping at the first one. Rules of a node run in a
//! fixed order: type, value rules (patterns), properties in declaration
//! order, then required properties in declaration order.

use super::validators::{self, JsonType};
use regex::Regex;
use serde_json::Value;
use std::sync::{Arc, OnceLock};

type Rule = Arc<dyn Fn(&str, &Value) -> Result<(), String> + Send + Sync>;

/// Root path used in violation messages
pub const ROOT_PATH: &str = "instance";

/// One node of a schema tree
#[derive(Clone, Default)]
pub struct Schema {
    rules: Vec<Rule>,
    properties: Vec<(String, Schema)>,
    required: Vec<Rule>,
}

impl Schema {
    /// A node with no constraints
    pub fn any() -> Self {
        Self::default()
    }

    /// A node requiring a JSON type
    pub fn of_type(kind: JsonType) -> Self {
        Self::any().rule(validators::of_type(kind))
    }

    pub fn object() -> Self {
        Self::of_type(JsonType::Object)
    }

    pub fn string() -> Self {
        Self::of_type(JsonType::String)
    }

    pub fn number() -> Self {
        Self::of_type(JsonType::Number)
    }

    /// Add a value rule
    pub fn rule(
        mut self,
        rule: impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + 'static,
    ) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Require string values to match `regex`
    pub fn pattern(self, regex: Regex) -> Self {
        self.rule(validators::pattern(regex))
    }

    /// Declare a property and the schema its value must satisfy when present
    pub fn property(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.properties.push((name.into(), schema));
        self
    }

    /// Require properties to be present on object values
    pub fn required<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.required.push(Arc::new(validators::required(name.into())));
        }
        self
    }

    /// Validate `instance`, returning every violation in evaluation order
    pub fn validate(&self, instance: &Value) -> Vec<String> {
        let mut errors = Vec::new();
        self.collect(ROOT_PATH, instance, &mut errors);
        errors
    }

    fn collect(&self, path: &str, instance: &Value, errors: &mut Vec<String>) {
        errors.extend(self.rules.iter().filter_map(|rule| rule(path, instance).err()));

        if let Value::Object(object) = instance {
            for (name, schema) in &self.properties {
                if let Some(value) = object.get(name) {
                    schema.collect(&property_path(path, name), value, errors);
                }
            }
        }

        errors.extend(self.required.iter().filter_map(|rule| rule(path, instance).err()));
    }
}

impl std::fmt::Debug for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Schema")
            .field("rules", &self.rules.len())
            .field(
                "properties",
                &self.properties.iter().map(|(name, _)| name).collect::<Vec<_>>(),
            )
            .field("required", &self.required.len())
            .finish()
    }
}

/// Path of a property below `parent`
///
/// Identifier-like names are appended with a dot, anything else with a
/// quoted bracket: `instance.date`, `instance["card-holder"]`.
pub fn property_path(parent: &str, name: &str) -> String {
    static IDENTIFIER: OnceLock<Regex> = OnceLock::new();
    let identifier =
        IDENTIFIER.get_or_init(|| Regex::new(r"^(?i)[a-z_$][0-9a-z_$]*$").unwrap());

    if identifier.is_match(name) {
        format!("{}.{}", parent, name)
    } else {
        format!("{}[{}]", parent, Value::String(name.to_string()))
    }
}
