use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key of the nested object whose fields are lifted
pub const DATA_KEY: &str = "Data";

/// Fields copied from `Data` to the top level, in insertion order
pub const LIFTED_FIELDS: [&str; 3] = ["AppointmentId", "TimestampUtc", "Discipline"];

/// What to do when the document has no usable `Data` object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingDataPolicy {
    /// Missing or non-object `Data` is an error
    #[default]
    Strict,
    /// Missing or non-object `Data` leaves every lifted field absent
    Lenient,
}

/// How the flattened document is serialized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Compact,
    Pretty,
}

impl OutputFormat {
    pub fn render(self, value: &Value) -> serde_json::Result<String> {
        match self {
            OutputFormat::Compact => serde_json::to_string(value),
            OutputFormat::Pretty => serde_json::to_string_pretty(value),
        }
    }
}

/// Configuration for the flattening process
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlattenConfig {
    /// Policy for a missing or malformed `Data` object
    pub missing_data: MissingDataPolicy,

    /// Output serialization style
    pub output: OutputFormat,
}

impl FlattenConfig {
    pub fn lenient(mut self) -> Self {
        self.missing_data = MissingDataPolicy::Lenient;
        self
    }

    pub fn pretty(mut self) -> Self {
        self.output = OutputFormat::Pretty;
        self
    }
}

/// Short JSON type name used in error messages and logs
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_config() {
        let config = FlattenConfig::default();
        assert_eq!(config.missing_data, MissingDataPolicy::Strict);
        assert_eq!(config.output, OutputFormat::Compact);
    }

    #[test]
    fn test_config_from_json() {
        let config: FlattenConfig =
            serde_json::from_value(json!({"missing_data": "lenient"})).unwrap();
        assert_eq!(config, FlattenConfig::default().lenient());
    }

    #[test]
    fn test_pretty_output() {
        let out = OutputFormat::Pretty.render(&json!({"a": 1})).unwrap();
        assert!(out.contains('\n'));
        assert_eq!(OutputFormat::Compact.render(&json!({"a": 1})).unwrap(), r#"{"a":1}"#);
    }
}
