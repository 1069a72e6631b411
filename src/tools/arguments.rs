//! Typed access to tool call arguments.

use crate::error::BridgeError;

/// Wrapper around tool call arguments providing typed extraction.
///
/// Models sometimes encode arguments as a JSON string; those are decoded on
/// construction, and an empty string or `null` becomes `{}`.
#[derive(Debug, Clone)]
pub struct ToolArguments {
    value: serde_json::Value,
}

impl ToolArguments {
    pub fn new(value: serde_json::Value) -> Self {
        let value = match value {
            serde_json::Value::Null => serde_json::json!({}),
            serde_json::Value::String(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    serde_json::json!({})
                } else {
                    serde_json::from_str(trimmed).unwrap_or(serde_json::Value::String(raw))
                }
            }
            other => other,
        };
        Self { value }
    }

    /// No arguments.
    pub fn empty() -> Self {
        Self::new(serde_json::json!({}))
    }

    /// Get the raw JSON value.
    pub fn raw(&self) -> &serde_json::Value {
        &self.value
    }

    /// Get a string argument by key.
    pub fn get_str(&self, key: &str) -> Result<&str, BridgeError> {
        self.get_str_opt(key)
            .ok_or_else(|| BridgeError::InvalidArgument(format!("Missing string argument: {key}")))
    }

    /// Get an optional string argument.
    pub fn get_str_opt(&self, key: &str) -> Option<&str> {
        self.value.get(key).and_then(|v| v.as_str())
    }

    /// Deserialize the entire arguments into a typed struct.
    pub fn deserialize<T: serde::de::DeserializeOwned>(&self) -> Result<T, BridgeError> {
        serde_json::from_value(self.value.clone()).map_err(|e| {
            BridgeError::InvalidArgument(format!("Failed to deserialize arguments: {e}"))
        })
    }
}

impl Default for ToolArguments {
    fn default() -> Self {
        Self::empty()
    }
}
