//! Tool call arguments

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{Result, S1Error};

/// Arguments supplied by the MCP host for one tool call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolArguments(Map<String, Value>);

impl ToolArguments {
    /// Accept the raw `arguments` member of a `tools/call` request.
    ///
    /// `null` counts as no arguments.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(map) => Ok(Self(map)),
            other => Err(S1Error::InvalidArguments(format!(
                "expected an object, got {}",
                other
            ))),
        }
    }

    /// Parse into a typed parameter struct
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(Value::Object(self.0.clone()))
            .map_err(|e| S1Error::InvalidArguments(e.to_string()))
    }
}
