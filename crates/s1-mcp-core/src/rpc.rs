//! RPC client contract and response types
//!
//! The client that talks to the game process lives outside this workspace.
//! It owns framing, serialization, retry and timeouts; tools only see the
//! [`RpcClient`] trait and the [`RpcResponse`] it returns.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// Error reported by the game for a single RPC call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

/// Response returned by [`RpcClient::call_with_retry`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RpcResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

impl RpcResponse {
    pub fn success(result: Value) -> Self {
        Self {
            result: Some(result),
            error: None,
        }
    }

    pub fn error(code: i64, message: impl Into<String>) -> Self {
        Self {
            result: None,
            error: Some(RpcError {
                code,
                message: message.into(),
            }),
        }
    }

    /// Classify the response once so callers can match exhaustively.
    ///
    /// An error always wins over a result.
    pub fn into_outcome(self) -> ResponseOutcome {
        match self.error {
            Some(err) => ResponseOutcome::Failure(err),
            None => ResponseOutcome::Success(Payload::from(self.result.unwrap_or(Value::Null))),
        }
    }
}

/// A response decided at the boundary
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseOutcome {
    Success(Payload),
    Failure(RpcError),
}

/// Successful result payload
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// A JSON object whose well-known fields can be inspected
    Structured(Map<String, Value>),
    /// Anything else, including a missing result (`null`)
    Raw(Value),
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Payload::Structured(map),
            other => Payload::Raw(other),
        }
    }
}

impl Payload {
    /// Back to a plain JSON value for dumping
    pub fn to_value(&self) -> Value {
        match self {
            Payload::Structured(map) => Value::Object(map.clone()),
            Payload::Raw(value) => value.clone(),
        }
    }
}

/// Client for the game-side RPC server
///
/// `Err` is reserved for local or catastrophic failures; ordinary remote
/// errors come back through [`RpcResponse::error`].
#[async_trait]
pub trait RpcClient: Send + Sync {
    async fn call_with_retry(
        &self,
        method: &str,
        params: Map<String, Value>,
    ) -> Result<RpcResponse>;
}
