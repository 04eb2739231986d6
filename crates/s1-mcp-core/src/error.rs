//! Error types for s1-mcp

use thiserror::Error;

/// Result type for s1-mcp operations
pub type Result<T> = std::result::Result<T, S1Error>;

/// Local failures raised while building, dispatching or formatting a tool call.
///
/// Remote errors reported by the game are not represented here; they travel
/// inside [`crate::RpcResponse::error`].
#[derive(Debug, Error)]
pub enum S1Error {
    /// Tool arguments did not match the declared schema
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// RPC transport failure (connection lost, retries exhausted)
    #[error("RPC transport error: {0}")]
    Transport(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Tool name not present in the registry
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Two catalogs advertised the same tool name
    #[error("Duplicate tool name: {0}")]
    DuplicateTool(String),
}

impl From<serde_json::Error> for S1Error {
    fn from(err: serde_json::Error) -> Self {
        S1Error::Serialization(err.to_string())
    }
}

/// JSON-RPC error codes used when answering the MCP host
pub mod error_codes {
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;
}
