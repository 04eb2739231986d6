//! MCP tool handlers
//!
//! Each tool group exposes its catalog (`descriptors`) and its handlers
//! (`handlers`). Every handler turns one call into exactly one text block:
//! remote errors and local failures are rendered as `Error: ...` and never
//! escape to the host.

pub mod logs;
pub mod saves;

use async_trait::async_trait;
use s1_mcp_core::{Result, RpcClient, RpcError};
use serde_json::Value;
use std::sync::Arc;
use tracing::error;

use crate::mcp::{Content, ToolDescriptor};

/// A single tool implementation
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// RPC method this tool forwards to
    fn method(&self) -> &'static str;

    /// Build the request, call the game and format the reply.
    ///
    /// `arguments` is the raw value sent by the host. Handlers that take
    /// parameters parse it themselves through `ToolArguments`. `Err` is a
    /// local failure; [`ToolHandler::call`] renders it.
    async fn execute(&self, client: &dyn RpcClient, arguments: &Value) -> Result<String>;

    /// Handler boundary: always produces a text response
    async fn call(&self, client: &dyn RpcClient, arguments: &Value) -> Vec<Content> {
        match self.execute(client, arguments).await {
            Ok(text) => vec![Content::text(text)],
            Err(e) => {
                error!(method = self.method(), "Error in {}: {}", self.method(), e);
                vec![Content::text(format!("Error: {}", e))]
            }
        }
    }
}

/// Full catalog in advertisement order
pub fn list_tools(prefix: &str) -> Vec<ToolDescriptor> {
    let mut tools = saves::descriptors(prefix);
    tools.extend(logs::descriptors(prefix));
    tools
}

/// Every handler paired with its advertised name
pub fn all_handlers(prefix: &str) -> Vec<(String, Arc<dyn ToolHandler>)> {
    let mut handlers = saves::handlers(prefix);
    handlers.extend(logs::handlers(prefix));
    handlers
}

pub(crate) fn tool_name(prefix: &str, base: &str) -> String {
    format!("{}{}", prefix, base)
}

pub(crate) fn render_rpc_error(err: &RpcError) -> String {
    format!("Error: {} (code: {})", err.message, err.code)
}

/// Two-space indented JSON, key order as received
pub(crate) fn pretty(value: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Inline rendering of a field value: strings without quotes
pub(crate) fn inline(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
