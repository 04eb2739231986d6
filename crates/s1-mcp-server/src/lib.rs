//! # s1-mcp-server
//!
//! MCP tool layer for save game management and log capture.
//!
//! This crate provides:
//! - Tool catalogs and handlers (`s1_list_saves`, `s1_load_save`, `s1_capture_logs`)
//! - A read-only tool registry built at startup
//! - `tools/list` and `tools/call` request handling for any MCP transport

pub mod config;
pub mod mcp;
pub mod registry;
pub mod tools;

pub use config::ServerConfig;
pub use registry::ToolRegistry;
pub use tools::ToolHandler;

use mcp::{CallToolParams, CallToolResult, ListToolsResult, Request, Response, methods};
use s1_mcp_core::{Result, RpcClient, S1Error, error_codes};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// s1-mcp tool server
pub struct S1McpServer {
    /// RPC client connected to the game
    client: Arc<dyn RpcClient>,
    /// Tool registry
    registry: Arc<ToolRegistry>,
}

impl S1McpServer {
    /// Create a new server around an RPC client
    pub fn new(client: Arc<dyn RpcClient>, config: &ServerConfig) -> Result<Self> {
        Ok(Self {
            client,
            registry: Arc::new(ToolRegistry::new(config)?),
        })
    }

    /// Answer `tools/list`
    pub fn list_tools(&self) -> ListToolsResult {
        ListToolsResult {
            tools: self.registry.descriptors().to_vec(),
        }
    }

    /// Answer `tools/call`
    ///
    /// Only an unknown tool name is an `Err`; anything wrong with the
    /// arguments comes back as tool output.
    pub async fn call_tool(&self, name: &str, arguments: Value) -> Result<CallToolResult> {
        debug!("Calling tool {}", name);
        let content = self
            .registry
            .call(name, self.client.as_ref(), &arguments)
            .await?;
        Ok(CallToolResult { content })
    }

    /// Handle a JSON-RPC request delivered by the host transport
    pub async fn handle_request(&self, request: &Request) -> Response {
        match request.method.as_str() {
            methods::LIST_TOOLS => self.handle_tools_list(request),
            methods::CALL_TOOL => self.handle_tools_call(request).await,
            _ => Response::error(
                request.id.clone(),
                error_codes::METHOD_NOT_FOUND,
                format!("Method not found: {}", request.method),
            ),
        }
    }

    fn handle_tools_list(&self, request: &Request) -> Response {
        Response::from_result(request.id.clone(), &self.list_tools())
    }

    async fn handle_tools_call(&self, request: &Request) -> Response {
        let params: CallToolParams = match serde_json::from_value(request.params.clone()) {
            Ok(p) => p,
            Err(e) => {
                return Response::error(
                    request.id.clone(),
                    error_codes::INVALID_PARAMS,
                    format!("Invalid tool call params: {}", e),
                );
            }
        };

        match self.call_tool(&params.name, params.arguments).await {
            Ok(result) => Response::from_result(request.id.clone(), &result),
            Err(e) => {
                warn!("Rejected call to {}: {}", params.name, e);
                let code = match e {
                    S1Error::UnknownTool(_) => error_codes::INVALID_PARAMS,
                    _ => error_codes::INTERNAL_ERROR,
                };
                Response::error(request.id.clone(), code, e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::RequestId;
    use crate::tools::testing::MockRpcClient;
    use serde_json::json;

    fn server(client: MockRpcClient) -> (S1McpServer, Arc<MockRpcClient>) {
        let client = Arc::new(client);
        let server = S1McpServer::new(client.clone(), &ServerConfig::default()).unwrap();
        (server, client)
    }

    fn request(method: &str, params: Value) -> Request {
        Request {
            jsonrpc: "2.0".into(),
            id: RequestId::Number(7),
            method: method.into(),
            params,
        }
    }

    #[tokio::test]
    async fn test_tools_list() {
        let (server, _) = server(MockRpcClient::returning(json!({})));
        let response = server.handle_request(&request("tools/list", Value::Null)).await;

        assert_eq!(response.id, RequestId::Number(7));
        let result = response.result.unwrap();
        let tools = result["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 3);
        assert_eq!(tools[1]["name"], "s1_load_save");
        assert!(tools[1].get("inputSchema").is_some());
    }

    #[tokio::test]
    async fn test_tools_call() {
        let (server, client) = server(MockRpcClient::returning(json!({
            "success": true,
            "message": "Loaded slot 1"
        })));
        let response = server
            .handle_request(&request(
                "tools/call",
                json!({"name": "s1_load_save", "arguments": {"slot_index": 1}}),
            ))
            .await;

        assert!(response.error.is_none());
        assert_eq!(
            response.result.unwrap(),
            json!({"content": [{"type": "text", "text": "✓ Loaded slot 1"}]})
        );
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn test_tools_call_without_arguments() {
        let (server, client) = server(MockRpcClient::returning(json!({"lines": []})));
        let response = server
            .handle_request(&request("tools/call", json!({"name": "s1_capture_logs"})))
            .await;

        assert!(response.error.is_none());
        assert!(client.calls()[0].1.is_empty());
    }

    #[tokio::test]
    async fn test_remote_error_is_tool_output() {
        let (server, _) = server(MockRpcClient::remote_error(-32000, "Not in game"));
        let result = server.call_tool("s1_list_saves", json!({})).await.unwrap();
        assert_eq!(result.content[0].as_text(), "Error: Not in game (code: -32000)");
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let (server, client) = server(MockRpcClient::returning(json!({})));
        let response = server
            .handle_request(&request("tools/call", json!({"name": "s1_quit_game"})))
            .await;

        let error = response.error.unwrap();
        assert_eq!(error.code, error_codes::INVALID_PARAMS);
        assert_eq!(error.message, "Unknown tool: s1_quit_game");
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_malformed_call_params() {
        let (server, _) = server(MockRpcClient::returning(json!({})));
        let response = server
            .handle_request(&request("tools/call", json!({"arguments": {}})))
            .await;
        assert_eq!(response.error.unwrap().code, error_codes::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_non_object_arguments() {
        let (server, client) = server(MockRpcClient::returning(json!({"saves": [], "count": 0})));
        let response = server
            .handle_request(&request(
                "tools/call",
                json!({"name": "s1_load_save", "arguments": [1]}),
            ))
            .await;
        assert!(response.error.is_none());
        let result = response.result.unwrap();
        assert!(
            result["content"][0]["text"]
                .as_str()
                .unwrap()
                .starts_with("Error: Invalid arguments: expected an object")
        );
        assert_eq!(client.call_count(), 0);

        let result = server.call_tool("s1_list_saves", json!([1])).await.unwrap();
        assert!(result.content[0].as_text().starts_with("Found 0 save game(s):"));
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let (server, _) = server(MockRpcClient::returning(json!({})));
        let response = server
            .handle_request(&request("resources/list", Value::Null))
            .await;
        assert_eq!(response.error.unwrap().code, error_codes::METHOD_NOT_FOUND);
    }
}
