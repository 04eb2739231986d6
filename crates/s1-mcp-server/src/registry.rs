//! Tool registry: name to handler lookup built once at startup

use s1_mcp_core::{RpcClient, S1Error};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use crate::config::ServerConfig;
use crate::mcp::{Content, ToolDescriptor};
use crate::tools::{self, ToolHandler};

/// Registry of available tools
///
/// Read-only after construction; share it behind an `Arc`.
pub struct ToolRegistry {
    handlers: HashMap<String, Arc<dyn ToolHandler>>,
    descriptors: Vec<ToolDescriptor>,
}

impl ToolRegistry {
    /// Build the registry from every tool group
    pub fn new(config: &ServerConfig) -> Result<Self, S1Error> {
        Self::from_parts(
            tools::list_tools(&config.tool_prefix),
            tools::all_handlers(&config.tool_prefix),
        )
    }

    /// Build from explicit catalogs; names must be unique
    pub fn from_parts(
        descriptors: Vec<ToolDescriptor>,
        handlers: Vec<(String, Arc<dyn ToolHandler>)>,
    ) -> Result<Self, S1Error> {
        let mut map = HashMap::with_capacity(handlers.len());
        for (name, handler) in handlers {
            if map.contains_key(&name) {
                return Err(S1Error::DuplicateTool(name));
            }
            map.insert(name, handler);
        }

        let mut seen = std::collections::HashSet::new();
        for tool in &descriptors {
            if !seen.insert(tool.name.as_str()) {
                return Err(S1Error::DuplicateTool(tool.name.clone()));
            }
            if !map.contains_key(&tool.name) {
                return Err(S1Error::UnknownTool(tool.name.clone()));
            }
        }

        Ok(Self {
            handlers: map,
            descriptors,
        })
    }

    /// Advertised tools, in catalog order
    pub fn descriptors(&self) -> &[ToolDescriptor] {
        &self.descriptors
    }

    /// Look up a handler by tool name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn ToolHandler>> {
        self.handlers.get(name)
    }

    /// Number of registered tools
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Dispatch a call to the named tool
    pub async fn call(
        &self,
        name: &str,
        client: &dyn RpcClient,
        arguments: &Value,
    ) -> Result<Vec<Content>, S1Error> {
        let handler = self
            .get(name)
            .ok_or_else(|| S1Error::UnknownTool(name.to_string()))?;
        Ok(handler.call(client, arguments).await)
    }
}
