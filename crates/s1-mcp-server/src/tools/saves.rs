//! Save game management tools: `list_saves` and `load_save`

use async_trait::async_trait;
use s1_mcp_core::{Payload, ResponseOutcome, Result, RpcClient, ToolArguments};
use serde::Deserialize;
use serde_json::{Map, Value, json};
use std::sync::Arc;

use super::{ToolHandler, inline, pretty, render_rpc_error, tool_name};
use crate::mcp::ToolDescriptor;

pub const LIST_SAVES: &str = "list_saves";
pub const LOAD_SAVE: &str = "load_save";

const MISSING_SLOT_INDEX: &str = "Error: slot_index parameter is required";
const RETURNED_TO_MENU_NOTE: &str = "  Note: Game was returned to menu before loading the save.";

/// Tool definitions for the save group
pub fn descriptors(prefix: &str) -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor {
            name: tool_name(prefix, LIST_SAVES),
            description: "List all available save games with their properties. Returns an array of save game objects with all available metadata.".into(),
            input_schema: json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        },
        ToolDescriptor {
            name: tool_name(prefix, LOAD_SAVE),
            description: "Load a specific save game by slot index. If a save is already loaded (not in menu scene), this will automatically return to the menu first before loading the requested save. Note: Slot indices are 0-based (use 0 for first save, 1 for second, etc.).".into(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "slot_index": {
                        "type": "integer",
                        "description": "The 0-based index of the save slot to load",
                        "minimum": 0
                    }
                },
                "required": ["slot_index"]
            }),
        },
    ]
}

pub fn handlers(prefix: &str) -> Vec<(String, Arc<dyn ToolHandler>)> {
    vec![
        (tool_name(prefix, LIST_SAVES), Arc::new(ListSaves) as Arc<dyn ToolHandler>),
        (tool_name(prefix, LOAD_SAVE), Arc::new(LoadSave) as Arc<dyn ToolHandler>),
    ]
}

/// Parameters for load_save
#[derive(Debug, Deserialize)]
pub struct LoadSaveParams {
    /// `None` when absent or null
    #[serde(default)]
    pub slot_index: Option<u64>,
}

pub struct ListSaves;

#[async_trait]
impl ToolHandler for ListSaves {
    fn method(&self) -> &'static str {
        LIST_SAVES
    }

    async fn execute(&self, client: &dyn RpcClient, _arguments: &Value) -> Result<String> {
        let response = client.call_with_retry(LIST_SAVES, Map::new()).await?;

        match response.into_outcome() {
            ResponseOutcome::Failure(err) => Ok(render_rpc_error(&err)),
            ResponseOutcome::Success(Payload::Structured(result)) if result.contains_key("saves") => {
                let count = result.get("count").map(inline).unwrap_or_else(|| "0".into());
                let dump = pretty(&Value::Object(result))?;
                Ok(format!("Found {} save game(s):\n\n{}", count, dump))
            }
            ResponseOutcome::Success(payload) => pretty(&payload.to_value()),
        }
    }
}

pub struct LoadSave;

#[async_trait]
impl ToolHandler for LoadSave {
    fn method(&self) -> &'static str {
        LOAD_SAVE
    }

    async fn execute(&self, client: &dyn RpcClient, arguments: &Value) -> Result<String> {
        let params: LoadSaveParams = ToolArguments::from_value(arguments.clone())?.parse()?;
        let Some(slot_index) = params.slot_index else {
            return Ok(MISSING_SLOT_INDEX.to_string());
        };

        let mut payload = Map::new();
        payload.insert("slot_index".into(), json!(slot_index));
        let response = client.call_with_retry(LOAD_SAVE, payload).await?;

        match response.into_outcome() {
            ResponseOutcome::Failure(err) => Ok(render_rpc_error(&err)),
            ResponseOutcome::Success(Payload::Structured(result)) => {
                let message = result.get("message").map(inline).unwrap_or_default();
                let returned_to_menu = result
                    .get("returned_to_menu")
                    .and_then(Value::as_bool)
                    .unwrap_or(false);

                let mut text = format!("✓ {}", message);
                if returned_to_menu {
                    text.push('\n');
                    text.push_str(RETURNED_TO_MENU_NOTE);
                }
                Ok(text)
            }
            ResponseOutcome::Success(Payload::Raw(value)) => pretty(&value),
        }
    }
}
