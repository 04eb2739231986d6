//! Log capture tool: `capture_logs`
//!
//! Filtering happens on the game side against its running log file. This
//! module only forwards the filters that were supplied and renders the
//! report that comes back.

use async_trait::async_trait;
use s1_mcp_core::{Payload, ResponseOutcome, Result, RpcClient, ToolArguments};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::num::NonZeroU64;
use std::sync::Arc;
use tracing::debug;

use super::{ToolHandler, inline, pretty, render_rpc_error, tool_name};
use crate::mcp::ToolDescriptor;

pub const CAPTURE_LOGS: &str = "capture_logs";

const NO_LINES_MATCHED: &str = "(No log lines matched the filters)";

pub fn descriptors(prefix: &str) -> Vec<ToolDescriptor> {
    vec![ToolDescriptor {
        name: tool_name(prefix, CAPTURE_LOGS),
        description: "Capture and filter game logs from MelonLoader for debugging. Retrieves logs from the game's Latest.log file with optional filtering by keywords, timestamps, regex patterns, and line count limits. Useful for agentic debugging to diagnose issues, track errors, and understand game behavior.".into(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "last_n_lines": {
                    "type": "integer",
                    "description": "Get the last N lines from the log file. Cannot be used with first_n_lines.",
                    "minimum": 1
                },
                "first_n_lines": {
                    "type": "integer",
                    "description": "Get the first N lines from the log file. Cannot be used with last_n_lines.",
                    "minimum": 1
                },
                "keyword": {
                    "type": "string",
                    "description": "Filter logs by keyword (case-insensitive search). Returns only lines containing this keyword."
                },
                "from_timestamp": {
                    "type": "string",
                    "description": "Filter logs from this timestamp onwards. Format: HH:mm:ss or HH:mm:ss.fff (e.g., '12:30:45' or '12:30:45.123')"
                },
                "to_timestamp": {
                    "type": "string",
                    "description": "Filter logs up to this timestamp. Format: HH:mm:ss or HH:mm:ss.fff (e.g., '12:35:00' or '12:35:00.999')"
                },
                "include_pattern": {
                    "type": "string",
                    "description": "Regex pattern to include matching lines (case-insensitive). Only lines matching this pattern will be returned."
                },
                "exclude_pattern": {
                    "type": "string",
                    "description": "Regex pattern to exclude matching lines (case-insensitive). Lines matching this pattern will be filtered out."
                }
            },
            "required": []
        }),
    }]
}

pub fn handlers(prefix: &str) -> Vec<(String, Arc<dyn ToolHandler>)> {
    vec![(
        tool_name(prefix, CAPTURE_LOGS),
        Arc::new(CaptureLogs) as Arc<dyn ToolHandler>,
    )]
}

/// Parameters for capture_logs
///
/// Only fields that were supplied are serialized back out. `last_n_lines` and
/// `first_n_lines` are both accepted; the game decides what a combination
/// means.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CaptureLogsParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_n_lines: Option<NonZeroU64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_n_lines: Option<NonZeroU64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_pattern: Option<String>,
}

impl CaptureLogsParams {
    /// Sparse RPC payload
    pub fn to_payload(&self) -> Result<Map<String, Value>> {
        Ok(serde_json::from_value(serde_json::to_value(self)?)?)
    }
}

pub struct CaptureLogs;

#[async_trait]
impl ToolHandler for CaptureLogs {
    fn method(&self) -> &'static str {
        CAPTURE_LOGS
    }

    async fn execute(&self, client: &dyn RpcClient, arguments: &Value) -> Result<String> {
        let params: CaptureLogsParams = ToolArguments::from_value(arguments.clone())?.parse()?;
        let payload = params.to_payload()?;

        debug!("Capturing logs with params: {:?}", payload);

        let response = client.call_with_retry(CAPTURE_LOGS, payload).await?;

        match response.into_outcome() {
            ResponseOutcome::Failure(err) => Ok(render_rpc_error(&err)),
            ResponseOutcome::Success(Payload::Structured(report)) => Ok(render_report(&report)),
            ResponseOutcome::Success(Payload::Raw(Value::String(text))) => Ok(text),
            ResponseOutcome::Success(Payload::Raw(value)) => pretty(&value),
        }
    }
}

/// Render a structured capture_logs result
fn render_report(report: &Map<String, Value>) -> String {
    let lines: &[Value] = report
        .get("lines")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[]);
    let count_field = |key: &str| report.get(key).map(inline).unwrap_or_else(|| "0".into());

    let mut out = Vec::new();

    if let Some(warning) = present(report.get("warning")) {
        out.push(format!("⚠️ Warning: {}\n", inline(warning)));
    }

    out.push("📊 Log Summary:".to_string());
    out.push(format!("  • Total lines in file: {}", count_field("total_lines_in_file")));
    out.push(format!("  • Lines after filtering: {}", count_field("filtered_count")));
    out.push(format!("  • Lines returned: {}", lines.len()));

    if let Some(filters) = present(report.get("filters_applied")).and_then(Value::as_array) {
        out.push("\n🔍 Filters Applied:".to_string());
        for filter in filters {
            out.push(format!("  • {}", inline(filter)));
        }
    }

    if lines.is_empty() {
        out.push(format!("\n{}", NO_LINES_MATCHED));
    } else {
        out.push("\n📝 Log Lines:\n".to_string());
        out.extend(lines.iter().map(render_line));
    }

    out.join("\n")
}

fn render_line(line: &Value) -> String {
    let number = line
        .get("line_number")
        .map(inline)
        .unwrap_or_else(|| "?".into());
    let content = line.get("content").map(inline).unwrap_or_default();

    match present(line.get("timestamp")) {
        Some(timestamp) => format!("[Line {}] [{}] {}", number, inline(timestamp), content),
        None => format!("[Line {}] {}", number, content),
    }
}

/// A field that carries something: not null, false, zero, or an empty string or collection
fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    })
}
