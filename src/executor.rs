//! Tool execution pipeline
//!
//! Pipeline: look up tool → validate input against its schema → run the
//! handler → wrap the result with an execution id and duration. Failures are
//! reported in the response, never retried; one invocation never affects the
//! next.

use std::collections::HashMap;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::ToolError;
use crate::registry::Registry;
use crate::schema;

/// A request to run a named tool.
#[derive(Debug, Clone, Deserialize)]
pub struct ExecuteRequest {
    pub tool_name: String,
    /// Tool input; `null` is treated as an empty object.
    #[serde(default)]
    pub input: Value,
    /// Calling agent, for log provenance only.
    #[serde(default)]
    pub agent_id: String,
    /// Free-text justification from the agent, for log provenance only.
    #[serde(default)]
    pub reason: String,
}

/// The outcome of a single tool invocation.
#[derive(Debug, Serialize)]
pub struct ExecuteResponse {
    pub success: bool,
    pub output: Value,
    pub error: String,
    /// One of "validation", "resolution", "execution" when `success` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<String>,
    pub execution_id: String,
    pub duration_ms: i64,
}

/// A tool handler function
type ToolHandler = Box<dyn Fn(&[u8]) -> Result<Vec<u8>, ToolError> + Send + Sync>;

/// Executes tools through the pipeline
pub struct Executor {
    /// Map of tool name → handler function
    handlers: HashMap<String, ToolHandler>,
}

impl Executor {
    pub fn new() -> Self {
        let mut executor = Self {
            handlers: HashMap::new(),
        };
        executor.register_handlers();
        executor
    }

    /// Register all built-in tool handlers
    fn register_handlers(&mut self) {
        self.handlers.insert(
            "get_network_configs".into(),
            Box::new(|input| crate::net::interfaces::execute(input)),
        );
        self.handlers.insert(
            "scan_ports".into(),
            Box::new(|input| crate::net::port_scan::execute(input)),
        );
    }

    /// Execute a tool through the pipeline.
    pub fn execute(&self, registry: &Registry, request: ExecuteRequest) -> ExecuteResponse {
        let execution_id = Uuid::new_v4().to_string();
        let start = Instant::now();

        info!(
            "Executing tool: {} (agent: {}, reason: {})",
            request.tool_name, request.agent_id, request.reason
        );

        match self.run(registry, &request) {
            Ok(output) => ExecuteResponse {
                success: true,
                output,
                error: String::new(),
                error_kind: None,
                execution_id,
                duration_ms: start.elapsed().as_millis() as i64,
            },
            Err(e) => {
                warn!("Tool {} failed: {e}", request.tool_name);
                ExecuteResponse {
                    success: false,
                    output: Value::Null,
                    error: e.to_string(),
                    error_kind: Some(e.kind().to_string()),
                    execution_id,
                    duration_ms: start.elapsed().as_millis() as i64,
                }
            }
        }
    }

    fn run(&self, registry: &Registry, request: &ExecuteRequest) -> Result<Value, ToolError> {
        let tool = registry
            .get_tool(&request.tool_name)
            .ok_or_else(|| ToolError::Validation(format!("unknown tool: {}", request.tool_name)))?;

        let input = if request.input.is_null() {
            Value::Object(serde_json::Map::new())
        } else {
            request.input.clone()
        };

        schema::validate_input(&input, &tool.input_schema)?;

        let handler = self.handlers.get(&request.tool_name).ok_or_else(|| {
            ToolError::Execution(format!(
                "no handler registered for tool: {}",
                request.tool_name
            ))
        })?;

        let input_bytes = serde_json::to_vec(&input)
            .map_err(|e| ToolError::Execution(format!("failed to encode input: {e}")))?;

        let output_bytes = handler(&input_bytes)?;

        serde_json::from_slice(&output_bytes)
            .map_err(|e| ToolError::Execution(format!("tool returned invalid JSON: {e}")))
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::new()
    }
}
