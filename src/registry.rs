//! Tool Registry — stores and retrieves tool definitions

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

/// A named, schema-described operation callable by an agent runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub namespace: String,
    pub version: String,
    pub description: String,
    /// JSON Schema the tool input is validated against; `null` skips
    /// validation.
    #[serde(default)]
    pub input_schema: Value,
    pub risk_level: String,
    pub idempotent: bool,
    /// Advisory per-call timeout for the runtime.
    pub timeout_ms: i32,
}

/// In-memory tool registry
pub struct Registry {
    tools: HashMap<String, ToolDefinition>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool definition
    pub fn register_tool(&mut self, tool: ToolDefinition) {
        info!("Registered tool: {} (ns: {})", tool.name, tool.namespace);
        self.tools.insert(tool.name.clone(), tool);
    }

    /// Get a tool by name
    pub fn get_tool(&self, name: &str) -> Option<ToolDefinition> {
        self.tools.get(name).cloned()
    }

    /// List tools, optionally filtered by namespace
    pub fn list_tools(&self, namespace: &str) -> Vec<ToolDefinition> {
        if namespace.is_empty() {
            self.tools.values().cloned().collect()
        } else {
            self.tools
                .values()
                .filter(|t| t.namespace == namespace)
                .cloned()
                .collect()
        }
    }

    /// Get total tool count
    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper to create a ToolDefinition
pub fn make_tool(
    name: &str,
    namespace: &str,
    description: &str,
    input_schema: Value,
    risk_level: &str,
    idempotent: bool,
    timeout_ms: i32,
) -> ToolDefinition {
    ToolDefinition {
        name: name.to_string(),
        namespace: namespace.to_string(),
        version: "1.0.0".to_string(),
        description: description.to_string(),
        input_schema,
        risk_level: risk_level.to_string(),
        idempotent,
        timeout_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn sample_tool(name: &str, namespace: &str) -> ToolDefinition {
        make_tool(name, namespace, "A test tool", Value::Null, "low", true, 5000)
    }

    #[test]
    fn test_register_and_get_tool() {
        let mut reg = Registry::new();
        reg.register_tool(sample_tool("scan_ports", "net"));

        let tool = reg.get_tool("scan_ports");
        assert!(tool.is_some());
        let tool = tool.unwrap();
        assert_eq!(tool.name, "scan_ports");
        assert_eq!(tool.namespace, "net");
    }

    #[test]
    fn test_get_nonexistent_tool() {
        let reg = Registry::new();
        assert!(reg.get_tool("nonexistent").is_none());
    }

    #[test]
    fn test_list_tools_all() {
        let mut reg = Registry::new();
        reg.register_tool(sample_tool("scan_ports", "net"));
        reg.register_tool(sample_tool("get_network_configs", "net"));
        reg.register_tool(sample_tool("echo", "misc"));

        let all = reg.list_tools("");
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_list_tools_by_namespace() {
        let mut reg = Registry::new();
        reg.register_tool(sample_tool("scan_ports", "net"));
        reg.register_tool(sample_tool("get_network_configs", "net"));
        reg.register_tool(sample_tool("echo", "misc"));

        let net_tools = reg.list_tools("net");
        assert_eq!(net_tools.len(), 2);

        let misc_tools = reg.list_tools("misc");
        assert_eq!(misc_tools.len(), 1);

        let empty = reg.list_tools("nonexistent");
        assert_eq!(empty.len(), 0);
    }

    #[test]
    fn test_tool_count() {
        let mut reg = Registry::new();
        assert_eq!(reg.tool_count(), 0);

        reg.register_tool(sample_tool("scan_ports", "net"));
        assert_eq!(reg.tool_count(), 1);

        reg.register_tool(sample_tool("get_network_configs", "net"));
        assert_eq!(reg.tool_count(), 2);
    }

    #[test]
    fn test_register_overwrites_existing() {
        let mut reg = Registry::new();
        reg.register_tool(make_tool(
            "scan_ports",
            "net",
            "Original description",
            Value::Null,
            "low",
            true,
            5000,
        ));

        reg.register_tool(make_tool(
            "scan_ports",
            "net",
            "Updated description",
            Value::Null,
            "medium",
            true,
            10000,
        ));

        assert_eq!(reg.tool_count(), 1);
        let tool = reg.get_tool("scan_ports").unwrap();
        assert_eq!(tool.description, "Updated description");
        assert_eq!(tool.risk_level, "medium");
        assert_eq!(tool.timeout_ms, 10000);
    }

    #[test]
    fn test_make_tool_helper() {
        let schema = serde_json::json!({ "type": "object" });
        let tool = make_tool(
            "scan_ports",
            "net",
            "Scan TCP ports",
            schema.clone(),
            "medium",
            true,
            120000,
        );

        assert_eq!(tool.name, "scan_ports");
        assert_eq!(tool.namespace, "net");
        assert_eq!(tool.version, "1.0.0");
        assert_eq!(tool.description, "Scan TCP ports");
        assert_eq!(tool.input_schema, schema);
        assert_eq!(tool.risk_level, "medium");
        assert!(tool.idempotent);
        assert_eq!(tool.timeout_ms, 120000);
    }

    #[test]
    fn test_list_tools_empty_registry() {
        let reg = Registry::new();
        let tools = reg.list_tools("");
        assert!(tools.is_empty());
    }
}
