//! Network tools — interface configuration and TCP port scanning.
//!
//! Each submodule exposes `pub fn execute(input: &[u8]) -> Result<Vec<u8>, ToolError>`.

pub mod interfaces;
pub mod port_scan;

use serde_json::json;

use crate::registry::{make_tool, Registry};

/// Register every network tool with the registry.
pub fn register_tools(reg: &mut Registry) {
    reg.register_tool(make_tool(
        "get_network_configs",
        "net",
        "Get the local network interface configuration as reported by the \
         platform's interface-listing command",
        json!({
            "type": "object",
            "additionalProperties": false
        }),
        "low",
        true,
        5000,
    ));

    reg.register_tool(make_tool(
        "scan_ports",
        "net",
        "Perform a TCP connect scan against a single host and report which \
         ports are open. Takes either an explicit list of ports or an \
         inclusive (start, end) range",
        json!({
            "type": "object",
            "properties": {
                "host": { "type": "string", "minLength": 1 },
                "ports": {
                    "type": "array",
                    "items": { "type": "integer" }
                },
                "port_range": {
                    "type": "array",
                    "items": { "type": "integer" },
                    "minItems": 2,
                    "maxItems": 2
                },
                "timeout_ms": { "type": "integer", "minimum": 1 }
            },
            "required": ["host"],
            "additionalProperties": false
        }),
        "medium",
        true,
        120000,
    ));
}
