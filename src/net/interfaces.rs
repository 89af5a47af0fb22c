//! get_network_configs — dump the local network interface configuration

use serde::{Deserialize, Serialize};
use std::process::Command;

use crate::error::ToolError;

#[derive(Deserialize)]
struct Input {}

#[derive(Serialize)]
struct Output {
    configs: String,
}

#[cfg(target_os = "macos")]
const INTERFACE_COMMAND: (&str, &[&str]) = ("ifconfig", &[]);
#[cfg(not(target_os = "macos"))]
const INTERFACE_COMMAND: (&str, &[&str]) = ("ip", &["addr", "show"]);

pub fn execute(input: &[u8]) -> Result<Vec<u8>, ToolError> {
    let _input: Input = if input.is_empty() {
        Input {}
    } else {
        serde_json::from_slice(input)
            .map_err(|e| ToolError::Validation(format!("invalid JSON input: {e}")))?
    };

    let (program, args) = INTERFACE_COMMAND;
    let configs = run_listing_command(program, args)?;

    serde_json::to_vec(&Output { configs })
        .map_err(|e| ToolError::Execution(format!("failed to serialize output: {e}")))
}

/// Run an interface-listing command and return its stdout unmodified.
///
/// The command's state is a snapshot at call time, so a single invocation is
/// authoritative and there is no retry.
pub fn run_listing_command(program: &str, args: &[&str]) -> Result<String, ToolError> {
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| ToolError::Execution(format!("failed to run {program}: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ToolError::Execution(format!(
            "{program} exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    String::from_utf8(output.stdout)
        .map_err(|e| ToolError::Execution(format!("{program} produced non-UTF-8 output: {e}")))
}
