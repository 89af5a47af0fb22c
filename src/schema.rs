//! JSON Schema validation for tool inputs

use serde_json::Value;

use crate::error::ToolError;

/// Validate a JSON input against a tool's schema.
///
/// A `null` schema means the tool takes unvalidated input.
pub fn validate_input(input: &Value, schema: &Value) -> Result<(), ToolError> {
    if schema.is_null() {
        return Ok(());
    }

    let validator = jsonschema::validator_for(schema)
        .map_err(|e| ToolError::Execution(format!("invalid tool schema: {e}")))?;

    if let Err(error) = validator.validate(input) {
        return Err(ToolError::Validation(format!(
            "input validation failed: {error}"
        )));
    }

    Ok(())
}
