//! Network tool server — registers the network tools and serves them to an
//! agent runtime over newline-delimited JSON on stdin/stdout.
//!
//! One request per line:
//!   {"op": "list_tools"}
//!   {"op": "get_tool", "name": "scan_ports"}
//!   {"op": "execute", "tool_name": "scan_ports", "input": {"host": "..."}}
//! and one JSON response per line. Stdout carries only protocol traffic;
//! logs go to stderr.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use nettools::executor::{ExecuteRequest, Executor};
use nettools::net;
use nettools::registry::Registry;

#[derive(Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum Request {
    ListTools {
        #[serde(default)]
        namespace: String,
    },
    GetTool {
        name: String,
    },
    Execute(ExecuteRequest),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .compact()
        .init();

    info!("Network tool server starting...");

    let mut registry = Registry::new();
    net::register_tools(&mut registry);
    info!("Registered {} built-in tools", registry.tool_count());

    let registry = Arc::new(registry);
    let executor = Arc::new(Executor::new());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut out = tokio::io::stdout();

    while let Some(line) = lines
        .next_line()
        .await
        .context("failed to read request from stdin")?
    {
        if line.trim().is_empty() {
            continue;
        }

        let reply = handle_line(&registry, &executor, line).await;
        out.write_all(reply.as_bytes())
            .await
            .context("failed to write response")?;
        out.write_all(b"\n").await.context("failed to write response")?;
        out.flush().await.context("failed to flush response")?;
    }

    info!("stdin closed, shutting down");
    Ok(())
}

async fn handle_line(registry: &Arc<Registry>, executor: &Arc<Executor>, line: String) -> String {
    let request: Request = match serde_json::from_str(&line) {
        Ok(request) => request,
        Err(e) => return error_reply("validation", format!("invalid request: {e}")),
    };

    match request {
        Request::ListTools { namespace } => {
            let tools = registry.list_tools(&namespace);
            json!({ "tools": tools }).to_string()
        }
        Request::GetTool { name } => match registry.get_tool(&name) {
            Some(tool) => json!({ "tool": tool }).to_string(),
            None => error_reply("validation", format!("unknown tool: {name}")),
        },
        Request::Execute(request) => {
            let registry = Arc::clone(registry);
            let executor = Arc::clone(executor);

            // Handlers block on sockets and subprocesses; keep them off the
            // async I/O thread.
            let response =
                tokio::task::spawn_blocking(move || executor.execute(&registry, request)).await;

            match response {
                Ok(response) => serde_json::to_string(&response)
                    .unwrap_or_else(|e| error_reply("execution", format!("failed to encode response: {e}"))),
                Err(e) => error_reply("execution", format!("tool task failed: {e}")),
            }
        }
    }
}

fn error_reply(kind: &str, error: String) -> String {
    json!({
        "success": false,
        "error": error,
        "error_kind": kind
    })
    .to_string()
}
