//! scan_ports — TCP connect scan against a single host

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::error::ToolError;

const MAX_PORT: u32 = 65535;

fn default_timeout_ms() -> u64 {
    1000
}

#[derive(Deserialize)]
struct Input {
    host: String,
    /// Explicit ports to probe. Takes precedence over `port_range`.
    ports: Option<Vec<u32>>,
    /// Inclusive (start, end) range to probe.
    port_range: Option<(u32, u32)>,
    /// Connect timeout per port.
    #[serde(default = "default_timeout_ms")]
    timeout_ms: u64,
}

#[derive(Serialize)]
struct Output {
    host: String,
    results: Vec<PortResult>,
}

#[derive(Serialize)]
struct PortResult {
    port: u16,
    status: PortStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum PortStatus {
    Open,
    Closed,
}

pub fn execute(input: &[u8]) -> Result<Vec<u8>, ToolError> {
    let input: Input = serde_json::from_slice(input)
        .map_err(|e| ToolError::Validation(format!("invalid JSON input: {e}")))?;

    // Validation happens before any network activity.
    let ports = normalize_ports(input.ports.as_deref(), input.port_range)?;
    if input.timeout_ms == 0 {
        return Err(ToolError::Validation("timeout_ms must be at least 1".into()));
    }
    let timeout = Duration::from_millis(input.timeout_ms);

    let addr = resolve_host(&input.host)?;

    // Each port is probed independently; a timeout on one never aborts the
    // rest. `ports` is already sorted ascending.
    let results = ports
        .into_iter()
        .map(|port| PortResult {
            port,
            status: probe(SocketAddr::new(addr, port), timeout),
        })
        .collect();

    serde_json::to_vec(&Output {
        host: input.host,
        results,
    })
    .map_err(|e| ToolError::Execution(format!("failed to serialize output: {e}")))
}

/// Expand the port specification into a sorted, deduplicated list.
fn normalize_ports(
    ports: Option<&[u32]>,
    port_range: Option<(u32, u32)>,
) -> Result<Vec<u16>, ToolError> {
    if let Some(ports) = ports {
        let mut out = Vec::with_capacity(ports.len());
        for &port in ports {
            out.push(check_port(port)?);
        }
        out.sort_unstable();
        out.dedup();
        return Ok(out);
    }

    if let Some((start, end)) = port_range {
        let start = check_port(start)?;
        let end = check_port(end)?;
        if start > end {
            return Err(ToolError::Validation(format!(
                "invalid port_range: start {start} is greater than end {end}"
            )));
        }
        return Ok((start..=end).collect());
    }

    Err(ToolError::Validation(
        "either 'ports' or 'port_range' must be provided".into(),
    ))
}

fn check_port(port: u32) -> Result<u16, ToolError> {
    if port == 0 || port > MAX_PORT {
        return Err(ToolError::Validation(format!(
            "port {port} is out of range (1-65535)"
        )));
    }
    Ok(port as u16)
}

/// Resolve the target to a single address, preferring IPv4.
///
/// IP literals bypass DNS entirely. An unresolvable hostname fails the whole
/// request before any connection attempt.
fn resolve_host(host: &str) -> Result<IpAddr, ToolError> {
    if let Ok(ip) = host.parse::<IpAddr>() {
        return Ok(ip);
    }

    // ToSocketAddrs needs a port; 0 keeps it out of the lookup result.
    let addrs: Vec<SocketAddr> = (host, 0u16)
        .to_socket_addrs()
        .map_err(|e| ToolError::Resolution {
            host: host.to_string(),
            reason: e.to_string(),
        })?
        .collect();

    addrs
        .iter()
        .find(|a| a.is_ipv4())
        .or_else(|| addrs.first())
        .map(|a| a.ip())
        .ok_or_else(|| ToolError::Resolution {
            host: host.to_string(),
            reason: "no addresses returned".into(),
        })
}

/// A single connect attempt is conclusive for this port at this instant:
/// anything other than an accepted connection counts as closed.
fn probe(addr: SocketAddr, timeout: Duration) -> PortStatus {
    match TcpStream::connect_timeout(&addr, timeout) {
        Ok(_stream) => PortStatus::Open,
        Err(_) => PortStatus::Closed,
    }
}
