use std::fmt::Write;
use std::net::Ipv4Addr;
use std::time::Duration;
use tracert_core::{HopRecord, Port, Protocol};

/// The line printed before the first hop.
pub fn banner(
    target_addr: Ipv4Addr,
    protocol: Protocol,
    timeout: Duration,
    max_steps: u32,
    port: Port,
) -> String {
    format!(
        "Start tracing ip: {target_addr}, protocol: {protocol}, timeout: {}, max steps: {max_steps}, port: {port}",
        timeout.as_secs_f64()
    )
}

/// The line printed for a hop.
///
/// The hostname is only shown when it differs from the address.
pub fn hop_line(hop: &HopRecord) -> String {
    let result = hop.result();
    let address = result.address();
    let mut line = format!("{}. {address}", hop.index());
    if result.hostname() != address {
        let _ = write!(line, " ({})", result.hostname());
    }
    line
}

/// The line printed once the target has responded.
pub const REACHED: &str = "Reached";
