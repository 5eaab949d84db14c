use crate::config::{LogFormat, TracertConfig};
use crate::report;
use anyhow::Context;
use std::io::{BufRead, Write};
use std::net::Ipv4Addr;
use tracert_core::{Builder, Port};
use tracert_dns::{DnsResolver, Resolver};

/// Run tracert with the given configuration.
pub fn run_tracert(cfg: &TracertConfig) -> anyhow::Result<()> {
    let resolver = DnsResolver::new();
    let port = Port::ephemeral();
    let stdout = std::io::stdout();
    let target_addr = match &cfg.destination {
        Some(destination) => resolve_destination(&resolver, destination)?,
        None => prompt_destination(&resolver, std::io::stdin().lock(), stdout.lock())?,
    };
    tracing::debug!(%target_addr, %port, ?cfg);
    let mut tracer = Builder::new(target_addr)
        .protocol(cfg.protocol)
        .timeout(cfg.timeout)
        .max_steps(cfg.max_steps)
        .port(port)
        .error_reporting(cfg.error_reporting)
        .build_with_resolver(resolver);
    let mut out = stdout.lock();
    writeln!(
        out,
        "{}",
        report::banner(target_addr, cfg.protocol, cfg.timeout, cfg.max_steps, port)
    )?;
    let mut trace = tracer.trace();
    for hop in trace.by_ref() {
        writeln!(out, "{}", report::hop_line(&hop))?;
    }
    if trace.reached() {
        writeln!(out, "{}", report::REACHED)?;
    }
    Ok(())
}

/// Resolve a destination hostname or IPv4 literal.
fn resolve_destination<R: Resolver>(resolver: &R, destination: &str) -> anyhow::Result<Ipv4Addr> {
    resolver
        .lookup_ipv4(destination.trim())
        .with_context(|| format!("failed to resolve destination {destination}"))
}

/// Prompt for a destination on `input` and echo the resolved address on `output`.
fn prompt_destination<R: Resolver>(
    resolver: &R,
    mut input: impl BufRead,
    mut output: impl Write,
) -> anyhow::Result<Ipv4Addr> {
    write!(output, "Destination: ")?;
    output.flush()?;
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read destination")?;
    let destination = line.trim();
    let target_addr = resolve_destination(resolver, destination)?;
    writeln!(output, "Destination: {destination} {target_addr}")?;
    Ok(target_addr)
}

/// Install the global `tracing` subscriber, logging to stderr.
pub fn configure_logging(cfg: &TracertConfig) {
    match cfg.log_format {
        LogFormat::Compact => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(&cfg.log_filter)
                .compact()
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(&cfg.log_filter)
                .pretty()
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(&cfg.log_filter)
                .json()
                .init();
        }
    }
}
