use crate::config::Protocol;
use crate::error::{Error, ResolutionError};
use crate::types::{Port, TimeToLive};
use std::fmt::{Display, Formatter};
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;
use thiserror::Error;

/// A single probe to be sent to a target.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ProbeRequest {
    /// The address being traced.
    pub target_addr: Ipv4Addr,
    /// The hop limit of the probe.
    pub ttl: TimeToLive,
    /// How long to wait for a response.
    pub timeout: Duration,
    /// Which transport to probe with.
    pub protocol: Protocol,
    /// The destination port of the probe.
    pub port: Port,
}

/// The host which answered a probe, if any.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Responder {
    /// No response arrived before the timeout.
    Timeout,
    /// A response arrived from this address.
    Addr(IpAddr),
}

impl Display for Responder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timeout => write!(f, "*"),
            Self::Addr(addr) => write!(f, "{addr}"),
        }
    }
}

/// A problem observed while sending a probe or handling its response.
///
/// Faults never abort a trace.
#[derive(Error, Debug)]
pub enum Fault {
    #[error("no response within {0:?}")]
    Timeout(Duration),
    #[error("socket error occurred in Main query: {0}")]
    Socket(#[from] Error),
    #[error("socket error occurred in DNS: {0}")]
    Resolution(#[from] ResolutionError),
}

/// The outcome of a single probe.
#[derive(Debug)]
pub struct ProbeResult {
    responder: Responder,
    hostname: String,
    faults: Vec<Fault>,
}

impl ProbeResult {
    /// A probe which received no response.
    #[must_use]
    pub const fn timeout(faults: Vec<Fault>) -> Self {
        Self {
            responder: Responder::Timeout,
            hostname: String::new(),
            faults,
        }
    }

    /// A probe which received a response from `addr`.
    #[must_use]
    pub const fn responded(addr: IpAddr, hostname: String, faults: Vec<Fault>) -> Self {
        Self {
            responder: Responder::Addr(addr),
            hostname,
            faults,
        }
    }

    #[must_use]
    pub const fn responder(&self) -> Responder {
        self.responder
    }

    /// The responding address as text, `*` if the probe timed out.
    #[must_use]
    pub fn address(&self) -> String {
        self.responder.to_string()
    }

    /// The resolved name of the responder, `*` if the probe timed out.
    ///
    /// Equal to [`ProbeResult::address`] when the name could not be resolved.
    #[must_use]
    pub fn hostname(&self) -> &str {
        match self.responder {
            Responder::Timeout => "*",
            Responder::Addr(_) => &self.hostname,
        }
    }

    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self.responder, Responder::Timeout)
    }

    /// The faults observed while probing.
    #[must_use]
    pub fn faults(&self) -> &[Fault] {
        &self.faults
    }
}

/// The result of probing at a given hop.
#[derive(Debug)]
pub struct HopRecord {
    index: usize,
    ttl: TimeToLive,
    result: ProbeResult,
}

impl HopRecord {
    #[must_use]
    pub const fn new(index: usize, ttl: TimeToLive, result: ProbeResult) -> Self {
        Self { index, ttl, result }
    }

    /// The zero based position of this hop in the trace.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn ttl(&self) -> TimeToLive {
        self.ttl
    }

    #[must_use]
    pub const fn result(&self) -> &ProbeResult {
        &self.result
    }
}
