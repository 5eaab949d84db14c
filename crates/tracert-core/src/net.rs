use crate::probe::{ProbeRequest, ProbeResult};

/// Common types and helper functions.
pub(crate) mod common;

/// `ICMP` echo probing.
mod icmp;

/// `UDP` probing.
mod udp;

/// Platform specific network code.
mod platform;

/// A network socket.
pub mod socket;

/// The platform specific socket type.
pub use platform::SocketImpl;

pub use icmp::probe_icmp;
pub use udp::probe_udp;

/// Sends a single probe and waits for its outcome.
#[cfg_attr(test, mockall::automock)]
pub trait Prober {
    /// Send the probe described by `request` and wait for the response.
    ///
    /// Probing never fails, every problem encountered is recorded as a
    /// [`crate::Fault`] of the returned [`ProbeResult`].
    fn probe(&mut self, request: &ProbeRequest) -> ProbeResult;
}
