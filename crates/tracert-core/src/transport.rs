use crate::config::{ErrorReporting, Protocol};
use crate::net::socket::Socket;
use crate::net::{probe_icmp, probe_udp, Prober};
use crate::probe::{ProbeRequest, ProbeResult};
use std::marker::PhantomData;
use tracert_dns::Resolver;

/// Probes over real sockets of type `S`, resolving responders with `R`.
///
/// The transport used for each probe is selected by the [`Protocol`] of the
/// request.
#[derive(Debug)]
pub struct Transport<S, R> {
    resolver: R,
    error_reporting: ErrorReporting,
    _socket: PhantomData<fn() -> S>,
}

impl<S: Socket, R: Resolver> Transport<S, R> {
    #[must_use]
    pub const fn new(resolver: R, error_reporting: ErrorReporting) -> Self {
        Self {
            resolver,
            error_reporting,
            _socket: PhantomData,
        }
    }
}

impl<S: Socket, R: Resolver> Prober for Transport<S, R> {
    fn probe(&mut self, request: &ProbeRequest) -> ProbeResult {
        match request.protocol {
            Protocol::Icmp => probe_icmp::<S, R>(request, &self.resolver, self.error_reporting),
            Protocol::Udp => probe_udp::<S, R>(request, &self.resolver, self.error_reporting),
        }
    }
}
