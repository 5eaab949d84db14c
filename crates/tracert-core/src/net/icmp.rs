use crate::config::ErrorReporting;
use crate::constants::{ICMP_IDENTIFIER_RANGE, ICMP_SEQUENCE};
use crate::error::Error;
use crate::net::common::{await_response, finish, FaultLog};
use crate::net::socket::Socket;
use crate::probe::{ProbeRequest, ProbeResult};
use rand::Rng;
use std::net::{IpAddr, SocketAddr};
use tracert_dns::Resolver;
use tracert_packet::icmpv4::build_icmp_echo;
use tracing::instrument;

/// Send an `ICMP` echo request and wait for any `ICMP` response.
///
/// A single raw socket is used to send the request and receive the response.
/// The socket is closed before the responder is resolved.
///
/// A failure to send the request is recorded but the wait for a response
/// still takes place.
#[instrument(skip(resolver), level = "trace")]
pub fn probe_icmp<S: Socket, R: Resolver>(
    request: &ProbeRequest,
    resolver: &R,
    reporting: ErrorReporting,
) -> ProbeResult {
    let mut faults = FaultLog::new(reporting);
    let mut socket = match S::new_icmp_socket_ipv4() {
        Ok(socket) => socket,
        Err(err) => {
            faults.record(Error::from(err));
            return ProbeResult::timeout(faults.into_inner());
        }
    };
    if let Err(err) = socket.set_ttl(request.ttl.0) {
        faults.record(Error::from(err));
    }
    let identifier = rand::rng().random_range(ICMP_IDENTIFIER_RANGE);
    let echo_request = build_icmp_echo(identifier, ICMP_SEQUENCE);
    let dest = SocketAddr::new(IpAddr::V4(request.target_addr), request.port.0);
    if let Err(err) = socket.send_to(&echo_request, dest) {
        faults.record(Error::from(err));
    }
    let responder = await_response(&mut socket, request.timeout, &mut faults);
    drop(socket);
    finish(resolver, responder, faults)
}
