use crate::config::ErrorReporting;
use crate::constants::{UDP_PAYLOAD, UDP_RECV_BIND_ADDR};
use crate::error::Error;
use crate::net::common::{await_response, finish, FaultLog};
use crate::net::socket::Socket;
use crate::probe::{ProbeRequest, ProbeResult};
use std::net::{IpAddr, SocketAddr};
use tracert_dns::Resolver;
use tracing::instrument;

/// Send a `UDP` datagram and wait for any `ICMP` response.
///
/// The datagram is sent from a `UDP` socket and the response is read from a
/// separate raw `ICMP` socket. Both sockets are closed before the responder
/// is resolved.
///
/// A failure to bind the receive socket or to send the datagram is recorded
/// but the wait for a response still takes place.
#[instrument(skip(resolver), level = "trace")]
pub fn probe_udp<S: Socket, R: Resolver>(
    request: &ProbeRequest,
    resolver: &R,
    reporting: ErrorReporting,
) -> ProbeResult {
    let mut faults = FaultLog::new(reporting);
    let mut send_socket = match S::new_udp_send_socket_ipv4() {
        Ok(socket) => socket,
        Err(err) => {
            faults.record(Error::from(err));
            return ProbeResult::timeout(faults.into_inner());
        }
    };
    if let Err(err) = send_socket.set_ttl(request.ttl.0) {
        faults.record(Error::from(err));
    }
    let mut recv_socket = match S::new_icmp_socket_ipv4() {
        Ok(socket) => socket,
        Err(err) => {
            faults.record(Error::from(err));
            return ProbeResult::timeout(faults.into_inner());
        }
    };
    if let Err(err) = recv_socket.bind(UDP_RECV_BIND_ADDR) {
        faults.record(Error::from(err));
    }
    let dest = SocketAddr::new(IpAddr::V4(request.target_addr), request.port.0);
    if let Err(err) = send_socket.send_to(UDP_PAYLOAD, dest) {
        faults.record(Error::from(err));
    }
    let responder = await_response(&mut recv_socket, request.timeout, &mut faults);
    drop(recv_socket);
    drop(send_socket);
    finish(resolver, responder, faults)
}
