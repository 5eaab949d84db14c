use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::ops::Range;

/// The range from which the identifier of each `ICMP` echo request is drawn.
pub const ICMP_IDENTIFIER_RANGE: Range<u16> = 0..32000;

/// The sequence number of every `ICMP` echo request.
///
/// Exactly one probe is sent per hop and so the sequence never advances.
pub const ICMP_SEQUENCE: u16 = 1;

/// The payload of every `UDP` probe.
pub const UDP_PAYLOAD: &[u8] = b"hello";

/// The local address the `UDP` response socket is bound to.
pub const UDP_RECV_BIND_ADDR: SocketAddr =
    SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 1);

/// The maximum number of bytes read from a response.
pub const MAX_RECV_SIZE: usize = 1024;
