use crate::error::IoResult as Result;
use std::net::SocketAddr;
use std::time::Duration;

/// The socket operations required to send a probe and receive its response.
#[cfg_attr(test, mockall::automock)]
pub trait Socket
where
    Self: Sized,
{
    /// Create a raw IPv4 socket for sending ICMP probes and receiving responses.
    fn new_icmp_socket_ipv4() -> Result<Self>;
    /// Create an IPv4 datagram socket for sending UDP probes.
    fn new_udp_send_socket_ipv4() -> Result<Self>;
    fn bind(&mut self, address: SocketAddr) -> Result<()>;
    fn set_ttl(&mut self, ttl: u32) -> Result<()>;
    fn send_to(&mut self, buf: &[u8], addr: SocketAddr) -> Result<()>;
    /// Returns true if the socket becomes readable before the timeout, false otherwise.
    fn is_readable(&mut self, timeout: Duration) -> Result<bool>;
    fn recv_from(&mut self, buf: &mut [u8]) -> Result<(usize, Option<SocketAddr>)>;
}
