use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;
use thiserror::Error;

/// A DNS resolver.
pub trait Resolver {
    /// Perform a blocking DNS hostname lookup and return the resolved IPv4 or IPv6 addresses.
    fn lookup(&self, hostname: &str) -> Result<ResolvedIpAddrs>;

    /// Perform a blocking reverse DNS lookup of `IpAddr` and return the hostname.
    ///
    /// An empty hostname is reported as [`Error::EmptyHostname`].
    fn reverse_lookup(&self, addr: IpAddr) -> Result<String>;

    /// Resolve `host` to a single `Ipv4Addr`.
    ///
    /// An IPv4 literal is returned as is, without querying the resolver.
    /// Otherwise the first IPv4 address returned for the hostname is used.
    fn lookup_ipv4(&self, host: &str) -> Result<Ipv4Addr> {
        if let Ok(addr) = Ipv4Addr::from_str(host) {
            return Ok(addr);
        }
        self.lookup(host)?
            .into_iter()
            .find_map(|addr| match addr {
                IpAddr::V4(addr) => Some(addr),
                IpAddr::V6(_) => None,
            })
            .ok_or_else(|| Error::NoIpv4Addr(host.to_string()))
    }
}

/// A DNS resolver error result.
pub type Result<T> = std::result::Result<T, Error>;

/// A DNS resolver error.
#[derive(Error, Debug)]
pub enum Error {
    #[error("DNS lookup failed: {0}")]
    LookupFailed(Box<dyn std::error::Error + Send + Sync + 'static>),
    #[error("reverse DNS lookup of {0} failed: {1}")]
    ReverseLookupFailed(IpAddr, Box<dyn std::error::Error + Send + Sync + 'static>),
    #[error("reverse DNS lookup of {0} returned an empty hostname")]
    EmptyHostname(IpAddr),
    #[error("no IPv4 address found for {0}")]
    NoIpv4Addr(String),
}

/// The output of a successful DNS lookup.
#[derive(Debug, Clone)]
pub struct ResolvedIpAddrs(pub(super) Vec<IpAddr>);

impl IntoIterator for ResolvedIpAddrs {
    type Item = IpAddr;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<Vec<IpAddr>> for ResolvedIpAddrs {
    fn from(addrs: Vec<IpAddr>) -> Self {
        Self(addrs)
    }
}
