use crate::resolver::{Error, ResolvedIpAddrs, Resolver, Result};
use std::net::IpAddr;
use tracing::instrument;

/// A resolver which uses the operating system's resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct DnsResolver;

impl DnsResolver {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Resolver for DnsResolver {
    #[instrument(level = "trace")]
    fn lookup(&self, hostname: &str) -> Result<ResolvedIpAddrs> {
        dns_lookup::lookup_host(hostname)
            .map(|addrs| ResolvedIpAddrs(addrs.into_iter().collect()))
            .map_err(|err| Error::LookupFailed(Box::new(err)))
    }

    #[instrument(level = "trace", ret)]
    fn reverse_lookup(&self, addr: IpAddr) -> Result<String> {
        let hostname = dns_lookup::lookup_addr(&addr)
            .map_err(|err| Error::ReverseLookupFailed(addr, Box::new(err)))?;
        if hostname.is_empty() {
            Err(Error::EmptyHostname(addr))
        } else {
            Ok(hostname)
        }
    }
}
