//! Blocking forward and reverse DNS lookups for tracert.
//!
//! Lookups are delegated to the operating system resolver.  No caching is
//! performed: every call results in a fresh query.
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> anyhow::Result<()> {
//! use std::net::IpAddr;
//! use tracert_dns::{DnsResolver, Resolver};
//!
//! let resolver = DnsResolver::new();
//! let addr = resolver.lookup_ipv4("example.com")?;
//! match resolver.reverse_lookup(IpAddr::V4(addr)) {
//!     Ok(hostname) => println!("{addr} is {hostname}"),
//!     Err(err) => println!("{addr} could not be resolved: {err}"),
//! }
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]

mod resolver;
mod system;

pub use resolver::{Error, ResolvedIpAddrs, Resolver, Result};
pub use system::DnsResolver;
