//! Raw socket privileges for tracert.
//!
//! Every tracert probe, `ICMP` or `UDP`, waits for the router response on a
//! raw `IPPROTO_ICMP` socket. Opening one needs `CAP_NET_RAW` on Linux and
//! root elsewhere, so the CLI checks for it up front rather than reporting a
//! socket fault on every hop.
//!
//! # Examples
//!
//! ```rust
//! # fn main() -> anyhow::Result<()> {
//! use tracert_privilege::Privilege;
//!
//! if !Privilege::acquire_privileges()?.has_privileges() {
//!     eprintln!("run as root or grant CAP_NET_RAW");
//! }
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]

/// A privilege error result.
pub type Result<T> = std::result::Result<T, Error>;

/// A privilege error.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[cfg(target_os = "linux")]
    #[error("failed to query or raise CAP_NET_RAW: {0}")]
    CapsError(#[from] caps::errors::CapsError),
}

/// Whether this process may open raw sockets.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Privilege {
    has_privileges: bool,
}

impl Privilege {
    /// Raise `CAP_NET_RAW` if the process is permitted to, then report
    /// whether raw sockets can be opened.
    ///
    /// Outside Linux nothing is raised and only the effective user is checked.
    pub fn acquire_privileges() -> Result<Self> {
        raise_net_raw()?;
        Ok(Self {
            has_privileges: can_open_raw_sockets()?,
        })
    }

    #[must_use]
    pub const fn has_privileges(&self) -> bool {
        self.has_privileges
    }
}

#[cfg(target_os = "linux")]
fn raise_net_raw() -> Result<()> {
    use caps::{CapSet, Capability};
    if caps::has_cap(None, CapSet::Permitted, Capability::CAP_NET_RAW)? {
        caps::raise(None, CapSet::Effective, Capability::CAP_NET_RAW)?;
    }
    Ok(())
}

#[cfg(target_os = "linux")]
fn can_open_raw_sockets() -> Result<bool> {
    Ok(caps::has_cap(
        None,
        caps::CapSet::Effective,
        caps::Capability::CAP_NET_RAW,
    )?)
}

#[cfg(all(unix, not(target_os = "linux")))]
#[expect(clippy::unnecessary_wraps)]
const fn raise_net_raw() -> Result<()> {
    Ok(())
}

#[cfg(all(unix, not(target_os = "linux")))]
#[expect(clippy::unnecessary_wraps)]
fn can_open_raw_sockets() -> Result<bool> {
    Ok(nix::unistd::Uid::effective().is_root())
}
