use crate::config::ErrorReporting;
use crate::error::ResolutionError;
use crate::net::common::FaultLog;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;
use tracert_dns::Resolver;
use tracing::instrument;

/// Resolve the hostname of a responding `address`.
///
/// This is best-effort: if `address` cannot be parsed, or the reverse lookup
/// fails or yields an empty name, then `address` is returned unchanged. A
/// blank `address` stands for the unspecified address `0.0.0.0`, and so the
/// result is never empty. Failures are logged according to `reporting`.
pub fn resolve<R: Resolver>(resolver: &R, address: &str, reporting: ErrorReporting) -> String {
    resolve_into(resolver, address, &mut FaultLog::new(reporting))
}

/// As [`resolve`], recording any failure in `faults`.
pub(crate) fn resolve_into<R: Resolver>(
    resolver: &R,
    address: &str,
    faults: &mut FaultLog,
) -> String {
    match try_resolve(resolver, address) {
        Ok(hostname) => hostname,
        Err(err) => {
            faults.record(err);
            if address.trim().is_empty() {
                Ipv4Addr::UNSPECIFIED.to_string()
            } else {
                address.to_string()
            }
        }
    }
}

/// Resolve the hostname of `address`, surfacing any failure.
#[instrument(skip(resolver), level = "trace")]
fn try_resolve<R: Resolver>(resolver: &R, address: &str) -> Result<String, ResolutionError> {
    let address = address.trim();
    let addr = if address.is_empty() {
        IpAddr::V4(Ipv4Addr::UNSPECIFIED)
    } else {
        IpAddr::from_str(address).map_err(|_| ResolutionError::InvalidAddr(address.to_string()))?
    };
    let hostname = resolver.reverse_lookup(addr)?;
    if hostname.is_empty() {
        Err(ResolutionError::Dns(tracert_dns::Error::EmptyHostname(addr)))
    } else {
        Ok(hostname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::common::tests::NameResolver;
    use crate::probe::Fault;
    use test_case::test_case;
    use tracert_dns::ResolvedIpAddrs;

    /// Resolves `10.0.0.1` to `gateway.lan`, `0.0.0.0` to `this-host.lan`,
    /// `10.0.0.2` to an empty name and fails everything else.
    struct LanResolver;

    impl Resolver for LanResolver {
        fn lookup(&self, hostname: &str) -> tracert_dns::Result<ResolvedIpAddrs> {
            Err(tracert_dns::Error::NoIpv4Addr(hostname.to_string()))
        }

        fn reverse_lookup(&self, addr: IpAddr) -> tracert_dns::Result<String> {
            match addr.to_string().as_str() {
                "10.0.0.1" => Ok(String::from("gateway.lan")),
                "0.0.0.0" => Ok(String::from("this-host.lan")),
                "10.0.0.2" => Ok(String::new()),
                _ => Err(tracert_dns::Error::ReverseLookupFailed(
                    addr,
                    "unknown host".into(),
                )),
            }
        }
    }

    #[test_case("10.0.0.1", "gateway.lan"; "known address")]
    #[test_case("10.0.0.2", "10.0.0.2"; "empty name")]
    #[test_case("192.168.1.1", "192.168.1.1"; "lookup failure")]
    #[test_case("not-an-ip", "not-an-ip"; "malformed text")]
    #[test_case("*", "*"; "timeout marker")]
    #[test_case("10.0.0.300", "10.0.0.300"; "octet out of range")]
    #[test_case("", "this-host.lan"; "empty input")]
    #[test_case("   ", "this-host.lan"; "blank input")]
    fn test_resolve(address: &str, expected: &str) {
        for reporting in [ErrorReporting::Quiet, ErrorReporting::Verbose] {
            assert_eq!(expected, resolve(&LanResolver, address, reporting));
        }
    }

    #[test]
    fn test_resolve_never_empty() {
        for address in ["", "a", "1.2.3", "::1", "fe80::1", "0.0.0.0", "  "] {
            assert!(!resolve(&LanResolver, address, ErrorReporting::Quiet).is_empty());
        }
    }

    #[test]
    fn test_resolve_empty_input_lookup_failure() {
        let resolver = NameResolver(None);
        for address in ["", " "] {
            assert_eq!("0.0.0.0", resolve(&resolver, address, ErrorReporting::Quiet));
        }
    }

    #[test]
    fn test_resolve_into_records_fault() {
        let mut faults = FaultLog::new(ErrorReporting::Quiet);
        assert_eq!("bogus", resolve_into(&LanResolver, "bogus", &mut faults));
        assert_eq!("gateway.lan", resolve_into(&LanResolver, "10.0.0.1", &mut faults));
        assert!(matches!(
            faults.into_inner().as_slice(),
            [Fault::Resolution(ResolutionError::InvalidAddr(_))]
        ));
    }

    #[test]
    fn test_try_resolve_errors() {
        assert!(matches!(
            try_resolve(&LanResolver, "bogus"),
            Err(ResolutionError::InvalidAddr(_))
        ));
        assert!(matches!(
            try_resolve(&LanResolver, "10.0.0.2"),
            Err(ResolutionError::Dns(tracert_dns::Error::EmptyHostname(_)))
        ));
        assert!(matches!(
            try_resolve(&LanResolver, "10.9.9.9"),
            Err(ResolutionError::Dns(tracert_dns::Error::ReverseLookupFailed(..)))
        ));
    }
}
