use crate::config::ErrorReporting;
use crate::constants::MAX_RECV_SIZE;
use crate::error::Error;
use crate::net::socket::Socket;
use crate::probe::{Fault, ProbeResult};
use crate::resolve::resolve_into;
use std::net::IpAddr;
use std::time::Duration;
use tracert_dns::Resolver;

/// The faults recorded while sending a single probe.
///
/// Each fault is logged as it is recorded.
#[derive(Debug)]
pub struct FaultLog {
    reporting: ErrorReporting,
    faults: Vec<Fault>,
}

impl FaultLog {
    pub const fn new(reporting: ErrorReporting) -> Self {
        Self {
            reporting,
            faults: Vec::new(),
        }
    }

    pub fn record(&mut self, fault: impl Into<Fault>) {
        let fault = fault.into();
        self.reporting.report(&fault);
        self.faults.push(fault);
    }

    pub fn into_inner(self) -> Vec<Fault> {
        self.faults
    }
}

/// Wait up to `timeout` for a response on `socket` and return the address it came from.
///
/// The content of the response is not inspected.
pub fn await_response<S: Socket>(
    socket: &mut S,
    timeout: Duration,
    faults: &mut FaultLog,
) -> Option<IpAddr> {
    match socket.is_readable(timeout) {
        Ok(true) => {}
        Ok(false) => {
            faults.record(Fault::Timeout(timeout));
            return None;
        }
        Err(err) => {
            faults.record(Error::from(err));
            return None;
        }
    }
    let mut buf = [0_u8; MAX_RECV_SIZE];
    match socket.recv_from(&mut buf) {
        Ok((_, Some(addr))) => Some(addr.ip()),
        Ok((_, None)) => {
            faults.record(Error::MissingAddr);
            None
        }
        Err(err) => {
            faults.record(Error::from(err));
            None
        }
    }
}

/// Build the result of a probe, resolving the hostname of the responder if there is one.
pub fn finish<R: Resolver>(
    resolver: &R,
    responder: Option<IpAddr>,
    mut faults: FaultLog,
) -> ProbeResult {
    match responder {
        None => ProbeResult::timeout(faults.into_inner()),
        Some(addr) => {
            let hostname = resolve_into(resolver, &addr.to_string(), &mut faults);
            ProbeResult::responded(addr, hostname, faults.into_inner())
        }
    }
}
