use crate::config::Protocol;
use crate::net::Prober;
use crate::probe::{HopRecord, ProbeRequest};
use crate::types::{Port, TimeToLive};
use std::net::Ipv4Addr;
use std::time::Duration;
use tracing::instrument;

/// A sequential traceroute.
///
/// Use [`crate::Builder`] to create a tracer.
#[derive(Debug)]
pub struct Tracer<P> {
    target_addr: Ipv4Addr,
    protocol: Protocol,
    timeout: Duration,
    max_steps: u32,
    port: Port,
    prober: P,
}

impl<P: Prober> Tracer<P> {
    pub(crate) const fn new(
        target_addr: Ipv4Addr,
        protocol: Protocol,
        timeout: Duration,
        max_steps: u32,
        port: Port,
        prober: P,
    ) -> Self {
        Self {
            target_addr,
            protocol,
            timeout,
            max_steps,
            port,
            prober,
        }
    }

    /// Start a trace.
    ///
    /// The returned [`Trace`] is lazy: each hop is probed only when the next
    /// [`HopRecord`] is requested. Exactly one probe is sent per hop, starting
    /// with a ttl of 1, and the trace ends after the hop whose responder
    /// matches the target address or after `max_steps` hops.
    pub fn trace(&mut self) -> Trace<'_, P> {
        Trace {
            tracer: self,
            next_ttl: 1,
            status: TraceStatus::Running,
        }
    }

    #[must_use]
    pub const fn target_addr(&self) -> Ipv4Addr {
        self.target_addr
    }

    #[must_use]
    pub const fn protocol(&self) -> Protocol {
        self.protocol
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    #[must_use]
    pub const fn max_steps(&self) -> u32 {
        self.max_steps
    }

    #[must_use]
    pub const fn port(&self) -> Port {
        self.port
    }

    #[must_use]
    pub const fn prober(&self) -> &P {
        &self.prober
    }

    fn request(&self, ttl: TimeToLive) -> ProbeRequest {
        ProbeRequest {
            target_addr: self.target_addr,
            ttl,
            timeout: self.timeout,
            protocol: self.protocol,
            port: self.port,
        }
    }
}

/// The state of a [`Trace`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TraceStatus {
    /// More hops may follow.
    Running,
    /// The target responded, no more hops follow.
    Reached,
    /// `max_steps` hops were probed without reaching the target.
    Exhausted,
}

/// A lazy sequence of [`HopRecord`] in ttl order.
#[derive(Debug)]
pub struct Trace<'a, P> {
    tracer: &'a mut Tracer<P>,
    next_ttl: u32,
    status: TraceStatus,
}

impl<P: Prober> Trace<'_, P> {
    #[must_use]
    pub const fn status(&self) -> TraceStatus {
        self.status
    }

    /// Whether the trace ended because the target responded.
    #[must_use]
    pub fn reached(&self) -> bool {
        self.status == TraceStatus::Reached
    }
}

impl<P: Prober> Iterator for Trace<'_, P> {
    type Item = HopRecord;

    #[instrument(skip(self), level = "trace")]
    fn next(&mut self) -> Option<Self::Item> {
        if self.status != TraceStatus::Running {
            return None;
        }
        if self.next_ttl > self.tracer.max_steps {
            self.status = TraceStatus::Exhausted;
            return None;
        }
        let ttl = TimeToLive(self.next_ttl);
        let request = self.tracer.request(ttl);
        let result = self.tracer.prober.probe(&request);
        // the responder is compared with the target textually
        if result.address() == self.tracer.target_addr.to_string() {
            self.status = TraceStatus::Reached;
        }
        tracing::debug!(%ttl, address = %result.address(), status = ?self.status);
        let index = (self.next_ttl - 1) as usize;
        self.next_ttl += 1;
        Some(HopRecord::new(index, ttl, result))
    }
}
