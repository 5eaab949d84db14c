use crate::config::{defaults, ErrorReporting, Protocol};
use crate::net::{Prober, SocketImpl};
use crate::transport::Transport;
use crate::types::Port;
use crate::Tracer;
use std::net::Ipv4Addr;
use std::time::Duration;
use tracert_dns::{DnsResolver, Resolver};

/// Build a tracer.
///
/// # Examples
///
/// ```no_run
/// use std::net::Ipv4Addr;
/// use std::time::Duration;
/// use tracert_core::{Builder, Port, Protocol};
///
/// let mut tracer = Builder::new(Ipv4Addr::new(1, 1, 1, 1))
///     .protocol(Protocol::Udp)
///     .timeout(Duration::from_millis(500))
///     .max_steps(16)
///     .port(Port(33434))
///     .build();
/// for hop in tracer.trace() {
///     println!("{}. {}", hop.index(), hop.result().address());
/// }
/// ```
///
/// # See Also
///
/// - [`Tracer`] - A traceroute implementation.
#[derive(Debug)]
pub struct Builder {
    target_addr: Ipv4Addr,
    protocol: Protocol,
    timeout: Duration,
    max_steps: u32,
    port: Port,
    error_reporting: ErrorReporting,
}

impl Builder {
    /// Build a tracer for `target_addr` with default configuration.
    ///
    /// A random ephemeral port is chosen, see [`Port::ephemeral`].
    #[must_use]
    pub fn new(target_addr: Ipv4Addr) -> Self {
        Self {
            target_addr,
            protocol: defaults::DEFAULT_PROTOCOL,
            timeout: defaults::DEFAULT_TIMEOUT,
            max_steps: defaults::DEFAULT_MAX_STEPS,
            port: Port::ephemeral(),
            error_reporting: defaults::DEFAULT_ERROR_REPORTING,
        }
    }

    /// Set the protocol.
    #[must_use]
    pub fn protocol(self, protocol: Protocol) -> Self {
        Self { protocol, ..self }
    }

    /// Set how long to wait for the response to each probe.
    #[must_use]
    pub fn timeout(self, timeout: Duration) -> Self {
        Self { timeout, ..self }
    }

    /// Set the maximum number of hops to probe.
    ///
    /// A value of zero produces an empty trace.
    #[must_use]
    pub fn max_steps(self, max_steps: u32) -> Self {
        Self { max_steps, ..self }
    }

    /// Set the destination port of every probe.
    #[must_use]
    pub fn port(self, port: Port) -> Self {
        Self { port, ..self }
    }

    /// Set how probe errors are reported.
    #[must_use]
    pub fn error_reporting(self, error_reporting: ErrorReporting) -> Self {
        Self {
            error_reporting,
            ..self
        }
    }

    /// Build the [`Tracer`] using the system sockets and resolver.
    #[must_use]
    pub fn build(self) -> Tracer<Transport<SocketImpl, DnsResolver>> {
        self.build_with_resolver(DnsResolver::new())
    }

    /// Build the [`Tracer`] using the system sockets and the given resolver.
    #[must_use]
    pub fn build_with_resolver<R: Resolver>(
        self,
        resolver: R,
    ) -> Tracer<Transport<SocketImpl, R>> {
        let prober = Transport::new(resolver, self.error_reporting);
        self.build_with_prober(prober)
    }

    /// Build the [`Tracer`] with a custom [`Prober`].
    #[must_use]
    pub fn build_with_prober<P: Prober>(self, prober: P) -> Tracer<P> {
        Tracer::new(
            self.target_addr,
            self.protocol,
            self.timeout,
            self.max_steps,
            self.port,
            prober,
        )
    }
}
