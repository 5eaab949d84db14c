use crate::probe::Fault;
use std::fmt::{Display, Formatter};

/// Default values for configuration.
pub mod defaults {
    use crate::{ErrorReporting, Protocol};
    use std::time::Duration;

    /// The default value for `protocol`.
    pub const DEFAULT_PROTOCOL: Protocol = Protocol::Icmp;

    /// The default value for `timeout`.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

    /// The default value for `max-steps`.
    pub const DEFAULT_MAX_STEPS: u32 = 32;

    /// The default value for `print-errors`.
    pub const DEFAULT_ERROR_REPORTING: ErrorReporting = ErrorReporting::Quiet;
}

/// The tracing protocol.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Protocol {
    /// Internet Control Message Protocol
    Icmp,
    /// User Datagram Protocol
    Udp,
}

impl Display for Protocol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Icmp => write!(f, "icmp"),
            Self::Udp => write!(f, "udp"),
        }
    }
}

/// How socket and DNS errors encountered while probing are reported.
///
/// Errors are always recorded against the probe result, this only controls
/// the level at which they are logged.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ErrorReporting {
    /// Log errors at `debug` level.
    Quiet,
    /// Log errors at `warn` level.
    Verbose,
}

impl ErrorReporting {
    #[must_use]
    pub const fn is_verbose(self) -> bool {
        match self {
            Self::Quiet => false,
            Self::Verbose => true,
        }
    }

    /// Log a probe fault.
    ///
    /// Timeouts are expected and are always logged at `debug` level.
    pub fn report(self, fault: &Fault) {
        match fault {
            Fault::Timeout(_) => tracing::debug!(%fault),
            _ if self.is_verbose() => tracing::warn!(%fault),
            _ => tracing::debug!(%fault),
        }
    }
}

impl From<bool> for ErrorReporting {
    fn from(verbose: bool) -> Self {
        if verbose {
            Self::Verbose
        } else {
            Self::Quiet
        }
    }
}

impl Display for ErrorReporting {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Protocol::Icmp, "icmp")]
    #[test_case(Protocol::Udp, "udp")]
    fn test_protocol_display(protocol: Protocol, expected: &str) {
        assert_eq!(expected, protocol.to_string());
    }

    #[test]
    fn test_error_reporting_from_bool() {
        assert_eq!(ErrorReporting::Verbose, ErrorReporting::from(true));
        assert_eq!(ErrorReporting::Quiet, ErrorReporting::from(false));
        assert!(!defaults::DEFAULT_ERROR_REPORTING.is_verbose());
    }
}
