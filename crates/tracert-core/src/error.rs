use std::fmt::{Display, Formatter};
use std::io;
use std::net::SocketAddr;
use thiserror::Error;

/// A tracer error result.
pub type Result<T> = std::result::Result<T, Error>;

/// A tracer error.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] IoError),
    #[error("missing address from socket call")]
    MissingAddr,
}

/// Custom IO error result.
pub type IoResult<T> = std::result::Result<T, IoError>;

/// Custom IO error.
#[derive(Error, Debug)]
pub enum IoError {
    #[error("Bind error for {1}: {0}")]
    Bind(io::Error, SocketAddr),
    #[error("Sendto error for {1}: {0}")]
    SendTo(io::Error, SocketAddr),
    #[error("Failed to {1}: {0}")]
    Other(io::Error, IoOperation),
}

/// Io operation.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum IoOperation {
    NewSocket,
    SetTtl,
    Select,
    RecvFrom,
}

impl Display for IoOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NewSocket => write!(f, "create new socket"),
            Self::SetTtl => write!(f, "set TTL"),
            Self::Select => write!(f, "select"),
            Self::RecvFrom => write!(f, "recv from"),
        }
    }
}

/// A failure to resolve the hostname of a responding address.
#[derive(Error, Debug)]
pub enum ResolutionError {
    #[error("invalid address: {0:?}")]
    InvalidAddr(String),
    #[error(transparent)]
    Dns(#[from] tracert_dns::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};

    #[test]
    fn test_io_error_display() {
        let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(5, 6, 7, 8)), 33434);
        let err = IoError::SendTo(io::Error::from(io::ErrorKind::PermissionDenied), addr);
        assert!(err.to_string().starts_with("Sendto error for 5.6.7.8:33434: "));
        let io_err = io::Error::from(io::ErrorKind::Other);
        let expected = format!("Failed to set TTL: {io_err}");
        let err = IoError::Other(io_err, IoOperation::SetTtl);
        assert_eq!(expected, err.to_string());
    }

    #[test]
    fn test_resolution_error_display() {
        let err = ResolutionError::InvalidAddr(String::from("not-an-ip"));
        assert_eq!(r#"invalid address: "not-an-ip""#, err.to_string());
    }
}
