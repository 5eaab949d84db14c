//! tracert - a minimal traceroute library.
//!
//! A trace sends one probe per hop, with an increasing time-to-live, and
//! records which host answered each probe. Probes are either `ICMP` echo
//! requests or `UDP` datagrams and are sent strictly one at a time.
//!
//! # Example
//!
//! The following example traces the route to `1.1.1.1` using `ICMP` and
//! prints each hop as it is discovered:
//!
//! ```no_run
//! use std::net::Ipv4Addr;
//! use tracert_core::Builder;
//!
//! let mut tracer = Builder::new(Ipv4Addr::new(1, 1, 1, 1)).build();
//! let mut trace = tracer.trace();
//! for hop in trace.by_ref() {
//!     println!("{}. {} ({})", hop.index(), hop.result().address(), hop.result().hostname());
//! }
//! if trace.reached() {
//!     println!("Reached");
//! }
//! ```
//!
//! # See Also
//!
//! - [`Builder`] - Build a [`Tracer`].
//! - [`Tracer::trace`] - Start a trace.
#![warn(clippy::all, clippy::pedantic, clippy::nursery, rust_2018_idioms)]
#![allow(
    clippy::module_name_repetitions,
    clippy::option_if_let_else,
    clippy::missing_const_for_fn,
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc
)]
#![deny(unsafe_code)]

mod builder;
mod config;
mod constants;
mod error;
mod net;
mod probe;
mod resolve;
mod tracer;
mod transport;
mod types;

pub use builder::Builder;
pub use config::{defaults, ErrorReporting, Protocol};
pub use error::{Error, IoError, IoOperation, IoResult, ResolutionError, Result};
pub use net::socket::Socket;
pub use net::{probe_icmp, probe_udp, Prober, SocketImpl};
pub use probe::{Fault, HopRecord, ProbeRequest, ProbeResult, Responder};
pub use resolve::resolve;
pub use tracer::{Trace, TraceStatus, Tracer};
pub use transport::Transport;
pub use types::{Port, TimeToLive};
