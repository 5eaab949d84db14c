use crate::config::LogFormat;
use clap::Parser;

/// Trace the route to a host, one hop at a time
#[derive(Parser, Debug)]
#[command(name = "tracert", author, version, about, long_about = None)]
pub struct Args {
    /// The hostname or IPv4 address to trace, prompted for if not given
    pub destination: Option<String>,

    /// How long to wait for each response, in seconds [default: 1]
    #[arg(short = 't', long, allow_hyphen_values = true)]
    pub timeout: Option<String>,

    /// The maximum number of hops to probe [default: 32]
    #[arg(short = 'm', long, allow_hyphen_values = true)]
    pub max_steps: Option<String>,

    /// Tracing protocol, icmp or udp [default: icmp]
    #[arg(short = 'p', long)]
    pub protocol: Option<String>,

    /// Log socket and DNS errors as warnings [default: false]
    #[arg(short = 'e', long)]
    pub print_errors: bool,

    /// The log format [default: compact]
    #[arg(value_enum, long)]
    pub log_format: Option<LogFormat>,

    /// The log filter [default: warn]
    #[arg(long)]
    pub log_filter: Option<String>,
}
