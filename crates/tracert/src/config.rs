use clap::ValueEnum;
use std::time::Duration;
use tracert_core::{ErrorReporting, Protocol};

mod cmd;
mod constants;

pub use cmd::Args;

/// How to format log data.
#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum LogFormat {
    /// Display log data in a compact format.
    Compact,
    /// Display log data in a pretty format.
    Pretty,
    /// Display log data in a json format.
    Json,
}

/// Fully parsed and validated configuration.
///
/// Out of range or malformed values for `timeout`, `max-steps` and
/// `protocol` are replaced by their defaults rather than rejected.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TracertConfig {
    pub destination: Option<String>,
    pub timeout: Duration,
    pub max_steps: u32,
    pub protocol: Protocol,
    pub error_reporting: ErrorReporting,
    pub log_format: LogFormat,
    pub log_filter: String,
}

impl From<Args> for TracertConfig {
    fn from(args: Args) -> Self {
        Self {
            destination: args.destination,
            timeout: parse_timeout(args.timeout.as_deref()),
            max_steps: parse_max_steps(args.max_steps.as_deref()),
            protocol: parse_protocol(args.protocol.as_deref()),
            error_reporting: ErrorReporting::from(args.print_errors),
            log_format: args.log_format.unwrap_or(constants::DEFAULT_LOG_FORMAT),
            log_filter: args
                .log_filter
                .unwrap_or_else(|| String::from(constants::DEFAULT_LOG_FILTER)),
        }
    }
}

impl Default for TracertConfig {
    fn default() -> Self {
        Self {
            destination: None,
            timeout: constants::DEFAULT_TIMEOUT,
            max_steps: constants::DEFAULT_MAX_STEPS,
            protocol: constants::DEFAULT_PROTOCOL,
            error_reporting: ErrorReporting::from(constants::DEFAULT_PRINT_ERRORS),
            log_format: constants::DEFAULT_LOG_FORMAT,
            log_filter: String::from(constants::DEFAULT_LOG_FILTER),
        }
    }
}

/// Seconds to wait for each response, negative or non-finite values fall back to the default.
fn parse_timeout(timeout: Option<&str>) -> Duration {
    timeout
        .and_then(|t| t.trim().parse::<f64>().ok())
        .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
        .unwrap_or(constants::DEFAULT_TIMEOUT)
}

fn parse_max_steps(max_steps: Option<&str>) -> u32 {
    max_steps
        .and_then(|n| n.trim().parse::<u32>().ok())
        .unwrap_or(constants::DEFAULT_MAX_STEPS)
}

fn parse_protocol(protocol: Option<&str>) -> Protocol {
    match protocol.map(|p| p.trim().to_ascii_lowercase()).as_deref() {
        Some("udp") => Protocol::Udp,
        Some("icmp") => Protocol::Icmp,
        _ => constants::DEFAULT_PROTOCOL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use test_case::test_case;

    fn parse_config(cmd: &str) -> Result<TracertConfig, clap::Error> {
        let args = Args::try_parse_from(cmd.split_whitespace())?;
        Ok(TracertConfig::from(args))
    }

    fn cfg() -> TracertConfig {
        TracertConfig {
            destination: Some(String::from("example.com")),
            ..TracertConfig::default()
        }
    }

    #[test]
    fn test_config_default() -> Result<(), clap::Error> {
        assert_eq!(cfg(), parse_config("tracert example.com")?);
        Ok(())
    }

    #[test]
    fn test_no_destination() -> Result<(), clap::Error> {
        assert_eq!(None, parse_config("tracert")?.destination);
        Ok(())
    }

    #[test_case("tracert example.com --timeout 2", Duration::from_secs(2); "whole seconds")]
    #[test_case("tracert example.com --timeout 0.5", Duration::from_millis(500); "fractional seconds")]
    #[test_case("tracert example.com --timeout 0", Duration::ZERO; "zero")]
    #[test_case("tracert example.com -t 3", Duration::from_secs(3); "short flag")]
    #[test_case("tracert example.com --timeout -5", Duration::from_secs(1); "negative")]
    #[test_case("tracert example.com --timeout abc", Duration::from_secs(1); "not a number")]
    #[test_case("tracert example.com --timeout NaN", Duration::from_secs(1); "nan")]
    #[test_case("tracert example.com --timeout inf", Duration::from_secs(1); "infinite")]
    fn test_timeout(cmd: &str, expected: Duration) -> Result<(), clap::Error> {
        assert_eq!(expected, parse_config(cmd)?.timeout);
        Ok(())
    }

    #[test_case("tracert example.com --max-steps 10", 10; "valid")]
    #[test_case("tracert example.com --max-steps 0", 0; "zero")]
    #[test_case("tracert example.com -m 64", 64; "short flag")]
    #[test_case("tracert example.com --max-steps -3", 32; "negative")]
    #[test_case("tracert example.com --max-steps many", 32; "not a number")]
    #[test_case("tracert example.com --max-steps 2.5", 32; "fractional")]
    fn test_max_steps(cmd: &str, expected: u32) -> Result<(), clap::Error> {
        assert_eq!(expected, parse_config(cmd)?.max_steps);
        Ok(())
    }

    #[test_case("tracert example.com --protocol icmp", Protocol::Icmp; "icmp")]
    #[test_case("tracert example.com --protocol udp", Protocol::Udp; "udp")]
    #[test_case("tracert example.com --protocol UDP", Protocol::Udp; "upper case")]
    #[test_case("tracert example.com -p udp", Protocol::Udp; "short flag")]
    #[test_case("tracert example.com --protocol tcp", Protocol::Icmp; "unknown")]
    fn test_protocol(cmd: &str, expected: Protocol) -> Result<(), clap::Error> {
        assert_eq!(expected, parse_config(cmd)?.protocol);
        Ok(())
    }

    #[test_case("tracert example.com", ErrorReporting::Quiet; "default")]
    #[test_case("tracert example.com --print-errors", ErrorReporting::Verbose; "long flag")]
    #[test_case("tracert example.com -e", ErrorReporting::Verbose; "short flag")]
    fn test_print_errors(cmd: &str, expected: ErrorReporting) -> Result<(), clap::Error> {
        assert_eq!(expected, parse_config(cmd)?.error_reporting);
        Ok(())
    }

    #[test_case("tracert example.com --log-format json", LogFormat::Json; "json")]
    #[test_case("tracert example.com --log-format pretty", LogFormat::Pretty; "pretty")]
    fn test_log_format(cmd: &str, expected: LogFormat) -> Result<(), clap::Error> {
        assert_eq!(expected, parse_config(cmd)?.log_format);
        Ok(())
    }

    #[test]
    fn test_log_filter() -> Result<(), clap::Error> {
        let cfg = parse_config("tracert example.com --log-filter tracert_core=trace")?;
        assert_eq!("tracert_core=trace", cfg.log_filter);
        Ok(())
    }

    #[test]
    fn test_invalid_log_format() {
        assert!(parse_config("tracert example.com --log-format chrome").is_err());
    }
}
