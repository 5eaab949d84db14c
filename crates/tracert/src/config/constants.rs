use crate::config::LogFormat;
use std::time::Duration;
use tracert_core::Protocol;

/// The default value for `timeout`.
pub const DEFAULT_TIMEOUT: Duration = tracert_core::defaults::DEFAULT_TIMEOUT;

/// The default value for `max-steps`.
pub const DEFAULT_MAX_STEPS: u32 = tracert_core::defaults::DEFAULT_MAX_STEPS;

/// The default value for `protocol`.
pub const DEFAULT_PROTOCOL: Protocol = tracert_core::defaults::DEFAULT_PROTOCOL;

/// The default value for `print-errors`.
pub const DEFAULT_PRINT_ERRORS: bool = false;

/// The default value for `log-format`.
pub const DEFAULT_LOG_FORMAT: LogFormat = LogFormat::Compact;

/// The default value for `log-filter`.
pub const DEFAULT_LOG_FILTER: &str = "warn";
