//! Structured logging for ecochecker
//!
//! - Standard log levels (Error/Warning/Info/Debug/Verbose)
//! - Per-subsystem debug control via `--debug <tag>`
//! - Colored console output on stderr
//!
//! ## Usage
//!
//! ```rust
//! use ecochecker::logger::{self, LogTag};
//!
//! logger::warning(LogTag::Provider, "Website Carbon unreachable, using synthetic data");
//! logger::debug(LogTag::Cache, "Cache hit for https://example.com"); // Only with --debug cache
//! ```

mod config;
mod core;
mod format;
mod levels;
mod tags;

pub use config::{get_logger_config, set_logger_config, LoggerConfig};
pub use levels::LogLevel;
pub use tags::LogTag;

/// Install the logger configuration
///
/// Call once at startup, before services are built. Without it the logger
/// runs with `LoggerConfig::default()` (Info threshold, no debug tags).
pub fn init(config: LoggerConfig) {
    set_logger_config(config);
}

/// Log at ERROR level (always shown)
pub fn error(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level
pub fn warning(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level
pub fn info(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level, only shown when the tag is enabled
pub fn debug(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Debug, message);
}

/// Log at VERBOSE level, only shown with --verbose
pub fn verbose(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Verbose, message);
}
