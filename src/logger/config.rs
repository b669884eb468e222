/// Runtime logger configuration
///
/// Held in a process-wide `RwLock` so every log call can consult it without
/// threading a handle through the whole crate.
use super::levels::LogLevel;
use super::tags::LogTag;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Highest level that may be printed
    pub min_level: LogLevel,

    /// Tags with debug output enabled
    pub debug_tags: HashSet<LogTag>,

    /// Disable ANSI colors (e.g. when output is piped)
    pub plain: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            debug_tags: HashSet::new(),
            plain: false,
        }
    }
}

impl LoggerConfig {
    /// Build a config from CLI-style switches
    ///
    /// Unknown debug keys are ignored.
    pub fn from_flags<'a, I>(debug_keys: I, verbose: bool, quiet: bool) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let debug_tags: HashSet<LogTag> = debug_keys
            .into_iter()
            .filter_map(LogTag::from_debug_key)
            .collect();

        let min_level = if verbose {
            LogLevel::Verbose
        } else if !debug_tags.is_empty() {
            LogLevel::Debug
        } else if quiet {
            LogLevel::Warning
        } else {
            LogLevel::Info
        };

        Self {
            min_level,
            debug_tags,
            plain: false,
        }
    }
}

static LOGGER_CONFIG: Lazy<RwLock<LoggerConfig>> =
    Lazy::new(|| RwLock::new(LoggerConfig::default()));

pub fn get_logger_config() -> LoggerConfig {
    LOGGER_CONFIG.read().clone()
}

pub fn set_logger_config(config: LoggerConfig) {
    *LOGGER_CONFIG.write() = config;
}

pub fn is_debug_enabled_for_tag(tag: &LogTag) -> bool {
    let config = LOGGER_CONFIG.read();
    config.min_level == LogLevel::Verbose || config.debug_tags.contains(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags_levels() {
        let config = LoggerConfig::from_flags(Vec::<&str>::new(), false, false);
        assert_eq!(config.min_level, LogLevel::Info);

        let config = LoggerConfig::from_flags(Vec::<&str>::new(), false, true);
        assert_eq!(config.min_level, LogLevel::Warning);

        let config = LoggerConfig::from_flags(vec!["cache", "bogus"], false, false);
        assert_eq!(config.min_level, LogLevel::Debug);
        assert!(config.debug_tags.contains(&LogTag::Cache));
        assert_eq!(config.debug_tags.len(), 1);

        let config = LoggerConfig::from_flags(vec!["cache"], true, true);
        assert_eq!(config.min_level, LogLevel::Verbose);
    }
}
