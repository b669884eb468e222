/// Configuration utilities - loading, environment overrides and validation
///
/// Configuration is read once at process start and handed to the components
/// that need it; nothing here is global.
use super::schemas::Config;
use crate::errors::{EcoError, EcoResult};
use crate::logger::{self, LogTag};
use std::path::Path;
use std::str::FromStr;

/// Environment variables consulted after the file is loaded
pub const ENV_CACHE_DURATION: &str = "CACHE_DURATION";
pub const ENV_MAX_CACHE_SIZE: &str = "MAX_CACHE_SIZE";
pub const ENV_WEBSITE_CARBON_URL: &str = "WEBSITE_CARBON_URL";
pub const ENV_GREEN_WEB_URL: &str = "GREEN_WEB_URL";
pub const ENV_PORT: &str = "PORT";

/// Load configuration from a TOML file
///
/// A missing file is not an error: defaults are used and a warning logged.
pub fn load_config_from_path<P: AsRef<Path>>(path: P) -> EcoResult<Config> {
    let path = path.as_ref();
    if !path.exists() {
        logger::warning(
            LogTag::Config,
            &format!("Config file '{}' not found, using default values", path.display()),
        );
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path)?;
    toml::from_str::<Config>(&contents).map_err(|e| {
        EcoError::Config(format!("Failed to parse config file '{}': {}", path.display(), e))
    })
}

/// Full startup sequence: file, then process environment, then validation
pub fn load_config<P: AsRef<Path>>(path: P) -> EcoResult<Config> {
    let mut config = load_config_from_path(path)?;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    validate_config(&config)?;
    Ok(config)
}

/// Apply environment overrides using `lookup` to read variables
///
/// Numeric values that fail to parse are skipped with a warning.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(duration) = parse_env::<u64, _>(&lookup, ENV_CACHE_DURATION) {
        config.cache.duration_ms = duration;
    }
    if let Some(max_size) = parse_env::<usize, _>(&lookup, ENV_MAX_CACHE_SIZE) {
        config.cache.max_size = max_size;
    }
    if let Some(port) = parse_env::<u16, _>(&lookup, ENV_PORT) {
        config.webserver.port = port;
    }
    if let Some(url) = lookup(ENV_WEBSITE_CARBON_URL).filter(|v| !v.trim().is_empty()) {
        config.providers.website_carbon_url = url.trim().to_string();
    }
    if let Some(url) = lookup(ENV_GREEN_WEB_URL).filter(|v| !v.trim().is_empty()) {
        config.providers.green_web_url = url.trim().to_string();
    }
}

fn parse_env<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            logger::warning(
                LogTag::Config,
                &format!("Ignoring {}='{}': not a valid number", key, raw),
            );
            None
        }
    }
}

pub fn validate_config(config: &Config) -> EcoResult<()> {
    if config.cache.max_size == 0 {
        return Err(EcoError::Config("cache.max_size must be at least 1".to_string()));
    }
    if config.cache.duration_ms == 0 {
        return Err(EcoError::Config("cache.duration_ms must be at least 1".to_string()));
    }
    if config.cache.sweep_interval_secs == 0 {
        return Err(EcoError::Config(
            "cache.sweep_interval_secs must be at least 1".to_string(),
        ));
    }
    if config.providers.timeout_secs == 0 || config.providers.health_timeout_secs == 0 {
        return Err(EcoError::Config("provider timeouts must be at least 1 second".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = load_config_from_path("/nonexistent/ecochecker.toml").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.cache.duration_ms, 3_600_000);
        assert_eq!(config.cache.max_size, 100);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[cache]\nmax_size = 7\n\n[webserver]\nport = 9100").unwrap();

        let config = load_config_from_path(file.path()).unwrap();
        assert_eq!(config.cache.max_size, 7);
        assert_eq!(config.cache.duration_ms, 3_600_000);
        assert_eq!(config.webserver.port, 9100);
        assert_eq!(config.providers.timeout_secs, 10);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[cache\nmax_size = ").unwrap();

        let err = load_config_from_path(file.path()).unwrap_err();
        assert!(matches!(err, EcoError::Config(_)));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_CACHE_DURATION, "60000"),
            (ENV_MAX_CACHE_SIZE, "not-a-number"),
            (ENV_GREEN_WEB_URL, "http://localhost:4000"),
            (ENV_PORT, "8181"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        apply_env_overrides(&mut config, |key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.cache.duration_ms, 60_000);
        assert_eq!(config.cache.max_size, 100);
        assert_eq!(config.providers.green_web_url, "http://localhost:4000");
        assert_eq!(config.webserver.port, 8181);
        assert_eq!(
            config.providers.website_carbon_url,
            "https://api.websitecarbon.com"
        );
    }

    #[test]
    fn test_validation_rejects_zero_capacity() {
        let mut config = Config::default();
        assert!(validate_config(&config).is_ok());

        config.cache.max_size = 0;
        assert!(matches!(validate_config(&config), Err(EcoError::Config(_))));
    }
}
