/// Configuration schemas - all config structures defined once with defaults
use crate::config_struct;
use crate::constants::*;

// ============================================================================
// CACHE CONFIGURATION
// ============================================================================

config_struct! {
    /// Composite result cache settings
    pub struct CacheSettings {
        /// Lifetime of a cached result in milliseconds
        duration_ms: u64 = DEFAULT_CACHE_DURATION_MS,

        /// Maximum number of cached results (oldest-inserted evicted first)
        max_size: usize = DEFAULT_MAX_CACHE_SIZE,

        /// Period of the background expiry sweep
        sweep_interval_secs: u64 = DEFAULT_SWEEP_INTERVAL_SECS,
    }
}

// ============================================================================
// PROVIDERS CONFIGURATION
// ============================================================================

config_struct! {
    /// External data provider endpoints and timeouts
    pub struct ProvidersConfig {
        website_carbon_url: String = DEFAULT_WEBSITE_CARBON_URL.to_string(),
        green_web_url: String = DEFAULT_GREEN_WEB_URL.to_string(),

        /// Per-call timeout for adapter requests
        timeout_secs: u64 = PROVIDER_TIMEOUT_SECS,

        /// Timeout for the reachability probe
        health_timeout_secs: u64 = HEALTH_PROBE_TIMEOUT_SECS,

        user_agent: String = USER_AGENT.to_string(),
    }
}

// ============================================================================
// WEBSERVER CONFIGURATION
// ============================================================================

config_struct! {
    pub struct WebserverConfig {
        host: String = DEFAULT_WEBSERVER_HOST.to_string(),
        port: u16 = DEFAULT_WEBSERVER_PORT,
    }
}

// ============================================================================
// ROOT CONFIGURATION
// ============================================================================

config_struct! {
    /// Root configuration structure containing all sub-configurations
    pub struct Config {
        cache: CacheSettings = CacheSettings::default(),
        providers: ProvidersConfig = ProvidersConfig::default(),
        webserver: WebserverConfig = WebserverConfig::default(),
    }
}
