/// Global constants used across ecochecker
///
/// Values here are the built-in defaults; everything tunable at process
/// start is also exposed through `config::schemas`.

// ============================================================================
// CACHE CONSTANTS
// ============================================================================

/// Default lifetime of a cached composite result (1 hour)
pub const DEFAULT_CACHE_DURATION_MS: u64 = 3_600_000;

/// Default maximum number of cached composite results
pub const DEFAULT_MAX_CACHE_SIZE: usize = 100;

/// Period of the background expiry sweep (5 minutes)
pub const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 300;

/// Prefix of every cache fingerprint
pub const CACHE_KEY_PREFIX: &str = "eco_";

// ============================================================================
// PROVIDER CONSTANTS
// ============================================================================

pub const DEFAULT_WEBSITE_CARBON_URL: &str = "https://api.websitecarbon.com";
pub const DEFAULT_GREEN_WEB_URL: &str = "https://api.thegreenwebfoundation.org";

/// Per-call timeout for provider adapters
pub const PROVIDER_TIMEOUT_SECS: u64 = 10;

/// Shorter timeout used by the reachability probe
pub const HEALTH_PROBE_TIMEOUT_SECS: u64 = 5;

pub const USER_AGENT: &str = "EcoCheckerAPI/1.0";

// ============================================================================
// SCORING CONSTANTS
// ============================================================================

/// Every score starts here before adjustments
pub const BASE_SCORE: f64 = 50.0;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Upper bound on the recommendation list
pub const MAX_RECOMMENDATIONS: usize = 6;

// ============================================================================
// PRESENTATION CONSTANTS
// ============================================================================

/// Anchor the embedding page links the banner to
pub const BANNER_DETAILS_ANCHOR: &str = "#eco-details";

pub const BANNER_VERSION: &str = "1.0";

// ============================================================================
// WEBSERVER CONSTANTS
// ============================================================================

pub const DEFAULT_WEBSERVER_HOST: &str = "127.0.0.1";
pub const DEFAULT_WEBSERVER_PORT: u16 = 8000;

/// Default config file location
pub const CONFIG_FILE_PATH: &str = "data/config.toml";
