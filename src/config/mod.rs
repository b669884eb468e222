//! Configuration system
//!
//! - `macros`: the `config_struct!` definition helper
//! - `schemas`: every configuration structure with its defaults
//! - `utils`: loading, environment overrides, validation

mod macros;
pub mod schemas;
pub mod utils;

pub use schemas::{CacheSettings, Config, ProvidersConfig, WebserverConfig};
pub use utils::{apply_env_overrides, load_config, load_config_from_path, validate_config};
