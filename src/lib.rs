pub mod banner;
pub mod cache;
pub mod checker;
pub mod config;
pub mod constants;
pub mod errors;
pub mod health;
pub mod logger;
pub mod providers;
pub mod utils;

#[cfg(feature = "web")]
pub mod webserver;
