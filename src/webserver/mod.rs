//! HTTP layer over the eco checker
//!
//! All endpoints live under `/api/v1` and answer with the
//! `{ success, data | error, meta }` envelope.

pub mod models;
pub mod routes;
pub mod server;
pub mod state;
pub mod utils;

pub use server::{build_app, start_server};
pub use state::AppState;
