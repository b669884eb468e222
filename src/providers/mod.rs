/// Data provider adapters
///
/// Each adapter turns one external source into a `NormalizedResult`. A
/// provider never fails from the caller's point of view: transport errors,
/// bad statuses and unparseable bodies are logged and replaced with
/// synthetic data.
///
/// - `carbon`: Website Carbon footprint estimate
/// - `hosting`: Green Web Foundation hosting lookup
/// - `efficiency`: local optimization heuristics (no network)
pub mod carbon;
pub mod client;
pub mod efficiency;
pub mod hosting;
pub mod synthetic;
pub mod types;

pub use carbon::WebsiteCarbonProvider;
pub use client::HttpClient;
pub use efficiency::HeuristicEfficiencyProvider;
pub use hosting::GreenWebProvider;
pub use types::{CarbonData, EfficiencyData, GreenHostingData, NormalizedResult, Rating};

use async_trait::async_trait;

/// Which data source an adapter speaks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Carbon,
    GreenHosting,
    Efficiency,
}

impl ProviderKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderKind::Carbon => "Website Carbon",
            ProviderKind::GreenHosting => "Green Web Foundation",
            ProviderKind::Efficiency => "Efficiency heuristics",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A single data source queried during a check
#[async_trait]
pub trait Provider: Send + Sync {
    type Data: Send + 'static;

    fn kind(&self) -> ProviderKind;

    /// Fetch data for `url`; always yields a result
    async fn fetch(&self, url: &str) -> NormalizedResult<Self::Data>;
}
