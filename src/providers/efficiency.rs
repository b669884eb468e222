/// Efficiency heuristics
///
/// There is no external efficiency API; the adapter answers from a fixed list
/// of optimizations, with an HTTPS suggestion first for plain-HTTP sites.
use super::types::{EfficiencyData, NormalizedResult};
use super::{Provider, ProviderKind};
use crate::utils::is_plain_http;
use async_trait::async_trait;

pub const ESTIMATED_SAVINGS: &str = "Up to 40% energy savings";

const HTTPS_RECOMMENDATION: &str = "Serve the site over HTTPS to enable HTTP/2 and modern compression";

const BASE_RECOMMENDATIONS: [&str; 5] = [
    "Optimize images (WebP/AVIF formats)",
    "Minify CSS and JavaScript",
    "Enable lazy loading for images and videos",
    "Use a content delivery network (CDN)",
    "Enable browser caching",
];

#[derive(Debug, Default, Clone)]
pub struct HeuristicEfficiencyProvider;

impl HeuristicEfficiencyProvider {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, url: &str) -> EfficiencyData {
        let mut recommendations = Vec::with_capacity(BASE_RECOMMENDATIONS.len() + 1);
        if is_plain_http(url) {
            recommendations.push(HTTPS_RECOMMENDATION.to_string());
        }
        recommendations.extend(BASE_RECOMMENDATIONS.iter().map(|r| r.to_string()));

        EfficiencyData {
            recommendations,
            estimated_savings_description: ESTIMATED_SAVINGS.to_string(),
        }
    }
}

#[async_trait]
impl Provider for HeuristicEfficiencyProvider {
    type Data = EfficiencyData;

    fn kind(&self) -> ProviderKind {
        ProviderKind::Efficiency
    }

    async fn fetch(&self, url: &str) -> NormalizedResult<EfficiencyData> {
        NormalizedResult::ok(self.analyze(url))
    }
}
