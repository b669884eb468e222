/// Green Web Foundation adapter
use super::client::HttpClient;
use super::synthetic;
use super::types::{GreenCheckResponse, GreenHostingData, NormalizedResult};
use super::{Provider, ProviderKind};
use crate::errors::ProviderError;
use crate::logger::{self, LogTag};
use crate::utils::extract_domain;
use async_trait::async_trait;

const UNKNOWN: &str = "Unknown";

pub struct GreenWebProvider {
    http_client: HttpClient,
    base_url: String,
}

impl GreenWebProvider {
    pub fn new(http_client: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    async fn request(&self, domain: &str) -> Result<GreenCheckResponse, ProviderError> {
        let endpoint = format!(
            "{}/greencheck/{}",
            self.base_url.trim_end_matches('/'),
            domain
        );
        self.http_client.get_json(&endpoint, &[]).await
    }
}

fn non_empty_or_unknown(value: Option<String>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

pub fn normalize(response: GreenCheckResponse) -> GreenHostingData {
    GreenHostingData {
        green: response.green.unwrap_or(false),
        hosted_by: non_empty_or_unknown(response.hostedby),
        is_partner: response.partner.unwrap_or(false),
        data_center: non_empty_or_unknown(response.data_center),
        is_synthetic: false,
    }
}

#[async_trait]
impl Provider for GreenWebProvider {
    type Data = GreenHostingData;

    fn kind(&self) -> ProviderKind {
        ProviderKind::GreenHosting
    }

    async fn fetch(&self, url: &str) -> NormalizedResult<GreenHostingData> {
        let domain = extract_domain(url);
        match self.request(&domain).await {
            Ok(response) => {
                logger::debug(
                    LogTag::Provider,
                    &format!("Green hosting verdict received for {}", domain),
                );
                NormalizedResult::ok(normalize(response))
            }
            Err(e) => {
                logger::warning(
                    LogTag::Provider,
                    &format!("{} unavailable for {} ({}), using synthetic data", self.kind(), domain, e),
                );
                let data = {
                    let mut rng = rand::thread_rng();
                    synthetic::green_hosting_data(&mut rng)
                };
                NormalizedResult::ok(data)
            }
        }
    }
}
