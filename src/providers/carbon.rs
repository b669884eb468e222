/// Website Carbon adapter
use super::client::HttpClient;
use super::synthetic;
use super::types::{CarbonData, NormalizedResult, Rating, WebsiteCarbonResponse};
use super::{Provider, ProviderKind};
use crate::errors::ProviderError;
use crate::logger::{self, LogTag};
use crate::utils::normalize_url;
use async_trait::async_trait;

/// Substituted when the API omits a field
const DEFAULT_CO2_GRAMS: f64 = 1.0;
const DEFAULT_ENERGY_WATT_HOURS: f64 = 0.5;
const DEFAULT_CLEANER_THAN: f64 = 0.0;

pub struct WebsiteCarbonProvider {
    http_client: HttpClient,
    base_url: String,
}

impl WebsiteCarbonProvider {
    pub fn new(http_client: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    async fn request(&self, url: &str) -> Result<WebsiteCarbonResponse, ProviderError> {
        let endpoint = format!("{}/site", self.base_url.trim_end_matches('/'));
        let target = normalize_url(url);
        self.http_client
            .get_json(&endpoint, &[("url", target.as_str())])
            .await
    }
}

/// Map the native response onto the normalized schema
pub fn normalize(response: WebsiteCarbonResponse) -> CarbonData {
    let rating = response
        .rating
        .as_deref()
        .map(Rating::parse)
        .unwrap_or(Rating::D);

    CarbonData {
        green: response.green.unwrap_or(false),
        bytes_transferred: response.bytes,
        cleaner_than_fraction: response
            .cleaner_than
            .unwrap_or(DEFAULT_CLEANER_THAN)
            .clamp(0.0, 1.0),
        co2_grams_per_view: response.co2_grams().unwrap_or(DEFAULT_CO2_GRAMS),
        energy_watt_hours_per_view: response
            .energy_watt_hours()
            .unwrap_or(DEFAULT_ENERGY_WATT_HOURS),
        rating,
        is_synthetic: false,
    }
}

#[async_trait]
impl Provider for WebsiteCarbonProvider {
    type Data = CarbonData;

    fn kind(&self) -> ProviderKind {
        ProviderKind::Carbon
    }

    async fn fetch(&self, url: &str) -> NormalizedResult<CarbonData> {
        match self.request(url).await {
            Ok(response) => {
                logger::debug(
                    LogTag::Provider,
                    &format!("Carbon data received for {}", url),
                );
                NormalizedResult::ok(normalize(response))
            }
            Err(e) => {
                logger::warning(
                    LogTag::Provider,
                    &format!("{} unavailable for {} ({}), using synthetic data", self.kind(), url, e),
                );
                let data = {
                    let mut rng = rand::thread_rng();
                    synthetic::carbon_data(&mut rng)
                };
                NormalizedResult::ok(data)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_applies_defaults() {
        let data = normalize(WebsiteCarbonResponse::default());
        assert_eq!(data.rating, Rating::D);
        assert_eq!(data.co2_grams_per_view, 1.0);
        assert_eq!(data.energy_watt_hours_per_view, 0.5);
        assert_eq!(data.cleaner_than_fraction, 0.0);
        assert!(!data.green);
        assert!(!data.is_synthetic);
    }

    #[test]
    fn test_normalize_keeps_unknown_grade() {
        let response: WebsiteCarbonResponse =
            serde_json::from_str(r#"{"rating": "G", "cleanerThan": 1.7}"#).unwrap();
        let data = normalize(response);
        assert_eq!(data.rating, Rating::Unrecognized("G".to_string()));
        assert_eq!(data.cleaner_than_fraction, 1.0);
    }

    #[cfg(feature = "web")]
    mod http {
        use super::*;
        use crate::providers::test_support::{refused_base_url, spawn_mock};
        use axum::extract::Query;
        use axum::http::header::CONTENT_TYPE;
        use axum::http::StatusCode;
        use axum::routing::get;
        use axum::{Json, Router};
        use serde_json::json;
        use std::collections::HashMap;
        use std::time::{Duration, Instant};

        fn client() -> HttpClient {
            HttpClient::new(2, "ecochecker-test").unwrap()
        }

        #[tokio::test]
        async fn test_fetch_parses_native_shape() {
            let router = Router::new().route(
                "/site",
                get(|Query(params): Query<HashMap<String, String>>| async move {
                    Json(json!({
                        "url": params.get("url").cloned().unwrap_or_default(),
                        "green": true,
                        "bytes": 524288,
                        "cleanerThan": 0.85,
                        "rating": "A+",
                        "statistics": {
                            "co2": { "grid": { "grams": 0.2 } },
                            "energy": { "grid": { "wattHours": 0.05 } }
                        }
                    }))
                }),
            );
            let base = spawn_mock(router).await;
            let provider = WebsiteCarbonProvider::new(client(), base);

            let result = provider.fetch("example.com").await;
            assert!(result.success);
            assert!(!result.data.is_synthetic);
            assert_eq!(result.data.rating, Rating::APlus);
            assert_eq!(result.data.co2_grams_per_view, 0.2);
            assert_eq!(result.data.bytes_transferred, Some(524288.0));
            assert!(result.data.green);
        }

        #[tokio::test]
        async fn test_fetch_falls_back_on_error_status() {
            let router = Router::new().route(
                "/site",
                get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "busy") }),
            );
            let base = spawn_mock(router).await;
            let provider = WebsiteCarbonProvider::new(client(), base);

            let result = provider.fetch("example.com").await;
            assert!(result.success);
            assert!(result.data.is_synthetic);
        }

        #[tokio::test]
        async fn test_fetch_falls_back_on_timeout() {
            let router = Router::new().route(
                "/site",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(3)).await;
                    Json(json!({ "rating": "A" }))
                }),
            );
            let base = spawn_mock(router).await;
            let provider =
                WebsiteCarbonProvider::new(HttpClient::new(1, "ecochecker-test").unwrap(), base);

            let started = Instant::now();
            let result = provider.fetch("example.com").await;
            let elapsed = started.elapsed();

            assert!(result.success);
            assert!(result.data.is_synthetic);
            assert!(elapsed >= Duration::from_millis(900), "{:?}", elapsed);
            assert!(elapsed < Duration::from_millis(2500), "{:?}", elapsed);
        }

        #[tokio::test]
        async fn test_fetch_falls_back_on_malformed_body() {
            let router = Router::new().route(
                "/site",
                get(|| async { ([(CONTENT_TYPE, "application/json")], "{not json") }),
            );
            let base = spawn_mock(router).await;
            let provider = WebsiteCarbonProvider::new(client(), base);

            let result = provider.fetch("example.com").await;
            assert!(result.success);
            assert!(result.data.is_synthetic);
        }

        #[tokio::test]
        async fn test_fetch_falls_back_on_connection_refused() {
            let provider = WebsiteCarbonProvider::new(client(), refused_base_url().await);

            let result = provider.fetch("example.com").await;
            assert!(result.success);
            assert!(result.data.is_synthetic);
            assert!((0.8..2.0).contains(&result.data.co2_grams_per_view));
        }
    }
}
