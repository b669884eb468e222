/// API response type definitions
use crate::banner::BannerPayload;
use crate::cache::{CacheMetrics, CacheStats};
use crate::checker::{CompositeResult, Details, EcoLevel};
use crate::health::HealthReport;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Check result as sent to clients
///
/// `details` and `recommendations` are left out when the caller asks for a
/// summary; the cached record itself always carries them.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResponse<'a> {
    pub url: &'a str,
    pub score: f64,
    pub eco_level: EcoLevel,
    pub banner: &'a BannerPayload,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<&'a Details>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<&'a [String]>,
    pub cache_key: &'a str,
    pub timestamp: DateTime<Utc>,
}

impl<'a> CheckResponse<'a> {
    pub fn new(result: &'a CompositeResult, include_details: bool) -> Self {
        Self {
            url: &result.url,
            score: result.score,
            eco_level: result.eco_level,
            banner: &result.banner,
            details: include_details.then_some(&result.details),
            recommendations: include_details.then_some(result.recommendations.as_slice()),
            cache_key: &result.cache_key,
            timestamp: result.timestamp,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    #[serde(flatten)]
    pub report: HealthReport,
    pub version: String,
    pub uptime_seconds: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheMetricsResponse {
    #[serde(flatten)]
    pub counters: CacheMetrics,
    pub hit_rate: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub cache: CacheStats,
    pub metrics: CacheMetricsResponse,
    pub uptime_seconds: u64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearCacheResponse {
    pub message: String,
    pub items_cleared: usize,
}
