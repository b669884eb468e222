/// Aggregation & scoring engine
///
/// `EcoChecker` owns the provider adapters and the result cache. A check
/// either returns a live cached result untouched or fans out to all three
/// adapters at once, waits for every one of them, scores, and stores.
pub mod recommendations;
pub mod scoring;
pub mod types;

pub use types::{CompositeResult, Details, EcoLevel};

use crate::banner::{self, BannerPayload, BannerStyle};
use crate::cache::{fingerprint, start_sweeper, CacheConfig, CacheMetrics, CacheStats, CacheStore, SweepHandle};
use crate::config::Config;
use crate::errors::{EcoError, EcoResult};
use crate::logger::{self, LogTag};
use crate::providers::{
    CarbonData, EfficiencyData, GreenHostingData, GreenWebProvider, HeuristicEfficiencyProvider,
    HttpClient, Provider, WebsiteCarbonProvider,
};
use crate::utils::normalize_url;
use std::sync::Arc;
use tokio::task::JoinError;

pub type CarbonProvider = Arc<dyn Provider<Data = CarbonData>>;
pub type HostingProvider = Arc<dyn Provider<Data = GreenHostingData>>;
pub type EfficiencyProvider = Arc<dyn Provider<Data = EfficiencyData>>;

pub type ResultCache = CacheStore<String, CompositeResult>;

pub struct EcoChecker {
    carbon: CarbonProvider,
    hosting: HostingProvider,
    efficiency: EfficiencyProvider,
    cache: Arc<ResultCache>,
}

impl EcoChecker {
    pub fn new(
        carbon: CarbonProvider,
        hosting: HostingProvider,
        efficiency: EfficiencyProvider,
        cache: Arc<ResultCache>,
    ) -> Self {
        Self {
            carbon,
            hosting,
            efficiency,
            cache,
        }
    }

    /// Wire the real adapters and a wall-clock cache from configuration
    pub fn from_config(config: &Config) -> EcoResult<Self> {
        let http_client = HttpClient::new(
            config.providers.timeout_secs,
            &config.providers.user_agent,
        )?;

        let carbon = WebsiteCarbonProvider::new(
            http_client.clone(),
            config.providers.website_carbon_url.clone(),
        );
        let hosting = GreenWebProvider::new(http_client, config.providers.green_web_url.clone());
        let cache = CacheStore::new(CacheConfig::from_settings(&config.cache));

        Ok(Self::new(
            Arc::new(carbon),
            Arc::new(hosting),
            Arc::new(HeuristicEfficiencyProvider::new()),
            Arc::new(cache),
        ))
    }

    pub fn cache(&self) -> Arc<ResultCache> {
        Arc::clone(&self.cache)
    }

    /// Score `url`, serving from the cache when allowed and live
    pub async fn check(&self, url: &str, use_cache: bool) -> EcoResult<CompositeResult> {
        let normalized = normalize_url(url);
        let cache_key = fingerprint(&normalized);

        if use_cache {
            if let Some(cached) = self.cache.get(&cache_key) {
                logger::debug(
                    LogTag::Cache,
                    &format!("Cache hit for {} ({})", normalized, cache_key),
                );
                return Ok(cached);
            }
            logger::debug(
                LogTag::Cache,
                &format!("Cache miss for {} ({})", normalized, cache_key),
            );
        }

        let details = self.gather(&normalized).await.map_err(|e| {
            logger::error(
                LogTag::Scoring,
                &format!("Check failed for {}: {}", normalized, e),
            );
            e
        })?;

        let score = scoring::compute_score(&details.carbon_footprint.data, &details.green_hosting.data);
        let recommendations =
            recommendations::build(&details.carbon_footprint.data, &details.green_hosting.data);
        let now = self.cache.clock().now();

        let result = CompositeResult {
            url: normalized.clone(),
            score,
            eco_level: EcoLevel::from_score(score),
            banner: banner::banner(score, now),
            details,
            recommendations,
            cache_key: cache_key.clone(),
            timestamp: now,
        };

        logger::info(
            LogTag::Scoring,
            &format!("{} scored {} ({})", normalized, score, result.eco_level),
        );

        if use_cache {
            self.cache.put(cache_key, result.clone());
        }
        Ok(result)
    }

    /// Banner for `url` in the requested style; always goes through the cache
    pub async fn banner_data(&self, url: &str, style: &str) -> EcoResult<BannerPayload> {
        let result = self.check(url, true).await?;
        Ok(banner::apply_style(
            &result.banner,
            &result,
            BannerStyle::parse(style),
        ))
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn cache_metrics(&self) -> CacheMetrics {
        self.cache.metrics()
    }

    /// Empty the cache, returning how many entries it held
    pub fn clear_cache(&self) -> usize {
        let cleared = self.cache.clear();
        logger::info(LogTag::Cache, &format!("Cache cleared ({} entries)", cleared));
        cleared
    }

    /// Start the periodic expiry sweep for this checker's cache
    pub fn start_sweeper(&self) -> SweepHandle {
        let interval = self.cache.config().sweep_interval;
        start_sweeper(self.cache(), interval)
    }

    /// Run all adapters concurrently and wait for every one to settle
    async fn gather(&self, url: &str) -> EcoResult<Details> {
        let carbon = Arc::clone(&self.carbon);
        let hosting = Arc::clone(&self.hosting);
        let efficiency = Arc::clone(&self.efficiency);
        let (carbon_url, hosting_url, efficiency_url) =
            (url.to_string(), url.to_string(), url.to_string());

        let carbon_task = tokio::spawn(async move { carbon.fetch(&carbon_url).await });
        let hosting_task = tokio::spawn(async move { hosting.fetch(&hosting_url).await });
        let efficiency_task =
            tokio::spawn(async move { efficiency.fetch(&efficiency_url).await });

        let (carbon, hosting, efficiency) = tokio::join!(carbon_task, hosting_task, efficiency_task);

        Ok(Details {
            carbon_footprint: carbon.map_err(|e| aggregation_failure(self.carbon.kind(), e))?,
            green_hosting: hosting.map_err(|e| aggregation_failure(self.hosting.kind(), e))?,
            efficiency: efficiency
                .map_err(|e| aggregation_failure(self.efficiency.kind(), e))?,
        })
    }
}

fn aggregation_failure(kind: crate::providers::ProviderKind, err: JoinError) -> EcoError {
    let reason = if err.is_panic() {
        "adapter panicked"
    } else {
        "adapter task was cancelled"
    };
    EcoError::Aggregation(format!("{} {}", kind, reason))
}
