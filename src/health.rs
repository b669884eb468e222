/// Provider reachability probe
///
/// Reads nothing from the checker; it only asks whether each upstream base
/// URL answers within the short health timeout.
use crate::config::ProvidersConfig;
use crate::errors::EcoResult;
use crate::logger::{self, LogTag};
use crate::providers::HttpClient;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Operational,
    Degraded,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentHealth {
    pub status: ComponentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ComponentHealth {
    fn operational() -> Self {
        Self {
            status: ComponentStatus::Operational,
            error: None,
        }
    }

    fn degraded(reason: String) -> Self {
        Self {
            status: ComponentStatus::Degraded,
            error: Some(reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthServices {
    pub website_carbon: ComponentHealth,
    pub green_web_foundation: ComponentHealth,
    pub cache: ComponentHealth,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    /// Operational only when every component is
    pub status: ComponentStatus,
    pub timestamp: DateTime<Utc>,
    pub services: HealthServices,
}

async fn probe_component(client: &HttpClient, name: &str, url: &str, timeout: Duration) -> ComponentHealth {
    match client.probe(url, timeout).await {
        Ok(_) => ComponentHealth::operational(),
        Err(e) => {
            logger::warning(
                LogTag::Provider,
                &format!("Health probe for {} failed: {}", name, e),
            );
            ComponentHealth::degraded(e.to_string())
        }
    }
}

/// Probe both provider base URLs concurrently
pub async fn probe(providers: &ProvidersConfig) -> EcoResult<HealthReport> {
    let client = HttpClient::new(providers.health_timeout_secs, &providers.user_agent)?;
    let timeout = Duration::from_secs(providers.health_timeout_secs);

    let (website_carbon, green_web_foundation) = tokio::join!(
        probe_component(&client, "Website Carbon", &providers.website_carbon_url, timeout),
        probe_component(&client, "Green Web Foundation", &providers.green_web_url, timeout),
    );

    let services = HealthServices {
        website_carbon,
        green_web_foundation,
        cache: ComponentHealth::operational(),
    };

    let all_up = [&services.website_carbon, &services.green_web_foundation, &services.cache]
        .iter()
        .all(|c| c.status == ComponentStatus::Operational);

    Ok(HealthReport {
        status: if all_up {
            ComponentStatus::Operational
        } else {
            ComponentStatus::Degraded
        },
        timestamp: Utc::now(),
        services,
    })
}
