/// Composite result types
use crate::banner::BannerPayload;
use crate::providers::{CarbonData, EfficiencyData, GreenHostingData, NormalizedResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coarse qualitative label derived from a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EcoLevel {
    VeryLow,
    Low,
    Average,
    Good,
    VeryGood,
    Excellent,
}

impl EcoLevel {
    /// Lower bound is inclusive: 85.0 is Excellent, 84.9 is VeryGood
    pub fn from_score(score: f64) -> Self {
        if score >= 85.0 {
            EcoLevel::Excellent
        } else if score >= 70.0 {
            EcoLevel::VeryGood
        } else if score >= 55.0 {
            EcoLevel::Good
        } else if score >= 40.0 {
            EcoLevel::Average
        } else if score >= 25.0 {
            EcoLevel::Low
        } else {
            EcoLevel::VeryLow
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EcoLevel::Excellent => "Excellent",
            EcoLevel::VeryGood => "Very good",
            EcoLevel::Good => "Good",
            EcoLevel::Average => "Average",
            EcoLevel::Low => "Low",
            EcoLevel::VeryLow => "Very low",
        }
    }
}

impl std::fmt::Display for EcoLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Per-provider data behind a score; every field is always present
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Details {
    pub carbon_footprint: NormalizedResult<CarbonData>,
    pub green_hosting: NormalizedResult<GreenHostingData>,
    pub efficiency: NormalizedResult<EfficiencyData>,
}

/// The unit cached and returned by a check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeResult {
    pub url: String,
    pub score: f64,
    pub eco_level: EcoLevel,
    pub banner: BannerPayload,
    pub details: Details,
    pub recommendations: Vec<String>,
    pub cache_key: String,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_boundaries_map_up() {
        assert_eq!(EcoLevel::from_score(85.0), EcoLevel::Excellent);
        assert_eq!(EcoLevel::from_score(84.9), EcoLevel::VeryGood);
        assert_eq!(EcoLevel::from_score(70.0), EcoLevel::VeryGood);
        assert_eq!(EcoLevel::from_score(55.0), EcoLevel::Good);
        assert_eq!(EcoLevel::from_score(40.0), EcoLevel::Average);
        assert_eq!(EcoLevel::from_score(25.0), EcoLevel::Low);
        assert_eq!(EcoLevel::from_score(24.9), EcoLevel::VeryLow);
        assert_eq!(EcoLevel::from_score(0.0), EcoLevel::VeryLow);
    }

    #[test]
    fn test_level_is_monotonic() {
        let mut previous = EcoLevel::from_score(0.0);
        for tenth in 0..=1000 {
            let level = EcoLevel::from_score(tenth as f64 / 10.0);
            assert!(level >= previous, "level dropped at {}", tenth as f64 / 10.0);
            previous = level;
        }
        assert_eq!(previous, EcoLevel::Excellent);
    }

    #[test]
    fn test_level_wire_name() {
        assert_eq!(serde_json::to_string(&EcoLevel::VeryGood).unwrap(), "\"VeryGood\"");
    }
}
