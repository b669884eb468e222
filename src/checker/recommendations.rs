/// Recommendation list for a composite result
use crate::constants::MAX_RECOMMENDATIONS;
use crate::providers::{CarbonData, GreenHostingData};
use std::collections::HashSet;

pub const GREEN_HOSTING_RECOMMENDATION: &str =
    "Switch to a green hosting provider (up to 80% footprint reduction)";

pub const PERFORMANCE_RECOMMENDATION: &str =
    "Optimize performance: enable compression, caching and image optimization";

/// CO2 per view above which the performance recommendation is added
const PERFORMANCE_CO2_THRESHOLD: f64 = 1.0;

pub const GENERIC_RECOMMENDATIONS: [&str; 5] = [
    "Use an eco-friendly CDN",
    "Optimize images with the WebP format",
    "Enable GZIP/Brotli compression",
    "Reduce unused JavaScript",
    "Cache static resources",
];

/// Conditional items first, then the generic ones, deduplicated and capped
pub fn build(carbon: &CarbonData, hosting: &GreenHostingData) -> Vec<String> {
    let mut list: Vec<String> = Vec::with_capacity(2 + GENERIC_RECOMMENDATIONS.len());

    if !hosting.green {
        list.push(GREEN_HOSTING_RECOMMENDATION.to_string());
    }
    if carbon.co2_grams_per_view > PERFORMANCE_CO2_THRESHOLD {
        list.push(PERFORMANCE_RECOMMENDATION.to_string());
    }
    list.extend(GENERIC_RECOMMENDATIONS.iter().map(|r| r.to_string()));

    let mut seen = HashSet::new();
    list.retain(|item| seen.insert(item.clone()));
    list.truncate(MAX_RECOMMENDATIONS);
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::Rating;

    fn inputs(co2: f64, green: bool) -> (CarbonData, GreenHostingData) {
        let carbon = CarbonData {
            green,
            bytes_transferred: None,
            cleaner_than_fraction: 0.5,
            rating: Rating::C,
            co2_grams_per_view: co2,
            energy_watt_hours_per_view: 0.5,
            is_synthetic: false,
        };
        let hosting = GreenHostingData {
            green,
            hosted_by: "Unknown".to_string(),
            is_partner: false,
            data_center: "Unknown".to_string(),
            is_synthetic: false,
        };
        (carbon, hosting)
    }

    #[test]
    fn test_conditionals_precede_generic() {
        let (carbon, hosting) = inputs(2.0, false);
        let list = build(&carbon, &hosting);

        assert_eq!(list.len(), 6);
        assert_eq!(list[0], GREEN_HOSTING_RECOMMENDATION);
        assert_eq!(list[1], PERFORMANCE_RECOMMENDATION);
        assert_eq!(list[2], GENERIC_RECOMMENDATIONS[0]);
        // Truncation drops the last generic items, never a conditional one
        assert!(!list.contains(&GENERIC_RECOMMENDATIONS[4].to_string()));
    }

    #[test]
    fn test_green_low_carbon_gets_generic_only() {
        let (carbon, hosting) = inputs(0.4, true);
        let list = build(&carbon, &hosting);
        assert_eq!(list, GENERIC_RECOMMENDATIONS.map(String::from).to_vec());
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let (carbon, hosting) = inputs(1.0, true);
        assert!(!build(&carbon, &hosting).contains(&PERFORMANCE_RECOMMENDATION.to_string()));
    }
}
