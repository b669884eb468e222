/// Provider data types
///
/// Two layers live here: the normalized schema every adapter returns (part of
/// the composite result contract, serialized camelCase) and the native
/// response shapes of the external APIs (parsing only).
use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// NORMALIZED SCHEMA
// ============================================================================

/// Envelope returned by every adapter
///
/// `success` is always true: failures are absorbed into synthetic data, which
/// the payload itself flags where the schema allows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedResult<T> {
    pub success: bool,
    pub data: T,
}

impl<T> NormalizedResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Letter grade reported by the carbon estimator
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Rating {
    APlus,
    A,
    AMinus,
    BPlus,
    B,
    BMinus,
    CPlus,
    C,
    CMinus,
    DPlus,
    D,
    DMinus,
    E,
    F,
    /// Grade outside the known table, kept verbatim
    Unrecognized(String),
}

impl Rating {
    /// Grades drawn from when synthesizing carbon data
    pub const SYNTHETIC_GRADES: [Rating; 6] =
        [Rating::A, Rating::B, Rating::C, Rating::D, Rating::E, Rating::F];

    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "A+" => Rating::APlus,
            "A" => Rating::A,
            "A-" => Rating::AMinus,
            "B+" => Rating::BPlus,
            "B" => Rating::B,
            "B-" => Rating::BMinus,
            "C+" => Rating::CPlus,
            "C" => Rating::C,
            "C-" => Rating::CMinus,
            "D+" => Rating::DPlus,
            "D" => Rating::D,
            "D-" => Rating::DMinus,
            "E" => Rating::E,
            "F" => Rating::F,
            other => Rating::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Rating::APlus => "A+",
            Rating::A => "A",
            Rating::AMinus => "A-",
            Rating::BPlus => "B+",
            Rating::B => "B",
            Rating::BMinus => "B-",
            Rating::CPlus => "C+",
            Rating::C => "C",
            Rating::CMinus => "C-",
            Rating::DPlus => "D+",
            Rating::D => "D",
            Rating::DMinus => "D-",
            Rating::E => "E",
            Rating::F => "F",
            Rating::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for Rating {
    fn from(raw: String) -> Self {
        Rating::parse(&raw)
    }
}

impl From<Rating> for String {
    fn from(rating: Rating) -> String {
        rating.as_str().to_string()
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Normalized carbon footprint estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonData {
    pub green: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes_transferred: Option<f64>,
    /// Share of measured sites this one beats, in [0, 1]
    pub cleaner_than_fraction: f64,
    pub rating: Rating,
    pub co2_grams_per_view: f64,
    pub energy_watt_hours_per_view: f64,
    pub is_synthetic: bool,
}

/// Normalized green hosting verdict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GreenHostingData {
    pub green: bool,
    pub hosted_by: String,
    pub is_partner: bool,
    pub data_center: String,
    pub is_synthetic: bool,
}

/// Efficiency heuristics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EfficiencyData {
    pub recommendations: Vec<String>,
    pub estimated_savings_description: String,
}

// ============================================================================
// NATIVE RESPONSES
// ============================================================================

/// Accept `true`/`false`, `"true"`/`"false"`, or anything else as false
///
/// The providers are not consistent: green flags show up as booleans,
/// strings ("unknown") or null, and partner fields as booleans, names or null.
fn deserialize_loose_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;

    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::Bool(b)) => Some(b),
        Some(Value::String(s)) => match s.trim().to_lowercase().as_str() {
            "true" => Some(true),
            "false" | "" | "unknown" => Some(false),
            // A non-empty partner name means "is a partner"
            _ => Some(true),
        },
        Some(Value::Number(n)) => Some(n.as_f64().map(|v| v != 0.0).unwrap_or(false)),
        Some(_) => Some(false),
    })
}

/// Website Carbon `/site` response (only the fields we read)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteCarbonResponse {
    pub url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_bool")]
    pub green: Option<bool>,
    pub bytes: Option<f64>,
    pub cleaner_than: Option<f64>,
    pub rating: Option<String>,
    pub statistics: Option<CarbonStatistics>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CarbonStatistics {
    pub co2: Option<Co2Statistics>,
    pub energy: Option<EnergyStatistics>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Co2Statistics {
    pub grid: Option<Co2Grid>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Co2Grid {
    pub grams: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnergyStatistics {
    pub grid: Option<EnergyGrid>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyGrid {
    pub watt_hours: Option<f64>,
}

impl WebsiteCarbonResponse {
    pub fn co2_grams(&self) -> Option<f64> {
        self.statistics
            .as_ref()?
            .co2
            .as_ref()?
            .grid
            .as_ref()?
            .grams
    }

    pub fn energy_watt_hours(&self) -> Option<f64> {
        self.statistics
            .as_ref()?
            .energy
            .as_ref()?
            .grid
            .as_ref()?
            .watt_hours
    }
}

/// Green Web Foundation `/greencheck/{domain}` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GreenCheckResponse {
    #[serde(default, deserialize_with = "deserialize_loose_bool")]
    pub green: Option<bool>,
    pub hostedby: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_bool")]
    pub partner: Option<bool>,
    pub data_center: Option<String>,
    pub modified: Option<String>,
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_round_trip_and_unknown_grades() {
        assert_eq!(Rating::parse("B-"), Rating::BMinus);
        assert_eq!(Rating::parse("A+").as_str(), "A+");
        assert_eq!(Rating::parse("Z"), Rating::Unrecognized("Z".to_string()));

        let json = serde_json::to_string(&Rating::CPlus).unwrap();
        assert_eq!(json, "\"C+\"");
        let back: Rating = serde_json::from_str("\"Q\"").unwrap();
        assert_eq!(back.as_str(), "Q");
    }

    #[test]
    fn test_carbon_response_nested_fields() {
        let body = r#"{
            "url": "https://example.com",
            "green": "unknown",
            "bytes": 1048576,
            "cleanerThan": 0.72,
            "rating": "B",
            "statistics": {
                "co2": { "grid": { "grams": 0.41 } },
                "energy": { "grid": { "wattHours": 0.12 } }
            }
        }"#;
        let response: WebsiteCarbonResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.green, Some(false));
        assert_eq!(response.co2_grams(), Some(0.41));
        assert_eq!(response.energy_watt_hours(), Some(0.12));
        assert_eq!(response.rating.as_deref(), Some("B"));
    }

    #[test]
    fn test_greencheck_partner_variants() {
        let named: GreenCheckResponse =
            serde_json::from_str(r#"{"green": true, "partner": "Acme Hosting"}"#).unwrap();
        assert_eq!(named.partner, Some(true));

        let null: GreenCheckResponse =
            serde_json::from_str(r#"{"green": false, "partner": null}"#).unwrap();
        assert_eq!(null.partner, None);
        assert_eq!(null.hostedby, None);
    }

    #[test]
    fn test_carbon_data_wire_names() {
        let data = CarbonData {
            green: false,
            bytes_transferred: None,
            cleaner_than_fraction: 0.6,
            rating: Rating::B,
            co2_grams_per_view: 0.5,
            energy_watt_hours_per_view: 0.2,
            is_synthetic: false,
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["cleanerThanFraction"], 0.6);
        assert_eq!(json["co2GramsPerView"], 0.5);
        assert_eq!(json["rating"], "B");
        assert_eq!(json["isSynthetic"], false);
        assert!(json.get("bytesTransferred").is_none());
    }
}
