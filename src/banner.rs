/// Presentation generator: banner payloads and their style variants
///
/// `banner` is a pure function of the score and a timestamp. `apply_style`
/// works on a copy, so the banner stored inside a cached `CompositeResult`
/// is never touched.
use crate::checker::{CompositeResult, EcoLevel};
use crate::constants::{BANNER_DETAILS_ANCHOR, BANNER_VERSION};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditionalInfo {
    pub level: EcoLevel,
    /// "Green" or "Standard"
    pub hosting: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerPayload {
    pub show_banner: bool,
    pub message: String,
    pub emoji: String,
    /// Hex color, `#rrggbb`
    pub color: String,
    pub score: f64,
    pub eco_level: EcoLevel,
    pub last_updated: DateTime<Utc>,
    pub details_link: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<AdditionalInfo>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BannerStyle {
    #[default]
    Default,
    Minimal,
    Detailed,
}

impl BannerStyle {
    /// Unrecognized names fall back to `Default`
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "minimal" => BannerStyle::Minimal,
            "detailed" => BannerStyle::Detailed,
            _ => BannerStyle::Default,
        }
    }
}

struct Band {
    message: &'static str,
    emoji: &'static str,
    color: &'static str,
}

fn band_for(score: f64) -> Band {
    if score >= 80.0 {
        Band {
            message: "This website is eco-responsible",
            emoji: "✅",
            color: "#2ecc71",
        }
    } else if score >= 60.0 {
        Band {
            message: "This website makes eco-friendly efforts",
            emoji: "🌿",
            color: "#27ae60",
        }
    } else if score >= 40.0 {
        Band {
            message: "This website can reduce its environmental impact",
            emoji: "⚠️",
            color: "#f39c12",
        }
    } else {
        Band {
            message: "This website has a high environmental impact",
            emoji: "🔴",
            color: "#e74c3c",
        }
    }
}

pub fn banner(score: f64, now: DateTime<Utc>) -> BannerPayload {
    let band = band_for(score);
    BannerPayload {
        show_banner: true,
        message: band.message.to_string(),
        emoji: band.emoji.to_string(),
        color: band.color.to_string(),
        score,
        eco_level: EcoLevel::from_score(score),
        last_updated: now,
        details_link: BANNER_DETAILS_ANCHOR.to_string(),
        version: BANNER_VERSION.to_string(),
        additional_info: None,
    }
}

/// Styled copy of `payload`
pub fn apply_style(
    payload: &BannerPayload,
    composite: &CompositeResult,
    style: BannerStyle,
) -> BannerPayload {
    let mut styled = payload.clone();
    match style {
        BannerStyle::Minimal => {
            styled.message = format!("{} {}/100", payload.emoji, payload.score);
        }
        BannerStyle::Detailed => {
            let hosting = if composite.details.green_hosting.data.green {
                "Green"
            } else {
                "Standard"
            };
            styled.additional_info = Some(AdditionalInfo {
                level: composite.eco_level,
                hosting: hosting.to_string(),
            });
        }
        BannerStyle::Default => {}
    }
    styled
}
