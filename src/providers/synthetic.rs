/// Plausible stand-in data for when a provider cannot be reached
///
/// Generators take the RNG as an argument so tests can seed it.
use super::types::{CarbonData, GreenHostingData, Rating};
use rand::seq::SliceRandom;
use rand::Rng;

/// Probability that synthetic hosting is reported as green
pub const SYNTHETIC_GREEN_PROBABILITY: f64 = 0.3;

pub fn carbon_data<R: Rng + ?Sized>(rng: &mut R) -> CarbonData {
    let rating = Rating::SYNTHETIC_GRADES
        .choose(rng)
        .cloned()
        .unwrap_or(Rating::D);

    CarbonData {
        green: false,
        bytes_transferred: None,
        cleaner_than_fraction: rng.gen_range(0.5..0.8),
        rating,
        co2_grams_per_view: rng.gen_range(0.8..2.0),
        energy_watt_hours_per_view: rng.gen_range(0.3..1.0),
        is_synthetic: true,
    }
}

pub fn green_hosting_data<R: Rng + ?Sized>(rng: &mut R) -> GreenHostingData {
    let green = rng.gen_bool(SYNTHETIC_GREEN_PROBABILITY);

    GreenHostingData {
        green,
        hosted_by: if green {
            "Green Hosting Inc.".to_string()
        } else {
            "Standard Hosting Corp.".to_string()
        },
        is_partner: green,
        data_center: if green {
            "Solar Data Center".to_string()
        } else {
            "Standard Data Center".to_string()
        },
        is_synthetic: true,
    }
}
