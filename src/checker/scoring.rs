/// Scoring rule set
///
/// Base 50, additive adjustments per signal, then clamp to [0, 100] and round
/// to one decimal. Every input combination yields a score.
use crate::constants::{BASE_SCORE, MAX_SCORE, MIN_SCORE};
use crate::providers::{CarbonData, GreenHostingData, Rating};

/// +30 for green hosting, +10 when the verdict is synthetic (unknown), else 0
pub fn hosting_adjustment(hosting: &GreenHostingData) -> f64 {
    if hosting.green {
        30.0
    } else if hosting.is_synthetic {
        10.0
    } else {
        0.0
    }
}

/// Adjustment for grams of CO2 per page view
///
/// The [1.5, 2.5] band contributes nothing.
pub fn carbon_adjustment(co2_grams_per_view: f64) -> f64 {
    if co2_grams_per_view < 0.3 {
        40.0
    } else if co2_grams_per_view < 0.6 {
        30.0
    } else if co2_grams_per_view < 1.0 {
        20.0
    } else if co2_grams_per_view < 1.5 {
        10.0
    } else if co2_grams_per_view > 2.5 {
        -20.0
    } else {
        0.0
    }
}

pub fn rating_adjustment(rating: &Rating) -> f64 {
    match rating {
        Rating::APlus => 10.0,
        Rating::A => 9.0,
        Rating::AMinus => 8.0,
        Rating::BPlus => 7.0,
        Rating::B => 6.0,
        Rating::BMinus => 5.0,
        Rating::CPlus => 4.0,
        Rating::C => 3.0,
        Rating::CMinus => 2.0,
        Rating::DPlus => 1.0,
        Rating::D => 0.0,
        Rating::DMinus => -1.0,
        Rating::E => -2.0,
        Rating::F => -3.0,
        Rating::Unrecognized(_) => 0.0,
    }
}

pub fn cleanliness_adjustment(cleaner_than_fraction: f64) -> f64 {
    cleaner_than_fraction * 10.0
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn compute_score(carbon: &CarbonData, hosting: &GreenHostingData) -> f64 {
    let sum = BASE_SCORE
        + hosting_adjustment(hosting)
        + carbon_adjustment(carbon.co2_grams_per_view)
        + rating_adjustment(&carbon.rating)
        + cleanliness_adjustment(carbon.cleaner_than_fraction);

    if sum.is_nan() {
        return BASE_SCORE;
    }
    round1(sum.clamp(MIN_SCORE, MAX_SCORE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::synthetic;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn carbon(co2: f64, rating: Rating, cleaner: f64) -> CarbonData {
        CarbonData {
            green: false,
            bytes_transferred: None,
            cleaner_than_fraction: cleaner,
            rating,
            co2_grams_per_view: co2,
            energy_watt_hours_per_view: 0.5,
            is_synthetic: false,
        }
    }

    fn hosting(green: bool, is_synthetic: bool) -> GreenHostingData {
        GreenHostingData {
            green,
            hosted_by: "Unknown".to_string(),
            is_partner: false,
            data_center: "Unknown".to_string(),
            is_synthetic,
        }
    }

    #[test]
    fn test_reference_scenario() {
        // 50 + 0 (hosting) + 30 (co2) + 6 (B) + 6 (cleanliness)
        let score = compute_score(&carbon(0.5, Rating::B, 0.6), &hosting(false, false));
        assert_eq!(score, 92.0);
    }

    #[test]
    fn test_synthetic_hosting_gets_partial_credit() {
        assert_eq!(hosting_adjustment(&hosting(false, true)), 10.0);
        assert_eq!(hosting_adjustment(&hosting(true, true)), 30.0);
        assert_eq!(hosting_adjustment(&hosting(false, false)), 0.0);
    }

    #[test]
    fn test_carbon_bands() {
        assert_eq!(carbon_adjustment(0.29), 40.0);
        assert_eq!(carbon_adjustment(0.3), 30.0);
        assert_eq!(carbon_adjustment(0.99), 20.0);
        assert_eq!(carbon_adjustment(1.2), 10.0);
        assert_eq!(carbon_adjustment(1.5), 0.0);
        assert_eq!(carbon_adjustment(2.5), 0.0);
        assert_eq!(carbon_adjustment(2.51), -20.0);
    }

    #[test]
    fn test_clamping() {
        let best = compute_score(&carbon(0.1, Rating::APlus, 1.0), &hosting(true, false));
        assert_eq!(best, 100.0);

        let worst = compute_score(&carbon(9.0, Rating::F, 0.0), &hosting(false, false));
        assert_eq!(worst, 27.0);

        let unknown = compute_score(
            &carbon(2.0, Rating::Unrecognized("Z".to_string()), 0.0),
            &hosting(false, false),
        );
        assert_eq!(unknown, 50.0);
    }

    #[test]
    fn test_scores_bounded_with_one_decimal() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..1_000 {
            let c = synthetic::carbon_data(&mut rng);
            let h = synthetic::green_hosting_data(&mut rng);
            let score = compute_score(&c, &h);
            assert!((0.0..=100.0).contains(&score));
            assert!(((score * 10.0) - (score * 10.0).round()).abs() < 1e-9);
        }
    }
}
