//! Climate generation tests
//!
//! Tests for the plot & climate stage including:
//! - Bounds of humidity, radiation and precipitation
//! - One row per calendar day over the six-year range
//! - Seed determinism

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use shared::{DateRange, HUMIDITY_RANGE, RADIATION_RANGE};
use vineyard_synth::config::Config;
use vineyard_synth::pipeline::generate_plot_climate;
use vineyard_synth::services::{ClimateGenerator, ClimateModel, NoiseSource};
use vineyard_synth::GeneratorError;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;
    use rust_decimal::prelude::ToPrimitive;

    /// Full default run covers 2019-01-01..=2024-12-31
    #[test]
    fn test_default_series_has_2192_contiguous_days() {
        let output = generate_plot_climate(&Config::default()).unwrap();

        assert_eq!(output.plots.len(), 5);
        assert_eq!(output.climate.len(), 2192);
        assert_eq!(output.climate.first().unwrap().date, date(2019, 1, 1));
        assert_eq!(output.climate.last().unwrap().date, date(2024, 12, 31));

        for pair in output.climate.windows(2) {
            assert_eq!(pair[1].date, pair[0].date.succ_opt().unwrap());
        }
    }

    #[test]
    fn test_default_series_respects_bounds() {
        let output = generate_plot_climate(&Config::default()).unwrap();

        for day in &output.climate {
            let humidity = day.humidity_percent.to_f64().unwrap();
            let radiation = day.radiation_w_m2.to_f64().unwrap();
            assert!(HUMIDITY_RANGE.contains(humidity), "humidity {} on {}", humidity, day.date);
            assert!(RADIATION_RANGE.contains(radiation), "radiation {} on {}", radiation, day.date);
            assert!(day.precip_mm >= Decimal::ZERO);
        }
    }

    /// Values are persisted with one decimal place
    #[test]
    fn test_values_rounded_to_one_decimal() {
        let output = generate_plot_climate(&Config::default()).unwrap();

        for day in output.climate.iter().take(400) {
            for value in [
                day.t_max,
                day.t_min,
                day.t_mean,
                day.precip_mm,
                day.humidity_percent,
                day.radiation_w_m2,
            ] {
                assert_eq!(value, value.round_dp(1));
            }
        }
    }

    /// Summers are warmer than winters on average
    #[test]
    fn test_seasonality_visible_in_generated_series() {
        let output = generate_plot_climate(&Config::default()).unwrap();

        let mean_for_month = |month: u32| {
            let values: Vec<f64> = output
                .climate
                .iter()
                .filter(|d| d.date.month() == month)
                .map(|d| d.mean_temperature())
                .collect();
            values.iter().sum::<f64>() / values.len() as f64
        };

        assert!(mean_for_month(7) > mean_for_month(1) + 10.0);
    }

    /// Winters are wetter than summers
    #[test]
    fn test_rain_more_frequent_in_winter() {
        let output = generate_plot_climate(&Config::default()).unwrap();

        let rainy_days = |months: &[u32]| {
            output
                .climate
                .iter()
                .filter(|d| months.contains(&d.date.month()) && d.precip_mm > Decimal::ZERO)
                .count()
        };

        assert!(rainy_days(&[12, 1, 2]) > rainy_days(&[6, 7, 8]));
    }

    #[test]
    fn test_same_seed_same_series() {
        let a = generate_plot_climate(&Config::default()).unwrap();
        let b = generate_plot_climate(&Config::default()).unwrap();
        assert_eq!(a.climate, b.climate);
    }

    #[test]
    fn test_other_seed_other_series() {
        let mut config = Config::default();
        config.climate.seed = 7;
        let a = generate_plot_climate(&Config::default()).unwrap();
        let b = generate_plot_climate(&config).unwrap();
        assert_ne!(a.climate, b.climate);
    }

    #[test]
    fn test_invalid_noise_parameters_rejected() {
        let model = ClimateModel {
            humidity_noise_sd: -1.0,
            ..ClimateModel::default()
        };
        let range = DateRange::new(date(2020, 1, 1), date(2020, 1, 31)).unwrap();
        let result = ClimateGenerator::new(model).generate(&range, &mut NoiseSource::seeded(42));
        assert!(matches!(result, Err(GeneratorError::InvalidDistribution(_))));
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Rain probability always stays in [0.05, 0.3]
    #[test]
    fn prop_rain_probability_clamped(doy in 1u32..=366) {
        let p = ClimateModel::default().rain_probability(doy);
        prop_assert!((0.05..=0.3).contains(&p), "p = {} on day {}", p, doy);
    }

    /// Base temperature oscillates within mean ± amplitude
    #[test]
    fn prop_base_temperature_within_amplitude(doy in 1u32..=366) {
        let t = ClimateModel::default().base_temperature(doy);
        prop_assert!((5.0..=25.0).contains(&t), "t = {} on day {}", t, doy);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Any seed yields in-bounds climate over a leap year
    #[test]
    fn prop_any_seed_respects_bounds(seed in any::<u64>()) {
        let range = DateRange::new(date(2024, 1, 1), date(2024, 12, 31)).unwrap();
        let records = ClimateGenerator::default()
            .generate(&range, &mut NoiseSource::seeded(seed))
            .unwrap();

        prop_assert_eq!(records.len(), 366);
        for day in &records {
            prop_assert!(shared::validate_climate_record(day).is_ok());
            prop_assert!(day.t_max >= day.t_mean || day.t_min >= day.t_mean);
        }
    }
}
