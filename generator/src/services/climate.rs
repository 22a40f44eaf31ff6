//! Daily climate generation
//!
//! Temperature and radiation follow a yearly sinusoid peaking in midsummer,
//! rain occurrence follows an inverted cosine (wetter winters), and every
//! quantity carries independent noise.

use std::f64::consts::PI;

use chrono::Datelike;
use shared::{round_decimal, DailyClimateRecord, DateRange, ValueRange, HUMIDITY_RANGE, RADIATION_RANGE};

use super::noise::NoiseSource;
use crate::error::GeneratorResult;

/// Coefficients of the seasonal climate model
#[derive(Debug, Clone)]
pub struct ClimateModel {
    pub mean_temperature_celsius: f64,
    pub temperature_amplitude: f64,
    /// Phase shift (radians) placing the peak near midsummer
    pub phase_shift: f64,
    /// Offset of daily max/min from the seasonal base temperature
    pub diurnal_offset: f64,
    pub temperature_noise_sd: f64,
    pub rain_probability_base: f64,
    pub rain_probability_amplitude: f64,
    pub rain_probability_range: ValueRange,
    pub mean_rain_mm: f64,
    pub humidity_base: f64,
    /// Extra humidity on days with rain
    pub humidity_rain_boost: f64,
    pub humidity_noise_sd: f64,
    pub radiation_base: f64,
    pub radiation_amplitude: f64,
    pub radiation_noise_sd: f64,
}

impl Default for ClimateModel {
    fn default() -> Self {
        Self {
            mean_temperature_celsius: 15.0,
            temperature_amplitude: 10.0,
            phase_shift: 1.5,
            diurnal_offset: 5.0,
            temperature_noise_sd: 2.0,
            rain_probability_base: 0.1,
            rain_probability_amplitude: 0.15,
            rain_probability_range: ValueRange::new(0.05, 0.3),
            mean_rain_mm: 10.0,
            humidity_base: 60.0,
            humidity_rain_boost: 20.0,
            humidity_noise_sd: 10.0,
            radiation_base: 200.0,
            radiation_amplitude: 150.0,
            radiation_noise_sd: 30.0,
        }
    }
}

/// Angle of a day of year on the yearly cycle
pub fn seasonal_phase(day_of_year: u32) -> f64 {
    2.0 * PI * f64::from(day_of_year) / 365.0
}

impl ClimateModel {
    /// Noise-free mean temperature of a day
    pub fn base_temperature(&self, day_of_year: u32) -> f64 {
        self.mean_temperature_celsius
            + self.temperature_amplitude * (seasonal_phase(day_of_year) - self.phase_shift).sin()
    }

    /// Probability that it rains on a day
    pub fn rain_probability(&self, day_of_year: u32) -> f64 {
        let p = self.rain_probability_base
            + self.rain_probability_amplitude * seasonal_phase(day_of_year).cos();
        self.rain_probability_range.clamp(p)
    }

    /// Noise-free solar radiation of a day
    pub fn base_radiation(&self, day_of_year: u32) -> f64 {
        self.radiation_base
            + self.radiation_amplitude * (seasonal_phase(day_of_year) - self.phase_shift).sin()
    }
}

/// Generates the daily climate table
#[derive(Debug, Clone, Default)]
pub struct ClimateGenerator {
    model: ClimateModel,
}

impl ClimateGenerator {
    pub fn new(model: ClimateModel) -> Self {
        Self { model }
    }

    /// Generate one record per day of `range`.
    ///
    /// Draw order: max-temperature noise for every day, min-temperature noise
    /// for every day, then per day the rain trial and (on rain) its amount,
    /// then humidity noise and radiation noise for every day.
    pub fn generate(
        &self,
        range: &DateRange,
        noise: &mut NoiseSource,
    ) -> GeneratorResult<Vec<DailyClimateRecord>> {
        let m = &self.model;
        let days: Vec<u32> = range.days().map(|d| d.ordinal()).collect();
        let n = days.len();

        let t_max_noise = noise.normal_series(n, 0.0, m.temperature_noise_sd)?;
        let t_min_noise = noise.normal_series(n, 0.0, m.temperature_noise_sd)?;

        let mut precip = Vec::with_capacity(n);
        for &doy in &days {
            let amount = if noise.chance(m.rain_probability(doy)) {
                noise.exponential(m.mean_rain_mm)?
            } else {
                0.0
            };
            precip.push(amount);
        }

        let humidity_noise = noise.normal_series(n, 0.0, m.humidity_noise_sd)?;
        let radiation_noise = noise.normal_series(n, 0.0, m.radiation_noise_sd)?;

        range
            .days()
            .enumerate()
            .map(|(i, date)| -> GeneratorResult<DailyClimateRecord> {
                let doy = days[i];
                let t_base = m.base_temperature(doy);
                let t_max = t_base + m.diurnal_offset + t_max_noise[i];
                let t_min = t_base - m.diurnal_offset + t_min_noise[i];
                let t_mean = (t_max + t_min) / 2.0;

                let rain_boost = if precip[i] > 0.0 { m.humidity_rain_boost } else { 0.0 };
                let humidity = HUMIDITY_RANGE.clamp(m.humidity_base + rain_boost + humidity_noise[i]);
                let radiation = RADIATION_RANGE.clamp(m.base_radiation(doy) + radiation_noise[i]);

                Ok(DailyClimateRecord {
                    date,
                    t_max: round_decimal(t_max, 1)?,
                    t_min: round_decimal(t_min, 1)?,
                    t_mean: round_decimal(t_mean, 1)?,
                    precip_mm: round_decimal(precip[i], 1)?,
                    humidity_percent: round_decimal(humidity, 1)?,
                    radiation_w_m2: round_decimal(radiation, 1)?,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_peaks_in_summer() {
        let model = ClimateModel::default();
        let july = model.base_temperature(200);
        let january = model.base_temperature(15);
        assert!(july > 24.0, "July base temperature {} too low", july);
        assert!(january < 7.0, "January base temperature {} too high", january);
    }

    #[test]
    fn test_rain_probability_higher_in_winter() {
        let model = ClimateModel::default();
        assert!(model.rain_probability(1) > model.rain_probability(182));
        // raw winter value 0.25 is inside the clamp, raw summer value -0.05 is not
        assert!((model.rain_probability(365) - 0.25).abs() < 1e-9);
        assert_eq!(model.rain_probability(183), 0.05);
    }

    #[test]
    fn test_generate_one_row_per_day() {
        let range = DateRange::new(
            chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            chrono::NaiveDate::from_ymd_opt(2020, 12, 31).unwrap(),
        )
        .unwrap();
        let records = ClimateGenerator::default()
            .generate(&range, &mut NoiseSource::seeded(42))
            .unwrap();
        assert_eq!(records.len(), 366);
        assert!(records.windows(2).all(|w| w[0].date < w[1].date));
    }
}
