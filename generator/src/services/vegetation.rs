//! Daily vegetation index (NDVI) derivation

use std::collections::VecDeque;

use chrono::{Datelike, Duration};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use shared::{round_decimal, DailyClimateRecord, PlotWithSoil, VegetationIndexRecord, NDVI_RANGE};

use super::noise::NoiseSource;
use crate::error::GeneratorResult;

/// Coefficients of the NDVI model
#[derive(Debug, Clone)]
pub struct VegetationModel {
    pub baseline: f64,
    pub seasonal_amplitude: f64,
    pub peak_day_of_year: f64,
    pub spread_days: f64,
    pub stress_floor: f64,
    pub stress_gain: f64,
    pub reference_precip_mm: f64,
    pub window_days: i64,
    pub noise_sd: f64,
}

impl Default for VegetationModel {
    fn default() -> Self {
        Self {
            baseline: 0.3,
            seasonal_amplitude: 0.5,
            peak_day_of_year: 180.0,
            spread_days: 60.0,
            stress_floor: 0.7,
            stress_gain: 0.3,
            reference_precip_mm: 100.0,
            window_days: 30,
            noise_sd: 0.05,
        }
    }
}

impl VegetationModel {
    /// Gaussian seasonal curve peaking at `peak_day_of_year`
    pub fn seasonal_base(&self, day_of_year: u32) -> f64 {
        let z = (f64::from(day_of_year) - self.peak_day_of_year) / self.spread_days;
        self.baseline + self.seasonal_amplitude * (-(z * z)).exp()
    }

    /// Water stress multiplier, capped at 1.0
    pub fn stress_factor(&self, trailing_precip_mm: f64) -> f64 {
        (self.stress_floor + self.stress_gain * (trailing_precip_mm / self.reference_precip_mm))
            .min(1.0)
    }
}

/// Precipitation summed over the trailing window ending on each day.
///
/// The window for date `d` covers `(d - window_days, d]`, so gaps in the
/// series shorten it rather than pulling in older days.
pub fn trailing_precipitation(climate: &[DailyClimateRecord], window_days: i64) -> Vec<f64> {
    let mut window: VecDeque<&DailyClimateRecord> = VecDeque::new();
    let mut sum = Decimal::ZERO;
    let mut totals = Vec::with_capacity(climate.len());

    for day in climate {
        window.push_back(day);
        sum += day.precip_mm;

        let cutoff = day.date - Duration::days(window_days);
        while let Some(oldest) = window.front() {
            if oldest.date > cutoff {
                break;
            }
            sum -= oldest.precip_mm;
            window.pop_front();
        }

        totals.push(sum.to_f64().unwrap_or_default());
    }

    totals
}

/// Generates the daily NDVI table
#[derive(Debug, Clone, Default)]
pub struct VegetationGenerator {
    model: VegetationModel,
}

impl VegetationGenerator {
    /// One record per (plot, day), plots outer, one noise draw per record
    pub fn generate(
        &self,
        plots: &[PlotWithSoil],
        climate: &[DailyClimateRecord],
        noise: &mut NoiseSource,
    ) -> GeneratorResult<Vec<VegetationIndexRecord>> {
        let m = &self.model;
        let stress: Vec<f64> = trailing_precipitation(climate, m.window_days)
            .into_iter()
            .map(|p| m.stress_factor(p))
            .collect();

        let mut records = Vec::with_capacity(plots.len() * climate.len());
        for plot in plots {
            for (day, stress_factor) in climate.iter().zip(&stress) {
                let base = m.seasonal_base(day.date.ordinal());
                let factor = noise.normal(1.0, m.noise_sd)?;
                let ndvi = NDVI_RANGE.clamp(base * stress_factor * factor);

                records.push(VegetationIndexRecord {
                    date: day.date,
                    plot_id: plot.id,
                    ndvi: round_decimal(ndvi, 3)?,
                });
            }
        }

        Ok(records)
    }
}
