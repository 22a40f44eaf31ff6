//! Annual yield derivation from growing-season climate aggregates

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use shared::{
    round_decimal, AnnualYieldRecord, DailyClimateRecord, PlotWithSoil, SeasonalWindow,
    DEGREE_DAY_BASE_CELSIUS, MIN_YIELD_TON_HA,
};

use super::noise::NoiseSource;
use crate::error::GeneratorResult;

/// Climate totals over one year's growing cycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonAggregate {
    pub year: i32,
    pub degree_days: f64,
    pub precip_mm: Decimal,
}

/// Sum degree-days and precipitation over the `window` of `year`.
///
/// Days missing from `climate` simply contribute nothing.
pub fn season_aggregate(
    climate: &[DailyClimateRecord],
    year: i32,
    window: &SeasonalWindow,
) -> SeasonAggregate {
    let mut degree_days = 0.0;
    let mut precip_mm = Decimal::ZERO;

    if let Some(range) = window.in_year(year) {
        for day in climate.iter().filter(|d| range.contains(d.date)) {
            degree_days += day.degree_days(DEGREE_DAY_BASE_CELSIUS);
            precip_mm += day.precip_mm;
        }
    }

    SeasonAggregate {
        year,
        degree_days,
        precip_mm,
    }
}

/// Coefficients of the yield model
#[derive(Debug, Clone)]
pub struct YieldModel {
    pub degree_day_coefficient: f64,
    pub precip_coefficient: f64,
    pub intercept: f64,
    pub soil_base: f64,
    pub water_capacity_weight: f64,
    pub reference_water_capacity_mm: f64,
    pub organic_matter_weight: f64,
    pub reference_organic_matter_percent: f64,
    pub noise_sd: f64,
    pub floor_ton_ha: f64,
    pub window: SeasonalWindow,
}

impl Default for YieldModel {
    fn default() -> Self {
        Self {
            degree_day_coefficient: 0.005,
            precip_coefficient: 0.1,
            intercept: -5.0,
            soil_base: 0.5,
            water_capacity_weight: 0.3,
            reference_water_capacity_mm: 150.0,
            organic_matter_weight: 0.2,
            reference_organic_matter_percent: 3.0,
            noise_sd: 0.15,
            floor_ton_ha: MIN_YIELD_TON_HA,
            window: SeasonalWindow::GROWING_CYCLE,
        }
    }
}

impl YieldModel {
    /// Multiplier from water-holding capacity and organic matter
    pub fn soil_factor(&self, plot: &PlotWithSoil) -> f64 {
        self.soil_base
            + self.water_capacity_weight * (plot.capacidade_agua_mm / self.reference_water_capacity_mm)
            + self.organic_matter_weight * (plot.mo_perc / self.reference_organic_matter_percent)
    }

    /// Noise-free yield (t/ha) before the floor is applied
    pub fn base_yield(&self, season: &SeasonAggregate, plot: &PlotWithSoil) -> f64 {
        let precip = season.precip_mm.to_f64().unwrap_or_default();
        (self.degree_day_coefficient * season.degree_days + self.precip_coefficient * precip
            + self.intercept)
            * plot.casta.yield_factor()
            * self.soil_factor(plot)
    }
}

/// Generates the annual yield table
#[derive(Debug, Clone, Default)]
pub struct ProductivityGenerator {
    model: YieldModel,
}

impl ProductivityGenerator {
    /// One record per (year, plot), years outer, one noise draw per record
    pub fn generate(
        &self,
        plots: &[PlotWithSoil],
        climate: &[DailyClimateRecord],
        years: impl IntoIterator<Item = i32>,
        noise: &mut NoiseSource,
    ) -> GeneratorResult<Vec<AnnualYieldRecord>> {
        let m = &self.model;
        let mut records = Vec::new();

        for plot in plots.iter().filter(|p| !p.casta.is_known()) {
            tracing::warn!(plot_id = plot.id, casta = %plot.casta, "unknown variety, using neutral yield factor");
        }

        for year in years {
            let season = season_aggregate(climate, year, &m.window);
            tracing::debug!(
                year,
                degree_days = season.degree_days,
                precip_mm = %season.precip_mm,
                "growing season aggregated"
            );

            for plot in plots {
                let factor = noise.normal(1.0, m.noise_sd)?;
                let yield_ton_ha = (m.base_yield(&season, plot) * factor).max(m.floor_ton_ha);

                records.push(AnnualYieldRecord {
                    year,
                    plot_id: plot.id,
                    variety: plot.casta.clone(),
                    yield_ton_ha: round_decimal(yield_ton_ha, 2)?,
                    cycle_degree_days: season.degree_days.round_ties_even() as i64,
                    cycle_precip_mm: season.precip_mm.round_dp(1),
                });
            }
        }

        Ok(records)
    }
}
