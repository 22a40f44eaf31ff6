//! Validation of generated tables
//!
//! Every stage runs its output through these checks before anything is
//! written, so a configuration override cannot silently produce rows outside
//! the documented bounds.

use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{
    AnnualYieldRecord, DailyClimateRecord, Plot, VegetationIndexRecord, HUMIDITY_RANGE,
    MIN_YIELD_TON_HA, NDVI_RANGE, RADIATION_RANGE,
};
use crate::types::{DateRange, ValueRange};

/// A generated table broke one of its invariants
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("{field} = {value} on {date} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        date: NaiveDate,
        value: Decimal,
        min: f64,
        max: f64,
    },

    #[error("negative precipitation {value} on {date}")]
    NegativePrecipitation { date: NaiveDate, value: Decimal },

    #[error("yield {value} t/ha for plot {plot_id} in {year} is below the {floor} floor")]
    YieldBelowFloor {
        year: i32,
        plot_id: u32,
        value: Decimal,
        floor: f64,
    },

    #[error("climate series is not contiguous: expected {expected}, found {found}")]
    DateGap { expected: NaiveDate, found: NaiveDate },

    #[error("climate series covers {found} days, expected {expected}")]
    DayCountMismatch { expected: usize, found: usize },

    #[error("duplicate plot id {0}")]
    DuplicatePlotId(u32),

    #[error("{table} references unknown plot id {plot_id}")]
    UnknownPlot { table: &'static str, plot_id: u32 },
}

fn check_range(
    field: &'static str,
    date: NaiveDate,
    value: Decimal,
    range: ValueRange,
) -> Result<(), ValidationError> {
    let v = value.to_f64().unwrap_or(f64::NAN);
    if range.contains(v) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            date,
            value,
            min: range.min,
            max: range.max,
        })
    }
}

/// Validate humidity, radiation and precipitation bounds of one climate day
pub fn validate_climate_record(record: &DailyClimateRecord) -> Result<(), ValidationError> {
    check_range("humidade_perc", record.date, record.humidity_percent, HUMIDITY_RANGE)?;
    check_range("radiacao_w_m2", record.date, record.radiation_w_m2, RADIATION_RANGE)?;
    if record.precip_mm < Decimal::ZERO {
        return Err(ValidationError::NegativePrecipitation {
            date: record.date,
            value: record.precip_mm,
        });
    }
    Ok(())
}

/// Validate that the climate series has exactly one row per day of `range`,
/// in strictly increasing order
pub fn validate_climate_series(
    records: &[DailyClimateRecord],
    range: &DateRange,
) -> Result<(), ValidationError> {
    for (expected, record) in range.days().zip(records) {
        if record.date != expected {
            return Err(ValidationError::DateGap {
                expected,
                found: record.date,
            });
        }
    }
    if records.len() != range.len_days() {
        return Err(ValidationError::DayCountMismatch {
            expected: range.len_days(),
            found: records.len(),
        });
    }
    records.iter().try_for_each(validate_climate_record)
}

/// Validate that plot ids are unique and return them
pub fn validate_unique_plot_ids(plots: &[Plot]) -> Result<HashSet<u32>, ValidationError> {
    let mut ids = HashSet::with_capacity(plots.len());
    for plot in plots {
        if !ids.insert(plot.id) {
            return Err(ValidationError::DuplicatePlotId(plot.id));
        }
    }
    Ok(ids)
}

/// Validate that every referenced plot id exists in `known_ids`
pub fn validate_plot_references(
    table: &'static str,
    plot_ids: impl IntoIterator<Item = u32>,
    known_ids: &HashSet<u32>,
) -> Result<(), ValidationError> {
    for plot_id in plot_ids {
        if !known_ids.contains(&plot_id) {
            return Err(ValidationError::UnknownPlot { table, plot_id });
        }
    }
    Ok(())
}

/// Validate that a yield record respects the minimum yield
pub fn validate_yield(record: &AnnualYieldRecord) -> Result<(), ValidationError> {
    let value = record.yield_ton_ha.to_f64().unwrap_or(f64::NAN);
    if value >= MIN_YIELD_TON_HA {
        Ok(())
    } else {
        Err(ValidationError::YieldBelowFloor {
            year: record.year,
            plot_id: record.plot_id,
            value: record.yield_ton_ha,
            floor: MIN_YIELD_TON_HA,
        })
    }
}

/// Validate that an NDVI reading lies in the clipped band
pub fn validate_ndvi(record: &VegetationIndexRecord) -> Result<(), ValidationError> {
    check_range("ndvi", record.date, record.ndvi, NDVI_RANGE)
}
