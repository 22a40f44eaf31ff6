//! Common types used across the generator stages

use chrono::{Datelike, NaiveDate};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Inclusive numeric interval used for clamps and uniform draws
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Inclusive calendar date range
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Returns None if `start` is after `end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Number of calendar days, both ends included
    pub fn len_days(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Every day in the range, in chronological order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }

    /// Calendar years touched by the range
    pub fn years(&self) -> std::ops::RangeInclusive<i32> {
        self.start.year()..=self.end.year()
    }
}

/// A recurring month/day window inside a calendar year, e.g. the growing cycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeasonalWindow {
    pub start_month: u32,
    pub start_day: u32,
    pub end_month: u32,
    pub end_day: u32,
}

impl SeasonalWindow {
    /// April 1 to September 30
    pub const GROWING_CYCLE: SeasonalWindow = SeasonalWindow {
        start_month: 4,
        start_day: 1,
        end_month: 9,
        end_day: 30,
    };

    /// Concrete dates of the window for a given year
    pub fn in_year(&self, year: i32) -> Option<DateRange> {
        let start = NaiveDate::from_ymd_opt(year, self.start_month, self.start_day)?;
        let end = NaiveDate::from_ymd_opt(year, self.end_month, self.end_day)?;
        DateRange::new(start, end)
    }
}

/// A generated value was NaN or infinite and cannot be persisted
#[derive(Debug, Clone, Copy, Error, PartialEq)]
#[error("non-finite value {0} cannot be rounded for persistence")]
pub struct NonFiniteValue(pub f64);

/// Round a generated value to `dp` decimal places, ties to even.
pub fn round_decimal(value: f64, dp: u32) -> Result<Decimal, NonFiniteValue> {
    if !value.is_finite() {
        return Err(NonFiniteValue(value));
    }
    let mut rounded = Decimal::from_f64(value)
        .ok_or(NonFiniteValue(value))?
        .round_dp(dp);
    // keep trailing zeros so "25.0" is written rather than "25"
    rounded.rescale(dp);
    Ok(rounded)
}
