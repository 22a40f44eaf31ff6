//! Daily climate models

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ValueRange;

/// Relative humidity bounds (%)
pub const HUMIDITY_RANGE: ValueRange = ValueRange::new(30.0, 100.0);

/// Solar radiation bounds (W/m²)
pub const RADIATION_RANGE: ValueRange = ValueRange::new(50.0, 400.0);

/// One day of weather, as persisted in `clima_diario_2019_2024.csv`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyClimateRecord {
    #[serde(rename = "data")]
    pub date: NaiveDate,
    pub t_max: Decimal,
    pub t_min: Decimal,
    pub t_mean: Decimal,
    pub precip_mm: Decimal,
    #[serde(rename = "humidade_perc")]
    pub humidity_percent: Decimal,
    #[serde(rename = "radiacao_w_m2")]
    pub radiation_w_m2: Decimal,
}

impl DailyClimateRecord {
    pub fn mean_temperature(&self) -> f64 {
        self.t_mean.to_f64().unwrap_or_default()
    }

    /// Heat accumulated above `base_celsius` on this day
    pub fn degree_days(&self, base_celsius: f64) -> f64 {
        (self.mean_temperature() - base_celsius).max(0.0)
    }
}
