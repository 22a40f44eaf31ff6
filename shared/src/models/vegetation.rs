//! Vegetation index models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ValueRange;

/// NDVI values are clipped to this band
pub const NDVI_RANGE: ValueRange = ValueRange::new(0.2, 0.9);

/// Daily NDVI reading for one plot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VegetationIndexRecord {
    #[serde(rename = "data")]
    pub date: NaiveDate,
    #[serde(rename = "talhao_id")]
    pub plot_id: u32,
    pub ndvi: Decimal,
}
