//! Annual productivity (yield) models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::GrapeVariety;

/// Yield never drops below this value (t/ha)
pub const MIN_YIELD_TON_HA: f64 = 0.5;

/// Base temperature for degree-day accumulation (°C)
pub const DEGREE_DAY_BASE_CELSIUS: f64 = 10.0;

/// Yield of one plot for one growing season
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnnualYieldRecord {
    #[serde(rename = "ano")]
    pub year: i32,
    #[serde(rename = "talhao_id")]
    pub plot_id: u32,
    #[serde(rename = "casta")]
    pub variety: GrapeVariety,
    #[serde(rename = "produtividade_ton_ha")]
    pub yield_ton_ha: Decimal,
    /// Degree-days accumulated over the growing cycle
    #[serde(rename = "graus_dia_ciclo")]
    pub cycle_degree_days: i64,
    #[serde(rename = "precip_ciclo_mm")]
    pub cycle_precip_mm: Decimal,
}
