//! Soil composition models

use serde::{Deserialize, Serialize};

use super::{GrapeVariety, Plot, SlopeExposure, SoilType};
use crate::types::ValueRange;

/// Chemistry and texture of a plot's soil
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SoilProfile {
    #[serde(rename = "talhao_id")]
    pub plot_id: u32,
    pub ph: f64,
    /// Organic matter (%)
    #[serde(rename = "mo_perc")]
    pub organic_matter_percent: f64,
    #[serde(rename = "argila_perc")]
    pub clay_percent: f64,
    #[serde(rename = "limo_perc")]
    pub silt_percent: f64,
    #[serde(rename = "areia_perc")]
    pub sand_percent: f64,
    /// Water-holding capacity (mm)
    #[serde(rename = "capacidade_agua_mm")]
    pub water_capacity_mm: f64,
}

/// Ranges each soil attribute is drawn from, per soil type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoilParameterRanges {
    pub ph: ValueRange,
    pub organic_matter_percent: ValueRange,
    pub clay_percent: ValueRange,
    pub silt_percent: ValueRange,
    pub sand_percent: ValueRange,
    pub water_capacity_mm: ValueRange,
}

pub const SCHIST_RANGES: SoilParameterRanges = SoilParameterRanges {
    ph: ValueRange::new(5.5, 6.5),
    organic_matter_percent: ValueRange::new(1.5, 3.0),
    clay_percent: ValueRange::new(15.0, 25.0),
    silt_percent: ValueRange::new(20.0, 30.0),
    sand_percent: ValueRange::new(45.0, 65.0),
    water_capacity_mm: ValueRange::new(100.0, 150.0),
};

pub const SCHIST_CLAY_RANGES: SoilParameterRanges = SoilParameterRanges {
    ph: ValueRange::new(5.8, 6.8),
    organic_matter_percent: ValueRange::new(2.0, 3.5),
    clay_percent: ValueRange::new(25.0, 35.0),
    silt_percent: ValueRange::new(25.0, 35.0),
    sand_percent: ValueRange::new(30.0, 50.0),
    water_capacity_mm: ValueRange::new(130.0, 180.0),
};

impl SoilType {
    /// Parameter ranges for this soil type. Unknown types use schist ranges.
    pub fn parameter_ranges(&self) -> &'static SoilParameterRanges {
        match self {
            SoilType::SchistClay => &SCHIST_CLAY_RANGES,
            SoilType::Schist | SoilType::Other(_) => &SCHIST_RANGES,
        }
    }
}

/// A plot row joined with its soil profile (`talhoes_com_solo.csv`)
///
/// Columns are spelled out because the csv writer cannot serialize flattened
/// structs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlotWithSoil {
    pub id: u32,
    pub area_ha: f64,
    pub exposicao: SlopeExposure,
    pub declive_perc: u32,
    pub altitude_m: u32,
    pub solo: SoilType,
    pub casta: GrapeVariety,
    pub talhao_id: u32,
    pub ph: f64,
    pub mo_perc: f64,
    pub argila_perc: f64,
    pub limo_perc: f64,
    pub areia_perc: f64,
    pub capacidade_agua_mm: f64,
}

impl PlotWithSoil {
    pub fn join(plot: &Plot, soil: &SoilProfile) -> Self {
        Self {
            id: plot.id,
            area_ha: plot.area_ha,
            exposicao: plot.exposure,
            declive_perc: plot.slope_percent,
            altitude_m: plot.altitude_meters,
            solo: plot.soil_type.clone(),
            casta: plot.variety.clone(),
            talhao_id: soil.plot_id,
            ph: soil.ph,
            mo_perc: soil.organic_matter_percent,
            argila_perc: soil.clay_percent,
            limo_perc: soil.silt_percent,
            areia_perc: soil.sand_percent,
            capacidade_agua_mm: soil.water_capacity_mm,
        }
    }
}
