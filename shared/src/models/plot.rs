//! Vineyard plot (talhão) models

use serde::{Deserialize, Serialize};

/// A vineyard plot with fixed physical attributes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plot {
    pub id: u32,
    pub area_ha: f64,
    #[serde(rename = "exposicao")]
    pub exposure: SlopeExposure,
    #[serde(rename = "declive_perc")]
    pub slope_percent: u32,
    #[serde(rename = "altitude_m")]
    pub altitude_meters: u32,
    #[serde(rename = "solo")]
    pub soil_type: SoilType,
    #[serde(rename = "casta")]
    pub variety: GrapeVariety,
}

/// Compass direction a slope faces
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SlopeExposure {
    #[serde(rename = "Norte")]
    North,
    #[serde(rename = "Nordeste")]
    NorthEast,
    #[serde(rename = "Este")]
    East,
    #[serde(rename = "Sudeste")]
    SouthEast,
    #[serde(rename = "Sul")]
    South,
    #[serde(rename = "Sudoeste")]
    SouthWest,
    #[serde(rename = "Oeste")]
    West,
    #[serde(rename = "Noroeste")]
    NorthWest,
}

/// Soil type category of a plot
///
/// Unknown categories are kept verbatim so they survive a round trip through
/// the plot table; parameter lookups fall back to schist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum SoilType {
    /// Schist (xisto)
    Schist,
    /// Schist with clay (xisto_argila)
    SchistClay,
    Other(String),
}

impl SoilType {
    pub fn code(&self) -> &str {
        match self {
            SoilType::Schist => "xisto",
            SoilType::SchistClay => "xisto_argila",
            SoilType::Other(code) => code,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, SoilType::Other(_))
    }
}

impl From<String> for SoilType {
    fn from(code: String) -> Self {
        match code.as_str() {
            "xisto" => SoilType::Schist,
            "xisto_argila" => SoilType::SchistClay,
            _ => SoilType::Other(code),
        }
    }
}

impl From<SoilType> for String {
    fn from(soil: SoilType) -> Self {
        soil.code().to_string()
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Grape varieties (castas) of the Douro region
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum GrapeVariety {
    TourigaNacional,
    TintaRoriz,
    TourigaFranca,
    Viosinho,
    TintoCao,
    /// Custom variety with name
    Custom(String),
}

impl GrapeVariety {
    /// Relative productivity of the variety; unknown varieties are neutral.
    pub fn yield_factor(&self) -> f64 {
        match self {
            GrapeVariety::TourigaNacional => 1.0,
            GrapeVariety::TintaRoriz => 1.1,
            GrapeVariety::TourigaFranca => 1.05,
            GrapeVariety::Viosinho => 0.9,
            GrapeVariety::TintoCao => 0.85,
            GrapeVariety::Custom(_) => 1.0,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, GrapeVariety::Custom(_))
    }
}

impl From<String> for GrapeVariety {
    fn from(name: String) -> Self {
        match name.as_str() {
            "Touriga Nacional" => GrapeVariety::TourigaNacional,
            "Tinta Roriz" => GrapeVariety::TintaRoriz,
            "Touriga Franca" => GrapeVariety::TourigaFranca,
            "Viosinho" => GrapeVariety::Viosinho,
            "Tinto Cão" => GrapeVariety::TintoCao,
            _ => GrapeVariety::Custom(name),
        }
    }
}

impl From<GrapeVariety> for String {
    fn from(variety: GrapeVariety) -> Self {
        variety.to_string()
    }
}

impl std::fmt::Display for GrapeVariety {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GrapeVariety::TourigaNacional => write!(f, "Touriga Nacional"),
            GrapeVariety::TintaRoriz => write!(f, "Tinta Roriz"),
            GrapeVariety::TourigaFranca => write!(f, "Touriga Franca"),
            GrapeVariety::Viosinho => write!(f, "Viosinho"),
            GrapeVariety::TintoCao => write!(f, "Tinto Cão"),
            GrapeVariety::Custom(name) => write!(f, "{}", name),
        }
    }
}
