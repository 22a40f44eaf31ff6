//! Fixed plot catalog of the synthetic estate

use shared::{GrapeVariety, Plot, SlopeExposure, SoilType};

fn plot(
    id: u32,
    area_ha: f64,
    exposure: SlopeExposure,
    slope_percent: u32,
    altitude_meters: u32,
    soil_type: SoilType,
    variety: GrapeVariety,
) -> Plot {
    Plot {
        id,
        area_ha,
        exposure,
        slope_percent,
        altitude_meters,
        soil_type,
        variety,
    }
}

/// The five plots every run generates data for, ordered by id
pub fn plot_catalog() -> Vec<Plot> {
    vec![
        plot(1, 1.2, SlopeExposure::South, 15, 250, SoilType::Schist, GrapeVariety::TourigaNacional),
        plot(2, 0.8, SlopeExposure::SouthWest, 20, 300, SoilType::Schist, GrapeVariety::TintaRoriz),
        plot(3, 1.5, SlopeExposure::North, 10, 200, SoilType::SchistClay, GrapeVariety::TourigaFranca),
        plot(4, 1.0, SlopeExposure::East, 5, 180, SoilType::Schist, GrapeVariety::Viosinho),
        plot(5, 0.7, SlopeExposure::West, 25, 320, SoilType::Schist, GrapeVariety::TintoCao),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_one_to_five() {
        let ids: Vec<u32> = plot_catalog().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_catalog_uses_known_lookups() {
        for plot in plot_catalog() {
            assert!(plot.soil_type.is_known());
            assert!(plot.variety.is_known());
        }
        assert_eq!(plot_catalog()[2].soil_type, SoilType::SchistClay);
    }
}
