//! Soil profile derivation

use shared::{Plot, SoilProfile};

use super::noise::NoiseSource;

/// Draw a soil profile for `plot` from its soil type's parameter ranges.
///
/// Six uniform draws, in column order. Unknown soil types use the schist
/// ranges.
pub fn generate_soil_profile(plot: &Plot, noise: &mut NoiseSource) -> SoilProfile {
    if !plot.soil_type.is_known() {
        tracing::warn!(
            plot_id = plot.id,
            soil = %plot.soil_type,
            "unknown soil type, using schist parameter ranges"
        );
    }
    let ranges = plot.soil_type.parameter_ranges();

    SoilProfile {
        plot_id: plot.id,
        ph: noise.uniform(ranges.ph),
        organic_matter_percent: noise.uniform(ranges.organic_matter_percent),
        clay_percent: noise.uniform(ranges.clay_percent),
        silt_percent: noise.uniform(ranges.silt_percent),
        sand_percent: noise.uniform(ranges.sand_percent),
        water_capacity_mm: noise.uniform(ranges.water_capacity_mm),
    }
}

/// Soil profiles for every plot, in plot order
pub fn generate_soil_profiles(plots: &[Plot], noise: &mut NoiseSource) -> Vec<SoilProfile> {
    plots
        .iter()
        .map(|plot| generate_soil_profile(plot, noise))
        .collect()
}
