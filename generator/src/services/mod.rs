//! Generative models of the two pipeline stages

pub mod climate;
pub mod noise;
pub mod plot;
pub mod productivity;
pub mod soil;
pub mod vegetation;

pub use climate::{ClimateGenerator, ClimateModel};
pub use noise::NoiseSource;
pub use plot::plot_catalog;
pub use productivity::{ProductivityGenerator, YieldModel};
pub use soil::generate_soil_profiles;
pub use vegetation::{VegetationGenerator, VegetationModel};
