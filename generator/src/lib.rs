//! Vineyard synthetic dataset generator
//!
//! Produces plausible plot, climate, soil, yield and NDVI tables for a small
//! Douro estate. Stage 1 (`gerar-exploracao`) writes plots and a six-year
//! daily climate series; stage 2 (`gerar-solo-produtividade`) reads them back
//! and derives soil profiles, annual yields and daily NDVI.

pub mod config;
pub mod error;
pub mod external;
pub mod pipeline;
pub mod services;
pub mod telemetry;

pub use config::Config;
pub use error::{GeneratorError, GeneratorResult};
