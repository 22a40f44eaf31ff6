//! Shared types and models for the vineyard synthetic dataset
//!
//! This crate contains the table row types written and read by both generator
//! stages, plus the checks that every generated table must pass.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
