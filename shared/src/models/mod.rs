//! Domain models for the vineyard synthetic dataset

mod climate;
mod plot;
mod productivity;
mod soil;
mod vegetation;

pub use climate::*;
pub use plot::*;
pub use productivity::*;
pub use soil::*;
pub use vegetation::*;
