//! Sampling grid and layered output surfaces

pub mod polar_grid;
pub mod surface;

pub use polar_grid::{linspace, PolarGrid};
pub use surface::{LayerSurface, LayeredSurface};
