//! Core types: units, parameters and configuration overrides

pub mod overrides;
pub mod parameters;
pub mod units;

pub use overrides::{ConfigError, ParameterKey, ParameterOverrides};
pub use parameters::{
    frame_count, AnimationSettings, DiscretizationParameters, ParameterSet, PhysicalParameters,
    ValidationError, WaveParameters, INNER_RADIUS, MAX_FRAMES, MAX_GRID_SAMPLES,
};
pub use units::*;
