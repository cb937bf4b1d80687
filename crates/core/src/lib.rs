//! Vortex Wave-Field Synthesis Core Library
//!
//! Synthesizes the deformed free surface of a rotating columnar vortex as a
//! stack of horizontal layers. Each layer is a polar mesh displaced by a
//! truncated Fourier series of helical waves whose frequency follows a
//! simplified dispersion relation (circulation plus surface tension).
//!
//! ## Layout
//!
//! - [`core_types`]: unit newtypes, validated parameters and override layers
//! - [`physics`]: dispersion relation and single-mode wave evaluation
//! - [`grid`]: polar sampling grid and layered output surfaces
//! - [`solver`]: the layered Fourier synthesizer and its strategies
//! - [`simulation`]: config loading, animation and parameter sweeps
//!
//! The engine is a pure function of `(ParameterSet, t)`:
//!
//! ```
//! use vortex_sim_core::physics::angular_frequency;
//! use vortex_sim_core::{synthesize, ParameterSet, Seconds};
//!
//! let params = ParameterSet::DEFAULT;
//! let surface = synthesize(&params, Seconds::new(1.0));
//! assert_eq!(surface.len(), 8);
//!
//! let omega = angular_frequency(4, 0.5, &params);
//! assert!((*omega - 1.8365).abs() < 1e-3);
//! ```

// Core types and utilities
pub mod core_types;

// Wave physics
pub mod physics;

// Sampling and output surfaces
pub mod grid;

// Synthesis engine
pub mod solver;

// Run orchestration
pub mod simulation;

// Re-export core types
pub use core_types::{AngularFrequency, Meters, Radians, Seconds};
pub use core_types::{ConfigError, ParameterKey, ParameterOverrides, ParameterSet, ValidationError};

// Re-export engine types
pub use grid::{LayerSurface, LayeredSurface};
pub use solver::{
    create_strategy, synthesize, FourierLayerSynthesizer, StrategyKind, SynthesisStrategy,
    TornadoStrategy, VortexStrategy,
};

// Re-export orchestration types
pub use simulation::{
    load_parameters, render_animation, ConfigLoadWarning, Frame, FrameSchedule, ParameterSweep,
    SweepResult,
};
