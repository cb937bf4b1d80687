//! Synthesis strategy trait definition
//!
//! This module defines the `SynthesisStrategy` trait, the seam between the
//! layer synthesizer (grid, accumulation, Cartesian conversion) and the rule
//! that decides what each harmonic contributes. The tornado and legacy
//! vortex strategies both implement this trait.

use crate::core_types::ParameterSet;
use crate::physics::{FieldPoint, WaveMode};

/// Per-harmonic contribution rule for the Fourier layer synthesizer
///
/// Implementations must be pure: the synthesizer evaluates layers on
/// several threads at once and relies on identical inputs giving identical
/// output.
pub trait SynthesisStrategy: Send + Sync {
    /// Stable strategy name (for logs and CLI selection)
    fn name(&self) -> &'static str;

    /// Weighted contribution of harmonic `mode` at `point`
    ///
    /// # Arguments
    ///
    /// * `params` - Validated parameters (mode number, physical constants)
    /// * `mode` - Harmonic index and effective wavenumber
    /// * `point` - Cylindrical sample point and time
    fn harmonic_term(&self, params: &ParameterSet, mode: &WaveMode, point: &FieldPoint) -> f64;

    /// Multiplier applied to a layer's full harmonic sum before it displaces Z
    ///
    /// Defaults to 1 (no modulation).
    fn height_modulation(&self, _z_level: f64) -> f64 {
        1.0
    }
}

impl<S: SynthesisStrategy + ?Sized> SynthesisStrategy for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn harmonic_term(&self, params: &ParameterSet, mode: &WaveMode, point: &FieldPoint) -> f64 {
        (**self).harmonic_term(params, mode, point)
    }

    fn height_modulation(&self, z_level: f64) -> f64 {
        (**self).height_modulation(z_level)
    }
}
