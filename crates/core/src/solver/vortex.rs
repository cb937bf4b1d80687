//! Vortex strategy: the legacy kinematic superposition
//!
//! Not a special case of [`TornadoStrategy`](super::TornadoStrategy): the
//! weighting, frequencies and decay all differ.
//!
//! ```text
//! term_n = (1/√n) · cos(n·m·θ + k_n·z − ω_n·t)
//! ω_n    = 1.2 · (1 + 0.2·n)
//! k_n    = k·n/2
//! ```
//!
//! No radial decay, no dispersion relation, and no height modulation.

use super::SynthesisStrategy;
use crate::core_types::{AngularFrequency, ParameterSet, Radians};
use crate::physics::{FieldPoint, WaveMode};

/// Base angular frequency of the legacy harmonics (rad/s).
pub const BASE_FREQUENCY: f64 = 1.2;

/// Relative frequency increase per harmonic index.
pub const FREQUENCY_STEP: f64 = 0.2;

/// Legacy synthesis strategy (1/√n harmonic weighting)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VortexStrategy;

impl VortexStrategy {
    /// Prescribed frequency ω_n of harmonic `n`
    #[must_use]
    pub fn harmonic_frequency(harmonic: u32) -> f64 {
        BASE_FREQUENCY * (1.0 + FREQUENCY_STEP * f64::from(harmonic))
    }
}

impl SynthesisStrategy for VortexStrategy {
    fn name(&self) -> &'static str {
        "vortex"
    }

    fn harmonic_term(&self, params: &ParameterSet, mode: &WaveMode, point: &FieldPoint) -> f64 {
        let n = f64::from(mode.harmonic);
        let m = f64::from(params.wave().mode_number);
        let omega = Self::harmonic_frequency(mode.harmonic);
        let phase = point.angle * (n * m) + Radians::new(mode.wavenumber * *point.height)
            - AngularFrequency::new(omega) * point.time;
        (1.0 / n.sqrt()) * phase.cos()
    }
}
