//! Tornado strategy: the physically parameterized superposition
//!
//! Harmonic n contributes the full single-mode wave at `k_n = k·n/2`, divided
//! by n, and the layer sum is amplified by `(1 + 0.1·z_level)` before it
//! displaces the layer.

use super::SynthesisStrategy;
use crate::core_types::ParameterSet;
use crate::physics::{displacement, FieldPoint, WaveMode};

/// Growth of the height modulation factor per meter of layer height.
pub const HEIGHT_MODULATION_RATE: f64 = 0.1;

/// Canonical synthesis strategy (1/n harmonic weighting)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TornadoStrategy;

impl SynthesisStrategy for TornadoStrategy {
    fn name(&self) -> &'static str {
        "tornado"
    }

    fn harmonic_term(&self, params: &ParameterSet, mode: &WaveMode, point: &FieldPoint) -> f64 {
        // Harmonic weight 1/n is separate from the mode amplitude 1/(1+m+k)
        displacement(point, params.wave().mode_number, mode.wavenumber, params)
            / f64::from(mode.harmonic)
    }

    fn height_modulation(&self, z_level: f64) -> f64 {
        1.0 + HEIGHT_MODULATION_RATE * z_level
    }
}
