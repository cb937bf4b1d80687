//! Dispersion relation for azimuthal-axial vortex waves
//!
//! Maps a mode (m, k) to its angular frequency ω from two contributions:
//!
//! ```text
//! ω₁  = (Γ / 2πa²) · m · (k·a)²          circulation-driven
//! ω₂² = (σ / ρa³) · m · (m² − 1)          surface-tension-driven, m > 1 only
//! ω   = ω₁ + 0.1 · ω₂
//! ```
//!
//! ω₂ is a minor correction: it enters with the fixed weight
//! [`SURFACE_TENSION_WEIGHT`], never as a peer of ω₁.

use crate::core_types::{AngularFrequency, ParameterSet, PhysicalParameters};
use crate::physics::wave::WaveMode;
use std::f64::consts::PI;

/// Weight of the surface-tension term in the combined frequency.
pub const SURFACE_TENSION_WEIGHT: f64 = 0.1;

/// Both contributions to a mode's frequency, before combination
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyComponents {
    /// Circulation-based ω₁
    pub primary: AngularFrequency,
    /// Surface-tension-based ω₂ (zero for m ≤ 1)
    pub secondary: AngularFrequency,
}

impl FrequencyComponents {
    /// Combined frequency ω = ω₁ + 0.1·ω₂
    #[must_use]
    pub fn combined(self) -> AngularFrequency {
        self.primary + self.secondary * SURFACE_TENSION_WEIGHT
    }
}

/// Circulation-based frequency ω₁ = (Γ / 2πa²) · m · (k·a)².
#[must_use]
pub fn circulation_frequency(m: u32, k: f64, physical: &PhysicalParameters) -> AngularFrequency {
    let a = *physical.core_radius;
    let ka = k * a;
    AngularFrequency::new(physical.circulation / (2.0 * PI * a * a) * f64::from(m) * ka * ka)
}

/// Surface-tension frequency ω₂ = √max(0, (σ / ρa³) · m · (m² − 1)).
///
/// Zero for m ≤ 1. A negative radicand (degenerate σ or ρ) is clamped to zero
/// rather than producing NaN.
#[must_use]
pub fn surface_tension_frequency(m: u32, physical: &PhysicalParameters) -> AngularFrequency {
    if m <= 1 {
        return AngularFrequency::ZERO;
    }
    let a = *physical.core_radius;
    let m = f64::from(m);
    let omega_squared =
        physical.surface_tension / (physical.density * a * a * a) * m * (m * m - 1.0);
    AngularFrequency::new(omega_squared.max(0.0).sqrt())
}

/// Compute both frequency contributions for mode (m, k).
#[must_use]
pub fn frequency_components(m: u32, k: f64, params: &ParameterSet) -> FrequencyComponents {
    let physical = params.physical();
    FrequencyComponents {
        primary: circulation_frequency(m, k, physical),
        secondary: surface_tension_frequency(m, physical),
    }
}

/// Angular frequency ω of mode (m, k).
///
/// # Example
/// ```
/// use vortex_sim_core::physics::angular_frequency;
/// use vortex_sim_core::ParameterSet;
///
/// // Γ=10, a=1, m=4, k=0.5, σ=0.1, ρ=1
/// let omega = angular_frequency(4, 0.5, &ParameterSet::DEFAULT);
/// assert!((*omega - 1.8365).abs() < 1e-3);
/// ```
#[must_use]
pub fn angular_frequency(m: u32, k: f64, params: &ParameterSet) -> AngularFrequency {
    frequency_components(m, k, params).combined()
}

/// One line of the harmonic frequency spectrum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectrumLine {
    /// Harmonic index n (1-based)
    pub harmonic: u32,
    /// Effective wavenumber k·n/2
    pub wavenumber: f64,
    /// Combined frequency of the configured mode at this wavenumber
    pub frequency: AngularFrequency,
}

/// Frequency of every harmonic the synthesizer sums, for spectrum plots.
#[must_use]
pub fn frequency_spectrum(params: &ParameterSet) -> Vec<SpectrumLine> {
    let m = params.wave().mode_number;
    WaveMode::series(params.wave())
        .map(|mode| SpectrumLine {
            harmonic: mode.harmonic,
            wavenumber: mode.wavenumber,
            frequency: angular_frequency(m, mode.wavenumber, params),
        })
        .collect()
}
