//! Single-mode wave evaluation
//!
//! Evaluates the traveling wave
//!
//! ```text
//! η(r, θ, z, t) = A · D(r) · e^{i(mθ + kz − ωt)}
//! A    = 1 / (1 + m + k)
//! D(r) = exp(−0.1 · r / a)
//! ```
//!
//! and returns its real part. Every function here is pure: no state, no
//! allocation, safe to call from any number of threads at once.

use crate::core_types::{AngularFrequency, Meters, ParameterSet, Radians, Seconds, WaveParameters};
use crate::physics::frequency::angular_frequency;
use nalgebra::Complex;

/// Radial e-folding rate, in units of 1/a.
pub const RADIAL_DECAY_RATE: f64 = 0.1;

/// One harmonic of the Fourier superposition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveMode {
    /// Harmonic index n, 1-based
    pub harmonic: u32,
    /// Effective wavenumber `k_n = k·n/2`
    pub wavenumber: f64,
}

impl WaveMode {
    /// Harmonic `n` of base wavenumber `k`
    #[must_use]
    pub fn new(harmonic: u32, base_wavenumber: f64) -> Self {
        Self {
            harmonic,
            wavenumber: base_wavenumber * f64::from(harmonic) / 2.0,
        }
    }

    /// Superposition weight 1/n
    #[must_use]
    pub fn weight(self) -> f64 {
        1.0 / f64::from(self.harmonic)
    }

    /// Harmonics n = 1..=N for the configured wave parameters
    pub fn series(wave: &WaveParameters) -> impl Iterator<Item = WaveMode> {
        let k = wave.wavenumber;
        (1..=wave.harmonics).map(move |n| WaveMode::new(n, k))
    }
}

/// Cylindrical sample point and time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldPoint {
    /// Distance from the vortex axis
    pub radius: Meters,
    /// Azimuth θ
    pub angle: Radians,
    /// Axial position z
    pub height: Meters,
    /// Time sample
    pub time: Seconds,
}

impl FieldPoint {
    /// Point at (r, θ, z) sampled at `time`
    #[must_use]
    pub fn new(radius: Meters, angle: Radians, height: Meters, time: Seconds) -> Self {
        Self {
            radius,
            angle,
            height,
            time,
        }
    }
}

/// Mode amplitude A = 1 / (1 + m + k).
///
/// Decreases with both mode number and wavenumber. For k ≤ −(1 + m) the
/// result is infinite or negative; callers keep k non-negative.
#[inline]
#[must_use]
pub fn mode_amplitude(m: u32, k: f64) -> f64 {
    1.0 / (1.0 + f64::from(m) + k)
}

/// Radial attenuation D(r) = exp(−0.1 · r / a); exactly 1 on the axis.
#[inline]
#[must_use]
pub fn radial_decay(radius: Meters, core_radius: Meters) -> f64 {
    (-RADIAL_DECAY_RATE * (radius / core_radius)).exp()
}

/// Phase φ = m·θ + k·z − ω·t.
#[inline]
#[must_use]
pub fn phase(m: u32, k: f64, point: &FieldPoint, omega: AngularFrequency) -> Radians {
    point.angle * f64::from(m) + Radians::new(k * *point.height) - omega * point.time
}

/// Complex wave sample A · D(r) · e^{iφ} of mode (m, k).
#[must_use]
pub fn complex_displacement(
    point: &FieldPoint,
    m: u32,
    k: f64,
    params: &ParameterSet,
) -> Complex<f64> {
    let omega = angular_frequency(m, k, params);
    let magnitude =
        mode_amplitude(m, k) * radial_decay(point.radius, params.physical().core_radius);
    Complex::from_polar(magnitude, *phase(m, k, point, omega))
}

/// Real displacement A · D(r) · cos(φ) of mode (m, k).
#[must_use]
pub fn displacement(point: &FieldPoint, m: u32, k: f64, params: &ParameterSet) -> f64 {
    complex_displacement(point, m, k, params).re
}
