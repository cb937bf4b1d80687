//! Validated, immutable parameter set for wave-field synthesis
//!
//! A [`ParameterSet`] is built exactly once from [`ParameterSet::DEFAULT`]
//! merged with a [`ParameterOverrides`] mapping, validated at construction,
//! and never mutated afterwards. It is `Copy + Send + Sync` so layer and
//! frame workers can share it freely.

use super::overrides::ParameterOverrides;
use super::units::{Meters, Seconds};
use std::fmt;
use tracing::warn;

/// Innermost radial sample of every grid (m).
///
/// The radial axis starts here rather than at the singular vortex core, so
/// `r_max` must lie strictly beyond it.
pub const INNER_RADIUS: Meters = Meters::new(0.5);

/// Most frames a single animation may schedule.
pub const MAX_FRAMES: usize = 100_000;

/// Most mesh samples (`n_r · n_theta · n_layers`) a single synthesis may allocate.
pub const MAX_GRID_SAMPLES: u64 = 50_000_000;

/// Physical parameters of the vortex core.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalParameters {
    /// Circulation strength Γ (m²/s), > 0
    pub circulation: f64,
    /// Surface tension σ, ≥ 0
    pub surface_tension: f64,
    /// Density ρ (kg/m³), > 0
    pub density: f64,
    /// Characteristic core radius `a`, > 0
    pub core_radius: Meters,
}

/// Wave-mode selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParameters {
    /// Azimuthal mode number m (lobe count)
    pub mode_number: u32,
    /// Base axial wavenumber k (1/m)
    pub wavenumber: f64,
    /// Number of Fourier harmonics N, ≥ 1
    pub harmonics: u32,
    /// Number of vertical layers L, ≥ 1
    pub layers: u32,
}

/// Grid extents and resolutions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscretizationParameters {
    /// Outer radius of the radial axis
    pub r_max: Meters,
    /// Height of the topmost layer
    pub z_max: Meters,
    /// Radial sample count
    pub n_r: u32,
    /// Angular sample count
    pub n_theta: u32,
    /// Vertical resolution (carried for volumetric consumers; layers use `WaveParameters::layers`)
    pub n_z: u32,
}

/// Frame scheduling for animation loops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSettings {
    /// Frames per second, ≥ 1
    pub fps: u32,
    /// Animation length, ≥ 0
    pub duration: Seconds,
    /// Whether the orchestrator renders the animation after the static frame
    pub save_frames: bool,
}

/// Complete, validated configuration of one synthesis run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSet {
    physical: PhysicalParameters,
    wave: WaveParameters,
    discretization: DiscretizationParameters,
    animation: AnimationSettings,
}

impl ParameterSet {
    /// Documented defaults for every recognized option.
    pub const DEFAULT: ParameterSet = ParameterSet {
        physical: PhysicalParameters {
            circulation: 10.0,
            surface_tension: 0.1,
            density: 1.0,
            core_radius: Meters::new(1.0),
        },
        wave: WaveParameters {
            mode_number: 4,
            wavenumber: 0.5,
            harmonics: 6,
            layers: 8,
        },
        discretization: DiscretizationParameters {
            r_max: Meters::new(15.0),
            z_max: Meters::new(20.0),
            n_r: 40,
            n_theta: 80,
            n_z: 30,
        },
        animation: AnimationSettings {
            fps: 20,
            duration: Seconds::new(3.0),
            save_frames: true,
        },
    };

    /// Merge `overrides` onto [`ParameterSet::DEFAULT`] and validate.
    ///
    /// Options absent from `overrides` keep their default value.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found. Floats are checked for
    /// finiteness before any range check.
    pub fn from_overrides(overrides: &ParameterOverrides) -> Result<Self, ValidationError> {
        let d = Self::DEFAULT;

        let gamma = overrides.gamma.unwrap_or(d.physical.circulation);
        let sigma = overrides.sigma.unwrap_or(d.physical.surface_tension);
        let rho = overrides.rho.unwrap_or(d.physical.density);
        let a = overrides.a.unwrap_or(*d.physical.core_radius);
        let k_wave = overrides.k_wave.unwrap_or(d.wave.wavenumber);
        let r_max = overrides.r_max.unwrap_or(*d.discretization.r_max);
        let z_max = overrides.z_max.unwrap_or(*d.discretization.z_max);
        let duration = overrides.duration.unwrap_or(*d.animation.duration);

        for (name, value) in [
            ("gamma", gamma),
            ("sigma", sigma),
            ("rho", rho),
            ("a", a),
            ("k_wave", k_wave),
            ("r_max", r_max),
            ("z_max", z_max),
            ("duration", duration),
        ] {
            if !value.is_finite() {
                return Err(ValidationError::NonFinite { name, value });
            }
        }

        if gamma <= 0.0 {
            return Err(ValidationError::NonPositiveCirculation(gamma));
        }
        if sigma < 0.0 {
            return Err(ValidationError::NegativeSurfaceTension(sigma));
        }
        if rho <= 0.0 {
            return Err(ValidationError::NonPositiveDensity(rho));
        }
        if a <= 0.0 {
            return Err(ValidationError::NonPositiveLength { name: "a", value: a });
        }
        if r_max <= *INNER_RADIUS {
            return Err(ValidationError::RadialExtentTooSmall(r_max));
        }
        if z_max <= 0.0 {
            return Err(ValidationError::NonPositiveLength {
                name: "z_max",
                value: z_max,
            });
        }

        let m_mode = overrides
            .m_mode
            .unwrap_or_else(|| i64::from(d.wave.mode_number));
        if m_mode < 0 {
            return Err(ValidationError::NegativeModeNumber(m_mode));
        }
        let harmonics = overrides
            .n_fourier_modes
            .unwrap_or_else(|| i64::from(d.wave.harmonics));
        if harmonics < 1 {
            return Err(ValidationError::NoHarmonics(harmonics));
        }
        let layers = overrides
            .n_layers
            .unwrap_or_else(|| i64::from(d.wave.layers));
        if layers < 1 {
            return Err(ValidationError::NoLayers(layers));
        }

        let n_r = resolution("n_r", overrides.n_r, d.discretization.n_r)?;
        let n_theta = resolution("n_theta", overrides.n_theta, d.discretization.n_theta)?;
        let n_z = resolution("n_z", overrides.n_z, d.discretization.n_z)?;

        let fps = overrides.fps.unwrap_or_else(|| i64::from(d.animation.fps));
        if fps < 1 {
            return Err(ValidationError::InvalidFrameRate(fps));
        }
        if duration < 0.0 {
            return Err(ValidationError::NegativeDuration(duration));
        }

        let mode_number = to_u32("m_mode", m_mode)?;
        let harmonics = to_u32("n_fourier_modes", harmonics)?;
        let layers = to_u32("n_layers", layers)?;
        let fps = to_u32("fps", fps)?;

        let samples = u128::from(n_r) * u128::from(n_theta) * u128::from(layers);
        if samples > u128::from(MAX_GRID_SAMPLES) {
            return Err(ValidationError::GridTooLarge { samples });
        }
        frame_count(fps, Seconds::new(duration))?;

        let params = Self {
            physical: PhysicalParameters {
                circulation: gamma,
                surface_tension: sigma,
                density: rho,
                core_radius: Meters::new(a),
            },
            wave: WaveParameters {
                mode_number,
                wavenumber: k_wave,
                harmonics,
                layers,
            },
            discretization: DiscretizationParameters {
                r_max: Meters::new(r_max),
                z_max: Meters::new(z_max),
                n_r,
                n_theta,
                n_z,
            },
            animation: AnimationSettings {
                fps,
                duration: Seconds::new(duration),
                save_frames: overrides.save_frames.unwrap_or(d.animation.save_frames),
            },
        };

        params.warn_on_degenerate_amplitude();
        Ok(params)
    }

    /// Return a new set with `overrides` applied on top of this one.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the merged options are invalid.
    pub fn with_overrides(&self, overrides: &ParameterOverrides) -> Result<Self, ValidationError> {
        Self::from_overrides(&ParameterOverrides::from(self).merge(*overrides))
    }

    /// Physical parameter group
    #[must_use]
    pub fn physical(&self) -> &PhysicalParameters {
        &self.physical
    }

    /// Wave parameter group
    #[must_use]
    pub fn wave(&self) -> &WaveParameters {
        &self.wave
    }

    /// Grid extents and resolutions
    #[must_use]
    pub fn discretization(&self) -> &DiscretizationParameters {
        &self.discretization
    }

    /// Animation settings
    #[must_use]
    pub fn animation(&self) -> &AnimationSettings {
        &self.animation
    }

    // The amplitude 1/(1 + m + k_n) is a caller contract: a strongly negative
    // k_wave is accepted but reported, never clamped.
    fn warn_on_degenerate_amplitude(&self) {
        let m = f64::from(self.wave.mode_number);
        for n in 1..=self.wave.harmonics {
            let k_n = self.wave.wavenumber * f64::from(n) / 2.0;
            if 1.0 + m + k_n <= 0.0 {
                warn!(
                    harmonic = n,
                    k_n,
                    "1 + m + k_n <= 0: mode amplitude is undefined or sign-inverted"
                );
                return;
            }
        }
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Number of animation frames, ⌊fps·duration⌋
///
/// # Errors
///
/// Returns [`ValidationError::TooManyFrames`] when the count exceeds
/// [`MAX_FRAMES`].
pub fn frame_count(fps: u32, duration: Seconds) -> Result<usize, ValidationError> {
    // NaN or negative durations yield no frames
    let frames = (f64::from(fps) * *duration).floor().max(0.0);
    if frames > MAX_FRAMES as f64 {
        return Err(ValidationError::TooManyFrames {
            fps,
            duration: *duration,
        });
    }
    Ok(frames as usize)
}

fn resolution(
    name: &'static str,
    value: Option<i64>,
    default: u32,
) -> Result<u32, ValidationError> {
    let value = value.unwrap_or_else(|| i64::from(default));
    if value < 1 {
        return Err(ValidationError::InvalidResolution { name, value });
    }
    to_u32(name, value)
}

fn to_u32(name: &'static str, value: i64) -> Result<u32, ValidationError> {
    u32::try_from(value).map_err(|_| ValidationError::OutOfRange { name, value })
}

/// Structurally invalid parameters rejected at construction
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A float option is NaN or infinite
    NonFinite {
        /// Option name
        name: &'static str,
        /// Offending value
        value: f64,
    },
    /// Circulation Γ must be > 0
    NonPositiveCirculation(f64),
    /// Surface tension σ must be ≥ 0
    NegativeSurfaceTension(f64),
    /// Density ρ must be > 0
    NonPositiveDensity(f64),
    /// A radius or height (`a`, `z_max`) must be > 0
    NonPositiveLength {
        /// Option name
        name: &'static str,
        /// Offending value
        value: f64,
    },
    /// `r_max` must exceed the inner radius of the grid
    RadialExtentTooSmall(f64),
    /// Mode number m must be ≥ 0
    NegativeModeNumber(i64),
    /// Harmonic count N must be ≥ 1
    NoHarmonics(i64),
    /// Layer count L must be ≥ 1
    NoLayers(i64),
    /// Grid resolutions must be ≥ 1
    InvalidResolution {
        /// Option name
        name: &'static str,
        /// Offending value
        value: i64,
    },
    /// Frame rate must be ≥ 1
    InvalidFrameRate(i64),
    /// Animation duration must be ≥ 0
    NegativeDuration(f64),
    /// `fps · duration` schedules more than [`MAX_FRAMES`] frames
    TooManyFrames {
        /// Frame rate
        fps: u32,
        /// Animation length in seconds
        duration: f64,
    },
    /// `n_r · n_theta · n_layers` exceeds [`MAX_GRID_SAMPLES`]
    GridTooLarge {
        /// Requested sample count
        samples: u128,
    },
    /// Integer option does not fit in 32 bits
    OutOfRange {
        /// Option name
        name: &'static str,
        /// Offending value
        value: i64,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { name, value } => write!(f, "{name} must be finite, got {value}"),
            Self::NonPositiveCirculation(v) => write!(f, "gamma must be > 0, got {v}"),
            Self::NegativeSurfaceTension(v) => write!(f, "sigma must be >= 0, got {v}"),
            Self::NonPositiveDensity(v) => write!(f, "rho must be > 0, got {v}"),
            Self::NonPositiveLength { name, value } => {
                write!(f, "{name} must be > 0, got {value}")
            }
            Self::RadialExtentTooSmall(v) => write!(
                f,
                "r_max must exceed the inner radius {}, got {v}",
                INNER_RADIUS
            ),
            Self::NegativeModeNumber(v) => write!(f, "m_mode must be >= 0, got {v}"),
            Self::NoHarmonics(v) => write!(f, "n_fourier_modes must be >= 1, got {v}"),
            Self::NoLayers(v) => write!(f, "n_layers must be >= 1, got {v}"),
            Self::InvalidResolution { name, value } => {
                write!(f, "{name} must be >= 1, got {value}")
            }
            Self::InvalidFrameRate(v) => write!(f, "fps must be >= 1, got {v}"),
            Self::NegativeDuration(v) => write!(f, "duration must be >= 0, got {v}"),
            Self::TooManyFrames { fps, duration } => write!(
                f,
                "{fps} fps over {duration} s exceeds the {MAX_FRAMES} frame limit"
            ),
            Self::GridTooLarge { samples } => write!(
                f,
                "grid of {samples} samples exceeds the {MAX_GRID_SAMPLES} sample limit"
            ),
            Self::OutOfRange { name, value } => write!(f, "{name} is out of range: {value}"),
        }
    }
}

impl std::error::Error for ValidationError {}
