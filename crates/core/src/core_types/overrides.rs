//! Typed configuration overrides
//!
//! Every option a config document or the command line may set is listed in
//! [`ParameterKey`]. [`ParameterOverrides`] holds one optional value per key;
//! absent values fall back to [`ParameterSet::DEFAULT`] when the set is built.

use super::parameters::ParameterSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Recognized option names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKey {
    /// `gamma`: circulation Γ, scales the primary frequency ω₁ linearly
    Circulation,
    /// `sigma`: surface tension σ, scales ω₂² linearly
    SurfaceTension,
    /// `rho`: density ρ, divides ω₂²
    Density,
    /// `a`: core radius, sets frequency scale and radial decay length
    CoreRadius,
    /// `m_mode`: azimuthal mode number (number of lobes)
    ModeNumber,
    /// `k_wave`: base axial wavenumber; harmonic n uses k·n/2
    Wavenumber,
    /// `n_fourier_modes`: number of harmonics summed per layer
    Harmonics,
    /// `n_layers`: number of vertical layers in the surface
    Layers,
    /// `r_max`: outer radius of the radial axis
    RMax,
    /// `z_max`: height of the topmost layer
    ZMax,
    /// `n_r`: radial sample count
    RadialResolution,
    /// `n_theta`: angular sample count
    AngularResolution,
    /// `n_z`: vertical resolution
    VerticalResolution,
    /// `fps`: animation frame rate
    Fps,
    /// `duration`: animation length in seconds
    Duration,
    /// `save_frames`: render the animation after the static frame
    SaveFrames,
}

impl ParameterKey {
    /// Every recognized key, in documentation order
    pub const ALL: [ParameterKey; 16] = [
        Self::Circulation,
        Self::SurfaceTension,
        Self::Density,
        Self::CoreRadius,
        Self::ModeNumber,
        Self::Wavenumber,
        Self::Harmonics,
        Self::Layers,
        Self::RMax,
        Self::ZMax,
        Self::RadialResolution,
        Self::AngularResolution,
        Self::VerticalResolution,
        Self::Fps,
        Self::Duration,
        Self::SaveFrames,
    ];

    /// Name used in config documents and `key=value` assignments
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Circulation => "gamma",
            Self::SurfaceTension => "sigma",
            Self::Density => "rho",
            Self::CoreRadius => "a",
            Self::ModeNumber => "m_mode",
            Self::Wavenumber => "k_wave",
            Self::Harmonics => "n_fourier_modes",
            Self::Layers => "n_layers",
            Self::RMax => "r_max",
            Self::ZMax => "z_max",
            Self::RadialResolution => "n_r",
            Self::AngularResolution => "n_theta",
            Self::VerticalResolution => "n_z",
            Self::Fps => "fps",
            Self::Duration => "duration",
            Self::SaveFrames => "save_frames",
        }
    }

    /// One-line description of the option's effect
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Circulation => "circulation strength; scales the primary frequency",
            Self::SurfaceTension => "surface tension; drives the secondary frequency for m > 1",
            Self::Density => "fluid density; damps the secondary frequency",
            Self::CoreRadius => "characteristic radius; frequency scale and radial decay length",
            Self::ModeNumber => "azimuthal mode number (lobe count)",
            Self::Wavenumber => "base axial wavenumber; harmonic n uses k*n/2",
            Self::Harmonics => "Fourier harmonics summed per layer",
            Self::Layers => "vertical layers evaluated",
            Self::RMax => "outer radius of the grid",
            Self::ZMax => "height of the top layer",
            Self::RadialResolution => "radial samples per layer",
            Self::AngularResolution => "angular samples per layer",
            Self::VerticalResolution => "vertical resolution",
            Self::Fps => "animation frames per second",
            Self::Duration => "animation length in seconds",
            Self::SaveFrames => "render the animation after the static frame",
        }
    }

    /// Look up a key by its option name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }
}

impl FromStr for ParameterKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ConfigError::UnknownKey(s.to_string()))
    }
}

impl fmt::Display for ParameterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Optional value per recognized option
///
/// Integer options are signed so that a negative mode number in a document
/// reaches validation instead of failing to parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterOverrides {
    /// Circulation Γ
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gamma: Option<f64>,
    /// Surface tension σ
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sigma: Option<f64>,
    /// Density ρ
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rho: Option<f64>,
    /// Core radius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
    /// Azimuthal mode number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m_mode: Option<i64>,
    /// Base axial wavenumber
    #[serde(skip_serializing_if = "Option::is_none")]
    pub k_wave: Option<f64>,
    /// Fourier harmonic count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n_fourier_modes: Option<i64>,
    /// Vertical layer count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n_layers: Option<i64>,
    /// Outer radius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r_max: Option<f64>,
    /// Height of the top layer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_max: Option<f64>,
    /// Radial samples
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n_r: Option<i64>,
    /// Angular samples
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n_theta: Option<i64>,
    /// Vertical resolution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n_z: Option<i64>,
    /// Animation frame rate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fps: Option<i64>,
    /// Animation length in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Render the animation after the static frame
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_frames: Option<bool>,
}

impl ParameterOverrides {
    /// Overlay `other` on `self`; values present in `other` win.
    #[must_use]
    pub fn merge(self, other: ParameterOverrides) -> ParameterOverrides {
        ParameterOverrides {
            gamma: other.gamma.or(self.gamma),
            sigma: other.sigma.or(self.sigma),
            rho: other.rho.or(self.rho),
            a: other.a.or(self.a),
            m_mode: other.m_mode.or(self.m_mode),
            k_wave: other.k_wave.or(self.k_wave),
            n_fourier_modes: other.n_fourier_modes.or(self.n_fourier_modes),
            n_layers: other.n_layers.or(self.n_layers),
            r_max: other.r_max.or(self.r_max),
            z_max: other.z_max.or(self.z_max),
            n_r: other.n_r.or(self.n_r),
            n_theta: other.n_theta.or(self.n_theta),
            n_z: other.n_z.or(self.n_z),
            fps: other.fps.or(self.fps),
            duration: other.duration.or(self.duration),
            save_frames: other.save_frames.or(self.save_frames),
        }
    }

    /// Set one option from its textual value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `raw` does not parse as the
    /// option's type (float, integer or boolean).
    pub fn set(&mut self, key: ParameterKey, raw: &str) -> Result<(), ConfigError> {
        match key {
            ParameterKey::Circulation => self.gamma = Some(parse(key, raw)?),
            ParameterKey::SurfaceTension => self.sigma = Some(parse(key, raw)?),
            ParameterKey::Density => self.rho = Some(parse(key, raw)?),
            ParameterKey::CoreRadius => self.a = Some(parse(key, raw)?),
            ParameterKey::ModeNumber => self.m_mode = Some(parse(key, raw)?),
            ParameterKey::Wavenumber => self.k_wave = Some(parse(key, raw)?),
            ParameterKey::Harmonics => self.n_fourier_modes = Some(parse(key, raw)?),
            ParameterKey::Layers => self.n_layers = Some(parse(key, raw)?),
            ParameterKey::RMax => self.r_max = Some(parse(key, raw)?),
            ParameterKey::ZMax => self.z_max = Some(parse(key, raw)?),
            ParameterKey::RadialResolution => self.n_r = Some(parse(key, raw)?),
            ParameterKey::AngularResolution => self.n_theta = Some(parse(key, raw)?),
            ParameterKey::VerticalResolution => self.n_z = Some(parse(key, raw)?),
            ParameterKey::Fps => self.fps = Some(parse(key, raw)?),
            ParameterKey::Duration => self.duration = Some(parse(key, raw)?),
            ParameterKey::SaveFrames => self.save_frames = Some(parse(key, raw)?),
        }
        Ok(())
    }

    /// Apply a `key=value` assignment.
    ///
    /// Unlike config documents, assignments naming an unknown key are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingValue`] without `=`,
    /// [`ConfigError::UnknownKey`] for unrecognized names, or
    /// [`ConfigError::InvalidValue`] for unparsable values.
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<(), ConfigError> {
        let (name, raw) = assignment
            .split_once('=')
            .ok_or_else(|| ConfigError::MissingValue(assignment.to_string()))?;
        let key: ParameterKey = name.trim().parse()?;
        self.set(key, raw.trim())
    }
}

impl From<&ParameterSet> for ParameterOverrides {
    fn from(params: &ParameterSet) -> Self {
        let physical = params.physical();
        let wave = params.wave();
        let grid = params.discretization();
        let animation = params.animation();
        ParameterOverrides {
            gamma: Some(physical.circulation),
            sigma: Some(physical.surface_tension),
            rho: Some(physical.density),
            a: Some(*physical.core_radius),
            m_mode: Some(i64::from(wave.mode_number)),
            k_wave: Some(wave.wavenumber),
            n_fourier_modes: Some(i64::from(wave.harmonics)),
            n_layers: Some(i64::from(wave.layers)),
            r_max: Some(*grid.r_max),
            z_max: Some(*grid.z_max),
            n_r: Some(i64::from(grid.n_r)),
            n_theta: Some(i64::from(grid.n_theta)),
            n_z: Some(i64::from(grid.n_z)),
            fps: Some(i64::from(animation.fps)),
            duration: Some(*animation.duration),
            save_frames: Some(animation.save_frames),
        }
    }
}

fn parse<T: FromStr>(key: ParameterKey, raw: &str) -> Result<T, ConfigError> {
    raw.parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}

/// Errors from explicit `key=value` configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Option name is not a [`ParameterKey`]
    UnknownKey(String),
    /// Assignment has no `=`
    MissingValue(String),
    /// Value does not parse as the option's type
    InvalidValue {
        /// Option being set
        key: ParameterKey,
        /// Raw text supplied
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownKey(name) => write!(f, "Unknown option: {name}"),
            ConfigError::MissingValue(text) => {
                write!(f, "Expected key=value, got: {text}")
            }
            ConfigError::InvalidValue { key, value } => {
                write!(f, "Invalid value for {key}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names_round_trip() {
        for key in ParameterKey::ALL {
            assert_eq!(ParameterKey::from_name(key.name()), Some(key));
            assert!(!key.description().is_empty());
        }
        assert_eq!(ParameterKey::from_name("viscosity"), None);
    }

    #[test]
    fn test_apply_assignment() {
        let mut overrides = ParameterOverrides::default();
        overrides.apply_assignment("gamma=12.5").unwrap();
        overrides.apply_assignment(" m_mode = 3 ").unwrap();
        overrides.apply_assignment("save_frames=false").unwrap();

        assert_eq!(overrides.gamma, Some(12.5));
        assert_eq!(overrides.m_mode, Some(3));
        assert_eq!(overrides.save_frames, Some(false));
        assert_eq!(overrides.sigma, None);
    }

    #[test]
    fn test_apply_assignment_errors() {
        let mut overrides = ParameterOverrides::default();
        assert_eq!(
            overrides.apply_assignment("viscosity=1.0"),
            Err(ConfigError::UnknownKey("viscosity".to_string()))
        );
        assert_eq!(
            overrides.apply_assignment("gamma"),
            Err(ConfigError::MissingValue("gamma".to_string()))
        );
        assert_eq!(
            overrides.apply_assignment("n_layers=2.5"),
            Err(ConfigError::InvalidValue {
                key: ParameterKey::Layers,
                value: "2.5".to_string()
            })
        );
    }

    #[test]
    fn test_merge_prefers_other() {
        let base = ParameterOverrides {
            gamma: Some(1.0),
            sigma: Some(2.0),
            ..ParameterOverrides::default()
        };
        let top = ParameterOverrides {
            sigma: Some(3.0),
            rho: Some(4.0),
            ..ParameterOverrides::default()
        };
        let merged = base.merge(top);
        assert_eq!(merged.gamma, Some(1.0));
        assert_eq!(merged.sigma, Some(3.0));
        assert_eq!(merged.rho, Some(4.0));
    }

    #[test]
    fn test_full_overrides_rebuild_same_set() {
        let params = ParameterSet::DEFAULT;
        let rebuilt = ParameterSet::from_overrides(&ParameterOverrides::from(&params)).unwrap();
        assert_eq!(rebuilt, params);
    }

    #[test]
    fn test_serialization_skips_unset_options() {
        let overrides = ParameterOverrides {
            n_layers: Some(2),
            ..ParameterOverrides::default()
        };
        let json = serde_json::to_string(&overrides).unwrap();
        assert_eq!(json, r#"{"n_layers":2}"#);
    }
}
