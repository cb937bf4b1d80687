//! Run orchestration: config loading, animation and parameter sweeps
//!
//! Everything here sits on top of the pure engine in [`crate::solver`]. The
//! config loader is the only code in the crate that touches the filesystem.

pub mod animation;
pub mod config;
pub mod sweep;

pub use animation::{render_animation, Frame, FrameSchedule};
pub use config::{
    load_parameters, parse_config, read_config, ConfigFormat, ConfigLoadWarning, LoadedConfig,
    ParsedConfig,
};
pub use sweep::{ParameterSweep, SweepResult};
