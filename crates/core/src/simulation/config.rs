//! Config document loading
//!
//! Reads JSON or YAML documents into [`ParameterOverrides`]. Unrecognized
//! options are reported and ignored. A missing, unreadable or malformed file
//! never aborts a run: the defaults are used and a [`ConfigLoadWarning`] is
//! logged and returned to the caller.

use crate::core_types::{ParameterOverrides, ParameterSet, ValidationError};
use serde::de::IgnoredAny;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Document syntax, chosen from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// JSON (default for any extension other than YAML)
    Json,
    /// YAML (`.yaml` / `.yml`)
    Yaml,
}

impl ConfigFormat {
    /// Pick the format for `path`
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(std::ffi::OsStr::to_str)
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

// Known options land in `overrides`; everything else is collected by name
#[derive(Deserialize)]
struct ConfigDocument {
    #[serde(flatten)]
    overrides: ParameterOverrides,
    #[serde(flatten)]
    unrecognized: BTreeMap<String, IgnoredAny>,
}

/// Overrides parsed from one document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedConfig {
    /// Recognized options
    pub overrides: ParameterOverrides,
    /// Names of ignored options, sorted
    pub unrecognized: Vec<String>,
}

/// Parse a config document.
///
/// An empty document yields no overrides.
///
/// # Errors
///
/// Returns the parser's message if `text` is not a valid mapping of options.
pub fn parse_config(text: &str, format: ConfigFormat) -> Result<ParsedConfig, String> {
    if text.trim().is_empty() {
        return Ok(ParsedConfig::default());
    }

    let document: ConfigDocument = match format {
        ConfigFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string())?,
        ConfigFormat::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string())?,
    };

    let unrecognized: Vec<String> = document.unrecognized.into_keys().collect();
    for key in &unrecognized {
        warn!("Ignoring unrecognized config option '{}'", key);
    }

    Ok(ParsedConfig {
        overrides: document.overrides,
        unrecognized,
    })
}

/// Non-fatal problem reading a config file; defaults were used instead
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigLoadWarning {
    /// File does not exist
    NotFound(PathBuf),
    /// File exists but could not be read
    Unreadable {
        /// Config path
        path: PathBuf,
        /// I/O error message
        message: String,
    },
    /// File was read but is not a valid options mapping
    Malformed {
        /// Config path
        path: PathBuf,
        /// Parser error message
        message: String,
    },
}

impl fmt::Display for ConfigLoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigLoadWarning::NotFound(path) => {
                write!(f, "Config file {} not found, using defaults", path.display())
            }
            ConfigLoadWarning::Unreadable { path, message } => write!(
                f,
                "Config file {} could not be read ({message}), using defaults",
                path.display()
            ),
            ConfigLoadWarning::Malformed { path, message } => write!(
                f,
                "Config file {} is malformed ({message}), using defaults",
                path.display()
            ),
        }
    }
}

impl std::error::Error for ConfigLoadWarning {}

/// Result of reading a config file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedConfig {
    /// Recognized options (empty after a fallback)
    pub overrides: ParameterOverrides,
    /// Names of ignored options
    pub unrecognized: Vec<String>,
    /// Set when the file could not be used
    pub warning: Option<ConfigLoadWarning>,
}

impl LoadedConfig {
    fn fallback(warning: ConfigLoadWarning) -> Self {
        warn!("{}", warning);
        Self {
            warning: Some(warning),
            ..Self::default()
        }
    }
}

/// Read overrides from `path`, falling back to none on any failure
#[must_use]
pub fn read_config(path: &Path) -> LoadedConfig {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return LoadedConfig::fallback(ConfigLoadWarning::NotFound(path.to_path_buf()));
        }
        Err(e) => {
            return LoadedConfig::fallback(ConfigLoadWarning::Unreadable {
                path: path.to_path_buf(),
                message: e.to_string(),
            });
        }
    };

    match parse_config(&text, ConfigFormat::from_path(path)) {
        Ok(parsed) => {
            info!("Loaded config from {}", path.display());
            LoadedConfig {
                overrides: parsed.overrides,
                unrecognized: parsed.unrecognized,
                warning: None,
            }
        }
        Err(message) => LoadedConfig::fallback(ConfigLoadWarning::Malformed {
            path: path.to_path_buf(),
            message,
        }),
    }
}

/// Build the parameter set for a run
///
/// Layers, lowest priority first: defaults, the config file at `path` (if
/// any), then `overrides`.
///
/// # Errors
///
/// Returns a [`ValidationError`] if the merged options are invalid. File
/// problems are not errors; they come back as the warning.
pub fn load_parameters(
    path: Option<&Path>,
    overrides: &ParameterOverrides,
) -> Result<(ParameterSet, Option<ConfigLoadWarning>), ValidationError> {
    let loaded = match path {
        Some(path) => read_config(path),
        None => LoadedConfig::default(),
    };
    let params = ParameterSet::from_overrides(&loaded.overrides.merge(*overrides))?;
    Ok((params, loaded.warning))
}
