//! Layered Fourier synthesis
//!
//! This module provides the `FourierLayerSynthesizer` and the strategy seam
//! behind it. The core abstraction is the `SynthesisStrategy` trait, which
//! decides what each harmonic contributes and how a layer's sum is scaled.
//!
//! # Strategies
//!
//! - `tornado` (default): single-mode wave with dispersion relation, radial
//!   decay, 1/n weighting and height modulation
//! - `vortex`: legacy kinematic series with 1/√n weighting and prescribed
//!   frequencies
//!
//! # Example
//!
//! ```rust
//! use vortex_sim_core::solver::{create_strategy, FourierLayerSynthesizer, StrategyKind};
//! use vortex_sim_core::{ParameterSet, Seconds};
//!
//! let synthesizer = FourierLayerSynthesizer::new(create_strategy(StrategyKind::Vortex));
//! let surface = synthesizer.synthesize(&ParameterSet::DEFAULT, Seconds::new(0.5));
//! assert_eq!(surface.len(), 8);
//! ```

mod synthesizer;
mod tornado;
#[allow(clippy::module_name_repetitions)]
mod r#trait;
mod vortex;

// Re-exports
pub use r#trait::SynthesisStrategy;
pub use synthesizer::{synthesize, FourierLayerSynthesizer};
pub use tornado::{TornadoStrategy, HEIGHT_MODULATION_RATE};
pub use vortex::{VortexStrategy, BASE_FREQUENCY, FREQUENCY_STEP};

use std::fmt;
use std::str::FromStr;
use tracing::info;

/// Named synthesis strategies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// Canonical tornado superposition
    #[default]
    Tornado,
    /// Legacy vortex superposition
    Vortex,
}

impl StrategyKind {
    /// Strategy name as accepted by [`FromStr`]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tornado => "tornado",
            Self::Vortex => "vortex",
        }
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tornado" => Ok(Self::Tornado),
            "vortex" | "legacy" => Ok(Self::Vortex),
            other => Err(format!(
                "unknown strategy '{other}' (expected 'tornado' or 'vortex')"
            )),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Create a synthesis strategy by name
///
/// # Arguments
///
/// * `kind` - Which strategy to build
///
/// # Returns
///
/// A boxed `SynthesisStrategy` trait object
pub fn create_strategy(kind: StrategyKind) -> Box<dyn SynthesisStrategy> {
    info!("Using '{}' synthesis strategy", kind);
    match kind {
        StrategyKind::Tornado => Box::new(TornadoStrategy),
        StrategyKind::Vortex => Box::new(VortexStrategy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_kind_parsing() {
        assert_eq!("tornado".parse::<StrategyKind>(), Ok(StrategyKind::Tornado));
        assert_eq!("Vortex".parse::<StrategyKind>(), Ok(StrategyKind::Vortex));
        assert_eq!("legacy".parse::<StrategyKind>(), Ok(StrategyKind::Vortex));
        assert!("spiral".parse::<StrategyKind>().is_err());
        assert_eq!(StrategyKind::default(), StrategyKind::Tornado);
    }

    #[test]
    fn test_created_strategy_names() {
        for kind in [StrategyKind::Tornado, StrategyKind::Vortex] {
            assert_eq!(create_strategy(kind).name(), kind.name());
        }
    }
}
