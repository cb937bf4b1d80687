//! Parameter sweeps over mode number, wavenumber and time

use crate::core_types::{
    AngularFrequency, ParameterOverrides, ParameterSet, Seconds, ValidationError,
};
use crate::physics::angular_frequency;
use crate::solver::{FourierLayerSynthesizer, SynthesisStrategy};
use rayon::prelude::*;
use tracing::info;

/// Cartesian product of mode numbers, wavenumbers and times
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterSweep {
    /// Azimuthal mode numbers m
    pub modes: Vec<u32>,
    /// Base wavenumbers k
    pub wavenumbers: Vec<f64>,
    /// Time samples in seconds
    pub times: Vec<f64>,
}

/// Summary of one sweep case
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepResult {
    /// Mode number m
    pub mode: u32,
    /// Base wavenumber k
    pub wavenumber: f64,
    /// Time sample
    pub time: Seconds,
    /// Combined frequency ω(m, k)
    pub frequency: AngularFrequency,
    /// (min, max) Z over all layers
    pub z_range: (f64, f64),
}

impl ParameterSweep {
    /// Number of cases in the product
    #[must_use]
    pub fn len(&self) -> usize {
        self.modes.len() * self.wavenumbers.len() * self.times.len()
    }

    /// True when any axis is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run every case against `base` with `synthesizer`
    ///
    /// Results come back in (m, k, t) row-major order.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] from any (m, k) combination;
    /// nothing is synthesized in that case.
    pub fn run<S: SynthesisStrategy>(
        &self,
        synthesizer: &FourierLayerSynthesizer<S>,
        base: &ParameterSet,
    ) -> Result<Vec<SweepResult>, ValidationError> {
        let mut cases = Vec::with_capacity(self.len());
        for &mode in &self.modes {
            for &wavenumber in &self.wavenumbers {
                let params = base.with_overrides(&ParameterOverrides {
                    m_mode: Some(i64::from(mode)),
                    k_wave: Some(wavenumber),
                    ..ParameterOverrides::default()
                })?;
                let frequency = angular_frequency(mode, wavenumber, &params);
                for &time in &self.times {
                    cases.push((params, mode, wavenumber, frequency, Seconds::new(time)));
                }
            }
        }

        info!(
            "Running parameter sweep: {} modes x {} wavenumbers x {} times with '{}' strategy",
            self.modes.len(),
            self.wavenumbers.len(),
            self.times.len(),
            synthesizer.strategy().name()
        );

        Ok(cases
            .par_iter()
            .map(|&(params, mode, wavenumber, frequency, time)| SweepResult {
                mode,
                wavenumber,
                time,
                frequency,
                z_range: synthesizer
                    .synthesize(&params, time)
                    .z_range()
                    .unwrap_or_default(),
            })
            .collect())
    }
}
