//! Fourier layer synthesizer
//!
//! Turns a parameter set and a time into a [`LayeredSurface`]: for every
//! layer height the harmonic series is summed over the (angle × radius) mesh,
//! modulated by height, added to the layer's base height, and the polar mesh
//! is converted to Cartesian coordinates.
//!
//! Layers are independent and are evaluated in parallel with Rayon. Within a
//! cell the harmonics are always summed in increasing n, so the output is
//! bit-for-bit identical however the layers are scheduled.

use super::{SynthesisStrategy, TornadoStrategy};
use crate::core_types::{Meters, ParameterSet, Radians, Seconds};
use crate::grid::{LayerSurface, LayeredSurface, PolarGrid};
use crate::physics::{FieldPoint, WaveMode};
use nalgebra::DMatrix;
use rayon::prelude::*;
use tracing::debug;

/// Layered Fourier superposition driven by a [`SynthesisStrategy`]
#[derive(Debug, Clone, Default)]
pub struct FourierLayerSynthesizer<S = TornadoStrategy> {
    strategy: S,
}

impl<S: SynthesisStrategy> FourierLayerSynthesizer<S> {
    /// Create a synthesizer using `strategy` for the harmonic terms
    #[must_use]
    pub fn new(strategy: S) -> Self {
        Self { strategy }
    }

    /// Strategy in use
    #[must_use]
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Synthesize every layer at time `t`
    ///
    /// # Arguments
    ///
    /// * `params` - Validated parameters
    /// * `t` - Time sample
    ///
    /// # Returns
    ///
    /// One `LayerSurface` per layer, bottom to top
    #[must_use]
    pub fn synthesize(&self, params: &ParameterSet, t: Seconds) -> LayeredSurface {
        let grid = PolarGrid::from_parameters(params);
        let modes: Vec<WaveMode> = WaveMode::series(params.wave()).collect();

        debug!(
            "Synthesizing {} layers x {} harmonics on {:?} mesh at t={:.3}s ({})",
            grid.layer_heights().len(),
            modes.len(),
            grid.shape(),
            *t,
            self.strategy.name()
        );

        let layers = grid
            .layer_heights()
            .par_iter()
            .map(|&z_level| self.synthesize_layer(params, &grid, &modes, z_level, t))
            .collect();

        LayeredSurface::new(t, layers)
    }

    /// Synthesize a single layer at height `z_level`
    ///
    /// `modes` is the harmonic series n = 1..=N; it is passed in so every
    /// layer shares one allocation.
    #[must_use]
    pub fn synthesize_layer(
        &self,
        params: &ParameterSet,
        grid: &PolarGrid,
        modes: &[WaveMode],
        z_level: f64,
        t: Seconds,
    ) -> LayerSurface {
        let (rows, cols) = grid.shape();
        let radii = grid.radii();
        let angles = grid.angles();
        let modulation = self.strategy.height_modulation(z_level);

        let z = DMatrix::from_fn(rows, cols, |i, j| {
            let point = FieldPoint::new(
                Meters::new(radii[j]),
                Radians::new(angles[i]),
                Meters::new(z_level),
                t,
            );
            let fourier_sum = modes.iter().fold(0.0, |sum, mode| {
                sum + self.strategy.harmonic_term(params, mode, &point)
            });
            z_level + fourier_sum * modulation
        });

        let radius = |j: usize| Meters::new(radii[j]);
        let angle = |i: usize| Radians::new(angles[i]);
        LayerSurface {
            height: z_level,
            x: DMatrix::from_fn(rows, cols, |i, j| *(radius(j) * angle(i).cos())),
            y: DMatrix::from_fn(rows, cols, |i, j| *(radius(j) * angle(i).sin())),
            z,
        }
    }
}

/// Synthesize the canonical tornado surface for `params` at time `t`.
///
/// # Example
/// ```
/// use vortex_sim_core::{synthesize, ParameterSet, Seconds};
///
/// let surface = synthesize(&ParameterSet::DEFAULT, Seconds::new(0.0));
/// assert_eq!(surface.len(), 8);
/// assert_eq!(surface[0].shape(), (80, 40));
/// ```
#[must_use]
pub fn synthesize(params: &ParameterSet, t: Seconds) -> LayeredSurface {
    FourierLayerSynthesizer::<TornadoStrategy>::default().synthesize(params, t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::ParameterOverrides;
    use crate::physics::displacement;
    use crate::solver::VortexStrategy;

    fn small_params(overrides: ParameterOverrides) -> ParameterSet {
        ParameterSet::from_overrides(&ParameterOverrides {
            n_r: Some(6),
            n_theta: Some(10),
            ..overrides
        })
        .unwrap()
    }

    #[test]
    fn test_layer_count_matches_parameters() {
        for layers in [1, 2, 5] {
            let params = small_params(ParameterOverrides {
                n_layers: Some(layers),
                ..ParameterOverrides::default()
            });
            for t in [0.0, 0.3, 2.0] {
                assert_eq!(synthesize(&params, Seconds::new(t)).len(), layers as usize);
            }
        }
    }

    #[test]
    fn test_single_harmonic_single_layer_matches_evaluator() {
        let params = small_params(ParameterOverrides {
            n_fourier_modes: Some(1),
            n_layers: Some(1),
            ..ParameterOverrides::default()
        });
        let t = Seconds::new(0.6);
        let surface = synthesize(&params, t);
        assert_eq!(surface.len(), 1);

        let layer = &surface[0];
        assert_eq!(layer.height, 0.0);
        let grid = PolarGrid::from_parameters(&params);
        // k_1 = k/2, weight 1/1, modulation factor 1 at z_level = 0
        for (i, &theta) in grid.angles().iter().enumerate() {
            for (j, &r) in grid.radii().iter().enumerate() {
                let point =
                    FieldPoint::new(Meters::new(r), Radians::new(theta), Meters::new(0.0), t);
                let expected = 0.0 + displacement(&point, 4, 0.25, &params) * 1.0;
                assert_eq!(layer.z[(i, j)], expected);
            }
        }
    }

    #[test]
    fn test_cartesian_conversion() {
        let params = small_params(ParameterOverrides::default());
        let surface = synthesize(&params, Seconds::new(0.0));
        let grid = PolarGrid::from_parameters(&params);
        for layer in &surface {
            for (i, &theta) in grid.angles().iter().enumerate() {
                for (j, &r) in grid.radii().iter().enumerate() {
                    assert_eq!(layer.x[(i, j)], r * theta.cos());
                    assert_eq!(layer.y[(i, j)], r * theta.sin());
                }
            }
        }
    }

    #[test]
    fn test_upper_layers_are_height_modulated() {
        let params = small_params(ParameterOverrides {
            n_layers: Some(3),
            z_max: Some(10.0),
            ..ParameterOverrides::default()
        });
        let t = Seconds::new(0.25);
        let synthesizer = FourierLayerSynthesizer::new(TornadoStrategy);
        let surface = synthesizer.synthesize(&params, t);
        let grid = PolarGrid::from_parameters(&params);
        let modes: Vec<WaveMode> = WaveMode::series(params.wave()).collect();

        let top = &surface[2];
        assert_eq!(top.height, 10.0);
        let point = FieldPoint::new(
            Meters::new(grid.radii()[2]),
            Radians::new(grid.angles()[3]),
            Meters::new(10.0),
            t,
        );
        let sum = modes
            .iter()
            .fold(0.0, |acc, mode| acc + TornadoStrategy.harmonic_term(&params, mode, &point));
        assert_eq!(top.z[(3, 2)], 10.0 + sum * 2.0);
    }

    #[test]
    fn test_deterministic_output() {
        let params = small_params(ParameterOverrides::default());
        let a = synthesize(&params, Seconds::new(1.3));
        let b = synthesize(&params, Seconds::new(1.3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_layer_matches_serial_evaluation() {
        // Parallel synthesis must equal evaluating each layer on its own
        let params = small_params(ParameterOverrides::default());
        let t = Seconds::new(0.9);
        let synthesizer = FourierLayerSynthesizer::<TornadoStrategy>::default();
        let surface = synthesizer.synthesize(&params, t);
        let grid = PolarGrid::from_parameters(&params);
        let modes: Vec<WaveMode> = WaveMode::series(params.wave()).collect();
        for (layer, &z_level) in surface.iter().zip(grid.layer_heights()) {
            let serial = synthesizer.synthesize_layer(&params, &grid, &modes, z_level, t);
            assert_eq!(*layer, serial);
        }
    }

    #[test]
    fn test_vortex_strategy_differs_from_tornado() {
        let params = small_params(ParameterOverrides::default());
        let t = Seconds::new(0.5);
        let tornado = synthesize(&params, t);
        let vortex = FourierLayerSynthesizer::new(VortexStrategy).synthesize(&params, t);
        assert_eq!(vortex.len(), tornado.len());
        assert_eq!(vortex[0].x, tornado[0].x);
        assert_ne!(vortex[0].z, tornado[0].z);
    }

    #[test]
    fn test_boxed_strategy_matches_concrete() {
        let params = small_params(ParameterOverrides::default());
        let t = Seconds::new(0.1);
        let boxed: Box<dyn SynthesisStrategy> = Box::new(VortexStrategy);
        let from_box = FourierLayerSynthesizer::new(boxed).synthesize(&params, t);
        let concrete = FourierLayerSynthesizer::new(VortexStrategy).synthesize(&params, t);
        assert_eq!(from_box, concrete);
    }
}
