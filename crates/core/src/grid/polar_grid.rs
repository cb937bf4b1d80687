//! Polar sampling grid derived from a parameter set
//!
//! Radial samples span `[INNER_RADIUS, r_max]` inclusive, angular samples the
//! half-open turn `[0, 2π)`, and layer heights `[0, z_max]` inclusive. The grid
//! is a pure function of the parameters: rebuild it whenever they change.

use crate::core_types::{ParameterSet, INNER_RADIUS};
use std::f64::consts::TAU;

/// `n` evenly spaced samples from `start` to `end`, both included.
///
/// One sample yields `[start]`; zero samples yield an empty vector. The last
/// sample is pinned to `end` so it never drifts from rounding.
#[must_use]
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut samples: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            samples[n - 1] = end;
            samples
        }
    }
}

/// Radial, angular and vertical sample positions
#[derive(Debug, Clone, PartialEq)]
pub struct PolarGrid {
    radii: Vec<f64>,
    angles: Vec<f64>,
    layer_heights: Vec<f64>,
}

impl PolarGrid {
    /// Build the grid for `params`
    #[must_use]
    pub fn from_parameters(params: &ParameterSet) -> Self {
        let grid = params.discretization();
        let n_theta = grid.n_theta as usize;

        Self {
            radii: linspace(*INNER_RADIUS, *grid.r_max, grid.n_r as usize),
            angles: (0..n_theta)
                .map(|j| TAU * j as f64 / n_theta as f64)
                .collect(),
            layer_heights: linspace(0.0, *grid.z_max, params.wave().layers as usize),
        }
    }

    /// Radial samples (m), strictly increasing
    #[must_use]
    pub fn radii(&self) -> &[f64] {
        &self.radii
    }

    /// Angular samples (rad) in `[0, 2π)`
    #[must_use]
    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    /// Layer base heights (m), one per layer
    #[must_use]
    pub fn layer_heights(&self) -> &[f64] {
        &self.layer_heights
    }

    /// Mesh shape `(angles, radii)` of every layer
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.angles.len(), self.radii.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::ParameterOverrides;

    #[test]
    fn test_linspace_endpoints() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);

        let samples = linspace(0.5, 15.0, 40);
        assert_eq!(samples[0], 0.5);
        assert_eq!(samples[39], 15.0);
    }

    #[test]
    fn test_default_grid() {
        let grid = PolarGrid::from_parameters(&ParameterSet::DEFAULT);
        assert_eq!(grid.shape(), (80, 40));
        assert_eq!(grid.layer_heights().len(), 8);
        assert_eq!(grid.layer_heights()[0], 0.0);
        assert_eq!(grid.layer_heights()[7], 20.0);
        assert_eq!(grid.radii()[0], 0.5);
        assert_eq!(grid.radii()[39], 15.0);
        assert!(grid.radii().windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_angles_are_half_open() {
        let grid = PolarGrid::from_parameters(&ParameterSet::DEFAULT);
        let angles = grid.angles();
        assert_eq!(angles[0], 0.0);
        assert!(angles.iter().all(|&theta| (0.0..TAU).contains(&theta)));
        assert!(angles.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_single_layer_sits_at_ground() {
        let params = ParameterSet::from_overrides(&ParameterOverrides {
            n_layers: Some(1),
            ..ParameterOverrides::default()
        })
        .unwrap();
        let grid = PolarGrid::from_parameters(&params);
        assert_eq!(grid.layer_heights(), &[0.0]);
    }
}
