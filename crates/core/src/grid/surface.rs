//! Layered Cartesian surfaces produced by the synthesizer
//!
//! Each layer stores three `DMatrix<f64>` meshes (X, Y, Z) with one row per
//! angular sample and one column per radial sample. The surface is handed to
//! renderers by value; the engine keeps no reference to it.

use crate::core_types::Seconds;
use nalgebra::DMatrix;
use std::ops::Index;

/// Cartesian mesh of one vertical layer
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSurface {
    /// Base height `z_level` of the layer (m)
    pub height: f64,
    /// X = R·cos(Θ)
    pub x: DMatrix<f64>,
    /// Y = R·sin(Θ)
    pub y: DMatrix<f64>,
    /// `Z = z_level + modulated harmonic sum`
    pub z: DMatrix<f64>,
}

impl LayerSurface {
    /// Mesh shape `(angles, radii)`
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.z.shape()
    }

    /// Minimum and maximum of Z over the layer
    #[must_use]
    pub fn z_range(&self) -> (f64, f64) {
        self.z
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }

    /// Largest vertical displacement `|Z − z_level|` on the layer
    #[must_use]
    pub fn max_displacement(&self) -> f64 {
        self.z
            .iter()
            .fold(0.0_f64, |acc, &v| acc.max((v - self.height).abs()))
    }
}

/// Ordered per-layer meshes for one time sample
#[derive(Debug, Clone, PartialEq)]
pub struct LayeredSurface {
    time: Seconds,
    layers: Vec<LayerSurface>,
}

impl LayeredSurface {
    /// Assemble a surface from layers in bottom-to-top order
    #[must_use]
    pub fn new(time: Seconds, layers: Vec<LayerSurface>) -> Self {
        Self { time, layers }
    }

    /// Time the surface was synthesized for
    #[must_use]
    pub fn time(&self) -> Seconds {
        self.time
    }

    /// Number of layers
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// True if the surface has no layers
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Layers in bottom-to-top order
    #[must_use]
    pub fn layers(&self) -> &[LayerSurface] {
        &self.layers
    }

    /// Iterate layers in bottom-to-top order
    pub fn iter(&self) -> std::slice::Iter<'_, LayerSurface> {
        self.layers.iter()
    }

    /// Take ownership of the layers
    #[must_use]
    pub fn into_layers(self) -> Vec<LayerSurface> {
        self.layers
    }

    /// Minimum and maximum Z over all layers, `None` if empty
    #[must_use]
    pub fn z_range(&self) -> Option<(f64, f64)> {
        self.layers
            .iter()
            .map(LayerSurface::z_range)
            .reduce(|(lo_a, hi_a), (lo_b, hi_b)| (lo_a.min(lo_b), hi_a.max(hi_b)))
    }
}

impl Index<usize> for LayeredSurface {
    type Output = LayerSurface;

    fn index(&self, index: usize) -> &LayerSurface {
        &self.layers[index]
    }
}

impl<'a> IntoIterator for &'a LayeredSurface {
    type Item = &'a LayerSurface;
    type IntoIter = std::slice::Iter<'a, LayerSurface>;

    fn into_iter(self) -> Self::IntoIter {
        self.layers.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(height: f64, z: &[f64]) -> LayerSurface {
        LayerSurface {
            height,
            x: DMatrix::zeros(1, z.len()),
            y: DMatrix::zeros(1, z.len()),
            z: DMatrix::from_row_slice(1, z.len(), z),
        }
    }

    #[test]
    fn test_layer_statistics() {
        let l = layer(2.0, &[1.5, 2.0, 2.75]);
        assert_eq!(l.shape(), (1, 3));
        assert_eq!(l.z_range(), (1.5, 2.75));
        assert_eq!(l.max_displacement(), 0.75);
    }

    #[test]
    fn test_surface_range_spans_layers() {
        let surface = LayeredSurface::new(
            Seconds::new(0.5),
            vec![layer(0.0, &[-0.5, 0.25]), layer(10.0, &[9.0, 11.5])],
        );
        assert_eq!(surface.len(), 2);
        assert!(!surface.is_empty());
        assert_eq!(surface.time(), Seconds::new(0.5));
        assert_eq!(surface.z_range(), Some((-0.5, 11.5)));
        assert_eq!(surface[1].height, 10.0);
        assert_eq!((&surface).into_iter().count(), 2);
    }

    #[test]
    fn test_empty_surface_has_no_range() {
        let surface = LayeredSurface::new(Seconds::new(0.0), Vec::new());
        assert!(surface.is_empty());
        assert_eq!(surface.z_range(), None);
    }
}
