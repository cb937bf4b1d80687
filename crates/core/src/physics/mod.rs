//! Closed-form wave physics: dispersion relation and single-mode evaluation

pub mod frequency;
pub mod wave;

pub use frequency::{
    angular_frequency, circulation_frequency, frequency_components, frequency_spectrum,
    surface_tension_frequency, FrequencyComponents, SpectrumLine, SURFACE_TENSION_WEIGHT,
};
pub use wave::{
    complex_displacement, displacement, mode_amplitude, phase, radial_decay, FieldPoint,
    WaveMode, RADIAL_DECAY_RATE,
};
