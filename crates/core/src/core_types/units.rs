//! Semantic unit types for type-safe physical quantity handling
//!
//! This module provides newtype wrappers for the quantities the wave-field
//! engine exchanges, so a radius is never passed where a time is expected.
//!
//! # Design Philosophy
//! - All quantities use f64: the synthesizer promises bit-for-bit repeatable
//!   output and the harmonic sums are accumulated in double precision
//! - Arithmetic only where a formula needs it (phase sums, r·cos θ, r/a)
//! - `Deref` to the raw value keeps formula code readable (`*radius`)
//! - Serde support for serialization
//! - Total ordering via Ord trait (NaN handled as greater than all values)
//!
//! # Usage
//! ```
//! use vortex_sim_core::core_types::units::{Meters, Seconds};
//!
//! let r = Meters::new(2.5);
//! assert!((*r - 2.5).abs() < f64::EPSILON);
//!
//! let t1 = Seconds::new(0.5);
//! let t2 = Seconds::new(1.5);
//! assert_eq!(t1.max(t2), Seconds::new(1.5));
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Deref, Div, Mul, Sub};

/// Compare f64 values with total ordering using Rust's built-in `total_cmp`
#[inline]
fn f64_total_cmp(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

// ============================================================================
// SPATIAL TYPES
// ============================================================================

/// Distance in meters
///
/// Used for radii, heights and the characteristic core radius `a`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Meters(f64);

impl Eq for Meters {}

impl PartialOrd for Meters {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Meters {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Meters {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Meters {
    /// Create a new distance in meters
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Meters(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Meters {
    fn from(v: f64) -> Self {
        Meters(v)
    }
}

impl From<Meters> for f64 {
    fn from(m: Meters) -> f64 {
        m.0
    }
}

impl Mul<f64> for Meters {
    type Output = Meters;
    fn mul(self, rhs: f64) -> Meters {
        Meters(self.0 * rhs)
    }
}

// Ratio of two distances is dimensionless
impl Div for Meters {
    type Output = f64;
    fn div(self, rhs: Meters) -> f64 {
        self.0 / rhs.0
    }
}

impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} m", self.0)
    }
}

// ============================================================================
// ANGLE TYPES
// ============================================================================

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Radians(f64);

impl Deref for Radians {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Radians {
    /// Create a new angle in radians (any value, not wrapped)
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Radians(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Cosine of the angle
    #[inline]
    #[must_use]
    pub fn cos(self) -> f64 {
        self.0.cos()
    }

    /// Sine of the angle
    #[inline]
    #[must_use]
    pub fn sin(self) -> f64 {
        self.0.sin()
    }
}

impl From<f64> for Radians {
    fn from(v: f64) -> Self {
        Radians(v)
    }
}

impl From<Radians> for f64 {
    fn from(r: Radians) -> f64 {
        r.0
    }
}

impl Add for Radians {
    type Output = Radians;
    fn add(self, rhs: Radians) -> Radians {
        Radians(self.0 + rhs.0)
    }
}

impl Sub for Radians {
    type Output = Radians;
    fn sub(self, rhs: Radians) -> Radians {
        Radians(self.0 - rhs.0)
    }
}

impl Mul<f64> for Radians {
    type Output = Radians;
    fn mul(self, rhs: f64) -> Radians {
        Radians(self.0 * rhs)
    }
}

impl fmt::Display for Radians {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} rad", self.0)
    }
}

// ============================================================================
// TIME TYPES
// ============================================================================

/// Time in seconds
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Seconds(f64);

impl Eq for Seconds {}

impl PartialOrd for Seconds {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Seconds {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Seconds {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Seconds {
    /// Create a new time in seconds
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Seconds(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Seconds {
    fn from(v: f64) -> Self {
        Seconds(v)
    }
}

impl From<Seconds> for f64 {
    fn from(s: Seconds) -> f64 {
        s.0
    }
}

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} s", self.0)
    }
}

// ============================================================================
// RATE TYPES (TEMPORAL)
// ============================================================================

/// Angular frequency (rad/s)
/// Used for: mode frequencies ω, spectrum lines
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct AngularFrequency(f64);

impl Deref for AngularFrequency {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl AngularFrequency {
    /// Zero frequency (a standing, non-rotating mode)
    pub const ZERO: AngularFrequency = AngularFrequency(0.0);

    /// Create a new angular frequency (can be any value, positive or negative)
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        AngularFrequency(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for AngularFrequency {
    fn from(v: f64) -> Self {
        AngularFrequency(v)
    }
}

impl From<AngularFrequency> for f64 {
    fn from(w: AngularFrequency) -> f64 {
        w.0
    }
}

impl Add for AngularFrequency {
    type Output = AngularFrequency;
    fn add(self, rhs: AngularFrequency) -> AngularFrequency {
        AngularFrequency(self.0 + rhs.0)
    }
}

impl Mul<f64> for AngularFrequency {
    type Output = AngularFrequency;
    fn mul(self, rhs: f64) -> AngularFrequency {
        AngularFrequency(self.0 * rhs)
    }
}

// Cross-type operation: frequency × time = phase angle
impl Mul<Seconds> for AngularFrequency {
    type Output = Radians;
    fn mul(self, rhs: Seconds) -> Radians {
        Radians(self.0 * rhs.0)
    }
}

impl fmt::Display for AngularFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} rad/s", self.0)
    }
}
