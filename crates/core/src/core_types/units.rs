//! Semantic unit types for the metric fields carried by simulation frames.
//!
//! Newtype wrappers prevent accidental mixing of incompatible quantities
//! (e.g. a coverage percentage with a confidence percentage expressed as a
//! plain `f32`). Each type derefs to its inner value for arithmetic-free
//! reads and exposes a validated constructor.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// Cloud-top temperature in degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Celsius(f32);

impl Celsius {
    /// Create a new Celsius temperature. Asserts value >= absolute zero (-273.15°C).
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f32) -> Self {
        assert!(
            value >= -273.15,
            "Celsius::new: value is below absolute zero (-273.15°C)"
        );
        Celsius(value)
    }

    /// Inner value as `f32`.
    #[inline]
    #[must_use]
    pub const fn value(self) -> f32 {
        self.0
    }
}

impl Deref for Celsius {
    type Target = f32;
    #[inline]
    fn deref(&self) -> &f32 {
        &self.0
    }
}

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°C", self.0)
    }
}

/// Percentage value (coverage and similar 0-100 quantities).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Percent(f32);

impl Percent {
    /// Create a new percentage. Asserts the value is finite.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f32) -> Self {
        assert!(value.is_finite(), "Percent::new: value must be finite");
        Percent(value)
    }

    /// Inner value as `f32`.
    #[inline]
    #[must_use]
    pub const fn value(self) -> f32 {
        self.0
    }
}

impl Deref for Percent {
    type Target = f32;
    #[inline]
    fn deref(&self) -> &f32 {
        &self.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

/// Areal extent in square kilometres. Integer-valued, matching the
/// whole-km² granularity of the cluster-area metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct SquareKilometers(i32);

impl SquareKilometers {
    /// Create a new area. Asserts the value is non-negative.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: i32) -> Self {
        assert!(value >= 0, "SquareKilometers::new: area cannot be negative");
        SquareKilometers(value)
    }

    /// Inner value as `i32`.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl Deref for SquareKilometers {
    type Target = i32;
    #[inline]
    fn deref(&self) -> &i32 {
        &self.0
    }
}

impl fmt::Display for SquareKilometers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} km²", self.0)
    }
}
