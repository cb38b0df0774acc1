//! Semantic unit type for temperatures
//!
//! Newtype wrapper preventing accidental mixing of absolute temperatures
//! with temperature *rises* (which the field stores as plain `f64` kelvin
//! deltas). Uses f64 throughout, matching the precision of the field.
//!
//! Total ordering is provided via `total_cmp`, so `min`/`max` from `Ord`
//! work even in the presence of NaN.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Deref, Sub};

/// Temperature in degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Celsius(f64);

impl Eq for Celsius {}

impl PartialOrd for Celsius {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Celsius {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Deref for Celsius {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Celsius {
    /// Absolute zero in Celsius
    pub const ABSOLUTE_ZERO: Celsius = Celsius(-273.15);

    /// Create a new Celsius temperature. Asserts value >= absolute zero (-273.15°C).
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(
            value >= -273.15,
            "Celsius::new: value is below absolute zero (-273.15°C)"
        );
        Celsius(value)
    }

    /// Raw value in degrees Celsius.
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°C", self.0)
    }
}

/// Adding a temperature rise (kelvin delta) to an absolute temperature.
impl Add<f64> for Celsius {
    type Output = Celsius;
    fn add(self, rise: f64) -> Celsius {
        Celsius(self.0 + rise)
    }
}

/// Difference between two absolute temperatures is a kelvin delta.
impl Sub for Celsius {
    type Output = f64;
    fn sub(self, other: Celsius) -> f64 {
        self.0 - other.0
    }
}
