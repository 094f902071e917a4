//! Power draw of a device, in watts.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Non-negative power consumption in watts.
///
/// Construction, assignment, and deserialization all reject negative and
/// non-finite values, so a `Power` in hand is always a finite `value() >= 0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Power(f64);

impl Power {
    /// Zero watts.
    pub const ZERO: Self = Self(0.0);

    /// Validate and wrap a wattage.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPower`] when `watts` is negative,
    /// infinite or NaN.
    pub fn new(watts: f64) -> Result<Self, ValidationError> {
        if !watts.is_finite() || watts < 0.0 {
            return Err(ValidationError::InvalidPower(watts));
        }
        // `abs` folds -0.0 into 0.0
        Ok(Self(watts.abs()))
    }

    /// Replace the wattage, keeping the old value on failure.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPower`] when `watts` is negative,
    /// infinite or NaN.
    pub fn set(&mut self, watts: f64) -> Result<(), ValidationError> {
        *self = Self::new(watts)?;
        Ok(())
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Power {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Power> for f64 {
    fn from(power: Power) -> Self {
        power.0
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} W", self.0)
    }
}
