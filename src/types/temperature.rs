// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat set point type.
//!
//! This module provides a type-safe representation of the thermostat
//! temperature, ensuring values are always within the supported range of
//! 60-80 °F.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Thermostat set point in whole degrees Fahrenheit (60-80).
///
/// # Examples
///
/// ```
/// use hearth_voice::types::Temperature;
///
/// let temp = Temperature::new(72).unwrap();
/// assert_eq!(temp.value(), 72);
///
/// assert_eq!(Temperature::MIN.value(), 60);
/// assert_eq!(Temperature::MAX.value(), 80);
///
/// // Out of range values return an error
/// assert!(Temperature::new(95).is_err());
/// assert!(Temperature::new(59).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Temperature(u8);

impl Temperature {
    /// Lowest accepted set point (60 °F).
    pub const MIN: Self = Self(60);

    /// Highest accepted set point (80 °F).
    pub const MAX: Self = Self(80);

    /// Set point used when a session starts (72 °F).
    pub const DEFAULT: Self = Self(72);

    /// Creates a new set point.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if `degrees` is outside 60-80.
    pub fn new(degrees: i32) -> Result<Self, ValueError> {
        u8::try_from(degrees)
            .ok()
            .filter(|v| (Self::MIN.0..=Self::MAX.0).contains(v))
            .map(Self)
            .ok_or(ValueError::OutOfRange {
                min: i64::from(Self::MIN.0),
                max: i64::from(Self::MAX.0),
                actual: i64::from(degrees),
            })
    }

    /// Returns the set point in degrees Fahrenheit.
    #[must_use]
    pub fn value(&self) -> i32 {
        i32::from(self.0)
    }
}

impl Default for Temperature {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°F", self.0)
    }
}

impl TryFrom<i32> for Temperature {
    type Error = ValueError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Temperature> for i32 {
    fn from(value: Temperature) -> Self {
        value.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_valid_values() {
        for v in 60..=80 {
            assert_eq!(Temperature::new(v).unwrap().value(), v);
        }
    }

    #[test]
    fn temperature_out_of_range() {
        assert_eq!(
            Temperature::new(95),
            Err(ValueError::OutOfRange {
                min: 60,
                max: 80,
                actual: 95
            })
        );
        assert!(Temperature::new(59).is_err());
        assert!(Temperature::new(-72).is_err());
        assert!(Temperature::new(i32::MAX).is_err());
    }

    #[test]
    fn temperature_default() {
        assert_eq!(Temperature::default().value(), 72);
    }

    #[test]
    fn temperature_display() {
        assert_eq!(Temperature::new(65).unwrap().to_string(), "65°F");
    }

    #[test]
    fn temperature_serde() {
        let temp: Temperature = serde_json::from_str("68").unwrap();
        assert_eq!(temp.value(), 68);
        assert_eq!(serde_json::to_string(&temp).unwrap(), "68");
        assert!(serde_json::from_str::<Temperature>("90").is_err());
    }
}
