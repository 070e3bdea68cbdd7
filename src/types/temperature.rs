// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature type for setpoints and readings.

use std::fmt;

use crate::error::ValueError;

/// A temperature in degrees Celsius.
///
/// Construction enforces a physical sanity range of 0-50 °C; the tighter
/// per-zone maximum (30 °C by default) is enforced by
/// [`ZoneConfig`](crate::ZoneConfig) at the user-intent boundary.
///
/// # Examples
///
/// ```
/// use thermozone::types::Temperature;
///
/// let t = Temperature::new(21.5).unwrap();
/// assert_eq!(t.value(), 21.5);
///
/// assert!(Temperature::new(-5.0).is_err());
/// assert!(Temperature::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Temperature(f64);

impl Temperature {
    /// Minimum accepted temperature (0 °C).
    pub const MIN: f64 = 0.0;

    /// Maximum accepted temperature (50 °C).
    pub const MAX: f64 = 50.0;

    /// Creates a new temperature.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::NonFiniteTemperature` for NaN or infinities and
    /// `ValueError::TemperatureOutOfRange` outside 0-50 °C.
    pub fn new(value: f64) -> Result<Self, ValueError> {
        if !value.is_finite() {
            return Err(ValueError::NonFiniteTemperature(value));
        }
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValueError::TemperatureOutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Returns the temperature in degrees Celsius.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
