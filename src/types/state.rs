// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat state enums.
//!
//! [`TargetState`] is what the user asks for; [`CurrentState`] is what the
//! zone is observed to be doing. The numeric characteristic values match the
//! HomeKit `TargetHeatingCoolingState` / `CurrentHeatingCoolingState`
//! vocabulary used by the bridge.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// The state a user asks the zone to be in.
///
/// This zone type only supports `Off`, `Heat` and `Auto`; a request for any
/// other characteristic value is silently ignored (best-effort user input).
///
/// # Examples
///
/// ```
/// use thermozone::types::TargetState;
///
/// assert_eq!(TargetState::Auto.characteristic_value(), 3);
/// assert_eq!(TargetState::from_characteristic(0), Some(TargetState::Off));
/// // COOL (2) is not a valid target for this zone
/// assert_eq!(TargetState::from_characteristic(2), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum TargetState {
    /// Zone powered down.
    Off,
    /// Manual mode with a fixed setpoint.
    Heat,
    /// Device-native internal scheduling.
    Auto,
}

impl TargetState {
    /// Returns the display string for this state.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::Heat => "HEAT",
            Self::Auto => "AUTO",
        }
    }

    /// Returns the numeric characteristic value used by the bridge.
    #[must_use]
    pub const fn characteristic_value(&self) -> u8 {
        match self {
            Self::Off => 0,
            Self::Heat => 1,
            Self::Auto => 3,
        }
    }

    /// Maps a raw characteristic value to a target state.
    ///
    /// Returns `None` for anything outside the supported set, including
    /// COOL (2), which this zone type does not accept as a target.
    #[must_use]
    pub const fn from_characteristic(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Off),
            1 => Some(Self::Heat),
            3 => Some(Self::Auto),
            _ => None,
        }
    }
}

impl fmt::Display for TargetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TargetState {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "OFF" => Ok(Self::Off),
            "HEAT" => Ok(Self::Heat),
            "AUTO" => Ok(Self::Auto),
            _ => Err(ValueError::InvalidTargetState(s.to_string())),
        }
    }
}

/// The state the zone is observed to be in.
///
/// Always a pure function of the device's on/off attribute and the zone
/// function (heating vs. cooling); never set directly by user intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum CurrentState {
    /// Zone is off.
    Off,
    /// Zone is actively heating.
    Heat,
    /// Zone is actively cooling.
    Cool,
}

impl CurrentState {
    /// Returns the display string for this state.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::Heat => "HEAT",
            Self::Cool => "COOL",
        }
    }

    /// Returns the numeric characteristic value used by the bridge.
    #[must_use]
    pub const fn characteristic_value(&self) -> u8 {
        match self {
            Self::Off => 0,
            Self::Heat => 1,
            Self::Cool => 2,
        }
    }
}

impl fmt::Display for CurrentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
