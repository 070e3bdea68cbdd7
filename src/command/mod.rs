// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command descriptors for the zone device.
//!
//! A [`Command`] is an opaque `(name, optional parameter)` pair. This core
//! never interprets command results; it only issues descriptors through the
//! transport and waits for attribute echoes.
//!
//! # Available Constructors
//!
//! | Module | Purpose | Example |
//! |--------|---------|---------|
//! | [`power`] | Turn the zone on or off | `setHeatingOnOffState on` |
//! | [`mode`] | Switch the zone scheduling mode | `setPassAPCHeatingMode manu` |
//! | [`setpoint`] | Set a target temperature | `setHeatingTargetTemperature 21` |
//! | [`derogation`] | Manage a temporary override | `setDerogationTime 120` |
//! | [`refresh`] | Poll the device for fresh state | `refreshTargetTemperature` |

pub mod derogation;
pub mod mode;
pub mod power;
pub mod refresh;
pub mod setpoint;

pub use mode::SchedulingMode;

use std::fmt;

use crate::types::AttributeValue;

/// A command descriptor addressed to the zone device.
///
/// # Examples
///
/// ```
/// use thermozone::command::Command;
///
/// let cmd = Command::with_parameter("setHeatingOnOffState", "on".into());
/// assert_eq!(cmd.name(), "setHeatingOnOffState");
/// assert_eq!(cmd.to_string(), "setHeatingOnOffState on");
///
/// let refresh = Command::new("refreshTargetTemperature");
/// assert!(refresh.parameter().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Command {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameter: Option<AttributeValue>,
}

impl Command {
    /// Creates a command without a parameter.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameter: None,
        }
    }

    /// Creates a command carrying a parameter.
    #[must_use]
    pub fn with_parameter(name: impl Into<String>, parameter: AttributeValue) -> Self {
        Self {
            name: name.into(),
            parameter: Some(parameter),
        }
    }

    /// Returns the command name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the command parameter, if any.
    #[must_use]
    pub const fn parameter(&self) -> Option<&AttributeValue> {
        self.parameter.as_ref()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.parameter {
            Some(p) => write!(f, "{} {p}", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_with_and_without_parameter() {
        let cmd = Command::with_parameter("setDerogationTime", 120.0.into());
        assert_eq!(cmd.to_string(), "setDerogationTime 120");

        let cmd = Command::new("refreshPassAPCHeatingProfile");
        assert_eq!(cmd.to_string(), "refreshPassAPCHeatingProfile");
    }

    #[test]
    fn serializes_without_null_parameter() {
        let json = serde_json::to_string(&Command::new("refreshTargetTemperature")).unwrap();
        assert_eq!(json, r#"{"name":"refreshTargetTemperature"}"#);
    }
}
