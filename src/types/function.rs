// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Zone function: whether the zone currently heats or cools.
//!
//! The function is derived on demand from the parent device's operating-mode
//! attribute and never stored. It selects the `Heating`/`Cooling` infix in
//! the PassAPC attribute and command vocabulary.

use std::fmt;

/// The physical function a zone currently controls.
///
/// Exactly one of `Heating` or `Cooling` at any evaluation instant. Defaults
/// to `Heating` when the parent operating-mode attribute is absent or not
/// `"cooling"`.
///
/// # Examples
///
/// ```
/// use thermozone::types::ZoneFunction;
///
/// let f = ZoneFunction::Heating;
/// assert_eq!(f.on_off_attribute(), "core:HeatingOnOffState");
/// assert_eq!(f.mode_command(), "setPassAPCHeatingMode");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ZoneFunction {
    /// The zone heats.
    Heating,
    /// The zone cools.
    Cooling,
}

impl ZoneFunction {
    /// Returns the `Heating`/`Cooling` infix used in attribute and command
    /// names.
    #[must_use]
    pub const fn infix(&self) -> &'static str {
        match self {
            Self::Heating => "Heating",
            Self::Cooling => "Cooling",
        }
    }

    /// Attribute holding the zone on/off state.
    #[must_use]
    pub fn on_off_attribute(&self) -> String {
        format!("core:{}OnOffState", self.infix())
    }

    /// Attribute holding the PassAPC operating mode of the zone.
    #[must_use]
    pub fn mode_attribute(&self) -> String {
        format!("io:PassAPC{}ModeState", self.infix())
    }

    /// Attribute holding the PassAPC profile (e.g. `"derogation"`).
    #[must_use]
    pub fn profile_attribute(&self) -> String {
        format!("io:PassAPC{}ProfileState", self.infix())
    }

    /// Attribute holding the comfort target temperature.
    #[must_use]
    pub fn comfort_setpoint_attribute(&self) -> String {
        format!("core:Comfort{}TargetTemperatureState", self.infix())
    }

    /// Command that turns the zone on or off.
    #[must_use]
    pub fn on_off_command(&self) -> String {
        format!("set{}OnOffState", self.infix())
    }

    /// Command that switches the PassAPC zone mode.
    #[must_use]
    pub fn mode_command(&self) -> String {
        format!("setPassAPC{}Mode", self.infix())
    }

    /// Command that sets the zone target temperature directly.
    #[must_use]
    pub fn setpoint_command(&self) -> String {
        format!("set{}TargetTemperature", self.infix())
    }

    /// Command that sets the comfort target temperature.
    #[must_use]
    pub fn comfort_setpoint_command(&self) -> String {
        format!("setComfort{}TargetTemperature", self.infix())
    }

    /// Command that triggers a refresh of the PassAPC profile.
    #[must_use]
    pub fn profile_refresh_command(&self) -> String {
        format!("refreshPassAPC{}Profile", self.infix())
    }
}

impl fmt::Display for ZoneFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.infix())
    }
}
