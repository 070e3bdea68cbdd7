// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Derogation (override) commands.
//!
//! A derogation is a temporary manual setpoint exception layered on top of a
//! schedule-driven device mode. These commands are function-independent;
//! the device applies them to whichever zone function is active.

use crate::capabilities::{
    DEROGATED_SETPOINT_COMMAND, DEROGATION_ON_OFF_COMMAND, DEROGATION_TIME_COMMAND,
};
use crate::types::Temperature;

use super::Command;

/// Sets the derogated target temperature.
#[must_use]
pub fn derogated_setpoint(value: Temperature) -> Command {
    Command::with_parameter(DEROGATED_SETPOINT_COMMAND, value.value().into())
}

/// Sets the derogation duration.
///
/// The scalar is device-interpreted; see
/// [`ZoneConfig::derogation_duration`](crate::ZoneConfig::derogation_duration).
#[must_use]
pub fn derogation_time(duration: u32) -> Command {
    Command::with_parameter(DEROGATION_TIME_COMMAND, f64::from(duration).into())
}

/// Activates the derogation.
#[must_use]
pub fn derogation_on() -> Command {
    Command::with_parameter(DEROGATION_ON_OFF_COMMAND, "on".into())
}

/// Cancels an active derogation.
#[must_use]
pub fn derogation_off() -> Command {
    Command::with_parameter(DEROGATION_ON_OFF_COMMAND, "off".into())
}
