// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Target-temperature commands.
//!
//! Which of these a device accepts depends on its
//! [`SetpointFamily`](crate::SetpointFamily): zone controllers take the
//! direct setpoint, heat pumps only the comfort setpoint outside scheduling.

use crate::types::{Temperature, ZoneFunction};

use super::Command;

/// Sets the zone target temperature directly.
#[must_use]
pub fn direct_setpoint(function: ZoneFunction, value: Temperature) -> Command {
    Command::with_parameter(function.setpoint_command(), value.value().into())
}

/// Sets the comfort target temperature.
#[must_use]
pub fn comfort_setpoint(function: ZoneFunction, value: Temperature) -> Command {
    Command::with_parameter(function.comfort_setpoint_command(), value.value().into())
}
