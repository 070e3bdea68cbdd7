// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Zone scheduling-mode commands.

use crate::types::ZoneFunction;

use super::Command;

/// The scheduling mode a zone can be switched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulingMode {
    /// Device-native automatic schedule, exposed externally as AUTO.
    InternalScheduling,
    /// Manual operation at a fixed setpoint.
    Manual,
}

impl SchedulingMode {
    /// Returns the wire value for this mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InternalScheduling => "internalScheduling",
            Self::Manual => "manu",
        }
    }
}

/// Switches the zone scheduling mode.
#[must_use]
pub fn set_mode(function: ZoneFunction, mode: SchedulingMode) -> Command {
    Command::with_parameter(function.mode_command(), mode.as_str().into())
}
