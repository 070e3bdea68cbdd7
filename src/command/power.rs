// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Zone on/off commands.

use crate::types::ZoneFunction;

use super::Command;

/// Turns the zone on.
#[must_use]
pub fn zone_on(function: ZoneFunction) -> Command {
    Command::with_parameter(function.on_off_command(), "on".into())
}

/// Turns the zone off.
#[must_use]
pub fn zone_off(function: ZoneFunction) -> Command {
    Command::with_parameter(function.on_off_command(), "off".into())
}
