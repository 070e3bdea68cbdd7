// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Refresh (poll) commands.
//!
//! Device-side confirmation of a just-sent command is not synchronous; a
//! trailing poll guarantees convergence even when the device never emits a
//! spontaneous change notification.

use crate::types::ZoneFunction;

use super::Command;

/// Polls the device for the effective target temperature.
#[must_use]
pub fn refresh_target_temperature() -> Command {
    Command::new("refreshTargetTemperature")
}

/// Polls the device for the zone profile.
#[must_use]
pub fn refresh_profile(function: ZoneFunction) -> Command {
    Command::new(function.profile_refresh_command())
}
