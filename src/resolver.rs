// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mode resolver: user intent to device command sequences.
//!
//! Pure functions with no mutable state of their own. The resolver reads the
//! zone function and live override state from the [`DeviceSnapshot`] on every
//! call, then maps the small, closed set of user intents onto whichever
//! command family the device belongs to.

use crate::capabilities::{SetpointFamily, ZoneCapabilities};
use crate::command::{self, Command, SchedulingMode};
use crate::snapshot::{DeviceSnapshot, PROFILE_DEROGATION};
use crate::types::{TargetState, Temperature};

/// The outcome of resolving a target-state intent.
///
/// Besides the command sequence this carries the optional *locally predicted*
/// setpoint: when switching to HEAT no command changes the target
/// temperature, so the resolver mirrors the device's last-known comfort
/// setpoint as an optimistic echo. The value is provisional and overwritten
/// by the next authoritative notification.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Resolution {
    /// Commands to dispatch, in order.
    pub commands: Vec<Command>,
    /// Optimistic local echo for the target temperature, if any.
    pub predicted_setpoint: Option<Temperature>,
}

impl Resolution {
    /// Returns whether this resolution carries no work at all.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.commands.is_empty() && self.predicted_setpoint.is_none()
    }
}

/// Resolves a target-state intent into a command sequence.
///
/// - `Auto`: turn the zone on, then switch to internal scheduling. Order
///   matters; some devices reject a mode command while off.
/// - `Heat`: cancel an active derogation first when the device has override
///   control and the live profile reads `"derogation"`, then turn on and
///   switch to manual. The comfort setpoint is echoed as the predicted
///   target temperature.
/// - `Off`: turn the zone off. Power-down only; no absence-mode restore.
#[must_use]
pub fn resolve_target_state(
    requested: TargetState,
    snapshot: &DeviceSnapshot,
    capabilities: &ZoneCapabilities,
) -> Resolution {
    let function = snapshot.zone_function();
    let mut resolution = Resolution::default();

    match requested {
        TargetState::Auto => {
            resolution.commands.push(command::power::zone_on(function));
            resolution
                .commands
                .push(command::mode::set_mode(function, SchedulingMode::InternalScheduling));
        }
        TargetState::Heat => {
            let override_active = capabilities.override_control
                && snapshot.get_str(&function.profile_attribute()) == Some(PROFILE_DEROGATION);
            if override_active {
                resolution.commands.push(command::derogation::derogation_off());
            }
            resolution.commands.push(command::power::zone_on(function));
            resolution
                .commands
                .push(command::mode::set_mode(function, SchedulingMode::Manual));

            resolution.predicted_setpoint = snapshot
                .get_f64(&function.comfort_setpoint_attribute())
                .and_then(|v| Temperature::new(v).ok());
        }
        TargetState::Off => {
            resolution.commands.push(command::power::zone_off(function));
        }
    }

    resolution
}

/// Resolves a raw characteristic value into a command sequence.
///
/// Values outside the recognized set (including COOL) resolve to an empty
/// sequence, never an error; user input is handled best-effort.
#[must_use]
pub fn resolve_target_state_value(
    requested: u8,
    snapshot: &DeviceSnapshot,
    capabilities: &ZoneCapabilities,
) -> Resolution {
    match TargetState::from_characteristic(requested) {
        Some(state) => resolve_target_state(state, snapshot, capabilities),
        None => {
            tracing::trace!(value = requested, "ignoring unrecognized target state");
            Resolution::default()
        }
    }
}

/// Resolves a target-temperature intent into a command sequence.
///
/// Inside AUTO a heat pump gets a temporary derogation (setpoint, duration,
/// activation) without leaving internal scheduling; a zone controller falls
/// back to its plain setpoint command. Outside AUTO the direct setpoint is
/// preferred, with the comfort setpoint as the heat-pump fallback.
///
/// The family is re-evaluated on every call; the derogation path additionally
/// depends on the *current* target state, not on device capability alone.
#[must_use]
pub fn resolve_target_temperature(
    value: Temperature,
    target_state: Option<TargetState>,
    snapshot: &DeviceSnapshot,
    capabilities: &ZoneCapabilities,
    derogation_duration: u32,
) -> Vec<Command> {
    let function = snapshot.zone_function();

    if target_state == Some(TargetState::Auto) {
        match capabilities.setpoint_family() {
            SetpointFamily::HeatPump => vec![
                command::derogation::derogated_setpoint(value),
                command::derogation::derogation_time(derogation_duration),
                command::derogation::derogation_on(),
            ],
            SetpointFamily::ZoneControl => {
                vec![command::setpoint::direct_setpoint(function, value)]
            }
        }
    } else if capabilities.direct_setpoint {
        vec![command::setpoint::direct_setpoint(function, value)]
    } else {
        tracing::trace!(%function, "no direct setpoint command, using comfort setpoint");
        vec![command::setpoint::comfort_setpoint(function, value)]
    }
}
