// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State reconciliation: raw device attributes to the thermostat model.
//!
//! [`observe`] derives an externally-visible state pair from the snapshot;
//! [`ThermostatModel::apply`] commits it under the idle gate. The gate is the
//! critical correctness rule: while a user-initiated command is outstanding,
//! device echoes of the *old* state must not overwrite the *requested* new
//! state. Once idle, the device is authoritative again.

use crate::snapshot::{DeviceSnapshot, MODE_INTERNAL_SCHEDULING};
use crate::types::{CurrentState, TargetState, Temperature, ZoneFunction};

/// A derived state pair observed from the device snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateObservation {
    /// Observed current state, committed unconditionally.
    pub current_state: CurrentState,
    /// Target-state candidate, committed only when idle.
    pub target_candidate: TargetState,
}

/// A committed change to the thermostat model, pushed to the bridge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThermostatEvent {
    /// The target state changed.
    TargetState(TargetState),
    /// The current state changed.
    CurrentState(CurrentState),
    /// The target temperature changed.
    TargetTemperature(Temperature),
    /// The measured temperature changed.
    CurrentTemperature(f64),
}

/// The consumer-facing thermostat model for one zone.
///
/// All fields start unknown and are filled in by reconciliation or by
/// accepted user intents. `current_state` is a pure observation and is never
/// set by user intent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ThermostatModel {
    target_state: Option<TargetState>,
    target_temperature: Option<Temperature>,
    current_state: Option<CurrentState>,
    current_temperature: Option<f64>,
}

impl ThermostatModel {
    /// Creates a model with all fields unknown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the target state, if known.
    #[must_use]
    pub const fn target_state(&self) -> Option<TargetState> {
        self.target_state
    }

    /// Returns the target temperature, if known.
    #[must_use]
    pub const fn target_temperature(&self) -> Option<Temperature> {
        self.target_temperature
    }

    /// Returns the current state, if known.
    #[must_use]
    pub const fn current_state(&self) -> Option<CurrentState> {
        self.current_state
    }

    /// Returns the measured temperature, if known.
    #[must_use]
    pub const fn current_temperature(&self) -> Option<f64> {
        self.current_temperature
    }

    /// Commits an observation, honoring the idle gate.
    ///
    /// `current_state` is committed unconditionally; the target-state
    /// candidate only when `idle` is true. Returns the events for fields
    /// that actually changed, so recomputing from an unchanged snapshot is
    /// idempotent.
    pub fn apply(&mut self, observation: StateObservation, idle: bool) -> Vec<ThermostatEvent> {
        let mut events = Vec::new();

        if self.current_state != Some(observation.current_state) {
            self.current_state = Some(observation.current_state);
            events.push(ThermostatEvent::CurrentState(observation.current_state));
        }

        if idle && self.target_state != Some(observation.target_candidate) {
            self.target_state = Some(observation.target_candidate);
            events.push(ThermostatEvent::TargetState(observation.target_candidate));
        }

        events
    }

    /// Records an accepted user target-state intent.
    ///
    /// Returns the event when the value changed.
    pub fn set_target_state(&mut self, state: TargetState) -> Option<ThermostatEvent> {
        if self.target_state == Some(state) {
            return None;
        }
        self.target_state = Some(state);
        Some(ThermostatEvent::TargetState(state))
    }

    /// Sets the target temperature.
    ///
    /// Used both for user intents and for authoritative device confirmations;
    /// the latter always win, so there is no gate here.
    pub fn set_target_temperature(&mut self, value: Temperature) -> Option<ThermostatEvent> {
        if self.target_temperature == Some(value) {
            return None;
        }
        self.target_temperature = Some(value);
        Some(ThermostatEvent::TargetTemperature(value))
    }

    /// Forwards a raw measured-temperature reading, pass-through.
    pub fn set_current_temperature(&mut self, value: f64) -> Option<ThermostatEvent> {
        if self.current_temperature == Some(value) {
            return None;
        }
        self.current_temperature = Some(value);
        Some(ThermostatEvent::CurrentTemperature(value))
    }
}

/// Derives the externally-visible state pair from the snapshot.
///
/// Returns `None` while the zone on/off attribute is not yet known; a
/// stale or missing attribute skips the commit rather than failing.
#[must_use]
pub fn observe(snapshot: &DeviceSnapshot) -> Option<StateObservation> {
    let function = snapshot.zone_function();
    let on_off = snapshot.get_str(&function.on_off_attribute())?;

    if on_off == "off" {
        return Some(StateObservation {
            current_state: CurrentState::Off,
            target_candidate: TargetState::Off,
        });
    }

    let current_state = match function {
        ZoneFunction::Heating => CurrentState::Heat,
        ZoneFunction::Cooling => CurrentState::Cool,
    };
    let target_candidate =
        if snapshot.get_str(&function.mode_attribute()) == Some(MODE_INTERNAL_SCHEDULING) {
            TargetState::Auto
        } else {
            TargetState::Heat
        };

    Some(StateObservation {
        current_state,
        target_candidate,
    })
}
