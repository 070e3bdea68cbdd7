// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-zone configuration.

use std::time::Duration;

use crate::types::TargetState;

/// Configuration for one climate zone.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use thermozone::ZoneConfig;
///
/// let config = ZoneConfig::new()
///     .with_idle_timeout(Duration::from_secs(90))
///     .with_derogation_duration(60);
///
/// assert_eq!(config.refresh_delay(), Duration::from_secs(30));
/// assert_eq!(config.derogation_duration(), 60);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneConfig {
    refresh_delay: Duration,
    idle_timeout: Duration,
    derogation_duration: u32,
    max_temperature: f64,
    valid_target_states: Vec<TargetState>,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            refresh_delay: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(60),
            derogation_duration: 120,
            max_temperature: 30.0,
            valid_target_states: vec![TargetState::Auto, TargetState::Heat, TargetState::Off],
        }
    }
}

impl ZoneConfig {
    /// Creates a configuration with the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the quiescence window before a trailing refresh poll.
    #[must_use]
    pub const fn with_refresh_delay(mut self, delay: Duration) -> Self {
        self.refresh_delay = delay;
        self
    }

    /// Sets the bound on how long the idle flag may stay false without a
    /// device confirmation.
    #[must_use]
    pub const fn with_idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = timeout;
        self
    }

    /// Sets the derogation duration scalar sent with `setDerogationTime`.
    ///
    /// Units are device-interpreted.
    #[must_use]
    pub const fn with_derogation_duration(mut self, duration: u32) -> Self {
        self.derogation_duration = duration;
        self
    }

    /// Sets the maximum accepted target temperature.
    #[must_use]
    pub const fn with_max_temperature(mut self, max: f64) -> Self {
        self.max_temperature = max;
        self
    }

    /// Delay before a debounce-triggered refresh poll fires.
    #[must_use]
    pub const fn refresh_delay(&self) -> Duration {
        self.refresh_delay
    }

    /// Bounded timeout after which the idle flag is restored.
    #[must_use]
    pub const fn idle_timeout(&self) -> Duration {
        self.idle_timeout
    }

    /// Derogation duration scalar.
    #[must_use]
    pub const fn derogation_duration(&self) -> u32 {
        self.derogation_duration
    }

    /// Maximum accepted target temperature in degrees Celsius.
    #[must_use]
    pub const fn max_temperature(&self) -> f64 {
        self.max_temperature
    }

    /// Target states this zone accepts from the bridge.
    #[must_use]
    pub fn valid_target_states(&self) -> &[TargetState] {
        &self.valid_target_states
    }

    /// The registration properties the bridge reads when creating the
    /// thermostat characteristic.
    #[must_use]
    pub fn thermostat_properties(&self) -> ThermostatProperties {
        ThermostatProperties {
            valid_target_states: self.valid_target_states.clone(),
            max_temperature: self.max_temperature,
        }
    }
}

/// Registration data for the bridge's thermostat characteristic.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ThermostatProperties {
    /// Target states the characteristic should offer.
    pub valid_target_states: Vec<TargetState>,
    /// Maximum selectable target temperature.
    pub max_temperature: f64,
}
