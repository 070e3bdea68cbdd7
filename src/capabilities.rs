// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device capability detection and the setpoint command family.
//!
//! Zone devices come in two families with different setpoint command sets.
//! Heat pumps expose derogation (override) commands but no direct setpoint;
//! zone controllers expose a direct setpoint but no derogation. The
//! capability descriptor is resolved once per device from the discovered
//! command table; only the override *availability* (whether a derogation is
//! currently active) is state-dependent and read live from the snapshot.

use crate::snapshot::DeviceSnapshot;
use crate::types::ZoneFunction;

/// Command that toggles a derogation on or off.
pub const DEROGATION_ON_OFF_COMMAND: &str = "setDerogationOnOffState";

/// Command that sets the derogated target temperature.
pub const DEROGATED_SETPOINT_COMMAND: &str = "setDerogatedTargetTemperature";

/// Command that sets the derogation duration.
pub const DEROGATION_TIME_COMMAND: &str = "setDerogationTime";

/// Capabilities of a zone device.
///
/// # Examples
///
/// ```
/// use thermozone::{SetpointFamily, ZoneCapabilities};
///
/// let caps = ZoneCapabilities::heat_pump();
/// assert!(caps.override_control);
/// assert_eq!(caps.setpoint_family(), SetpointFamily::HeatPump);
///
/// let caps = ZoneCapabilities::zone_control();
/// assert!(caps.direct_setpoint);
/// assert_eq!(caps.setpoint_family(), SetpointFamily::ZoneControl);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneCapabilities {
    /// Device accepts derogation (override) commands.
    ///
    /// Set only when all three derogation commands are present. PassAPC
    /// devices ship them together, so the consolidated flag replaces the
    /// per-command probes (cancel keyed on `setDerogationOnOffState`, the
    /// override setpoint on `setDerogatedTargetTemperature`) and keeps
    /// [`SetpointFamily`] a single exhaustive switch.
    pub override_control: bool,

    /// Device accepts a direct zone setpoint command.
    pub direct_setpoint: bool,

    /// Device accepts a comfort setpoint command.
    pub comfort_setpoint: bool,
}

/// The setpoint command family a device belongs to.
///
/// Derived from [`ZoneCapabilities`] and matched exhaustively in the mode
/// resolver, so every device family has an explicit command path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetpointFamily {
    /// Heat pump: derogation commands, comfort setpoint, no direct setpoint.
    HeatPump,
    /// Zone controller: direct setpoint, no derogation commands.
    ZoneControl,
}

impl Default for ZoneCapabilities {
    fn default() -> Self {
        Self::zone_control()
    }
}

impl ZoneCapabilities {
    /// Capabilities of a PassAPC heat pump zone.
    #[must_use]
    pub const fn heat_pump() -> Self {
        Self {
            override_control: true,
            direct_setpoint: false,
            comfort_setpoint: true,
        }
    }

    /// Capabilities of a PassAPC zone controller.
    #[must_use]
    pub const fn zone_control() -> Self {
        Self {
            override_control: false,
            direct_setpoint: true,
            comfort_setpoint: false,
        }
    }

    /// Probes the discovered command table for capabilities.
    ///
    /// Checks both heating and cooling variants of the function-specific
    /// commands, since the zone function can flip at runtime while the
    /// command table stays fixed.
    #[must_use]
    pub fn from_snapshot(snapshot: &DeviceSnapshot) -> Self {
        let either = |f: fn(&ZoneFunction) -> String| {
            snapshot.has_command(&f(&ZoneFunction::Heating))
                || snapshot.has_command(&f(&ZoneFunction::Cooling))
        };

        Self {
            override_control: snapshot.has_command(DEROGATION_ON_OFF_COMMAND)
                && snapshot.has_command(DEROGATED_SETPOINT_COMMAND)
                && snapshot.has_command(DEROGATION_TIME_COMMAND),
            direct_setpoint: either(ZoneFunction::setpoint_command),
            comfort_setpoint: either(ZoneFunction::comfort_setpoint_command),
        }
    }

    /// Returns the setpoint command family for this device.
    #[must_use]
    pub const fn setpoint_family(&self) -> SetpointFamily {
        if self.override_control {
            SetpointFamily::HeatPump
        } else {
            SetpointFamily::ZoneControl
        }
    }
}

/// Builder for creating custom capabilities.
#[derive(Debug)]
pub struct ZoneCapabilitiesBuilder {
    inner: ZoneCapabilities,
}

impl Default for ZoneCapabilitiesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoneCapabilitiesBuilder {
    /// Creates a builder with no capabilities set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: ZoneCapabilities {
                override_control: false,
                direct_setpoint: false,
                comfort_setpoint: false,
            },
        }
    }

    /// Enables derogation (override) control.
    #[must_use]
    pub const fn with_override_control(mut self) -> Self {
        self.inner.override_control = true;
        self
    }

    /// Enables the direct setpoint command.
    #[must_use]
    pub const fn with_direct_setpoint(mut self) -> Self {
        self.inner.direct_setpoint = true;
        self
    }

    /// Enables the comfort setpoint command.
    #[must_use]
    pub const fn with_comfort_setpoint(mut self) -> Self {
        self.inner.comfort_setpoint = true;
        self
    }

    /// Builds the capabilities.
    #[must_use]
    pub const fn build(self) -> ZoneCapabilities {
        self.inner
    }
}
